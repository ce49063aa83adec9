//! Two-domain test harness.
//!
//! Domain A and domain B each run a synthetic bridge behind its own mock
//! endpoint. The bridges trust each other as routers, and `relay` moves
//! queued packets from one endpoint to the other the way an off-chain
//! executor would.
//!
//! Contracts get 32-byte bech32 addresses, as on chain, so they can hold,
//! send and receive bridged funds like any account.

#![allow(dead_code)]

use bech32::{ToBase32, Variant};
use cosmwasm_std::{coins, from_json, Addr, Api, Binary, Coin, Empty, Storage, Uint128};
use cw_multi_test::{
    AddressGenerator, App, AppBuilder, AppResponse, Contract, ContractWrapper, Executor,
    WasmKeeper,
};

use common::hash::keccak256;
use common::transport::{MessagingFee, MessagingReceipt, Origin};
use common::AssetInfo;
use endpoint_mock::msg::{
    ExecuteMsg as EndpointExecuteMsg, InstantiateMsg as EndpointInstantiateMsg, PacketsResponse,
    QueryMsg as EndpointQueryMsg,
};
use endpoint_mock::state::Packet;
use synth_bridge::address_codec::widen_address;
use synth_bridge::msg::{ExecuteMsg, InstantiateMsg, LedgerResponse, QueryMsg};

pub const DOMAIN_A: u32 = 30101;
pub const DOMAIN_B: u32 = 30102;

pub const FEE_DENOM: &str = "uluna";
pub const UNDERLYING: &str = "uusd";
pub const BECH32_PREFIX: &str = "terra";

pub const BASE_FEE: u128 = 1_000;
pub const PRICE_PER_GAS: u128 = 1;
/// Base fee plus the default 200k receive gas at one unit per gas
pub const DEFAULT_FEE: u128 = 201_000;
pub const SUPPLY_CEILING: u128 = 1_000_000_000_000;

pub const OWNER: &str = "terra1owner";
pub const OPERATOR: &str = "terra1operator";
pub const RELAYER: &str = "terra1relayer";

// Real bech32 accounts; the bridge widens these into 32-byte identifiers
pub const ALICE: &str = "terra1zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg38edzs0";
pub const BOB: &str = "terra1yg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zgygycc";
pub const CAROL: &str = "terra1xvenxvenxvenxvenxvenxvenxvenxven66led2";
pub const MALLORY: &str = "terra1g3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zy94hxty";
pub const DAVE: &str = "terra124242424242424242424242424242424htqm7k";

pub const STARTING_BALANCE: u128 = 10_000_000_000;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        synth_bridge::contract::execute,
        synth_bridge::contract::instantiate,
        synth_bridge::contract::query,
    )
    .with_reply(synth_bridge::contract::reply)
    .with_migrate(synth_bridge::contract::migrate);
    Box::new(contract)
}

pub fn contract_endpoint() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        endpoint_mock::contract::execute,
        endpoint_mock::contract::instantiate,
        endpoint_mock::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

/// One side of the bridge.
#[derive(Clone, Debug)]
pub struct Side {
    pub domain: u32,
    pub bridge: Addr,
    pub endpoint: Addr,
}

pub struct Suite {
    pub app: App,
    pub a: Side,
    pub b: Side,
    pub bridge_code_id: u64,
    pub cw20_code_id: u64,
    /// Highest packet nonce already relayed, per source endpoint
    relayed_a: u64,
    relayed_b: u64,
}

pub struct SuiteBuilder {
    underlying: Option<AssetInfo>,
    secondary_token: Option<String>,
    supply_ceiling: u128,
    link: bool,
}

impl Default for SuiteBuilder {
    fn default() -> Self {
        SuiteBuilder {
            underlying: None,
            secondary_token: None,
            supply_ceiling: SUPPLY_CEILING,
            link: true,
        }
    }
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_underlying(mut self, underlying: AssetInfo) -> Self {
        self.underlying = Some(underlying);
        self
    }

    /// Both endpoints accept this CW20 as the secondary fee token
    pub fn with_secondary_token(mut self, token: &str) -> Self {
        self.secondary_token = Some(token.to_string());
        self
    }

    pub fn with_supply_ceiling(mut self, ceiling: u128) -> Self {
        self.supply_ceiling = ceiling;
        self
    }

    /// Skip router registration
    pub fn unlinked(mut self) -> Self {
        self.link = false;
        self
    }

    pub fn build_with(self, app: App) -> Suite {
        let mut app = app;
        let owner = Addr::unchecked(OWNER);

        let endpoint_code_id = app.store_code(contract_endpoint());
        let bridge_code_id = app.store_code(contract_bridge());
        let cw20_code_id = app.store_code(contract_cw20());

        let underlying = self.underlying.clone().unwrap_or(AssetInfo::Native {
            denom: UNDERLYING.to_string(),
        });

        let mut sides = vec![];
        for domain in [DOMAIN_A, DOMAIN_B] {
            let endpoint = app
                .instantiate_contract(
                    endpoint_code_id,
                    owner.clone(),
                    &EndpointInstantiateMsg {
                        eid: domain,
                        base_fee: Uint128::new(BASE_FEE),
                        price_per_gas: Uint128::new(PRICE_PER_GAS),
                        fee_denom: FEE_DENOM.to_string(),
                        secondary_token: self.secondary_token.clone(),
                    },
                    &[],
                    "endpoint",
                    None,
                )
                .unwrap();

            let bridge = app
                .instantiate_contract(
                    bridge_code_id,
                    owner.clone(),
                    &InstantiateMsg {
                        owner: OWNER.to_string(),
                        operator: OPERATOR.to_string(),
                        endpoint: endpoint.to_string(),
                        local_domain: domain,
                        underlying: underlying.clone(),
                        fee_denom: FEE_DENOM.to_string(),
                        bech32_prefix: BECH32_PREFIX.to_string(),
                        name: "Synthetic USD".to_string(),
                        symbol: "sUSD".to_string(),
                        decimals: 6,
                        supply_ceiling: Uint128::new(self.supply_ceiling),
                    },
                    &[],
                    "synth-bridge",
                    Some(OWNER.to_string()),
                )
                .unwrap();

            sides.push(Side {
                domain,
                bridge,
                endpoint,
            });
        }
        let b = sides.pop().unwrap();
        let a = sides.pop().unwrap();

        let mut suite = Suite {
            app,
            a,
            b,
            bridge_code_id,
            cw20_code_id,
            relayed_a: 0,
            relayed_b: 0,
        };

        if self.link {
            let (a, b) = (suite.a.clone(), suite.b.clone());
            suite.set_router(&a, b.domain, &b.bridge).unwrap();
            suite.set_router(&b, a.domain, &a.bridge).unwrap();
        }
        suite
    }

    pub fn build(self) -> Suite {
        self.build_with(funded_app())
    }
}

/// Contract addresses with a 32-byte payload under the local prefix.
pub struct ContractAddresses;

impl AddressGenerator for ContractAddresses {
    fn contract_address(
        &self,
        _api: &dyn Api,
        _storage: &mut dyn Storage,
        code_id: u64,
        instance_id: u64,
    ) -> anyhow::Result<Addr> {
        let mut seed = code_id.to_be_bytes().to_vec();
        seed.extend_from_slice(&instance_id.to_be_bytes());
        Ok(Addr::unchecked(bech32::encode(
            BECH32_PREFIX,
            keccak256(&seed).to_base32(),
            Variant::Bech32,
        )?))
    }
}

/// App with every test account holding underlying and fee funds.
pub fn funded_app() -> App {
    AppBuilder::new()
        .with_wasm(WasmKeeper::<Empty, Empty>::new().with_address_generator(ContractAddresses))
        .build(|router, _, storage| {
            for account in [OWNER, OPERATOR, ALICE, BOB, CAROL, MALLORY, DAVE] {
                router
                    .bank
                    .init_balance(
                        storage,
                        &Addr::unchecked(account),
                        vec![
                            Coin::new(STARTING_BALANCE, FEE_DENOM),
                            Coin::new(STARTING_BALANCE, UNDERLYING),
                        ],
                    )
                    .unwrap();
            }
        })
}

pub fn setup() -> Suite {
    SuiteBuilder::new().build()
}

/// Wide identifier of a local account.
pub fn wide(account: &str) -> Binary {
    Binary::from(widen_address(account).unwrap().to_vec())
}

/// Identifier the mock endpoint stamps on packets from `sender`.
pub fn sender_id(sender: &Addr) -> Binary {
    Binary::from(endpoint_mock::contract::sender_id(sender).to_vec())
}

pub fn fee(amount: u128) -> Vec<Coin> {
    coins(amount, FEE_DENOM)
}

pub fn underlying(amount: u128) -> Vec<Coin> {
    coins(amount, UNDERLYING)
}

/// Value of the first attribute named `key` on a `wasm-<event>` event.
pub fn event_attr(res: &AppResponse, event: &str, key: &str) -> Option<String> {
    let ty = format!("wasm-{}", event);
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn has_event(res: &AppResponse, event: &str) -> bool {
    let ty = format!("wasm-{}", event);
    res.events.iter().any(|e| e.ty == ty)
}

pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

impl Suite {
    // ========================================================================
    // Owner / Operator
    // ========================================================================

    pub fn set_router(&mut self, side: &Side, domain: u32, remote: &Addr) -> anyhow::Result<()> {
        self.app.execute_contract(
            Addr::unchecked(OWNER),
            side.bridge.clone(),
            &ExecuteMsg::SetRouter {
                domain,
                router: sender_id(remote),
            },
            &[],
        )?;
        Ok(())
    }

    pub fn pause(&mut self, side: &Side) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(OWNER),
            side.bridge.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
    }

    pub fn unpause(&mut self, side: &Side) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(OWNER),
            side.bridge.clone(),
            &ExecuteMsg::Unpause {},
            &[],
        )
    }

    pub fn deny(&mut self, side: &Side, account: Binary) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(OPERATOR),
            side.bridge.clone(),
            &ExecuteMsg::Deny { account },
            &[],
        )
    }

    pub fn undeny(&mut self, side: &Side, account: Binary) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(OPERATOR),
            side.bridge.clone(),
            &ExecuteMsg::Undeny { account },
            &[],
        )
    }

    pub fn set_ceiling(&mut self, side: &Side, ceiling: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(OWNER),
            side.bridge.clone(),
            &ExecuteMsg::UpdateSupplyCeiling {
                ceiling: Uint128::new(ceiling),
            },
            &[],
        )
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub fn issue(&mut self, side: &Side, account: &str, amount: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(account),
            side.bridge.clone(),
            &ExecuteMsg::Issue {
                amount: Uint128::new(amount),
            },
            &underlying(amount),
        )
    }

    /// Issue against a CW20 allowance; no funds attached.
    pub fn issue_cw20(
        &mut self,
        side: &Side,
        account: &str,
        amount: u128,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(account),
            side.bridge.clone(),
            &ExecuteMsg::Issue {
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn redeem(&mut self, side: &Side, account: &str, amount: u128) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(account),
            side.bridge.clone(),
            &ExecuteMsg::Redeem {
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    /// `BridgeSend` from `from` on `side` to `to` on the other domain, paying
    /// the default native fee.
    pub fn send(
        &mut self,
        side: &Side,
        from: &str,
        to: &str,
        amount: u128,
    ) -> anyhow::Result<AppResponse> {
        let dst_domain = self.other(side).domain;
        self.send_with(side, from, dst_domain, wide(to), amount, None, &fee(DEFAULT_FEE))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn send_with(
        &mut self,
        side: &Side,
        from: &str,
        dst_domain: u32,
        to: Binary,
        amount: u128,
        payload: Option<Binary>,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(from),
            side.bridge.clone(),
            &ExecuteMsg::BridgeSend {
                dst_domain,
                to,
                amount: Uint128::new(amount),
                payload,
                native_drop: None,
                pay_in_secondary: false,
            },
            funds,
        )
    }

    // ========================================================================
    // Relay
    // ========================================================================

    pub fn other(&self, side: &Side) -> Side {
        if side.domain == self.a.domain {
            self.b.clone()
        } else {
            self.a.clone()
        }
    }

    fn side_for_domain(&self, domain: u32) -> Side {
        if domain == self.a.domain {
            self.a.clone()
        } else {
            self.b.clone()
        }
    }

    pub fn packets(&self, side: &Side, start_after: Option<u64>) -> Vec<Packet> {
        let res: PacketsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &side.endpoint,
                &EndpointQueryMsg::Packets {
                    start_after,
                    limit: Some(30),
                },
            )
            .unwrap();
        res.packets
    }

    /// Deliver one packet to the bridge it is addressed to.
    pub fn deliver(&mut self, packet: &Packet) -> anyhow::Result<AppResponse> {
        let dst = self.side_for_domain(packet.dst_domain);
        let receiver = dst.bridge.clone();
        self.deliver_raw(
            &dst,
            Origin {
                src_domain: packet.src_domain,
                sender: packet.sender_id.clone(),
                sequence: packet.sequence,
            },
            &receiver,
            packet.guid.clone(),
            packet.message.clone(),
        )
    }

    /// Endpoint `Deliver` with arbitrary origin and message.
    pub fn deliver_raw(
        &mut self,
        dst: &Side,
        origin: Origin,
        receiver: &Addr,
        guid: Binary,
        message: Binary,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(RELAYER),
            dst.endpoint.clone(),
            &EndpointExecuteMsg::Deliver {
                origin,
                receiver: receiver.to_string(),
                guid,
                message,
                extra_data: None,
            },
            &[],
        )
    }

    /// Relay every packet queued on `side` since the last relay. Stops at
    /// the first failed delivery; that packet stays pending.
    pub fn relay(&mut self, side: &Side) -> anyhow::Result<Vec<AppResponse>> {
        let from_a = side.domain == self.a.domain;
        let start = if from_a { self.relayed_a } else { self.relayed_b };

        let mut responses = vec![];
        for packet in self.packets(side, Some(start)) {
            responses.push(self.deliver(&packet)?);
            if from_a {
                self.relayed_a = packet.nonce;
            } else {
                self.relayed_b = packet.nonce;
            }
        }
        Ok(responses)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn balance(&self, side: &Side, account: &str) -> u128 {
        let res: cw20::BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &side.bridge,
                &QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn ledger(&self, side: &Side) -> LedgerResponse {
        self.app
            .wrap()
            .query_wasm_smart(&side.bridge, &QueryMsg::Ledger {})
            .unwrap()
    }

    pub fn native_balance(&self, account: &str, denom: &str) -> u128 {
        self.app
            .wrap()
            .query_balance(account, denom)
            .unwrap()
            .amount
            .u128()
    }

    pub fn quote(&self, side: &Side, from: &str, to: &str, amount: u128) -> MessagingFee {
        let dst_domain = self.other(side).domain;
        self.app
            .wrap()
            .query_wasm_smart(
                &side.bridge,
                &QueryMsg::QuoteSend {
                    sender: from.to_string(),
                    dst_domain,
                    to: wide(to),
                    amount: Uint128::new(amount),
                    payload: None,
                    native_drop: None,
                    pay_in_secondary: false,
                },
            )
            .unwrap()
    }
}

pub fn receipt(res: &AppResponse) -> MessagingReceipt {
    from_json(res.data.as_ref().expect("bridge send returns a receipt")).unwrap()
}

/// Stand-alone CW20 (used as a CW20 underlying or the secondary fee token).
pub fn instantiate_cw20(app: &mut App, symbol: &str, holders: &[(&str, u128)]) -> Addr {
    let code_id = app.store_code(contract_cw20());
    app.instantiate_contract(
        code_id,
        Addr::unchecked(OWNER),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{} token", symbol),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: holders
                .iter()
                .map(|(address, amount)| cw20::Cw20Coin {
                    address: address.to_string(),
                    amount: Uint128::new(*amount),
                })
                .collect(),
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

pub fn cw20_balance(app: &App, token: &Addr, account: &str) -> u128 {
    let res: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}
