//! Message types for the synthetic bridge contract
//!
//! The contract is both the synthetic token (CW20 execute/query surface) and
//! the bridge (vault, transport and admin messages).

use common::transport::Origin;
use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{Cw20ReceiveMsg, Expiration};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (roles, registries, ceiling, pause, recovery)
    pub owner: String,
    /// Operator address (deny-list only)
    pub operator: String,
    /// Messaging endpoint contract on this chain
    pub endpoint: String,
    /// Domain id of this chain
    pub local_domain: u32,
    /// Asset held in reserve against issued supply
    pub underlying: AssetInfo,
    /// Denom the endpoint's native fee is paid in
    pub fee_denom: String,
    /// Bech32 prefix for accounts on this chain (e.g. "terra")
    pub bech32_prefix: String,
    /// Synthetic token metadata
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Initial local supply ceiling (must be nonzero)
    pub supply_ceiling: Uint128,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Token (CW20 surface, gated by pause and deny-list)
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    // ========================================================================
    // Vault
    // ========================================================================
    /// Lock underlying and mint the same amount of synthetic supply.
    /// Native underlying: attach exactly `amount`. CW20 underlying: approve
    /// this contract first (or use `Send` with `ReceiveMsg::Issue`).
    Issue { amount: Uint128 },

    /// Burn synthetic supply and release the same amount of underlying
    Redeem { amount: Uint128 },

    /// CW20 underlying pushed via `Send`
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Bridge
    // ========================================================================
    /// Burn `amount` locally and send it to `to` on `dst_domain`.
    ///
    /// Attach the native fee in the endpoint's fee denom (see `QuoteSend`),
    /// or set `pay_in_secondary` after approving the secondary fee token.
    BridgeSend {
        dst_domain: u32,
        /// Receiver on the destination domain (32-byte wide identifier)
        to: Binary,
        amount: Uint128,
        /// Forwarded to the receiver's compose handler after the mint
        payload: Option<Binary>,
        /// Native currency dropped to the receiver on the destination
        native_drop: Option<Uint128>,
        #[serde(default)]
        pay_in_secondary: bool,
    },

    /// Endpoint callback delivering a packet from a remote bridge
    OnReceive {
        origin: Origin,
        guid: Binary,
        message: Binary,
        executor: String,
        extra_data: Binary,
    },

    // ========================================================================
    // Compliance (operator)
    // ========================================================================
    Deny { account: Binary },
    Undeny { account: Binary },

    // ========================================================================
    // Transport Configuration (owner)
    // ========================================================================
    SetRouter { domain: u32, router: Binary },
    RemoveRouter { domain: u32 },
    /// Zero removes the entry (falls back to the default)
    SetGasLimit {
        domain: u32,
        msg_type: u8,
        gas: Uint128,
    },
    SetDelegate { delegate: String },

    // ========================================================================
    // Admin (owner)
    // ========================================================================
    UpdateSupplyCeiling { ceiling: Uint128 },
    Pause {},
    Unpause {},
    SetOperator { operator: String },
    ProposeOwner { new_owner: String },
    AcceptOwner {},
    CancelOwnerProposal {},
    /// Recover assets held by the contract. Only the surplus of the
    /// underlying above the reserve is recoverable.
    RecoverAsset {
        asset: AssetInfo,
        amount: Uint128,
        recipient: String,
    },
}

/// Hook messages accepted from the CW20 underlying
#[cw_serde]
pub enum ReceiveMsg {
    Issue {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Reserve, supply and ceiling
    #[returns(LedgerResponse)]
    Ledger {},

    #[returns(RouterResponse)]
    Router { domain: u32 },

    #[returns(RoutersResponse)]
    Routers {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    /// Whether inbound traffic from `src_domain` can be accepted
    #[returns(PathReadyResponse)]
    PathReady { src_domain: u32 },

    #[returns(GasLimitResponse)]
    GasLimit { domain: u32, msg_type: u8 },

    #[returns(IsDeniedResponse)]
    IsDenied { account: Binary },

    #[returns(DeniedAccountsResponse)]
    DeniedAccounts {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    /// Wide identifier of a local account
    #[returns(WideAddressResponse)]
    WideAddress { address: String },

    /// Fee a `BridgeSend` with these parameters requires
    #[returns(common::MessagingFee)]
    QuoteSend {
        sender: String,
        dst_domain: u32,
        to: Binary,
        amount: Uint128,
        payload: Option<Binary>,
        native_drop: Option<Uint128>,
        #[serde(default)]
        pay_in_secondary: bool,
    },

    #[returns(Option<PendingOwnerResponse>)]
    PendingOwner {},

    #[returns(crate::state::Stats)]
    Stats {},

    // CW20 queries
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub operator: Addr,
    pub endpoint: Addr,
    pub local_domain: u32,
    pub underlying: AssetInfo,
    pub fee_denom: String,
    pub bech32_prefix: String,
    pub paused: bool,
}

#[cw_serde]
pub struct LedgerResponse {
    pub reserve: Uint128,
    pub total_supply: Uint128,
    pub supply_ceiling: Uint128,
}

#[cw_serde]
pub struct RouterResponse {
    pub domain: u32,
    pub router: Option<Binary>,
}

#[cw_serde]
pub struct RoutersResponse {
    pub routers: Vec<RouterResponse>,
}

#[cw_serde]
pub struct PathReadyResponse {
    pub ready: bool,
}

#[cw_serde]
pub struct GasLimitResponse {
    pub gas: Uint128,
    /// False when the default applies
    pub configured: bool,
}

#[cw_serde]
pub struct IsDeniedResponse {
    pub denied: bool,
}

#[cw_serde]
pub struct DeniedAccountsResponse {
    pub accounts: Vec<Binary>,
}

#[cw_serde]
pub struct WideAddressResponse {
    pub wide: Binary,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub new_address: Addr,
}
