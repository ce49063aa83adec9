use cosmwasm_std::{
    entry_point, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Order, Response, StdError, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, Cw20QueryMsg};
use cw_storage_plus::Bound;

use common::hash::{bytes32_to_hex, compute_message_id, keccak256};
use common::options::Options;
use common::transport::{
    MessagingFee, MessagingReceipt, Origin, ReceiverExecuteMsg, SecondaryTokenResponse,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, PacketsResponse, QueryMsg};
use crate::state::{
    Config, Packet, COMPOSE_QUEUE, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DELEGATES,
    OUTBOUND_SEQUENCE, PACKETS, PACKET_COUNT, SECONDARY_ACCOUNTED,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let secondary_token = msg
        .secondary_token
        .map(|t| deps.api.addr_validate(&t))
        .transpose()?;

    CONFIG.save(
        deps.storage,
        &Config {
            eid: msg.eid,
            base_fee: msg.base_fee,
            price_per_gas: msg.price_per_gas,
            fee_denom: msg.fee_denom,
            secondary_token,
        },
    )?;
    PACKET_COUNT.save(deps.storage, &0)?;
    SECONDARY_ACCOUNTED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("eid", msg.eid.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            dst_domain,
            receiver,
            message,
            options,
            refund_address,
            pay_in_secondary,
        } => execute_send(
            deps,
            env,
            info,
            dst_domain,
            receiver,
            message,
            options,
            refund_address,
            pay_in_secondary,
        ),
        ExecuteMsg::SendCompose {
            to,
            guid,
            index,
            message,
        } => execute_send_compose(deps, info, to, guid, index, message),
        ExecuteMsg::SetDelegate { delegate } => execute_set_delegate(deps, info, delegate),
        ExecuteMsg::Deliver {
            origin,
            receiver,
            guid,
            message,
            extra_data,
        } => execute_deliver(deps, info, origin, receiver, guid, message, extra_data),
    }
}

/// Identifier stamped on packets from `sender`.
pub fn sender_id(sender: &Addr) -> [u8; 32] {
    keccak256(sender.as_bytes())
}

fn to_bytes32(bytes: &[u8]) -> Result<[u8; 32], ContractError> {
    bytes
        .try_into()
        .map_err(|_| ContractError::InvalidReceiver { got: bytes.len() })
}

/// guid ‖ index
fn compose_key(guid: &Binary, index: u16) -> Vec<u8> {
    let mut key = guid.to_vec();
    key.extend_from_slice(&index.to_be_bytes());
    key
}

fn quote_fee(config: &Config, options: &[u8], pay_in_secondary: bool) -> StdResult<MessagingFee> {
    let options = Options::decode(options)?;
    let total = config
        .base_fee
        .checked_add(
            config
                .price_per_gas
                .checked_mul(Uint128::from(options.total_gas()))?,
        )?
        .checked_add(Uint128::from(options.total_native_drop()))?;

    if pay_in_secondary && config.secondary_token.is_some() {
        Ok(MessagingFee {
            native_fee: Uint128::zero(),
            secondary_fee: total,
        })
    } else {
        Ok(MessagingFee {
            native_fee: total,
            secondary_fee: Uint128::zero(),
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dst_domain: u32,
    receiver: Binary,
    message: Binary,
    options: Binary,
    refund_address: String,
    pay_in_secondary: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let receiver_bytes = to_bytes32(receiver.as_slice())?;
    let refund_address = deps.api.addr_validate(&refund_address)?;

    let paid_native = info
        .funds
        .iter()
        .filter(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .sum::<Uint128>();

    // The secondary fee must already have been transferred in ahead of this
    // call; attached coins are then refunded in full.
    let (fee, refund) = match (&config.secondary_token, pay_in_secondary) {
        (Some(token), true) => {
            let secondary_quote = quote_fee(&config, &options, true)?.secondary_fee;
            let balance: BalanceResponse = deps.querier.query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: env.contract.address.to_string(),
                },
            )?;
            let accounted = SECONDARY_ACCOUNTED.load(deps.storage)?;
            let available = balance.balance.saturating_sub(accounted);
            if available < secondary_quote {
                return Err(ContractError::InsufficientFee {
                    required: secondary_quote,
                    provided: available,
                });
            }
            SECONDARY_ACCOUNTED.save(deps.storage, &(accounted + secondary_quote))?;
            (
                MessagingFee {
                    native_fee: Uint128::zero(),
                    secondary_fee: secondary_quote,
                },
                paid_native,
            )
        }
        (None, true) => return Err(ContractError::NoSecondaryToken {}),
        (_, false) => {
            let native_quote = quote_fee(&config, &options, false)?.native_fee;
            if paid_native < native_quote {
                return Err(ContractError::InsufficientFee {
                    required: native_quote,
                    provided: paid_native,
                });
            }
            (
                MessagingFee {
                    native_fee: native_quote,
                    secondary_fee: Uint128::zero(),
                },
                paid_native - native_quote,
            )
        }
    };

    let path = (&info.sender, dst_domain, receiver_bytes.as_slice());
    let sequence = OUTBOUND_SEQUENCE.may_load(deps.storage, path)?.unwrap_or(0) + 1;
    OUTBOUND_SEQUENCE.save(deps.storage, path, &sequence)?;

    let sender_bytes = sender_id(&info.sender);
    let guid = compute_message_id(
        sequence,
        config.eid,
        &sender_bytes,
        dst_domain,
        &receiver_bytes,
    );

    let nonce = PACKET_COUNT.load(deps.storage)? + 1;
    PACKET_COUNT.save(deps.storage, &nonce)?;
    PACKETS.save(
        deps.storage,
        nonce,
        &Packet {
            nonce,
            guid: Binary::from(guid.to_vec()),
            sender: info.sender.clone(),
            sender_id: Binary::from(sender_bytes.to_vec()),
            src_domain: config.eid,
            dst_domain,
            receiver,
            sequence,
            message,
            options,
            native_fee: fee.native_fee,
            secondary_fee: fee.secondary_fee,
        },
    )?;

    let receipt = MessagingReceipt {
        guid: Binary::from(guid.to_vec()),
        sequence,
        fee: fee.clone(),
    };

    let mut response = Response::new()
        .set_data(to_json_binary(&receipt)?)
        .add_attribute("action", "send")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("guid", bytes32_to_hex(&guid))
        .add_attribute("sequence", sequence.to_string())
        .add_attribute("dst_domain", dst_domain.to_string())
        .add_attribute("native_fee", fee.native_fee)
        .add_attribute("secondary_fee", fee.secondary_fee);

    if !refund.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: refund_address.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom,
                amount: refund,
            }],
        }));
    }

    Ok(response)
}

fn execute_send_compose(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    guid: Binary,
    index: u16,
    message: Binary,
) -> Result<Response, ContractError> {
    let to = deps.api.addr_validate(&to)?;
    COMPOSE_QUEUE.save(
        deps.storage,
        (&info.sender, &to, compose_key(&guid, index).as_slice()),
        &message,
    )?;

    Ok(Response::new()
        .add_attribute("action", "send_compose")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("index", index.to_string()))
}

fn execute_set_delegate(
    deps: DepsMut,
    info: MessageInfo,
    delegate: String,
) -> Result<Response, ContractError> {
    let delegate = deps.api.addr_validate(&delegate)?;
    DELEGATES.save(deps.storage, &info.sender, &delegate)?;

    Ok(Response::new()
        .add_attribute("action", "set_delegate")
        .add_attribute("oapp", info.sender)
        .add_attribute("delegate", delegate))
}

fn execute_deliver(
    deps: DepsMut,
    info: MessageInfo,
    origin: Origin,
    receiver: String,
    guid: Binary,
    message: Binary,
    extra_data: Option<Binary>,
) -> Result<Response, ContractError> {
    let receiver = deps.api.addr_validate(&receiver)?;

    let callback = WasmMsg::Execute {
        contract_addr: receiver.to_string(),
        msg: to_json_binary(&ReceiverExecuteMsg::OnReceive {
            origin: origin.clone(),
            guid,
            message,
            executor: info.sender.to_string(),
            extra_data: extra_data.unwrap_or_default(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "deliver")
        .add_attribute("src_domain", origin.src_domain.to_string())
        .add_attribute("sequence", origin.sequence.to_string())
        .add_attribute("receiver", receiver))
}

// ============================================================================
// Queries
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Quote {
            sender: _,
            dst_domain: _,
            receiver: _,
            message: _,
            options,
            pay_in_secondary,
        } => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&quote_fee(&config, &options, pay_in_secondary)?)
        }
        QueryMsg::SecondaryToken {} => to_json_binary(&SecondaryTokenResponse {
            token: CONFIG.load(deps.storage)?.secondary_token,
        }),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Packet { nonce } => to_json_binary(
            &load_packet(deps, nonce).map_err(|e| StdError::generic_err(e.to_string()))?,
        ),
        QueryMsg::Packets { start_after, limit } => {
            to_json_binary(&query_packets(deps, start_after, limit)?)
        }
        QueryMsg::Composed {
            from,
            to,
            guid,
            index,
        } => {
            let from = deps.api.addr_validate(&from)?;
            let to = deps.api.addr_validate(&to)?;
            let key = compose_key(&guid, index);
            to_json_binary(&COMPOSE_QUEUE.may_load(deps.storage, (&from, &to, key.as_slice()))?)
        }
        QueryMsg::Delegate { oapp } => {
            let oapp = deps.api.addr_validate(&oapp)?;
            to_json_binary(&DELEGATES.may_load(deps.storage, &oapp)?)
        }
    }
}

fn query_packets(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<PacketsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let packets = PACKETS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, packet)| packet))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PacketsResponse { packets })
}

/// Look up a single packet, failing if the nonce was never assigned.
pub fn load_packet(deps: Deps, nonce: u64) -> Result<Packet, ContractError> {
    PACKETS
        .may_load(deps.storage, nonce)?
        .ok_or(ContractError::PacketNotFound { nonce })
}
