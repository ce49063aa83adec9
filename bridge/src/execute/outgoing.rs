//! Outbound transfers.
//!
//! `BridgeSend` burns local supply and hands an encoded transfer message to
//! the endpoint. The burn is final once the transition commits: the local
//! domain has no way to cancel a dispatched packet.
//!
//! The endpoint assigns the message id. `Send` is dispatched as a reply
//! sub-message; the reply reads the receipt, emits `transfer_initiated`
//! and returns the receipt as the transaction data.

use cosmwasm_std::{
    to_json_binary, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo, Reply,
    Response, SubMsg, Uint128,
};

use common::asset::cw20_pull_msg;
use common::hash::bytes32_to_hex;
use common::transport::MessagingFee;

use crate::access::Access;
use crate::address_codec::{to_wide, widen_address};
use crate::codec::BridgeMessage;
use crate::compliance::assert_not_denied;
use crate::error::ContractError;
use crate::ledger;
use crate::state::{Config, PendingSend, CONFIG, PENDING_SEND, SEND_REPLY_ID, STATS};
use crate::transport::{parse_send_reply, secondary_token, OutboundPacket};

/// Validate a send request and build its packet. Shared with `QuoteSend`.
#[allow(clippy::too_many_arguments)]
pub fn prepare_send(
    deps: Deps,
    config: &Config,
    sender: &str,
    dst_domain: u32,
    to: &Binary,
    amount: Uint128,
    payload: Option<Binary>,
    native_drop: Option<Uint128>,
) -> Result<OutboundPacket, ContractError> {
    Access::from_config(config).assert_not_paused()?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let sender = widen_address(sender)?;
    let receiver = to_wide(to.as_slice())?;
    assert_not_denied(deps.storage, &sender)?;
    assert_not_denied(deps.storage, &receiver)?;

    let message = BridgeMessage {
        sender,
        receiver,
        amount,
        payload: payload.map(|p| p.to_vec()),
    };
    OutboundPacket::build(deps.storage, dst_domain, message, native_drop)
}

#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dst_domain: u32,
    to: Binary,
    amount: Uint128,
    payload: Option<Binary>,
    native_drop: Option<Uint128>,
    pay_in_secondary: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let packet = prepare_send(
        deps.as_ref(),
        &config,
        info.sender.as_str(),
        dst_domain,
        &to,
        amount,
        payload,
        native_drop,
    )?;

    // Only the fee denom may be attached
    if let Some(other) = info.funds.iter().find(|c| c.denom != config.fee_denom) {
        return Err(ContractError::InvalidAmount {
            reason: format!("unexpected funds: {}", other),
        });
    }
    let attached = info.funds.iter().map(|c| c.amount).sum::<Uint128>();

    let fee: MessagingFee = packet.quote(
        &deps.querier,
        &config.endpoint,
        &env.contract.address,
        pay_in_secondary,
    )?;

    let mut messages: Vec<CosmosMsg> = vec![];
    let secondary = if pay_in_secondary {
        secondary_token(&deps.querier, &config.endpoint)?
    } else {
        None
    };
    let paying_secondary = match secondary {
        Some(token) if !fee.secondary_fee.is_zero() => {
            messages.push(cw20_pull_msg(
                token.as_str(),
                &info.sender,
                &config.endpoint,
                fee.secondary_fee,
            )?);
            true
        }
        _ => {
            if attached < fee.native_fee {
                return Err(ContractError::InsufficientFee {
                    expected: fee.native_fee,
                    got: attached,
                });
            }
            false
        }
    };

    let total_supply = ledger::burn(deps.storage, &info.sender, amount)?;

    // The endpoint refunds whatever the fee does not use to the caller
    let funds = if attached.is_zero() {
        vec![]
    } else {
        vec![Coin {
            denom: config.fee_denom.clone(),
            amount: attached,
        }]
    };
    let send = packet.send_msg(&config.endpoint, &info.sender, paying_secondary, funds)?;

    PENDING_SEND.save(
        deps.storage,
        &PendingSend {
            sender: info.sender.clone(),
            receiver: Binary::from(packet.message.receiver.to_vec()),
            amount,
            dst_domain,
        },
    )?;
    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_outbound += 1;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_messages(messages)
        .add_submessage(SubMsg::reply_on_success(send, SEND_REPLY_ID))
        .add_attribute("method", "bridge_send")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("dst_domain", dst_domain.to_string())
        .add_attribute("total_supply", total_supply))
}

/// Reply to the endpoint `Send`: record the receipt it assigned.
pub fn handle_send_reply(deps: DepsMut, reply: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_SEND.load(deps.storage)?;
    PENDING_SEND.remove(deps.storage);
    let config = CONFIG.load(deps.storage)?;

    let receipt = parse_send_reply(reply)?;
    let guid = to_wide(receipt.guid.as_slice())?;
    let receiver = to_wide(pending.receiver.as_slice())?;

    let event = Event::new("transfer_initiated")
        .add_attribute("guid", bytes32_to_hex(&guid))
        .add_attribute("sender", pending.sender.as_str())
        .add_attribute("receiver", bytes32_to_hex(&receiver))
        .add_attribute("amount", pending.amount)
        .add_attribute("src_domain", config.local_domain.to_string())
        .add_attribute("dst_domain", pending.dst_domain.to_string())
        .add_attribute("sequence", receipt.sequence.to_string())
        .add_attribute("native_fee", receipt.fee.native_fee)
        .add_attribute("secondary_fee", receipt.fee.secondary_fee);

    Ok(Response::new()
        .add_event(event)
        .set_data(to_json_binary(&receipt)?)
        .add_attribute("method", "bridge_send_receipt")
        .add_attribute("guid", bytes32_to_hex(&guid)))
}
