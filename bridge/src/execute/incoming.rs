//! Inbound delivery from the endpoint.
//!
//! # Flow
//! 1. Only the endpoint may call
//! 2. Origin sender must be the registered router for the source domain
//! 3. Decode, check pause and deny-list, narrow the receiver, mint
//! 4. Payload messages are forwarded to the receiver through the endpoint's
//!    compose queue; compose failures are the receiver's concern
//!
//! There is no record of processed message ids. A redelivered packet mints
//! again.

use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response};

use common::hash::bytes32_to_hex;
use common::transport::Origin;

use crate::access::Access;
use crate::address_codec::{narrow_address, to_wide};
use crate::codec::{BridgeMessage, ComposeMessage};
use crate::compliance::assert_not_denied;
use crate::error::ContractError;
use crate::ledger;
use crate::state::{CONFIG, STATS};
use crate::transport::{compose_msg, router};

#[allow(clippy::too_many_arguments)]
pub fn execute_on_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    origin: Origin,
    guid: Binary,
    message: Binary,
    executor: String,
    _extra_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let access = Access::from_config(&config);
    access.assert_endpoint(&info.sender)?;

    let trusted = router(deps.storage, origin.src_domain)?;
    if origin.sender.as_slice() != trusted.as_slice() {
        return Err(ContractError::UnauthorizedRouter {
            domain: origin.src_domain,
        });
    }

    let guid_bytes = to_wide(guid.as_slice()).map_err(|_| ContractError::InvalidMessage {
        reason: format!("message id must be 32 bytes, got {}", guid.len()),
    })?;
    let msg = BridgeMessage::decode(message.as_slice())?;

    access.assert_not_paused()?;
    assert_not_denied(deps.storage, &msg.sender)?;
    assert_not_denied(deps.storage, &msg.receiver)?;

    let receiver = deps
        .api
        .addr_validate(&narrow_address(&msg.receiver, &config.bech32_prefix)?)?;
    let total_supply = ledger::mint(deps.storage, &receiver, msg.amount)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_inbound += 1;
        Ok(stats)
    })?;

    let mut response = Response::new();
    if let Some(payload) = msg.payload {
        let compose = ComposeMessage {
            sequence: origin.sequence,
            src_domain: origin.src_domain,
            amount: msg.amount,
            sender: msg.sender,
            payload,
        };
        response = response.add_message(compose_msg(
            &config.endpoint,
            &receiver,
            guid.clone(),
            compose.encode(),
        )?);
    }

    let event = Event::new("transfer_completed")
        .add_attribute("guid", bytes32_to_hex(&guid_bytes))
        .add_attribute("sender", bytes32_to_hex(&msg.sender))
        .add_attribute("receiver", receiver.as_str())
        .add_attribute("amount", msg.amount)
        .add_attribute("src_domain", origin.src_domain.to_string())
        .add_attribute("dst_domain", config.local_domain.to_string())
        .add_attribute("sequence", origin.sequence.to_string())
        .add_attribute("executor", executor);

    Ok(response
        .add_event(event)
        .add_attribute("method", "on_receive")
        .add_attribute("guid", bytes32_to_hex(&guid_bytes))
        .add_attribute("total_supply", total_supply))
}
