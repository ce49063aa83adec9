//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause
//! - Supply ceiling updates
//! - Operator replacement and two-step ownership transfer
//! - Asset recovery

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use common::AssetInfo;

use crate::access::Access;
use crate::error::ContractError;
use crate::ledger;
use crate::state::{PendingOwner, CONFIG, PENDING_OWNER};

// ============================================================================
// Pause/Unpause
// ============================================================================

fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    Access::from_config(&config).assert_owner(&info.sender)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", if paused { "pause" } else { "unpause" }))
}

/// Pause every balance-mutating path, including inbound mints.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

// ============================================================================
// Supply Ceiling
// ============================================================================

pub fn execute_update_supply_ceiling(
    deps: DepsMut,
    info: MessageInfo,
    ceiling: Uint128,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_owner(&info.sender)?;
    ledger::set_supply_ceiling(deps.storage, ceiling)?;

    Ok(Response::new()
        .add_attribute("method", "update_supply_ceiling")
        .add_attribute("ceiling", ceiling))
}

// ============================================================================
// Roles
// ============================================================================

pub fn execute_set_operator(
    deps: DepsMut,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    Access::from_config(&config).assert_owner(&info.sender)?;

    config.operator = deps.api.addr_validate(&operator)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_operator")
        .add_attribute("operator", config.operator))
}

pub fn execute_propose_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_owner(&info.sender)?;

    let new_address = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(
        deps.storage,
        &PendingOwner {
            new_address: new_address.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "propose_owner")
        .add_attribute("new_owner", new_address))
}

pub fn execute_accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending.new_address {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.owner = pending.new_address.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_owner")
        .add_attribute("new_owner", pending.new_address))
}

pub fn execute_cancel_owner_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_owner(&info.sender)?;

    if !PENDING_OWNER.exists(deps.storage) {
        return Err(ContractError::NoPendingOwner);
    }
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_owner_proposal"))
}

// ============================================================================
// Asset Recovery
// ============================================================================

/// Recover assets held by the contract.
///
/// The underlying is only recoverable above the reserve, so the reserve
/// always stays fully backed.
pub fn execute_recover_asset(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Access::from_config(&config).assert_owner(&info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    let asset = asset.validate(deps.api)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    if asset == config.underlying {
        let held = asset.query_balance(&deps.querier, &env.contract.address)?;
        let surplus = held.saturating_sub(ledger::reserve(deps.storage)?);
        if amount > surplus {
            return Err(ContractError::RecoveryExceedsSurplus {
                surplus,
                requested: amount,
            });
        }
    }

    Ok(Response::new()
        .add_message(asset.transfer_msg(&recipient, amount)?)
        .add_attribute("method", "recover_asset")
        .add_attribute("asset", asset.id())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}
