//! Transport configuration handlers (owner).
//!
//! This module handles:
//! - Router registry (trusted remote bridge per domain)
//! - Destination gas budgets per (domain, message type)
//! - Endpoint delegate

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response, Uint128};

use common::hash::bytes32_to_hex;

use crate::access::Access;
use crate::address_codec::to_wide;
use crate::error::ContractError;
use crate::state::{CONFIG, GAS_LIMITS, ROUTERS};
use crate::transport::set_delegate_msg;

// ============================================================================
// Router Registry
// ============================================================================

pub fn execute_set_router(
    deps: DepsMut,
    info: MessageInfo,
    domain: u32,
    router: Binary,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_owner(&info.sender)?;

    let router = to_wide(router.as_slice())?;
    ROUTERS.save(deps.storage, domain, &router)?;

    Ok(Response::new()
        .add_attribute("method", "set_router")
        .add_attribute("domain", domain.to_string())
        .add_attribute("router", bytes32_to_hex(&router)))
}

pub fn execute_remove_router(
    deps: DepsMut,
    info: MessageInfo,
    domain: u32,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_owner(&info.sender)?;

    if !ROUTERS.has(deps.storage, domain) {
        return Err(ContractError::InvalidRouter { domain });
    }
    ROUTERS.remove(deps.storage, domain);

    Ok(Response::new()
        .add_attribute("method", "remove_router")
        .add_attribute("domain", domain.to_string()))
}

// ============================================================================
// Gas Budgets
// ============================================================================

pub fn execute_set_gas_limit(
    deps: DepsMut,
    info: MessageInfo,
    domain: u32,
    msg_type: u8,
    gas: Uint128,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_owner(&info.sender)?;

    if gas.is_zero() {
        GAS_LIMITS.remove(deps.storage, (domain, msg_type));
    } else {
        GAS_LIMITS.save(deps.storage, (domain, msg_type), &gas.u128())?;
    }

    Ok(Response::new()
        .add_attribute("method", "set_gas_limit")
        .add_attribute("domain", domain.to_string())
        .add_attribute("msg_type", msg_type.to_string())
        .add_attribute("gas", gas))
}

// ============================================================================
// Endpoint Delegate
// ============================================================================

pub fn execute_set_delegate(
    deps: DepsMut,
    info: MessageInfo,
    delegate: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Access::from_config(&config).assert_owner(&info.sender)?;

    let delegate = deps.api.addr_validate(&delegate)?;

    Ok(Response::new()
        .add_message(set_delegate_msg(&config.endpoint, &delegate)?)
        .add_attribute("method", "set_delegate")
        .add_attribute("delegate", delegate))
}
