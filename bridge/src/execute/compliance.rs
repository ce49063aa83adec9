//! Deny-list management (operator).

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use common::hash::bytes32_to_hex;

use crate::access::Access;
use crate::address_codec::to_wide;
use crate::compliance;
use crate::error::ContractError;

pub fn execute_deny(
    deps: DepsMut,
    info: MessageInfo,
    account: Binary,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_operator(&info.sender)?;

    let id = to_wide(account.as_slice())?;
    compliance::deny(deps.storage, &id)?;

    Ok(Response::new()
        .add_attribute("method", "deny")
        .add_attribute("account", bytes32_to_hex(&id)))
}

pub fn execute_undeny(
    deps: DepsMut,
    info: MessageInfo,
    account: Binary,
) -> Result<Response, ContractError> {
    Access::load(deps.storage)?.assert_operator(&info.sender)?;

    let id = to_wide(account.as_slice())?;
    compliance::undeny(deps.storage, &id)?;

    Ok(Response::new()
        .add_attribute("method", "undeny")
        .add_attribute("account", bytes32_to_hex(&id)))
}
