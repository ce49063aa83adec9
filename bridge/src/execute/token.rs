//! CW20 surface.
//!
//! Bookkeeping is `cw20-base`; this layer adds the pause gate on balance
//! moves and the deny-list check on every account involved. Approvals are
//! not balance moves and stay available while paused.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Storage, Uint128};
use cw20::Expiration;
use cw20_base::allowances;
use cw20_base::contract as cw20_contract;

use crate::access::Access;
use crate::address_codec::widen_address;
use crate::compliance::{assert_addr_not_denied, assert_not_denied};
use crate::error::ContractError;

fn assert_accounts(
    storage: &dyn Storage,
    info: &MessageInfo,
    others: &[&str],
) -> Result<(), ContractError> {
    assert_addr_not_denied(storage, &info.sender)?;
    for account in others {
        assert_not_denied(storage, &widen_address(account)?)?;
    }
    Ok(())
}

fn assert_active(storage: &dyn Storage) -> Result<(), ContractError> {
    Access::load(storage)?.assert_not_paused()
}

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_active(deps.storage)?;
    assert_accounts(deps.storage, &info, &[recipient.as_str()])?;
    Ok(cw20_contract::execute_transfer(
        deps, env, info, recipient, amount,
    )?)
}

pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    assert_active(deps.storage)?;
    assert_accounts(deps.storage, &info, &[contract.as_str()])?;
    Ok(cw20_contract::execute_send(
        deps, env, info, contract, amount, msg,
    )?)
}

/// The spender, the owner and the recipient are all checked.
pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_active(deps.storage)?;
    assert_accounts(deps.storage, &info, &[owner.as_str(), recipient.as_str()])?;
    Ok(allowances::execute_transfer_from(
        deps, env, info, owner, recipient, amount,
    )?)
}

pub fn execute_send_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    assert_active(deps.storage)?;
    assert_accounts(deps.storage, &info, &[owner.as_str(), contract.as_str()])?;
    Ok(allowances::execute_send_from(
        deps, env, info, owner, contract, amount, msg,
    )?)
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    assert_accounts(deps.storage, &info, &[spender.as_str()])?;
    Ok(allowances::execute_increase_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    assert_accounts(deps.storage, &info, &[spender.as_str()])?;
    Ok(allowances::execute_decrease_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}
