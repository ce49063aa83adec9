//! Vault handlers: issue (lock + mint) and redeem (burn + release).

use cosmwasm_std::{from_json, Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128};
use cw20::Cw20ReceiveMsg;

use common::asset::cw20_pull_msg;
use common::AssetInfo;

use crate::access::Access;
use crate::compliance::assert_addr_not_denied;
use crate::error::ContractError;
use crate::ledger;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, STATS};

fn nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Book an issue whose underlying is (or will be, in the same transition)
/// in custody.
fn issue_to(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let access = Access::load(storage)?;
    access.assert_not_paused()?;
    nonzero(amount)?;
    assert_addr_not_denied(storage, account)?;

    let reserve = ledger::lock(storage, amount)?;
    let total_supply = ledger::mint(storage, account, amount)?;

    STATS.update(storage, |mut stats| -> Result<_, ContractError> {
        stats.total_issued = stats.total_issued.checked_add(amount)?;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_attribute("method", "issue")
        .add_attribute("account", account)
        .add_attribute("amount", amount)
        .add_attribute("reserve", reserve)
        .add_attribute("total_supply", total_supply))
}

/// Issue against attached native funds or a CW20 allowance.
pub fn execute_issue(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let pull = match &config.underlying {
        AssetInfo::Native { denom } => {
            let exact = info.funds.len() == 1
                && info.funds[0].denom == *denom
                && info.funds[0].amount == amount;
            if !exact {
                return Err(ContractError::InvalidAmount {
                    reason: format!("attach exactly {}{}", amount, denom),
                });
            }
            None
        }
        AssetInfo::Cw20 { contract_addr } => {
            if !info.funds.is_empty() {
                return Err(ContractError::InvalidAmount {
                    reason: "native funds not accepted for a CW20 underlying".to_string(),
                });
            }
            Some(cw20_pull_msg(
                contract_addr,
                &info.sender,
                &env.contract.address,
                amount,
            )?)
        }
    };

    let response = issue_to(deps.storage, &info.sender, amount)?;
    Ok(match pull {
        Some(msg) => response.add_message(msg),
        None => response,
    })
}

/// CW20 underlying pushed with `Send { msg: ReceiveMsg::Issue {} }`.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match &config.underlying {
        AssetInfo::Cw20 { contract_addr } if *contract_addr == info.sender.as_str() => {}
        _ => {
            return Err(ContractError::InvalidAsset {
                reason: format!("{} is not the underlying token", info.sender),
            })
        }
    }

    let account = deps.api.addr_validate(&wrapper.sender)?;
    match from_json(&wrapper.msg)? {
        ReceiveMsg::Issue {} => issue_to(deps.storage, &account, wrapper.amount),
    }
}

pub fn execute_redeem(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Access::from_config(&config).assert_not_paused()?;
    nonzero(amount)?;
    assert_addr_not_denied(deps.storage, &info.sender)?;

    let reserve = ledger::release(deps.storage, amount)?;
    let total_supply = ledger::burn(deps.storage, &info.sender, amount)?;

    STATS.update(deps.storage, |mut stats| -> Result<_, ContractError> {
        stats.total_redeemed = stats.total_redeemed.checked_add(amount)?;
        Ok(stats)
    })?;

    Ok(Response::new()
        .add_message(config.underlying.transfer_msg(&info.sender, amount)?)
        .add_attribute("method", "redeem")
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("reserve", reserve)
        .add_attribute("total_supply", total_supply))
}
