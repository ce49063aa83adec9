//! Synthetic Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20_base::state::{TokenInfo, TOKEN_INFO};

use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_bridge_send, execute_cancel_owner_proposal,
    execute_decrease_allowance, execute_deny, execute_increase_allowance, execute_issue,
    execute_on_receive, execute_pause, execute_propose_owner, execute_receive,
    execute_recover_asset, execute_redeem, execute_remove_router, execute_send,
    execute_send_from, execute_set_delegate, execute_set_gas_limit, execute_set_operator,
    execute_set_router, execute_transfer, execute_transfer_from, execute_undeny,
    execute_unpause, execute_update_supply_ceiling, handle_send_reply,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_denied_accounts, query_gas_limit, query_is_denied, query_ledger,
    query_path_ready, query_pending_owner, query_quote_send, query_router, query_routers,
    query_stats, query_wide_address,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, RESERVE, SEND_REPLY_ID, STATS,
    SUPPLY_CEILING,
};
use crate::transport::set_delegate_msg;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let operator = deps.api.addr_validate(&msg.operator)?;
    let endpoint = deps.api.addr_validate(&msg.endpoint)?;
    let underlying = msg.underlying.validate(deps.api)?;

    if msg.supply_ceiling.is_zero() {
        return Err(ContractError::InvalidCeiling {
            ceiling: msg.supply_ceiling,
            supply: Uint128::zero(),
        });
    }
    if msg.bech32_prefix.is_empty() {
        return Err(ContractError::InvalidNativeAddress {
            reason: "bech32 prefix must not be empty".to_string(),
        });
    }

    // Same metadata rules as a plain cw20-base token
    cw20_base::msg::InstantiateMsg {
        name: msg.name.clone(),
        symbol: msg.symbol.clone(),
        decimals: msg.decimals,
        initial_balances: vec![],
        mint: None,
        marketing: None,
    }
    .validate()?;

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            total_supply: Uint128::zero(),
            mint: None,
        },
    )?;

    let config = Config {
        owner,
        operator,
        endpoint,
        local_domain: msg.local_domain,
        underlying,
        fee_denom: msg.fee_denom,
        bech32_prefix: msg.bech32_prefix,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    RESERVE.save(deps.storage, &Uint128::zero())?;
    SUPPLY_CEILING.save(deps.storage, &msg.supply_ceiling)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_message(set_delegate_msg(&config.endpoint, &config.owner)?)
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("operator", config.operator)
        .add_attribute("endpoint", config.endpoint)
        .add_attribute("local_domain", config.local_domain.to_string())
        .add_attribute("underlying", config.underlying.id())
        .add_attribute("supply_ceiling", msg.supply_ceiling))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Token
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => execute_send(deps, env, info, contract, amount, msg),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => execute_send_from(deps, env, info, owner, contract, amount, msg),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_increase_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_decrease_allowance(deps, env, info, spender, amount, expires),

        // Vault
        ExecuteMsg::Issue { amount } => execute_issue(deps, env, info, amount),
        ExecuteMsg::Redeem { amount } => execute_redeem(deps, info, amount),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),

        // Bridge
        ExecuteMsg::BridgeSend {
            dst_domain,
            to,
            amount,
            payload,
            native_drop,
            pay_in_secondary,
        } => execute_bridge_send(
            deps,
            env,
            info,
            dst_domain,
            to,
            amount,
            payload,
            native_drop,
            pay_in_secondary,
        ),
        ExecuteMsg::OnReceive {
            origin,
            guid,
            message,
            executor,
            extra_data,
        } => execute_on_receive(deps, env, info, origin, guid, message, executor, extra_data),

        // Compliance
        ExecuteMsg::Deny { account } => execute_deny(deps, info, account),
        ExecuteMsg::Undeny { account } => execute_undeny(deps, info, account),

        // Transport configuration
        ExecuteMsg::SetRouter { domain, router } => execute_set_router(deps, info, domain, router),
        ExecuteMsg::RemoveRouter { domain } => execute_remove_router(deps, info, domain),
        ExecuteMsg::SetGasLimit {
            domain,
            msg_type,
            gas,
        } => execute_set_gas_limit(deps, info, domain, msg_type, gas),
        ExecuteMsg::SetDelegate { delegate } => execute_set_delegate(deps, info, delegate),

        // Admin
        ExecuteMsg::UpdateSupplyCeiling { ceiling } => {
            execute_update_supply_ceiling(deps, info, ceiling)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::SetOperator { operator } => execute_set_operator(deps, info, operator),
        ExecuteMsg::ProposeOwner { new_owner } => execute_propose_owner(deps, info, new_owner),
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, info),
        ExecuteMsg::CancelOwnerProposal {} => execute_cancel_owner_proposal(deps, info),
        ExecuteMsg::RecoverAsset {
            asset,
            amount,
            recipient,
        } => execute_recover_asset(deps, env, info, asset, amount, recipient),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        SEND_REPLY_ID => handle_send_reply(deps, msg),
        id => Err(ContractError::UnknownReply { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core queries
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ledger {} => to_json_binary(&query_ledger(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),

        // Transport queries
        QueryMsg::Router { domain } => to_json_binary(&query_router(deps, domain)?),
        QueryMsg::Routers { start_after, limit } => {
            to_json_binary(&query_routers(deps, start_after, limit)?)
        }
        QueryMsg::PathReady { src_domain } => to_json_binary(&query_path_ready(deps, src_domain)?),
        QueryMsg::GasLimit { domain, msg_type } => {
            to_json_binary(&query_gas_limit(deps, domain, msg_type)?)
        }
        QueryMsg::QuoteSend {
            sender,
            dst_domain,
            to,
            amount,
            payload,
            native_drop,
            pay_in_secondary,
        } => to_json_binary(&query_quote_send(
            deps,
            env,
            sender,
            dst_domain,
            to,
            amount,
            payload,
            native_drop,
            pay_in_secondary,
        )?),

        // Compliance queries
        QueryMsg::IsDenied { account } => to_json_binary(&query_is_denied(deps, account)?),
        QueryMsg::DeniedAccounts { start_after, limit } => {
            to_json_binary(&query_denied_accounts(deps, start_after, limit)?)
        }
        QueryMsg::WideAddress { address } => to_json_binary(&query_wide_address(address)?),

        // CW20 queries
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => to_json_binary(
            &cw20_base::allowances::query_allowance(deps, owner, spender)?,
        ),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Stats were added after the first release
    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
