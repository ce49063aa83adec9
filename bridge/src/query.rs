//! Query handlers for the synthetic bridge contract.

use cosmwasm_std::{Binary, Deps, Env, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use common::transport::MessagingFee;

use crate::address_codec::{to_wide, widen_address};
use crate::compliance::is_denied;
use crate::error::ContractError;
use crate::execute::prepare_send;
use crate::ledger;
use crate::msg::{
    ConfigResponse, DeniedAccountsResponse, GasLimitResponse, IsDeniedResponse, LedgerResponse,
    PathReadyResponse, PendingOwnerResponse, RouterResponse, RoutersResponse, WideAddressResponse,
};
use crate::state::{
    Stats, CONFIG, DEFAULT_RECEIVE_GAS, DENY_LIST, GAS_LIMITS, PENDING_OWNER, ROUTERS,
    SUPPLY_CEILING, STATS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

fn std_err(err: ContractError) -> StdError {
    match err {
        ContractError::Std(e) => e,
        other => StdError::generic_err(other.to_string()),
    }
}

// ============================================================================
// Core
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        operator: config.operator,
        endpoint: config.endpoint,
        local_domain: config.local_domain,
        underlying: config.underlying,
        fee_denom: config.fee_denom,
        bech32_prefix: config.bech32_prefix,
        paused: config.paused,
    })
}

pub fn query_ledger(deps: Deps) -> StdResult<LedgerResponse> {
    Ok(LedgerResponse {
        reserve: ledger::reserve(deps.storage).map_err(std_err)?,
        total_supply: ledger::total_supply(deps.storage).map_err(std_err)?,
        supply_ceiling: SUPPLY_CEILING.load(deps.storage)?,
    })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<Option<PendingOwnerResponse>> {
    Ok(PENDING_OWNER
        .may_load(deps.storage)?
        .map(|p| PendingOwnerResponse {
            new_address: p.new_address,
        }))
}

pub fn query_stats(deps: Deps) -> StdResult<Stats> {
    STATS.load(deps.storage)
}

// ============================================================================
// Transport
// ============================================================================

pub fn query_router(deps: Deps, domain: u32) -> StdResult<RouterResponse> {
    Ok(RouterResponse {
        domain,
        router: ROUTERS
            .may_load(deps.storage, domain)?
            .map(|r| Binary::from(r.to_vec())),
    })
}

pub fn query_routers(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<RoutersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let routers = ROUTERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (domain, router) = item?;
            Ok(RouterResponse {
                domain,
                router: Some(Binary::from(router.to_vec())),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RoutersResponse { routers })
}

/// Ready iff a router is registered for the source domain.
pub fn query_path_ready(deps: Deps, src_domain: u32) -> StdResult<PathReadyResponse> {
    Ok(PathReadyResponse {
        ready: ROUTERS.has(deps.storage, src_domain),
    })
}

pub fn query_gas_limit(deps: Deps, domain: u32, msg_type: u8) -> StdResult<GasLimitResponse> {
    let configured = GAS_LIMITS.may_load(deps.storage, (domain, msg_type))?;
    Ok(GasLimitResponse {
        gas: Uint128::new(configured.unwrap_or(DEFAULT_RECEIVE_GAS)),
        configured: configured.is_some(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn query_quote_send(
    deps: Deps,
    env: Env,
    sender: String,
    dst_domain: u32,
    to: Binary,
    amount: Uint128,
    payload: Option<Binary>,
    native_drop: Option<Uint128>,
    pay_in_secondary: bool,
) -> StdResult<MessagingFee> {
    let config = CONFIG.load(deps.storage)?;
    let packet = prepare_send(
        deps,
        &config,
        &sender,
        dst_domain,
        &to,
        amount,
        payload,
        native_drop,
    )
    .map_err(std_err)?;
    packet.quote(
        &deps.querier,
        &config.endpoint,
        &env.contract.address,
        pay_in_secondary,
    )
}

// ============================================================================
// Compliance
// ============================================================================

pub fn query_is_denied(deps: Deps, account: Binary) -> StdResult<IsDeniedResponse> {
    let id = to_wide(account.as_slice()).map_err(std_err)?;
    Ok(IsDeniedResponse {
        denied: is_denied(deps.storage, &id).map_err(std_err)?,
    })
}

pub fn query_denied_accounts(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<DeniedAccountsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(|b| Bound::exclusive(b.as_slice()));

    let accounts = DENY_LIST
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|key| key.map(Binary::from))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DeniedAccountsResponse { accounts })
}

pub fn query_wide_address(address: String) -> StdResult<WideAddressResponse> {
    let wide = widen_address(&address).map_err(std_err)?;
    Ok(WideAddressResponse {
        wide: Binary::from(wide.to_vec()),
    })
}
