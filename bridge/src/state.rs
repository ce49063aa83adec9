//! State definitions for the synthetic bridge contract
//!
//! Token balances, allowances and total supply live in `cw20_base::state`;
//! everything the bridge layers on top is defined here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

use common::AssetInfo;

pub const CONTRACT_NAME: &str = "crates.io:synth-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Destination gas used when no budget is configured for a (domain, type)
pub const DEFAULT_RECEIVE_GAS: u128 = 200_000;

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Roles, registries, ceiling, pause and recovery
    pub owner: Addr,
    /// Deny-list management only
    pub operator: Addr,
    /// Messaging endpoint on this chain
    pub endpoint: Addr,
    /// Domain id of this chain
    pub local_domain: u32,
    /// Asset held in reserve
    pub underlying: AssetInfo,
    /// Denom the endpoint's native fee is paid in
    pub fee_denom: String,
    /// Bech32 prefix used when narrowing inbound receivers
    pub bech32_prefix: String,
    pub paused: bool,
}

#[cw_serde]
pub struct PendingOwner {
    pub new_address: Addr,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_outbound: u64,
    pub total_inbound: u64,
    pub total_issued: Uint128,
    pub total_redeemed: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const PENDING_OWNER: Item<PendingOwner> = Item::new("pending_owner");
pub const STATS: Item<Stats> = Item::new("stats");

// ============================================================================
// Vault Ledger
// ============================================================================

/// Underlying held against issued supply
pub const RESERVE: Item<Uint128> = Item::new("reserve");

/// Upper bound on local synthetic supply
pub const SUPPLY_CEILING: Item<Uint128> = Item::new("supply_ceiling");

// ============================================================================
// Compliance
// ============================================================================

/// wide account id => denied
pub const DENY_LIST: Map<&[u8], bool> = Map::new("deny_list");

// ============================================================================
// Transport
// ============================================================================

/// remote domain => trusted remote bridge id
pub const ROUTERS: Map<u32, [u8; 32]> = Map::new("routers");

/// (remote domain, message type) => destination receive gas
pub const GAS_LIMITS: Map<(u32, u8), u128> = Map::new("gas_limits");

/// Reply id of the endpoint `Send` dispatched by `BridgeSend`
pub const SEND_REPLY_ID: u64 = 1;

/// Outbound transfer waiting on the endpoint's receipt
#[cw_serde]
pub struct PendingSend {
    pub sender: Addr,
    /// Wide receiver on the destination domain
    pub receiver: Binary,
    pub amount: Uint128,
    pub dst_domain: u32,
}

/// Lives only between `BridgeSend` and its reply
pub const PENDING_SEND: Item<PendingSend> = Item::new("pending_send");
