use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:synth-endpoint-mock";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Domain id of this endpoint
    pub eid: u32,
    pub base_fee: Uint128,
    pub price_per_gas: Uint128,
    pub fee_denom: String,
    pub secondary_token: Option<Addr>,
}

/// Outbound packet waiting for a relayer
#[cw_serde]
pub struct Packet {
    pub nonce: u64,
    pub guid: Binary,
    pub sender: Addr,
    pub sender_id: Binary,
    pub src_domain: u32,
    pub dst_domain: u32,
    pub receiver: Binary,
    pub sequence: u64,
    pub message: Binary,
    pub options: Binary,
    pub native_fee: Uint128,
    pub secondary_fee: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// (sender, dst_domain, receiver) => last assigned sequence
pub const OUTBOUND_SEQUENCE: Map<(&Addr, u32, &[u8]), u64> = Map::new("outbound_sequence");

/// Global packet counter
pub const PACKET_COUNT: Item<u64> = Item::new("packet_count");

/// nonce => packet
pub const PACKETS: Map<u64, Packet> = Map::new("packets");

/// (from, to, guid ‖ index) => composed payload
pub const COMPOSE_QUEUE: Map<(&Addr, &Addr, &[u8]), Binary> = Map::new("compose_queue");

/// oapp => delegate
pub const DELEGATES: Map<&Addr, Addr> = Map::new("delegates");

/// Secondary token balance already attributed to paid packets
pub const SECONDARY_ACCOUNTED: Item<Uint128> = Item::new("secondary_accounted");
