use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use common::transport::{MessagingFee, Origin, SecondaryTokenResponse};

use crate::state::{Config, Packet};

#[cw_serde]
pub struct InstantiateMsg {
    /// Domain id this endpoint serves
    pub eid: u32,
    /// Flat fee charged per packet
    pub base_fee: Uint128,
    /// Fee per unit of executor receive gas
    pub price_per_gas: Uint128,
    /// Denom the native fee is paid in
    pub fee_denom: String,
    /// Optional CW20 accepted instead of the native fee
    pub secondary_token: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Dispatch a packet. The native fee is attached; with
    /// `pay_in_secondary` the secondary fee must have been transferred in
    /// first and all attached coins are refunded.
    Send {
        dst_domain: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
        refund_address: String,
        pay_in_secondary: bool,
    },
    /// Record a composed payload for `to`
    SendCompose {
        to: String,
        guid: Binary,
        index: u16,
        message: Binary,
    },
    /// Register the caller's delegate
    SetDelegate { delegate: String },
    /// Relayer: hand an inbound packet to its receiver
    Deliver {
        origin: Origin,
        receiver: String,
        guid: Binary,
        message: Binary,
        extra_data: Option<Binary>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(MessagingFee)]
    Quote {
        sender: String,
        dst_domain: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
        pay_in_secondary: bool,
    },

    #[returns(SecondaryTokenResponse)]
    SecondaryToken {},

    #[returns(Config)]
    Config {},

    #[returns(Packet)]
    Packet { nonce: u64 },

    /// Outbound packets in nonce order
    #[returns(PacketsResponse)]
    Packets {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Option<Binary>)]
    Composed {
        from: String,
        to: String,
        guid: Binary,
        index: u16,
    },

    #[returns(Option<Addr>)]
    Delegate { oapp: String },
}

#[cw_serde]
pub struct PacketsResponse {
    pub packets: Vec<Packet>,
}
