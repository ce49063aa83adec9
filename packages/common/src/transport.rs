//! Messaging endpoint interface.
//!
//! The bridge never talks to another domain directly. It hands packets to an
//! endpoint contract on its own chain and is called back by that endpoint
//! when a packet from a remote bridge arrives. These are the messages both
//! sides exchange.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Shared Types
// ============================================================================

/// Fee quoted by the endpoint for a single packet.
#[cw_serde]
#[derive(Default)]
pub struct MessagingFee {
    /// Amount of the endpoint's native fee denom
    pub native_fee: Uint128,
    /// Amount of the secondary fee token (zero unless requested and configured)
    pub secondary_fee: Uint128,
}

/// Receipt for a dispatched packet.
#[cw_serde]
pub struct MessagingReceipt {
    /// Message id (32 bytes)
    pub guid: Binary,
    /// Per-path outbound sequence assigned by the endpoint
    pub sequence: u64,
    pub fee: MessagingFee,
}

/// Where an inbound packet came from.
#[cw_serde]
pub struct Origin {
    pub src_domain: u32,
    /// 32-byte identifier of the sending contract on the source domain
    pub sender: Binary,
    pub sequence: u64,
}

// ============================================================================
// Endpoint Messages
// ============================================================================

#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Dispatch a packet. The native fee is attached as funds; any excess
    /// is refunded to `refund_address`. With `pay_in_secondary` the fee is
    /// taken from secondary tokens already sent to the endpoint and every
    /// attached coin is refunded.
    ///
    /// The response data is the JSON `MessagingReceipt`.
    Send {
        dst_domain: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
        refund_address: String,
        pay_in_secondary: bool,
    },
    /// Queue a composed payload for `to`. Fire-and-forget.
    SendCompose {
        to: String,
        guid: Binary,
        index: u16,
        message: Binary,
    },
    /// Register the account allowed to configure the caller's endpoint settings
    SetDelegate { delegate: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum EndpointQueryMsg {
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
}

#[cw_serde]
pub struct SecondaryTokenResponse {
    pub token: Option<Addr>,
}

// ============================================================================
// Receiver Callback
// ============================================================================

/// Callback the endpoint invokes on the receiving contract.
#[cw_serde]
pub enum ReceiverExecuteMsg {
    OnReceive {
        origin: Origin,
        guid: Binary,
        message: Binary,
        executor: String,
        extra_data: Binary,
    },
}
