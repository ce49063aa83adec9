//! Synthetic Bridge Contract - Cross-Domain Synthetic Asset for TerraClassic
//!
//! A CW20 synthetic token backed one-to-one by an underlying asset held in
//! the contract's reserve, bridged between domains over a messaging endpoint.
//!
//! # Vault
//! - `Issue` locks underlying into the reserve and mints synthetic 1:1
//! - `Redeem` burns synthetic and releases underlying 1:1
//!
//! # Outbound Flow (Burn)
//! 1. User calls `BridgeSend` with the endpoint fee attached
//! 2. Synthetic is burned and the encoded transfer is handed to the endpoint
//! 3. The endpoint receipt (guid, sequence, fee) is returned as response data
//!
//! # Inbound Flow (Mint)
//! 1. The endpoint calls `OnReceive` with the origin of a delivered message
//! 2. The origin sender must be the router registered for the source domain
//! 3. Synthetic is minted to the receiver, bounded by the supply ceiling
//! 4. A payload, if present, is forwarded to the receiver as a compose message
//!
//! # Controls
//! - Deny list checked on every account a balance mutation touches
//! - Owner pause over every balance-mutating path
//! - Supply ceiling applied on mint only

pub mod access;
pub mod address_codec;
pub mod codec;
pub mod compliance;
pub mod contract;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;
pub mod transport;

pub use crate::codec::{BridgeMessage, ComposeMessage};
pub use crate::error::ContractError;
