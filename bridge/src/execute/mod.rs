//! Execute handlers for the synthetic bridge contract.
//!
//! - `token` - CW20 transfer/send/approval wrappers
//! - `vault` - Issue, redeem and the CW20 underlying hook
//! - `outgoing` - BridgeSend and the endpoint receipt reply
//! - `incoming` - OnReceive from the endpoint
//! - `compliance` - Deny/undeny
//! - `config` - Routers, gas budgets, endpoint delegate
//! - `admin` - Pause, ceiling, roles and recovery

mod admin;
mod compliance;
mod config;
mod incoming;
mod outgoing;
mod token;
mod vault;

pub use admin::*;
pub use compliance::*;
pub use config::*;
pub use incoming::*;
pub use outgoing::*;
pub use token::*;
pub use vault::*;
