//! Messaging endpoint used by the bridge tests.
//!
//! Implements the endpoint side of `common::transport`: quotes a fixed
//! base fee plus gas and native-drop costs, queues outbound packets with
//! per-path sequences and delivers them only when a relayer calls
//! `Deliver`. Compose payloads are recorded rather than executed.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
