//! Common - Shared Types and Utilities for the Synthetic Bridge Contracts
//!
//! This package provides the pieces both sides of the transport boundary
//! must agree on: the underlying asset descriptor, the endpoint wire
//! interface, executor option encoding and message id derivation.

pub mod asset;
pub mod hash;
pub mod options;
pub mod transport;

pub use asset::AssetInfo;
pub use options::{ExecutorOption, Options};
pub use transport::{MessagingFee, MessagingReceipt, Origin};
