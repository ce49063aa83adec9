use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Insufficient fee: required {required}, provided {provided}")]
    InsufficientFee { required: Uint128, provided: Uint128 },

    #[error("No secondary fee token configured")]
    NoSecondaryToken {},

    #[error("Receiver must be 32 bytes, got {got}")]
    InvalidReceiver { got: usize },

    #[error("Packet not found: {nonce}")]
    PacketNotFound { nonce: u64 },
}
