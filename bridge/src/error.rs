//! Error types for the synthetic bridge contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Token(#[from] cw20_base::ContractError),

    #[error("{0}")]
    ParseReply(#[from] cw_utils::ParseReplyError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only operator can perform this action")]
    NotOperator,

    #[error("Unauthorized: only the messaging endpoint can deliver")]
    OnlyEndpoint,

    #[error("Unauthorized router for domain {domain}")]
    UnauthorizedRouter { domain: u32 },

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    // ========================================================================
    // Compliance Errors
    // ========================================================================

    #[error("Account is deny-listed: {account}")]
    DenyListed { account: String },

    #[error("Account already deny-listed: {account}")]
    AlreadyDenied { account: String },

    #[error("Account not deny-listed: {account}")]
    NotDenied { account: String },

    #[error("Bridge is paused")]
    Paused,

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient liquidity: reserve {reserve}, requested {requested}")]
    InsufficientLiquidity { reserve: Uint128, requested: Uint128 },

    #[error("Supply ceiling reached: ceiling {ceiling}, supply would be {supply}")]
    ChainLimitReached { ceiling: Uint128, supply: Uint128 },

    #[error("Invalid ceiling: {ceiling} must exceed current supply {supply}")]
    InvalidCeiling { ceiling: Uint128, supply: Uint128 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Recovery exceeds surplus: surplus {surplus}, requested {requested}")]
    RecoveryExceedsSurplus { surplus: Uint128, requested: Uint128 },

    #[error("Invalid asset: {reason}")]
    InvalidAsset { reason: String },

    // ========================================================================
    // Protocol Errors
    // ========================================================================

    #[error("No router registered for domain {domain}")]
    InvalidRouter { domain: u32 },

    #[error("Insufficient fee: expected {expected}, got {got}")]
    InsufficientFee { expected: Uint128, got: Uint128 },

    #[error("Invalid message: {reason}")]
    InvalidMessage { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },

    #[error("Endpoint returned no receipt")]
    MissingReceipt,

    // ========================================================================
    // Encoding Errors
    // ========================================================================

    #[error("Amount {amount} does not fit in 8 bytes")]
    AmountOverflow { amount: Uint128 },

    #[error("Invalid native address: {reason}")]
    InvalidNativeAddress { reason: String },

    #[error("Invalid identifier length: expected {expected} bytes, got {got}")]
    InvalidIdentifierLength { expected: usize, got: usize },
}
