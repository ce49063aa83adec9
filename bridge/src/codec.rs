//! Bridge message wire format.
//!
//! # Transfer message (big-endian, tag prefixed)
//! ```text
//! [type:1][sender:32][receiver:32][amount:8]            type 1, 73 bytes
//! [type:1][sender:32][receiver:32][amount:8][payload]   type 2, 73 + N bytes
//! ```
//! The payload is always the last field, so it carries no length prefix.
//!
//! # Compose message (handed to the receiver after a type 2 mint)
//! ```text
//! [sequence:8][src_domain:4][amount:16][sender:32][payload]
//! ```

use cosmwasm_std::Uint128;

use crate::error::ContractError;

pub const MSG_TYPE_TRANSFER: u8 = 1;
pub const MSG_TYPE_TRANSFER_WITH_PAYLOAD: u8 = 2;

/// Fixed part of every transfer message
pub const TRANSFER_HEADER_LEN: usize = 73;

/// Fixed part of every compose message
pub const COMPOSE_HEADER_LEN: usize = 60;

const SENDER_OFFSET: usize = 1;
const RECEIVER_OFFSET: usize = 33;
const AMOUNT_OFFSET: usize = 65;

/// Transfer message exchanged between bridge instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeMessage {
    pub sender: [u8; 32],
    pub receiver: [u8; 32],
    pub amount: Uint128,
    /// Present (and non-empty) only for type 2 messages
    pub payload: Option<Vec<u8>>,
}

impl BridgeMessage {
    pub fn msg_type(&self) -> u8 {
        if self.payload.is_some() {
            MSG_TYPE_TRANSFER_WITH_PAYLOAD
        } else {
            MSG_TYPE_TRANSFER
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ContractError> {
        let amount: u64 = self
            .amount
            .u128()
            .try_into()
            .map_err(|_| ContractError::AmountOverflow {
                amount: self.amount,
            })?;

        let payload = self.payload.as_deref().unwrap_or_default();
        if self.payload.is_some() && payload.is_empty() {
            return Err(ContractError::InvalidMessage {
                reason: "payload variant requires a payload".to_string(),
            });
        }

        let mut out = Vec::with_capacity(TRANSFER_HEADER_LEN + payload.len());
        out.push(self.msg_type());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.receiver);
        out.extend_from_slice(&amount.to_be_bytes());
        out.extend_from_slice(payload);
        Ok(out)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() < TRANSFER_HEADER_LEN {
            return Err(ContractError::InvalidMessage {
                reason: format!(
                    "expected at least {} bytes, got {}",
                    TRANSFER_HEADER_LEN,
                    bytes.len()
                ),
            });
        }

        let mut sender = [0u8; 32];
        sender.copy_from_slice(&bytes[SENDER_OFFSET..RECEIVER_OFFSET]);
        let mut receiver = [0u8; 32];
        receiver.copy_from_slice(&bytes[RECEIVER_OFFSET..AMOUNT_OFFSET]);
        let mut amount = [0u8; 8];
        amount.copy_from_slice(&bytes[AMOUNT_OFFSET..TRANSFER_HEADER_LEN]);
        let trailing = &bytes[TRANSFER_HEADER_LEN..];

        let payload = match bytes[0] {
            MSG_TYPE_TRANSFER if trailing.is_empty() => None,
            MSG_TYPE_TRANSFER => {
                return Err(ContractError::InvalidMessage {
                    reason: "trailing bytes after plain transfer".to_string(),
                })
            }
            MSG_TYPE_TRANSFER_WITH_PAYLOAD if !trailing.is_empty() => Some(trailing.to_vec()),
            MSG_TYPE_TRANSFER_WITH_PAYLOAD => {
                return Err(ContractError::InvalidMessage {
                    reason: "empty payload".to_string(),
                })
            }
            other => {
                return Err(ContractError::InvalidMessage {
                    reason: format!("unknown message type {}", other),
                })
            }
        };

        Ok(BridgeMessage {
            sender,
            receiver,
            amount: Uint128::from(u64::from_be_bytes(amount)),
            payload,
        })
    }
}

/// Payload forwarded to the receiver's compose handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeMessage {
    pub sequence: u64,
    pub src_domain: u32,
    pub amount: Uint128,
    pub sender: [u8; 32],
    pub payload: Vec<u8>,
}

impl ComposeMessage {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(COMPOSE_HEADER_LEN + self.payload.len());
        out.extend_from_slice(&self.sequence.to_be_bytes());
        out.extend_from_slice(&self.src_domain.to_be_bytes());
        out.extend_from_slice(&self.amount.u128().to_be_bytes());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.payload);
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() < COMPOSE_HEADER_LEN {
            return Err(ContractError::InvalidMessage {
                reason: format!("compose message shorter than {} bytes", COMPOSE_HEADER_LEN),
            });
        }
        let mut sequence = [0u8; 8];
        sequence.copy_from_slice(&bytes[0..8]);
        let mut src_domain = [0u8; 4];
        src_domain.copy_from_slice(&bytes[8..12]);
        let mut amount = [0u8; 16];
        amount.copy_from_slice(&bytes[12..28]);
        let mut sender = [0u8; 32];
        sender.copy_from_slice(&bytes[28..60]);

        Ok(ComposeMessage {
            sequence: u64::from_be_bytes(sequence),
            src_domain: u32::from_be_bytes(src_domain),
            amount: Uint128::new(u128::from_be_bytes(amount)),
            sender,
            payload: bytes[COMPOSE_HEADER_LEN..].to_vec(),
        })
    }
}
