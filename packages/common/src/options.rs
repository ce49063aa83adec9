//! Executor options (type 3 encoding).
//!
//! Options tell the destination executor how much gas to allot to the
//! receive call and whether to airdrop native currency to a recipient.
//!
//! # Byte Layout
//! ```text
//! [0x00 0x03]                                   header (type 3)
//! repeated:
//!   [worker:1][size:2][option_type:1][params]   size = 1 + params.len()
//! ```
//! - option type 1 (receive):     params = gas (u128)
//! - option type 2 (native drop): params = amount (u128) ‖ receiver (32)

use cosmwasm_std::{StdError, StdResult};

pub const TYPE_3: u16 = 3;
pub const EXECUTOR_WORKER_ID: u8 = 1;
pub const OPTION_TYPE_RECEIVE: u8 = 1;
pub const OPTION_TYPE_NATIVE_DROP: u8 = 2;

const RECEIVE_PARAMS_LEN: usize = 16;
const NATIVE_DROP_PARAMS_LEN: usize = 48;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutorOption {
    Receive { gas: u128 },
    NativeDrop { amount: u128, receiver: [u8; 32] },
}

impl ExecutorOption {
    fn option_type(&self) -> u8 {
        match self {
            ExecutorOption::Receive { .. } => OPTION_TYPE_RECEIVE,
            ExecutorOption::NativeDrop { .. } => OPTION_TYPE_NATIVE_DROP,
        }
    }

    fn params(&self) -> Vec<u8> {
        match self {
            ExecutorOption::Receive { gas } => gas.to_be_bytes().to_vec(),
            ExecutorOption::NativeDrop { amount, receiver } => {
                let mut out = Vec::with_capacity(NATIVE_DROP_PARAMS_LEN);
                out.extend_from_slice(&amount.to_be_bytes());
                out.extend_from_slice(receiver);
                out
            }
        }
    }
}

/// Ordered list of executor options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub executor: Vec<ExecutorOption>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_receive_gas(mut self, gas: u128) -> Self {
        self.executor.push(ExecutorOption::Receive { gas });
        self
    }

    pub fn add_native_drop(mut self, amount: u128, receiver: [u8; 32]) -> Self {
        self.executor
            .push(ExecutorOption::NativeDrop { amount, receiver });
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = TYPE_3.to_be_bytes().to_vec();
        for option in &self.executor {
            let params = option.params();
            out.push(EXECUTOR_WORKER_ID);
            out.extend_from_slice(&((params.len() + 1) as u16).to_be_bytes());
            out.push(option.option_type());
            out.extend_from_slice(&params);
        }
        out
    }

    pub fn decode(bytes: &[u8]) -> StdResult<Self> {
        if bytes.len() < 2 {
            return Err(StdError::generic_err("options shorter than header"));
        }
        if u16::from_be_bytes([bytes[0], bytes[1]]) != TYPE_3 {
            return Err(StdError::generic_err("unsupported options type"));
        }

        let mut executor = Vec::new();
        let mut cursor = 2;
        while cursor < bytes.len() {
            if bytes.len() < cursor + 4 {
                return Err(StdError::generic_err("truncated option header"));
            }
            if bytes[cursor] != EXECUTOR_WORKER_ID {
                return Err(StdError::generic_err("unknown worker id"));
            }
            let size = u16::from_be_bytes([bytes[cursor + 1], bytes[cursor + 2]]) as usize;
            if size == 0 || bytes.len() < cursor + 3 + size {
                return Err(StdError::generic_err("truncated option body"));
            }
            let option_type = bytes[cursor + 3];
            let params = &bytes[cursor + 4..cursor + 3 + size];
            executor.push(match (option_type, params.len()) {
                (OPTION_TYPE_RECEIVE, RECEIVE_PARAMS_LEN) => ExecutorOption::Receive {
                    gas: read_u128(params),
                },
                (OPTION_TYPE_NATIVE_DROP, NATIVE_DROP_PARAMS_LEN) => {
                    let mut receiver = [0u8; 32];
                    receiver.copy_from_slice(&params[16..48]);
                    ExecutorOption::NativeDrop {
                        amount: read_u128(&params[0..16]),
                        receiver,
                    }
                }
                _ => return Err(StdError::generic_err("malformed executor option")),
            });
            cursor += 3 + size;
        }
        Ok(Options { executor })
    }

    /// Sum of all receive gas allotments.
    pub fn total_gas(&self) -> u128 {
        self.executor
            .iter()
            .map(|o| match o {
                ExecutorOption::Receive { gas } => *gas,
                _ => 0,
            })
            .fold(0u128, u128::saturating_add)
    }

    /// Sum of all native drop amounts.
    pub fn total_native_drop(&self) -> u128 {
        self.executor
            .iter()
            .map(|o| match o {
                ExecutorOption::NativeDrop { amount, .. } => *amount,
                _ => 0,
            })
            .fold(0u128, u128::saturating_add)
    }
}

fn read_u128(bytes: &[u8]) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&bytes[..16]);
    u128::from_be_bytes(buf)
}
