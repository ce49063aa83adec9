//! Native <-> Wide Address Encoding
//!
//! Remote domains identify accounts with a fixed 32-byte value. Accounts on
//! this chain come in two widths: 20-byte key accounts and 32-byte contract
//! addresses. Key accounts are left-padded with zeros; contract addresses
//! already fill the wide form and pass through unchanged.
//!
//! ```text
//! account:  | zero padding (12 bytes) | native account (20 bytes) |
//! contract: |              contract address (32 bytes)            |
//! ```
//!
//! Narrowing picks the width from the padding: clear high-order bytes mean a
//! key account, anything else is a contract.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::ContractError;

/// Width of a chain-agnostic account identifier
pub const WIDE_ADDRESS_LEN: usize = 32;

/// Width of a native key account
pub const NATIVE_ADDRESS_LEN: usize = 20;

/// Width of a native contract address
pub const CONTRACT_ADDRESS_LEN: usize = 32;

const PADDING_LEN: usize = WIDE_ADDRESS_LEN - NATIVE_ADDRESS_LEN;

// ============================================================================
// Raw Widening / Narrowing
// ============================================================================

/// Wide identifier of a native account or contract.
pub fn widen(native: &[u8]) -> Result<[u8; WIDE_ADDRESS_LEN], ContractError> {
    let mut wide = [0u8; WIDE_ADDRESS_LEN];
    match native.len() {
        NATIVE_ADDRESS_LEN => wide[PADDING_LEN..].copy_from_slice(native),
        CONTRACT_ADDRESS_LEN => wide.copy_from_slice(native),
        got => {
            return Err(ContractError::InvalidNativeAddress {
                reason: format!(
                    "{} bytes is neither {} nor {}",
                    got, NATIVE_ADDRESS_LEN, CONTRACT_ADDRESS_LEN
                ),
            })
        }
    }
    Ok(wide)
}

/// Native bytes behind a wide identifier.
pub fn narrow(wide: &[u8; WIDE_ADDRESS_LEN]) -> &[u8] {
    let (padding, account) = wide.split_at(PADDING_LEN);
    if padding.iter().all(|b| *b == 0) {
        account
    } else {
        wide
    }
}

/// Interpret a wire field as a wide identifier.
pub fn to_wide(bytes: &[u8]) -> Result<[u8; WIDE_ADDRESS_LEN], ContractError> {
    bytes
        .try_into()
        .map_err(|_| ContractError::InvalidIdentifierLength {
            expected: WIDE_ADDRESS_LEN,
            got: bytes.len(),
        })
}

// ============================================================================
// Bech32 Binding
// ============================================================================

/// Decode a bech32 account into its raw payload (checksum verified).
pub fn decode_bech32(addr: &str) -> Result<Vec<u8>, ContractError> {
    let (_hrp, data, _variant) =
        bech32::decode(addr).map_err(|e| ContractError::InvalidNativeAddress {
            reason: format!("{}: {}", addr, e),
        })?;
    Vec::<u8>::from_base32(&data).map_err(|e| ContractError::InvalidNativeAddress {
        reason: format!("{}: {}", addr, e),
    })
}

/// Wide identifier of a local bech32 account or contract.
pub fn widen_address(addr: &str) -> Result<[u8; WIDE_ADDRESS_LEN], ContractError> {
    let raw = decode_bech32(addr)?;
    widen(&raw).map_err(|_| ContractError::InvalidNativeAddress {
        reason: format!("{} decodes to {} bytes", addr, raw.len()),
    })
}

/// Local bech32 account for a wide identifier arriving from another domain.
pub fn narrow_address(wide: &[u8; WIDE_ADDRESS_LEN], hrp: &str) -> Result<String, ContractError> {
    bech32::encode(hrp, narrow(wide).to_base32(), Variant::Bech32).map_err(|e| {
        ContractError::InvalidNativeAddress {
            reason: e.to_string(),
        }
    })
}
