//! Deny-list checks.
//!
//! Accounts are keyed by their wide identifier so that local accounts and
//! remote identifiers carried in bridge messages share one list.

use cosmwasm_std::{Addr, Storage};

use common::hash::bytes32_to_hex;

use crate::address_codec::widen_address;
use crate::error::ContractError;
use crate::state::DENY_LIST;

pub fn is_denied(storage: &dyn Storage, id: &[u8; 32]) -> Result<bool, ContractError> {
    Ok(DENY_LIST.may_load(storage, id.as_slice())?.unwrap_or(false))
}

pub fn assert_not_denied(storage: &dyn Storage, id: &[u8; 32]) -> Result<(), ContractError> {
    if is_denied(storage, id)? {
        return Err(ContractError::DenyListed {
            account: bytes32_to_hex(id),
        });
    }
    Ok(())
}

/// Check a local account by address.
pub fn assert_addr_not_denied(storage: &dyn Storage, addr: &Addr) -> Result<(), ContractError> {
    assert_not_denied(storage, &widen_address(addr.as_str())?)
}

pub fn deny(storage: &mut dyn Storage, id: &[u8; 32]) -> Result<(), ContractError> {
    if is_denied(storage, id)? {
        return Err(ContractError::AlreadyDenied {
            account: bytes32_to_hex(id),
        });
    }
    DENY_LIST.save(storage, id.as_slice(), &true)?;
    Ok(())
}

pub fn undeny(storage: &mut dyn Storage, id: &[u8; 32]) -> Result<(), ContractError> {
    if !is_denied(storage, id)? {
        return Err(ContractError::NotDenied {
            account: bytes32_to_hex(id),
        });
    }
    DENY_LIST.remove(storage, id.as_slice());
    Ok(())
}
