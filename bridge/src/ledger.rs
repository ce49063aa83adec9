//! Vault Ledger
//!
//! Reserve and supply bookkeeping. Synthetic balances are `cw20-base`
//! state; every supply increase is checked against the ceiling after the
//! mutation and reverts the whole transition when it is exceeded.

use cosmwasm_std::{Addr, Storage, Uint128};
use cw20_base::state::{BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::state::{RESERVE, SUPPLY_CEILING};

pub fn total_supply(storage: &dyn Storage) -> Result<Uint128, ContractError> {
    Ok(TOKEN_INFO.load(storage)?.total_supply)
}

// ============================================================================
// Supply
// ============================================================================

/// Mint synthetic supply to `to`. Returns the new total supply.
pub fn mint(
    storage: &mut dyn Storage,
    to: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info.total_supply.checked_add(amount)?;

    let ceiling = SUPPLY_CEILING.load(storage)?;
    if info.total_supply > ceiling {
        return Err(ContractError::ChainLimitReached {
            ceiling,
            supply: info.total_supply,
        });
    }
    TOKEN_INFO.save(storage, &info)?;

    BALANCES.update(storage, to, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(info.total_supply)
}

/// Burn synthetic supply held by `from`. Returns the new total supply.
pub fn burn(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    BALANCES.update(storage, from, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default().checked_sub(amount)?)
    })?;

    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info.total_supply.checked_sub(amount)?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(info.total_supply)
}

pub fn set_supply_ceiling(
    storage: &mut dyn Storage,
    ceiling: Uint128,
) -> Result<(), ContractError> {
    let supply = total_supply(storage)?;
    if ceiling <= supply {
        return Err(ContractError::InvalidCeiling { ceiling, supply });
    }
    SUPPLY_CEILING.save(storage, &ceiling)?;
    Ok(())
}

// ============================================================================
// Reserve
// ============================================================================

pub fn reserve(storage: &dyn Storage) -> Result<Uint128, ContractError> {
    Ok(RESERVE.load(storage)?)
}

/// Record underlying taken into custody.
pub fn lock(storage: &mut dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    let reserve = reserve(storage)?.checked_add(amount)?;
    RESERVE.save(storage, &reserve)?;
    Ok(reserve)
}

/// Record underlying leaving custody.
pub fn release(storage: &mut dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    let current = reserve(storage)?;
    if amount > current {
        return Err(ContractError::InsufficientLiquidity {
            reserve: current,
            requested: amount,
        });
    }
    let reserve = current - amount;
    RESERVE.save(storage, &reserve)?;
    Ok(reserve)
}
