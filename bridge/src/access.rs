//! Role and pause checks.
//!
//! Handlers build an [`Access`] from the stored config and ask it for the
//! capability they need instead of comparing addresses inline.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Access {
    owner: Addr,
    operator: Addr,
    endpoint: Addr,
    paused: bool,
}

impl Access {
    pub fn from_config(config: &Config) -> Self {
        Self {
            owner: config.owner.clone(),
            operator: config.operator.clone(),
            endpoint: config.endpoint.clone(),
            paused: config.paused,
        }
    }

    pub fn load(storage: &dyn Storage) -> Result<Self, ContractError> {
        Ok(Self::from_config(&CONFIG.load(storage)?))
    }

    pub fn assert_owner(&self, sender: &Addr) -> Result<(), ContractError> {
        if *sender != self.owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    pub fn assert_operator(&self, sender: &Addr) -> Result<(), ContractError> {
        if *sender != self.operator {
            return Err(ContractError::NotOperator);
        }
        Ok(())
    }

    pub fn assert_endpoint(&self, sender: &Addr) -> Result<(), ContractError> {
        if *sender != self.endpoint {
            return Err(ContractError::OnlyEndpoint);
        }
        Ok(())
    }

    /// Every balance-mutating path goes through this.
    pub fn assert_not_paused(&self) -> Result<(), ContractError> {
        if self.paused {
            return Err(ContractError::Paused);
        }
        Ok(())
    }
}
