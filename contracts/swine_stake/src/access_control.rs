//! Owner capability.
//!
//! Privileged code paths take an `&OwnerCap` instead of re-reading the owner
//! themselves. The only constructor is [`require_owner`], so holding a cap
//! proves the check already ran for the current invocation.

use crate::types::DataKey;
use soroban_sdk::{Address, Env};
use swine_errors::ContractError;

/// Proof that the stored owner authorized this call.
pub struct OwnerCap {
    owner: Address,
}

impl OwnerCap {
    pub fn owner(&self) -> &Address {
        &self.owner
    }
}

pub fn get_owner(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ContractError::NotInitialized)
}

/// Checks that `caller` is the stored owner and has signed the invocation.
///
/// # Errors
/// * `NotInitialized` - no owner stored yet
/// * `NotOwner` - `caller` differs from the stored owner
pub fn require_owner(e: &Env, caller: &Address) -> Result<OwnerCap, ContractError> {
    let stored = get_owner(e)?;
    if stored != *caller {
        return Err(ContractError::NotOwner);
    }
    caller.require_auth();
    Ok(OwnerCap { owner: stored })
}
