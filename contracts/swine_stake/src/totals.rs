//! Aggregate counters kept alongside the per-participant ledgers.

use crate::types::{DataKey, Totals};
use soroban_sdk::Env;
use swine_errors::ContractError;

pub fn load(e: &Env) -> Totals {
    e.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

/// Principal held for participants: open fixed stakes plus flexible balances.
pub fn staked_principal(e: &Env) -> Result<i128, ContractError> {
    let totals = load(e);
    totals
        .fixed_locked
        .checked_add(totals.flexible_staked)
        .ok_or(ContractError::ArithmeticOverflow)
}

fn apply(value: i128, delta: i128) -> Result<i128, ContractError> {
    value
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Add signed deltas to every counter and persist the result.
pub fn adjust(
    e: &Env,
    fixed_locked: i128,
    fixed_promised: i128,
    flexible_staked: i128,
) -> Result<Totals, ContractError> {
    let current = load(e);
    let updated = Totals {
        fixed_locked: apply(current.fixed_locked, fixed_locked)?,
        fixed_promised: apply(current.fixed_promised, fixed_promised)?,
        flexible_staked: apply(current.flexible_staked, flexible_staked)?,
    };
    e.storage().instance().set(&DataKey::Totals, &updated);
    Ok(updated)
}
