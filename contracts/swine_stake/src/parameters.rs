//! Parameter Store
//!
//! Holds the yield rates and durations used to quote new rewards. Setters are
//! owner-only (they take an [`OwnerCap`]) and each emits an event carrying the
//! old and new values.
//!
//! Changes apply to future quotes only: a fixed stake keeps the
//! `expected_reward` it was opened with.

use crate::access_control::OwnerCap;
use crate::events;
use crate::types::{DataKey, Parameters};
use soroban_sdk::Env;
use swine_errors::ContractError;

/// Both durations must be strictly positive.
pub fn validate(params: &Parameters) -> Result<(), ContractError> {
    if params.fixed_lock_secs == 0 || params.flexible_interval_secs == 0 {
        return Err(ContractError::InvalidParameter);
    }
    Ok(())
}

pub fn load(e: &Env) -> Result<Parameters, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Params)
        .ok_or(ContractError::NotInitialized)
}

pub fn store(e: &Env, params: &Parameters) {
    e.storage().instance().set(&DataKey::Params, params);
}

/// Replace both yield rates. Any value is accepted.
pub fn set_rates(
    e: &Env,
    cap: &OwnerCap,
    fixed_rate_bps: u32,
    flexible_rate_bps: u32,
) -> Result<Parameters, ContractError> {
    let mut params = load(e)?;
    let old = (params.fixed_rate_bps, params.flexible_rate_bps);
    params.fixed_rate_bps = fixed_rate_bps;
    params.flexible_rate_bps = flexible_rate_bps;
    store(e, &params);

    events::emit_rates_changed(e, cap.owner(), old, (fixed_rate_bps, flexible_rate_bps));
    Ok(params)
}

/// # Errors
/// * `InvalidParameter` - `secs == 0`
pub fn set_fixed_lock(e: &Env, cap: &OwnerCap, secs: u64) -> Result<Parameters, ContractError> {
    if secs == 0 {
        return Err(ContractError::InvalidParameter);
    }
    let mut params = load(e)?;
    let old = params.fixed_lock_secs;
    params.fixed_lock_secs = secs;
    store(e, &params);

    events::emit_fixed_lock_changed(e, cap.owner(), old, secs);
    Ok(params)
}

/// # Errors
/// * `InvalidParameter` - `secs == 0`
pub fn set_flexible_interval(
    e: &Env,
    cap: &OwnerCap,
    secs: u64,
) -> Result<Parameters, ContractError> {
    if secs == 0 {
        return Err(ContractError::InvalidParameter);
    }
    let mut params = load(e)?;
    let old = params.flexible_interval_secs;
    params.flexible_interval_secs = secs;
    store(e, &params);

    events::emit_flex_interval_changed(e, cap.owner(), old, secs);
    Ok(params)
}
