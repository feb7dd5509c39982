//! Reward math shared by the fixed and flexible ledgers.
//!
//! Pure functions over integers. Every multiplication is checked and every
//! division truncates toward zero at the step where it appears, so results
//! match the quoted formulas bit for bit.
//!
//! ```text
//! fixed    = floor(floor(amount * rate / 10_000) * lock / SECONDS_PER_YEAR)
//! per_int  = floor(amount * rate * interval / (10_000 * SECONDS_PER_YEAR))
//! flexible = floor(elapsed / interval) * per_int
//! ```

use swine_errors::ContractError;

/// 365-day year. Leap years are not adjusted for.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// 10_000 bps = 100 %.
pub const BPS_DENOMINATOR: u32 = 10_000;

#[inline]
fn checked_mul(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::ArithmeticOverflow)
}

/// Reward for locking `amount` at `rate_bps` for `lock_secs`.
///
/// # Errors
/// * `InvalidAmount` - `amount < 0`
/// * `ArithmeticOverflow` - an intermediate product does not fit in `i128`
pub fn fixed_reward(amount: i128, rate_bps: u32, lock_secs: u64) -> Result<i128, ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    let annual = checked_mul(amount, rate_bps as i128)? / BPS_DENOMINATOR as i128;
    Ok(checked_mul(annual, lock_secs as i128)? / SECONDS_PER_YEAR as i128)
}

/// Number of whole intervals in `elapsed_secs`.
///
/// # Errors
/// * `InvalidParameter` - `interval_secs == 0`
pub fn whole_intervals(elapsed_secs: u64, interval_secs: u64) -> Result<u64, ContractError> {
    if interval_secs == 0 {
        return Err(ContractError::InvalidParameter);
    }
    Ok(elapsed_secs / interval_secs)
}

/// Reward earned by one full interval on `amount`.
pub fn per_interval_reward(
    amount: i128,
    rate_bps: u32,
    interval_secs: u64,
) -> Result<i128, ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    let numerator = checked_mul(checked_mul(amount, rate_bps as i128)?, interval_secs as i128)?;
    let denominator = BPS_DENOMINATOR as i128 * SECONDS_PER_YEAR as i128;
    Ok(numerator / denominator)
}

/// Reward for holding `amount` over `elapsed_secs`, paid only per whole interval.
///
/// Sub-interval time earns nothing. `elapsed_secs == 0` yields 0.
///
/// # Errors
/// * `InvalidAmount` - `amount < 0`
/// * `InvalidParameter` - `interval_secs == 0`
/// * `ArithmeticOverflow` - an intermediate product does not fit in `i128`
pub fn flexible_reward(
    amount: i128,
    rate_bps: u32,
    interval_secs: u64,
    elapsed_secs: u64,
) -> Result<i128, ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    let intervals = whole_intervals(elapsed_secs, interval_secs)?;
    if intervals == 0 {
        return Ok(0);
    }
    let per_interval = per_interval_reward(amount, rate_bps, interval_secs)?;
    checked_mul(intervals as i128, per_interval)
}
