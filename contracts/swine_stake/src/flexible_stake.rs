//! Flexible-Stake Ledger
//!
//! One running balance and one reward checkpoint per participant. Rewards are
//! realized in whole intervals only. Every deposit, withdrawal and claim moves
//! the checkpoint to `now`, so any sub-interval remainder is dropped rather
//! than carried forward.

use crate::rewards;
use crate::totals;
use crate::types::{DataKey, FlexibleStake, Parameters, BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{Address, Env};
use swine_errors::ContractError;

/// Current record for `participant`; zeroed if they never staked.
pub fn load(e: &Env, participant: &Address) -> FlexibleStake {
    let key = DataKey::Flexible(participant.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, FlexibleStake>(&key) {
        Some(stake) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            stake
        }
        None => FlexibleStake::default(),
    }
}

fn save(e: &Env, participant: &Address, stake: &FlexibleStake) {
    let key = DataKey::Flexible(participant.clone());
    let storage = e.storage().persistent();
    storage.set(&key, stake);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn accrued(stake: &FlexibleStake, now: u64, params: &Parameters) -> Result<i128, ContractError> {
    if stake.amount == 0 {
        return Ok(0);
    }
    rewards::flexible_reward(
        stake.amount,
        params.flexible_rate_bps,
        params.flexible_interval_secs,
        now.saturating_sub(stake.last_settle_time),
    )
}

fn checkpoint(stake: &mut FlexibleStake, now: u64) {
    if now > stake.last_settle_time {
        stake.last_settle_time = now;
    }
}

/// Reward `claim` would pay at `now`, or 0.
pub fn pending(e: &Env, participant: &Address, now: u64, params: &Parameters) -> Result<i128, ContractError> {
    accrued(&load(e, participant), now, params)
}

/// Realize any whole-interval reward on the existing balance, then add `amount`.
///
/// Returns the updated record and the reward to pay out.
///
/// # Errors
/// * `InvalidAmount` - `amount <= 0`
pub fn deposit(
    e: &Env,
    participant: &Address,
    amount: i128,
    now: u64,
    params: &Parameters,
) -> Result<(FlexibleStake, i128), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let mut stake = load(e, participant);
    let reward = accrued(&stake, now, params)?;

    checkpoint(&mut stake, now);
    stake.amount = stake
        .amount
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    save(e, participant, &stake);
    totals::adjust(e, 0, 0, amount)?;
    Ok((stake, reward))
}

/// Reduce the balance by `amount`. A whole-interval reward is realized;
/// a partial interval is forfeited. The checkpoint resets either way.
///
/// # Errors
/// * `InvalidAmount` - `amount <= 0` or `amount` exceeds the balance
pub fn withdraw(
    e: &Env,
    participant: &Address,
    amount: i128,
    now: u64,
    params: &Parameters,
) -> Result<(FlexibleStake, i128), ContractError> {
    let mut stake = load(e, participant);
    if amount <= 0 || amount > stake.amount {
        return Err(ContractError::InvalidAmount);
    }
    let reward = accrued(&stake, now, params)?;

    checkpoint(&mut stake, now);
    stake.amount -= amount;

    save(e, participant, &stake);
    totals::adjust(e, 0, 0, -amount)?;
    Ok((stake, reward))
}

/// Realize the whole-interval reward without touching the balance.
///
/// # Errors
/// * `NoStake` - balance is zero
/// * `TooEarly` - less than one interval since the checkpoint
/// * `NothingToClaim` - the reward rounds down to zero
pub fn claim(
    e: &Env,
    participant: &Address,
    now: u64,
    params: &Parameters,
) -> Result<(FlexibleStake, i128), ContractError> {
    let mut stake = load(e, participant);
    if stake.amount == 0 {
        return Err(ContractError::NoStake);
    }
    if now.saturating_sub(stake.last_settle_time) < params.flexible_interval_secs {
        return Err(ContractError::TooEarly);
    }
    let reward = accrued(&stake, now, params)?;
    if reward == 0 {
        return Err(ContractError::NothingToClaim);
    }

    checkpoint(&mut stake, now);
    save(e, participant, &stake);
    Ok((stake, reward))
}
