//! Fixed-Stake Ledger
//!
//! Each stake moves `Open -> Closed` exactly once. Records are never deleted;
//! a closed stake stays readable as history. There is no early exit and no
//! partial close.

use crate::rewards;
use crate::totals;
use crate::types::{DataKey, FixedStake, Parameters, BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{Address, Env, Vec};
use swine_errors::ContractError;

/// Reward a new stake of `amount` would be frozen with under `params`.
///
/// # Errors
/// * `InvalidAmount` - `amount <= 0`
pub fn quote(amount: i128, params: &Parameters) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    rewards::fixed_reward(amount, params.fixed_rate_bps, params.fixed_lock_secs)
}

/// Id the next opened stake will receive. Ids start at 1.
pub fn next_id(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::NextStakeId)
        .unwrap_or(1)
}

pub fn load(e: &Env, id: u64) -> Result<FixedStake, ContractError> {
    let key = DataKey::FixedStake(id);
    let storage = e.storage().persistent();
    let stake: FixedStake = storage.get(&key).ok_or(ContractError::NotFound)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(stake)
}

fn save(e: &Env, stake: &FixedStake) {
    let key = DataKey::FixedStake(stake.id);
    let storage = e.storage().persistent();
    storage.set(&key, stake);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Ids per index page. Keeps every persistent entry bounded no matter how
/// many stakes one participant opens.
pub const IDS_PER_PAGE: u32 = 32;

/// Number of stakes `owner` has opened, closed ones included.
pub fn stake_count(e: &Env, owner: &Address) -> u32 {
    let key = DataKey::StakeCount(owner.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, u32>(&key) {
        Some(count) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            count
        }
        None => 0,
    }
}

/// Page `page` of `owner`'s stake ids, oldest first. Empty past the end.
pub fn stake_id_page(e: &Env, owner: &Address, page: u32) -> Vec<u64> {
    let key = DataKey::StakeIdPage(owner.clone(), page);
    let storage = e.storage().persistent();
    match storage.get::<_, Vec<u64>>(&key) {
        Some(ids) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            ids
        }
        None => Vec::new(e),
    }
}

/// Ids of every stake `owner` has opened, oldest first.
pub fn stake_ids(e: &Env, owner: &Address) -> Vec<u64> {
    let count = stake_count(e, owner);
    let mut ids = Vec::new(e);
    for page in 0..count.div_ceil(IDS_PER_PAGE) {
        ids.append(&stake_id_page(e, owner, page));
    }
    ids
}

fn index(e: &Env, owner: &Address, id: u64) -> Result<(), ContractError> {
    let count = stake_count(e, owner);
    let page = count / IDS_PER_PAGE;

    let mut ids = stake_id_page(e, owner, page);
    ids.push_back(id);
    let page_key = DataKey::StakeIdPage(owner.clone(), page);
    let count_key = DataKey::StakeCount(owner.clone());
    let following = count.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;

    let storage = e.storage().persistent();
    storage.set(&page_key, &ids);
    storage.extend_ttl(&page_key, BUMP_THRESHOLD, BUMP_TARGET);
    storage.set(&count_key, &following);
    storage.extend_ttl(&count_key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(())
}

/// Record a new open stake with an already-quoted reward.
///
/// Allocates the next id; the counter is never reset.
pub fn record(
    e: &Env,
    owner: &Address,
    amount: i128,
    expected_reward: i128,
    now: u64,
) -> Result<FixedStake, ContractError> {
    let id = next_id(e);
    let following = id.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;

    let stake = FixedStake {
        id,
        owner: owner.clone(),
        amount,
        start_time: now,
        expected_reward,
        closed: false,
    };

    totals::adjust(e, amount, expected_reward, 0)?;
    e.storage().instance().set(&DataKey::NextStakeId, &following);
    save(e, &stake);

    index(e, owner, id)?;
    Ok(stake)
}

/// Earliest timestamp at which `stake` may be closed.
pub fn unlock_time(stake: &FixedStake, lock_secs: u64) -> u64 {
    stake.start_time.saturating_add(lock_secs)
}

/// Validate and move a stake to `Closed`. Returns the closed record so the
/// caller can settle `amount` and `expected_reward`.
///
/// # Errors
/// * `NotFound` - no stake with `id`
/// * `NotOwner` - `caller` did not open it
/// * `AlreadyClosed` - already unlocked
/// * `LockNotElapsed` - `now < start_time + lock_secs`
pub fn close(
    e: &Env,
    caller: &Address,
    id: u64,
    now: u64,
    lock_secs: u64,
) -> Result<FixedStake, ContractError> {
    let mut stake = load(e, id)?;
    if stake.amount == 0 {
        return Err(ContractError::NotFound);
    }
    if stake.owner != *caller {
        return Err(ContractError::NotOwner);
    }
    if stake.closed {
        return Err(ContractError::AlreadyClosed);
    }
    if now < unlock_time(&stake, lock_secs) {
        return Err(ContractError::LockNotElapsed);
    }

    stake.closed = true;
    save(e, &stake);
    totals::adjust(e, -stake.amount, -stake.expected_reward, 0)?;

    Ok(stake)
}
