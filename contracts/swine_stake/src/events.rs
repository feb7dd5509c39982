use crate::types::{FixedStake, FlexibleStake, Parameters};
use soroban_sdk::{Address, Env, Symbol};

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "initialized"
/// * `Address` - The owner
///
/// # Data
/// * `(u32, u32, u64, u64)` - fixed rate, flexible rate, fixed lock, flexible interval
pub fn emit_initialized(e: &Env, owner: &Address, params: &Parameters) {
    let topics = (Symbol::new(e, "initialized"), owner.clone());
    let data = (
        params.fixed_rate_bps,
        params.flexible_rate_bps,
        params.fixed_lock_secs,
        params.flexible_interval_secs,
    );
    e.events().publish(topics, data);
}

/// Emitted when a fixed stake is opened.
///
/// # Topics
/// * `Symbol` - "fixed_opened"
/// * `Address` - The participant
///
/// # Data
/// * `u64` - Stake id
/// * `i128` - Locked principal
/// * `i128` - Frozen expected reward (also the promise tokens minted)
/// * `u64` - Start time
pub fn emit_fixed_opened(e: &Env, stake: &FixedStake) {
    let topics = (Symbol::new(e, "fixed_opened"), stake.owner.clone());
    let data = (
        stake.id,
        stake.amount,
        stake.expected_reward,
        stake.start_time,
    );
    e.events().publish(topics, data);
}

/// Emitted when a fixed stake is unlocked and settled.
///
/// # Topics
/// * `Symbol` - "fixed_closed"
/// * `Address` - The participant
///
/// # Data
/// * `u64` - Stake id
/// * `i128` - Principal returned
/// * `i128` - Reward paid (also the promise tokens burned)
/// * `u64` - Close time
pub fn emit_fixed_closed(e: &Env, stake: &FixedStake) {
    let topics = (Symbol::new(e, "fixed_closed"), stake.owner.clone());
    let data = (
        stake.id,
        stake.amount,
        stake.expected_reward,
        e.ledger().timestamp(),
    );
    e.events().publish(topics, data);
}

/// Emitted on a flexible deposit.
///
/// # Topics
/// * `Symbol` - "flex_deposit"
/// * `Address` - The participant
///
/// # Data
/// * `i128` - Deposited amount
/// * `i128` - Reward realized and paid before the deposit
/// * `i128` - Resulting balance
/// * `u64` - Resulting reward checkpoint
pub fn emit_flex_deposit(e: &Env, participant: &Address, amount: i128, reward: i128, stake: &FlexibleStake) {
    let topics = (Symbol::new(e, "flex_deposit"), participant.clone());
    let data = (amount, reward, stake.amount, stake.last_settle_time);
    e.events().publish(topics, data);
}

/// Emitted on a flexible withdrawal.
///
/// # Data
/// * `i128` - Withdrawn amount
/// * `i128` - Reward paid (0 when the interval was not complete)
/// * `i128` - Resulting balance
/// * `u64` - Resulting reward checkpoint
pub fn emit_flex_withdraw(
    e: &Env,
    participant: &Address,
    amount: i128,
    reward: i128,
    stake: &FlexibleStake,
) {
    let topics = (Symbol::new(e, "flex_withdraw"), participant.clone());
    let data = (amount, reward, stake.amount, stake.last_settle_time);
    e.events().publish(topics, data);
}

/// Emitted on an explicit flexible claim. Data: reward, balance, checkpoint.
pub fn emit_flex_claim(e: &Env, participant: &Address, reward: i128, stake: &FlexibleStake) {
    let topics = (Symbol::new(e, "flex_claim"), participant.clone());
    e.events()
        .publish(topics, (reward, stake.amount, stake.last_settle_time));
}

/// Emitted when either yield rate changes.
///
/// # Data
/// * `(u32, u32)` - old fixed / flexible rate
/// * `(u32, u32)` - new fixed / flexible rate
pub fn emit_rates_changed(e: &Env, owner: &Address, old: (u32, u32), new: (u32, u32)) {
    let topics = (Symbol::new(e, "rates_changed"), owner.clone());
    e.events().publish(topics, (old, new));
}

pub fn emit_fixed_lock_changed(e: &Env, owner: &Address, old: u64, new: u64) {
    let topics = (Symbol::new(e, "fixed_lock_changed"), owner.clone());
    e.events().publish(topics, (old, new));
}

pub fn emit_flex_interval_changed(e: &Env, owner: &Address, old: u64, new: u64) {
    let topics = (Symbol::new(e, "flex_interval_changed"), owner.clone());
    e.events().publish(topics, (old, new));
}

pub fn emit_rewards_funded(e: &Env, funder: &Address, amount: i128) {
    let topics = (Symbol::new(e, "rewards_funded"), funder.clone());
    e.events().publish(topics, amount);
}

/// Emitted by the owner-only rescue path.
///
/// # Data
/// * `Address` - Asset contract
/// * `Address` - Recipient
/// * `i128` - Amount pushed out
pub fn emit_rescued(e: &Env, owner: &Address, asset: &Address, to: &Address, amount: i128) {
    let topics = (Symbol::new(e, "rescued"), owner.clone());
    e.events()
        .publish(topics, (asset.clone(), to.clone(), amount));
}
