//! SwineStake Contract
//!
//! Two ways to stake one asset and earn another:
//!
//! - **Fixed stakes** lock principal for `fixed_lock_secs` at a reward quoted
//!   once at open time. The quoted reward is minted as promise tokens and
//!   burned again when the stake is closed and paid.
//! - **Flexible stakes** keep one running balance per participant that can be
//!   topped up or drawn down at any time. Yield is realized per whole
//!   `flexible_interval_secs`; partial intervals are forfeited.
//!
//! ## Key design decisions
//!
//! - **Checks-Effects-Interactions**: ledger state is written *before*
//!   collaborator calls.
//! - **All-or-nothing**: collaborator calls use `try_*` clients and map any
//!   failure to `ExternalTransferFailed`; the returned error aborts the
//!   invocation and discards the earlier ledger writes.
//! - **Owner capability**: admin paths obtain an `OwnerCap` via
//!   `access_control::require_owner` and pass it down.
//! - **Auth-gated mutations**: `participant.require_auth()` on every stake call.

#![no_std]

pub mod access_control;
mod events;
pub mod fixed_stake;
pub mod flexible_stake;
pub mod parameters;
pub mod rewards;
mod settlement;
mod totals;
pub mod types;

pub use swine_errors::ContractError;
pub use types::{FixedStake, FlexibleStake, Parameters, Totals};

use access_control::require_owner;
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use types::DataKey;


#[cfg(test)]
mod test_rewards;






fn require_initialized(e: &Env) -> Result<(), ContractError> {
    if !e.storage().instance().has(&DataKey::Owner) {
        return Err(ContractError::NotInitialized);
    }
    Ok(())
}

#[contract]
pub struct SwineStake;

#[contractimpl]
impl SwineStake {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// `promise_token` must already name this contract as its minter.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `InvalidParameter` - a duration in `params` is zero
    pub fn initialize(
        e: Env,
        owner: Address,
        staking_token: Address,
        reward_token: Address,
        promise_token: Address,
        params: Parameters,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(ContractError::AlreadyInitialized);
        }
        parameters::validate(&params)?;

        let storage = e.storage().instance();
        storage.set(&DataKey::Owner, &owner);
        storage.set(&DataKey::StakingToken, &staking_token);
        storage.set(&DataKey::RewardToken, &reward_token);
        storage.set(&DataKey::PromiseToken, &promise_token);
        storage.set(&DataKey::NextStakeId, &1_u64);
        storage.set(&DataKey::Totals, &Totals::default());
        parameters::store(&e, &params);

        events::emit_initialized(&e, &owner, &params);
        Ok(())
    }

    /// Replace both yield rates. Owner only. Existing fixed stakes keep their quote.
    pub fn set_rates(
        e: Env,
        caller: Address,
        fixed_rate_bps: u32,
        flexible_rate_bps: u32,
    ) -> Result<Parameters, ContractError> {
        let cap = require_owner(&e, &caller)?;
        parameters::set_rates(&e, &cap, fixed_rate_bps, flexible_rate_bps)
    }

    /// Owner only. `secs == 0` fails with `InvalidParameter`.
    pub fn set_fixed_lock(e: Env, caller: Address, secs: u64) -> Result<Parameters, ContractError> {
        let cap = require_owner(&e, &caller)?;
        parameters::set_fixed_lock(&e, &cap, secs)
    }

    /// Owner only. `secs == 0` fails with `InvalidParameter`.
    pub fn set_flexible_interval(
        e: Env,
        caller: Address,
        secs: u64,
    ) -> Result<Parameters, ContractError> {
        let cap = require_owner(&e, &caller)?;
        parameters::set_flexible_interval(&e, &cap, secs)
    }

    /// Push `amount` of any `asset` held by this contract to `to`. Owner only.
    ///
    /// Independent of the stake ledgers; meant for recovering stray transfers.
    pub fn rescue(
        e: Env,
        caller: Address,
        asset: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        let cap = require_owner(&e, &caller)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        settlement::push_asset(&e, &asset, &to, amount)?;
        events::emit_rescued(&e, cap.owner(), &asset, &to, amount);
        Ok(())
    }

    /// Move `amount` of the reward asset from `funder` into the reward pool.
    pub fn fund_rewards(e: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        funder.require_auth();
        require_initialized(&e)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        settlement::pull_reward(&e, &funder, amount)?;
        events::emit_rewards_funded(&e, &funder, amount);
        Ok(())
    }

    // ── Fixed stakes ───────────────────────────────────────────────────────

    /// Lock `amount` for the current lock period at the current fixed rate.
    ///
    /// Sequence: quote reward, pull principal, record stake, mint promise tokens.
    /// Caller must have approved this contract to spend `amount`.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `ExternalTransferFailed` - principal pull or promise mint failed
    pub fn open_fixed_stake(
        e: Env,
        participant: Address,
        amount: i128,
    ) -> Result<u64, ContractError> {
        participant.require_auth();
        let params = parameters::load(&e)?;

        let reward = fixed_stake::quote(amount, &params)?;
        settlement::pull_stake(&e, &participant, amount)?;
        let stake = fixed_stake::record(&e, &participant, amount, reward, e.ledger().timestamp())?;
        settlement::mint_promise(&e, &participant, reward)?;

        events::emit_fixed_opened(&e, &stake);
        Ok(stake.id)
    }

    /// Unlock a matured fixed stake: burn its promise tokens, return the
    /// principal and pay the frozen reward.
    ///
    /// # Errors
    /// * `NotFound`, `NotOwner`, `AlreadyClosed`, `LockNotElapsed` - see
    ///   [`fixed_stake::close`]; no collaborator is called in these cases
    /// * `ExternalTransferFailed` - burn, principal return or reward payout
    ///   failed; the stake stays open
    pub fn close_fixed_stake(
        e: Env,
        participant: Address,
        stake_id: u64,
    ) -> Result<FixedStake, ContractError> {
        participant.require_auth();
        let params = parameters::load(&e)?;

        let stake = fixed_stake::close(
            &e,
            &participant,
            stake_id,
            e.ledger().timestamp(),
            params.fixed_lock_secs,
        )?;
        settlement::burn_promise(&e, &participant, stake.expected_reward)?;
        settlement::push_stake(&e, &participant, stake.amount)?;
        settlement::pay_reward(&e, &participant, stake.expected_reward)?;

        events::emit_fixed_closed(&e, &stake);
        Ok(stake)
    }

    // ── Flexible stakes ────────────────────────────────────────────────────

    /// Add `amount` to the flexible balance, first paying any whole-interval
    /// reward accrued on the existing balance. Returns the reward paid.
    pub fn deposit_flexible(e: Env, participant: Address, amount: i128) -> Result<i128, ContractError> {
        participant.require_auth();
        let params = parameters::load(&e)?;

        let (stake, reward) =
            flexible_stake::deposit(&e, &participant, amount, e.ledger().timestamp(), &params)?;
        settlement::pull_stake(&e, &participant, amount)?;
        settlement::pay_reward(&e, &participant, reward)?;

        events::emit_flex_deposit(&e, &participant, amount, reward, &stake);
        Ok(reward)
    }

    /// Withdraw `amount` from the flexible balance. Returns the reward paid,
    /// which is 0 when less than one interval has elapsed.
    pub fn withdraw_flexible(
        e: Env,
        participant: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        participant.require_auth();
        let params = parameters::load(&e)?;

        let (stake, reward) =
            flexible_stake::withdraw(&e, &participant, amount, e.ledger().timestamp(), &params)?;
        settlement::push_stake(&e, &participant, amount)?;
        settlement::pay_reward(&e, &participant, reward)?;

        events::emit_flex_withdraw(&e, &participant, amount, reward, &stake);
        Ok(reward)
    }

    /// Pay the whole-interval reward on the flexible balance.
    pub fn claim_flexible(e: Env, participant: Address) -> Result<i128, ContractError> {
        participant.require_auth();
        let params = parameters::load(&e)?;

        let (stake, reward) =
            flexible_stake::claim(&e, &participant, e.ledger().timestamp(), &params)?;
        settlement::pay_reward(&e, &participant, reward)?;

        events::emit_flex_claim(&e, &participant, reward, &stake);
        Ok(reward)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn owner(e: Env) -> Result<Address, ContractError> {
        access_control::get_owner(&e)
    }

    pub fn get_parameters(e: Env) -> Result<Parameters, ContractError> {
        parameters::load(&e)
    }

    pub fn get_fixed_stake(e: Env, stake_id: u64) -> Result<FixedStake, ContractError> {
        fixed_stake::load(&e, stake_id)
    }

    /// Every fixed-stake id `participant` has opened, closed ones included.
    ///
    /// Reads the whole index; use `get_stake_id_page` for long histories.
    pub fn get_stake_ids(e: Env, participant: Address) -> Vec<u64> {
        fixed_stake::stake_ids(&e, &participant)
    }

    /// One page of `participant`'s fixed-stake ids (`fixed_stake::IDS_PER_PAGE` per page).
    pub fn get_stake_id_page(e: Env, participant: Address, page: u32) -> Vec<u64> {
        fixed_stake::stake_id_page(&e, &participant, page)
    }

    pub fn get_stake_count(e: Env, participant: Address) -> u32 {
        fixed_stake::stake_count(&e, &participant)
    }

    pub fn get_flexible_stake(e: Env, participant: Address) -> FlexibleStake {
        flexible_stake::load(&e, &participant)
    }

    /// Reward a claim would pay right now (0 inside the first interval).
    pub fn pending_flexible_reward(e: Env, participant: Address) -> Result<i128, ContractError> {
        let params = parameters::load(&e)?;
        flexible_stake::pending(&e, &participant, e.ledger().timestamp(), &params)
    }

    /// Reward a new fixed stake of `amount` would be frozen with.
    pub fn quote_fixed_reward(e: Env, amount: i128) -> Result<i128, ContractError> {
        fixed_stake::quote(amount, &parameters::load(&e)?)
    }

    /// Timestamp from which `stake_id` may be closed under the current lock period.
    pub fn fixed_unlock_time(e: Env, stake_id: u64) -> Result<u64, ContractError> {
        let params = parameters::load(&e)?;
        let stake = fixed_stake::load(&e, stake_id)?;
        Ok(fixed_stake::unlock_time(&stake, params.fixed_lock_secs))
    }

    /// true if `stake_id` is open and its lock period has elapsed.
    pub fn is_unlockable(e: Env, stake_id: u64) -> Result<bool, ContractError> {
        let params = parameters::load(&e)?;
        let stake = fixed_stake::load(&e, stake_id)?;
        Ok(!stake.closed
            && e.ledger().timestamp() >= fixed_stake::unlock_time(&stake, params.fixed_lock_secs))
    }

    pub fn next_stake_id(e: Env) -> u64 {
        fixed_stake::next_id(&e)
    }

    pub fn get_totals(e: Env) -> Totals {
        totals::load(&e)
    }

    /// Promise tokens currently held by `participant`.
    pub fn promise_balance(e: Env, participant: Address) -> Result<i128, ContractError> {
        settlement::promise_balance(&e, &participant)
    }

    /// Reward asset available to pay out, excluding staked principal when the
    /// two assets are the same contract.
    pub fn reward_pool_balance(e: Env) -> Result<i128, ContractError> {
        settlement::reward_pool_balance(&e)
    }
}
