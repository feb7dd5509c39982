//! Collaborator calls made by the staking contract.
//!
//! Every call goes through the fallible `try_*` client method and any failure
//! becomes `ExternalTransferFailed`. Returning that error from a contract
//! entry point aborts the invocation, so ledger writes made earlier in the
//! same call are discarded together with the failed transfer.

use crate::totals;
use crate::types::DataKey;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contractclient, Address, Env};
use swine_errors::ContractError;

/// Interface of the promise-token receipt ledger, as far as this contract uses it.
#[contractclient(name = "PromiseTokenClient")]
pub trait PromiseTokenInterface {
    fn mint(e: Env, to: Address, amount: i128) -> Result<(), ContractError>;
    fn burn(e: Env, from: Address, amount: i128) -> Result<(), ContractError>;
    fn balance(e: Env, id: Address) -> i128;
}

fn stored_address(e: &Env, key: DataKey) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&key)
        .ok_or(ContractError::NotInitialized)
}

pub fn staking_token(e: &Env) -> Result<Address, ContractError> {
    stored_address(e, DataKey::StakingToken)
}

pub fn reward_token(e: &Env) -> Result<Address, ContractError> {
    stored_address(e, DataKey::RewardToken)
}

pub fn promise_token(e: &Env) -> Result<Address, ContractError> {
    stored_address(e, DataKey::PromiseToken)
}

fn push(e: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    match TokenClient::new(e, asset).try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::ExternalTransferFailed),
    }
}

fn pull(e: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    match TokenClient::new(e, asset).try_transfer_from(&contract, from, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::ExternalTransferFailed),
    }
}

/// Pull principal from `from` (requires a prior allowance to this contract).
pub fn pull_stake(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    pull(e, &staking_token(e)?, from, amount)
}

/// Return principal held by this contract.
pub fn push_stake(e: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    push(e, &staking_token(e)?, to, amount)
}

/// Pay a reward out of the reward pool.
///
/// Fails with `ExternalTransferFailed` when the pool cannot cover `amount`,
/// so principal held for other participants is never paid out as reward.
/// Ledger totals must already reflect the current operation.
pub fn pay_reward(e: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    if amount > reward_pool_balance(e)? {
        return Err(ContractError::ExternalTransferFailed);
    }
    push(e, &reward_token(e)?, to, amount)
}

/// Top up the reward pool from `from` (requires a prior allowance).
pub fn pull_reward(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    pull(e, &reward_token(e)?, from, amount)
}

/// Push an arbitrary asset out of the contract. Used by the rescue path only.
pub fn push_asset(e: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    push(e, asset, to, amount)
}

pub fn mint_promise(e: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    match PromiseTokenClient::new(e, &promise_token(e)?).try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::ExternalTransferFailed),
    }
}

pub fn burn_promise(e: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    match PromiseTokenClient::new(e, &promise_token(e)?).try_burn(from, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::ExternalTransferFailed),
    }
}

pub fn promise_balance(e: &Env, id: &Address) -> Result<i128, ContractError> {
    match PromiseTokenClient::new(e, &promise_token(e)?).try_balance(id) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(ContractError::ExternalTransferFailed),
    }
}

/// Reward-asset balance available for payouts.
///
/// When the reward and staking assets are the same contract, principal held
/// for stakers is excluded.
pub fn reward_pool_balance(e: &Env) -> Result<i128, ContractError> {
    let reward = reward_token(e)?;
    let held = match TokenClient::new(e, &reward).try_balance(&e.current_contract_address()) {
        Ok(Ok(balance)) => balance,
        _ => return Err(ContractError::ExternalTransferFailed),
    };
    if reward == staking_token(e)? {
        Ok(held.saturating_sub(totals::staked_principal(e)?).max(0))
    } else {
        Ok(held)
    }
}
