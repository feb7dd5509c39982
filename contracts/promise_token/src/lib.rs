//! Promise Token Contract
//!
//! Receipt ledger for rewards that a fixed stake has been promised but not yet
//! paid. The staking contract is the only minter: it mints the quoted reward
//! when a fixed stake opens and burns the same amount when the stake closes.
//!
//! ## Key design decisions
//!
//! - **Non-transferable**: there is no `transfer` entry point; balances move
//!   only through `mint` and `burn`.
//! - **Single minter**: `minter.require_auth()` on every mutation.
//! - **Checked supply**: balance and supply updates fail with
//!   `ArithmeticOverflow` instead of wrapping.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Symbol};
pub use swine_errors::ContractError;


/// Minimum ledger TTL before a balance entry is bumped (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[contracttype]
pub enum DataKey {
    /// The only address allowed to mint and burn.
    Minter,
    Metadata,
    TotalSupply,
    /// Per-holder receipt balance. Stored in `persistent()`.
    Balance(Address),
}

fn read_minter(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Minter)
        .ok_or(ContractError::NotInitialized)
}

fn require_minter(e: &Env) -> Result<Address, ContractError> {
    let minter = read_minter(e)?;
    minter.require_auth();
    Ok(minter)
}

fn read_balance(e: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, i128>(&key) {
        Some(balance) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    let storage = e.storage().persistent();
    storage.set(&key, &balance);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn read_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

#[contract]
pub struct PromiseToken;

#[contractimpl]
impl PromiseToken {
    /// One-time setup. `minter` is normally the staking contract address.
    pub fn initialize(
        e: Env,
        minter: Address,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Minter) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Minter, &minter);
        e.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        e.storage().instance().set(&DataKey::TotalSupply, &0_i128);
        Ok(())
    }

    /// Mint `amount` receipts to `to`. Minter only.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `ArithmeticOverflow` - balance or supply would overflow
    pub fn mint(e: Env, to: Address, amount: i128) -> Result<(), ContractError> {
        let minter = require_minter(&e)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let balance = read_balance(&e, &to)
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let supply = read_supply(&e)
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        write_balance(&e, &to, balance);
        e.storage().instance().set(&DataKey::TotalSupply, &supply);

        e.events()
            .publish((Symbol::new(&e, "mint"), minter, to), (amount, balance));
        Ok(())
    }

    /// Burn `amount` receipts held by `from`. Minter only.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `InsufficientBalance` - `from` holds fewer than `amount` receipts
    pub fn burn(e: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        let minter = require_minter(&e)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let balance = read_balance(&e, &from);
        if balance < amount {
            return Err(ContractError::InsufficientBalance);
        }
        let remaining = balance - amount;
        let supply = read_supply(&e)
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        write_balance(&e, &from, remaining);
        e.storage().instance().set(&DataKey::TotalSupply, &supply);

        e.events()
            .publish((Symbol::new(&e, "burn"), minter, from), (amount, remaining));
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn total_supply(e: Env) -> i128 {
        read_supply(&e)
    }

    pub fn minter(e: Env) -> Result<Address, ContractError> {
        read_minter(&e)
    }

    pub fn name(e: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, ContractError> {
        Ok(Self::metadata(&e)?.symbol)
    }

    pub fn decimals(e: Env) -> Result<u32, ContractError> {
        Ok(Self::metadata(&e)?.decimals)
    }
}

impl PromiseToken {
    fn metadata(e: &Env) -> Result<TokenMetadata, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(ContractError::NotInitialized)
    }
}
