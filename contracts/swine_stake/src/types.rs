use soroban_sdk::{contracttype, Address};

// ─── Parameters ────────────────────────────────────────────────────────────

/// Owner-mutable yield and timing configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameters {
    /// Annual yield for new fixed stakes, in basis points (10_000 = 100 %).
    pub fixed_rate_bps: u32,
    /// Annual yield for flexible balances, in basis points.
    pub flexible_rate_bps: u32,
    /// Lock period a fixed stake must wait before it can be closed.
    pub fixed_lock_secs: u64,
    /// Length of one flexible reward interval.
    pub flexible_interval_secs: u64,
}

// ─── Stake state ───────────────────────────────────────────────────────────

/// A single locked position with a reward quoted at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedStake {
    /// Unique, never-reused identifier.
    pub id: u64,
    /// The address that opened the stake.
    pub owner: Address,
    /// Locked principal.
    pub amount: i128,
    /// Ledger timestamp at creation.
    pub start_time: u64,
    /// Reward frozen at creation; later rate changes do not touch it.
    pub expected_reward: i128,
    /// true once the stake has been unlocked. Terminal.
    pub closed: bool,
}

/// Running flexible balance of one participant.
///
/// A zeroed record is also what `get_flexible_stake` returns for an address
/// that never staked.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FlexibleStake {
    pub amount: i128,
    /// Last reward checkpoint. Never moves backwards.
    pub last_settle_time: u64,
}

/// Aggregate accounting across all participants.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    /// Principal held for open fixed stakes.
    pub fixed_locked: i128,
    /// Sum of `expected_reward` over open fixed stakes.
    pub fixed_promised: i128,
    /// Sum of all flexible balances.
    pub flexible_staked: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract owner address.
    Owner,
    /// Asset pulled in as principal.
    StakingToken,
    /// Asset paid out as reward.
    RewardToken,
    /// Receipt ledger minted for open fixed stakes.
    PromiseToken,
    /// Current `Parameters`.
    Params,
    /// Next fixed-stake id to hand out.
    NextStakeId,
    /// Aggregate `Totals`.
    Totals,
    /// Fixed stake by id. Stored in `persistent()`.
    FixedStake(u64),
    /// Number of fixed stakes a participant has opened. Stored in `persistent()`.
    StakeCount(Address),
    /// One page of a participant's fixed-stake ids. Stored in `persistent()`.
    StakeIdPage(Address, u32),
    /// Flexible balance by participant. Stored in `persistent()`.
    Flexible(Address),
}

/// Minimum ledger TTL before a persistent entry is bumped (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;
