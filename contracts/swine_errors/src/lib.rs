#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain handling.
/// @dev    Consumers should switch on this value first, then on the
///         specific `ContractError` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller identity errors (codes 100-199).
    Authorization,
    /// Fixed and flexible stake lifecycle errors (codes 200-299).
    Stake,
    /// Promise-token receipt errors (codes 300-399).
    Receipt,
    /// Collaborator call errors (codes 400-499).
    Settlement,
    /// Checked-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by the staking core and the promise token.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Stake
///   300 - 399 : Receipt
///   400 - 499 : Settlement
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the contract owner, or not the owner of the referenced stake.
    NotOwner = 100,

    // --- Stake (200-299) ---
    /// Amount is zero, negative, or larger than the available balance.
    InvalidAmount = 200,

    /// A duration parameter is zero.
    InvalidParameter = 201,

    /// No fixed stake exists for the given id.
    NotFound = 202,

    /// Participant has no flexible balance.
    NoStake = 203,

    /// Fixed stake has already been closed.
    AlreadyClosed = 204,

    /// Fixed stake lock period has not elapsed.
    LockNotElapsed = 205,

    /// Less than one full reward interval has elapsed since the last checkpoint.
    TooEarly = 206,

    /// Computed reward is zero.
    NothingToClaim = 207,

    // --- Receipt (300-399) ---
    /// Receipt balance is smaller than the requested burn.
    InsufficientBalance = 300,

    // --- Settlement (400-499) ---
    /// A token or receipt collaborator call did not succeed.
    ExternalTransferFailed = 400,

    // --- Arithmetic (700-799) ---
    /// Checked arithmetic overflowed.
    ArithmeticOverflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            ContractError::NotOwner => ErrorCategory::Authorization,

            ContractError::InvalidAmount
            | ContractError::InvalidParameter
            | ContractError::NotFound
            | ContractError::NoStake
            | ContractError::AlreadyClosed
            | ContractError::LockNotElapsed
            | ContractError::TooEarly
            | ContractError::NothingToClaim => ErrorCategory::Stake,

            ContractError::InsufficientBalance => ErrorCategory::Receipt,
            ContractError::ExternalTransferFailed => ErrorCategory::Settlement,
            ContractError::ArithmeticOverflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotOwner => "Caller is not the owner",
            ContractError::InvalidAmount => "Amount is zero, negative or exceeds the balance",
            ContractError::InvalidParameter => "Duration parameter must be greater than zero",
            ContractError::NotFound => "No fixed stake found for the given id",
            ContractError::NoStake => "No flexible stake for this participant",
            ContractError::AlreadyClosed => "Fixed stake has already been closed",
            ContractError::LockNotElapsed => "Lock period has not elapsed yet",
            ContractError::TooEarly => "A full reward interval has not elapsed yet",
            ContractError::NothingToClaim => "No reward is available to claim",
            ContractError::InsufficientBalance => "Receipt balance is smaller than the burn",
            ContractError::ExternalTransferFailed => "Collaborator call did not succeed",
            ContractError::ArithmeticOverflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
