//! Tests for the reward math.

#![cfg(test)]

use crate::rewards::*;
use swine_errors::ContractError;

#[test]
fn test_fixed_reward_thirty_days_at_thirty_percent() {
    // annual = 1000 * 3000 / 10000 = 300; 300 * 2592000 / 31536000 = 24.65 -> 24
    assert_eq!(fixed_reward(1_000, 3_000, 2_592_000), Ok(24));
}

#[test]
fn test_fixed_reward_truncates_at_each_step() {
    // Single combined fraction: 999 * 3000 * 2592000 / (10000 * 31536000) = 24.63 -> 24.
    // Stepwise: floor(999 * 3000 / 10000) = 299; 299 * 2592000 / 31536000 = 24.57 -> 24.
    assert_eq!(fixed_reward(999, 3_000, 2_592_000), Ok(24));
    // amount 3: combined = 0.0739 -> 0; stepwise annual = floor(0.9) = 0.
    assert_eq!(fixed_reward(3, 3_000, SECONDS_PER_YEAR), Ok(0));
    // amount 4 at 30 % for one year: combined and stepwise both 1.2 -> 1.
    assert_eq!(fixed_reward(4, 3_000, SECONDS_PER_YEAR), Ok(1));
    // Orders differ here: stepwise floor(1.95) = 1 -> 2; combined 3.9 -> 3.
    assert_eq!(fixed_reward(13, 1_500, 2 * SECONDS_PER_YEAR), Ok(2));
}

#[test]
fn test_fixed_reward_zero_inputs() {
    assert_eq!(fixed_reward(0, 3_000, 2_592_000), Ok(0));
    assert_eq!(fixed_reward(1_000_000, 0, 2_592_000), Ok(0));
    assert_eq!(fixed_reward(1_000_000, 3_000, 0), Ok(0));
}

#[test]
fn test_fixed_reward_full_year_equals_annual() {
    assert_eq!(fixed_reward(1_000_000, 1_000, SECONDS_PER_YEAR), Ok(100_000));
}

#[test]
fn test_fixed_reward_monotonic_in_each_argument() {
    let mut prev = 0;
    for amount in [1_i128, 10, 333, 1_000, 12_345, 1_000_000] {
        let r = fixed_reward(amount, 2_500, 2_592_000).unwrap();
        assert!(r >= prev);
        prev = r;
    }
    prev = 0;
    for rate in [0_u32, 1, 50, 500, 3_000, 10_000, 50_000] {
        let r = fixed_reward(1_000_000, rate, 2_592_000).unwrap();
        assert!(r >= prev);
        prev = r;
    }
    prev = 0;
    for lock in [0_u64, 1, 3_600, 86_400, 2_592_000, SECONDS_PER_YEAR] {
        let r = fixed_reward(1_000_000, 3_000, lock).unwrap();
        assert!(r >= prev);
        prev = r;
    }
}

#[test]
fn test_fixed_reward_negative_amount_rejected() {
    assert_eq!(fixed_reward(-1, 3_000, 100), Err(ContractError::InvalidAmount));
}

#[test]
fn test_fixed_reward_overflow() {
    assert_eq!(
        fixed_reward(i128::MAX, 3_000, 1),
        Err(ContractError::ArithmeticOverflow)
    );
    assert_eq!(
        fixed_reward(i128::MAX / 10_000, 10_000, u64::MAX),
        Err(ContractError::ArithmeticOverflow)
    );
}

#[test]
fn test_flexible_reward_two_intervals() {
    let amount = 1_000_000_000_i128;
    let per = per_interval_reward(amount, 1_000, 21_600).unwrap();
    // 1e9 * 1000 * 21600 / (10000 * 31536000) = 68493.15 -> 68493
    assert_eq!(per, 68_493);
    assert_eq!(flexible_reward(amount, 1_000, 21_600, 43_200), Ok(2 * per));
}

#[test]
fn test_flexible_reward_small_amount_rounds_to_zero() {
    // 10000 * 1000 * 21600 / 315360000000 = 0.68 -> 0
    assert_eq!(flexible_reward(10_000, 1_000, 21_600, 43_200), Ok(0));
}

#[test]
fn test_flexible_reward_partial_interval_is_zero() {
    assert_eq!(flexible_reward(1_000_000_000, 1_000, 21_600, 21_599), Ok(0));
    assert_eq!(flexible_reward(1_000_000_000, 1_000, 21_600, 0), Ok(0));
}

#[test]
fn test_flexible_reward_ignores_remainder() {
    let full = flexible_reward(1_000_000_000, 1_000, 21_600, 43_200).unwrap();
    let with_remainder = flexible_reward(1_000_000_000, 1_000, 21_600, 43_200 + 21_599).unwrap();
    assert_eq!(full, with_remainder);
}

#[test]
fn test_flexible_reward_zero_interval_rejected() {
    assert_eq!(
        flexible_reward(1_000, 1_000, 0, 100),
        Err(ContractError::InvalidParameter)
    );
}

#[test]
fn test_flexible_reward_overflow() {
    assert_eq!(
        flexible_reward(i128::MAX / 2, 10_000, 21_600, 21_600),
        Err(ContractError::ArithmeticOverflow)
    );
}

#[test]
fn test_whole_intervals() {
    assert_eq!(whole_intervals(0, 10), Ok(0));
    assert_eq!(whole_intervals(9, 10), Ok(0));
    assert_eq!(whole_intervals(10, 10), Ok(1));
    assert_eq!(whole_intervals(35, 10), Ok(3));
}
