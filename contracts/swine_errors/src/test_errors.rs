#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::NotOwner,
            ContractError::InvalidAmount,
            ContractError::InvalidParameter,
            ContractError::NotFound,
            ContractError::NoStake,
            ContractError::AlreadyClosed,
            ContractError::LockNotElapsed,
            ContractError::TooEarly,
            ContractError::NothingToClaim,
            ContractError::InsufficientBalance,
            ContractError::ExternalTransferFailed,
            ContractError::ArithmeticOverflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::NotOwner as u32, 100);
    }

    #[test]
    fn test_codes_stake() {
        assert_eq!(ContractError::InvalidAmount as u32, 200);
        assert_eq!(ContractError::InvalidParameter as u32, 201);
        assert_eq!(ContractError::NotFound as u32, 202);
        assert_eq!(ContractError::NoStake as u32, 203);
        assert_eq!(ContractError::AlreadyClosed as u32, 204);
        assert_eq!(ContractError::LockNotElapsed as u32, 205);
        assert_eq!(ContractError::TooEarly as u32, 206);
        assert_eq!(ContractError::NothingToClaim as u32, 207);
    }

    #[test]
    fn test_codes_receipt_settlement_arithmetic() {
        assert_eq!(ContractError::InsufficientBalance as u32, 300);
        assert_eq!(ContractError::ExternalTransferFailed as u32, 400);
        assert_eq!(ContractError::ArithmeticOverflow as u32, 700);
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_initialization() {
        assert_eq!(
            ContractError::NotInitialized.category(),
            ErrorCategory::Initialization
        );
        assert_eq!(
            ContractError::AlreadyInitialized.category(),
            ErrorCategory::Initialization
        );
    }

    #[test]
    fn test_category_stake() {
        for e in [
            ContractError::InvalidAmount,
            ContractError::InvalidParameter,
            ContractError::NotFound,
            ContractError::NoStake,
            ContractError::AlreadyClosed,
            ContractError::LockNotElapsed,
            ContractError::TooEarly,
            ContractError::NothingToClaim,
        ] {
            assert_eq!(e.category(), ErrorCategory::Stake, "{:?}", e);
        }
    }

    #[test]
    fn test_category_singletons() {
        assert_eq!(
            ContractError::NotOwner.category(),
            ErrorCategory::Authorization
        );
        assert_eq!(
            ContractError::InsufficientBalance.category(),
            ErrorCategory::Receipt
        );
        assert_eq!(
            ContractError::ExternalTransferFailed.category(),
            ErrorCategory::Settlement
        );
        assert_eq!(
            ContractError::ArithmeticOverflow.category(),
            ErrorCategory::Arithmetic
        );
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty() {
        for e in all_variants() {
            assert!(!e.description().is_empty(), "{:?} has empty description", e);
        }
    }

    #[test]
    fn test_descriptions_unique() {
        let variants = all_variants();
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i].description(), variants[j].description());
            }
        }
    }

    #[test]
    fn test_all_variants_count() {
        assert_eq!(
            all_variants().len(),
            14,
            "Update all_variants() and this count when adding new errors"
        );
    }

    // --- Result integration (mirrors real call sites) ---

    fn mock_close(exists: bool, closed: bool) -> Result<(), ContractError> {
        if !exists {
            return Err(ContractError::NotFound);
        }
        if closed {
            return Err(ContractError::AlreadyClosed);
        }
        Ok(())
    }

    #[test]
    fn test_result_propagation() {
        assert_eq!(mock_close(false, false), Err(ContractError::NotFound));
        assert_eq!(mock_close(true, true), Err(ContractError::AlreadyClosed));
        assert_eq!(mock_close(true, false), Ok(()));
    }
}
