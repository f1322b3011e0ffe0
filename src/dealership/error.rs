//! Error types for dealership operations.

use thiserror::Error;

use crate::Amount;

/// Invalid argument passed to a constructor or setter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("balance cannot be negative: {0}")]
    NegativeBalance(Amount),

    #[error("price cannot be negative: {0}")]
    NegativePrice(Amount),

    #[error("amount cannot be negative: {0}")]
    NegativeAmount(Amount),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is out of range for an amount")]
    AmountOutOfRange(String),
}

/// Top-level error returned by [`Dealership::sell_car`](super::Dealership::sell_car)
/// and [`Buyer::decrease_balance`](super::Buyer::decrease_balance).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DealershipError {
    #[error("invalid argument: {0}")]
    Validation(#[from] ValidationError),

    #[error("You do not have enough funds to purchase this car (balance {balance}, required {required}).")]
    InsufficientFunds { balance: Amount, required: Amount },

    #[error("The selected car index {index} is out of available options ({available} available).")]
    OutOfRange { index: usize, available: usize },
}

impl DealershipError {
    /// Whether the caller can retry with different input.
    ///
    /// Validation failures point at a broken caller and are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DealershipError::InsufficientFunds { .. } | DealershipError::OutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_kinds() {
        let funds = DealershipError::InsufficientFunds {
            balance: Amount::from_whole(1),
            required: Amount::from_whole(2),
        };
        let range = DealershipError::OutOfRange {
            index: 5,
            available: 2,
        };
        let invalid = DealershipError::from(ValidationError::EmptyName);

        assert!(funds.is_recoverable());
        assert!(range.is_recoverable());
        assert!(!invalid.is_recoverable());
    }

    #[test]
    fn messages() {
        let range = DealershipError::OutOfRange {
            index: 5,
            available: 2,
        };
        assert_eq!(
            range.to_string(),
            "The selected car index 5 is out of available options (2 available)."
        );
        assert_eq!(
            ValidationError::NotANumber("abc".into()).to_string(),
            "'abc' is not a number"
        );
    }
}
