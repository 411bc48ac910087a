//! Rating domain errors
//!
//! The calculation itself cannot fail. Every error here comes from
//! normalizing a quote request or from reading back a rendered statement.

use core_kernel::{CoreError, MoneyError, TemporalError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur within the rating domain
#[derive(Debug, Error)]
pub enum RatingError {
    /// Kernel-level failure (dates, money parsing)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An amount or weight that must not be negative was negative
    #[error("Negative amount for {field}: {value}")]
    NegativeAmount {
        field: String,
        value: Decimal,
    },

    /// An amount or weight above `MAX_AMOUNT`, alone or once rows are summed
    #[error("Amount for {field} exceeds the supported maximum: {value}")]
    AmountTooLarge {
        field: String,
        value: Decimal,
    },

    /// A user-supplied percent outside 0..=100
    #[error("Percent for {field} must be between 0 and 100, got {value}")]
    PercentOutOfRange {
        field: String,
        value: Decimal,
    },

    /// A rendered statement could not be read back
    #[error("Malformed statement at line {line}: {reason}")]
    MalformedStatement {
        line: usize,
        reason: String,
    },
}

impl RatingError {
    /// Creates a negative amount error
    pub fn negative_amount(field: impl Into<String>, value: Decimal) -> Self {
        RatingError::NegativeAmount {
            field: field.into(),
            value,
        }
    }

    /// Creates an amount ceiling error
    pub fn amount_too_large(field: impl Into<String>, value: Decimal) -> Self {
        RatingError::AmountTooLarge {
            field: field.into(),
            value,
        }
    }

    /// Creates a percent range error
    pub fn percent_out_of_range(field: impl Into<String>, value: Decimal) -> Self {
        RatingError::PercentOutOfRange {
            field: field.into(),
            value,
        }
    }

    /// Creates a statement parse error
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        RatingError::MalformedStatement {
            line,
            reason: reason.into(),
        }
    }
}

impl From<TemporalError> for RatingError {
    fn from(err: TemporalError) -> Self {
        RatingError::Core(CoreError::Temporal(err))
    }
}

impl From<MoneyError> for RatingError {
    fn from(err: MoneyError) -> Self {
        RatingError::Core(CoreError::Money(err))
    }
}
