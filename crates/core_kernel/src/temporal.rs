//! Policy dates and vehicle age
//!
//! The rating tables are keyed on the vehicle's age at renewal, expressed as
//! fractional years: days between registration and renewal divided by 365.

use chrono::{Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Days per rating year. Leap days are not special-cased.
pub const DAYS_PER_RATING_YEAR: i64 = 365;

/// Errors related to policy dates
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Registration date {registration} is after renewal date {renewal}")]
    RegistrationAfterRenewal {
        registration: NaiveDate,
        renewal: NaiveDate,
    },

    #[error("Date out of supported range: {0}")]
    OutOfRange(NaiveDate),
}

/// Vehicle age in fractional years
///
/// Never negative: the only constructor from dates rejects a registration
/// date after the renewal date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleAge(Decimal);

impl VehicleAge {
    /// A brand-new vehicle
    pub const NEW: VehicleAge = VehicleAge(Decimal::ZERO);

    /// Computes the age from registration to renewal
    pub fn between(registration: NaiveDate, renewal: NaiveDate) -> Result<Self, TemporalError> {
        if registration > renewal {
            return Err(TemporalError::RegistrationAfterRenewal { registration, renewal });
        }
        let days = (renewal - registration).num_days();
        Ok(Self(Decimal::from(days) / Decimal::from(DAYS_PER_RATING_YEAR)))
    }

    /// Creates an age directly from years, clamping negatives to zero
    pub fn from_years(years: Decimal) -> Self {
        Self(years.max(Decimal::ZERO))
    }

    /// Returns the age in years
    pub fn years(&self) -> Decimal {
        self.0
    }

    /// Returns true if the age is strictly below `years`
    pub fn is_under(&self, years: Decimal) -> bool {
        self.0 < years
    }
}

impl fmt::Display for VehicleAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years", self.0.round_dp(2).normalize())
    }
}

/// Registration and renewal dates of a policy
///
/// Registration is never after renewal. Deserialization goes through the
/// same check as `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedPolicyDates")]
pub struct PolicyDates {
    registration: NaiveDate,
    renewal: NaiveDate,
}

#[derive(Deserialize)]
struct UncheckedPolicyDates {
    registration: NaiveDate,
    renewal: NaiveDate,
}

impl TryFrom<UncheckedPolicyDates> for PolicyDates {
    type Error = TemporalError;

    fn try_from(dates: UncheckedPolicyDates) -> Result<Self, Self::Error> {
        Self::new(dates.registration, dates.renewal)
    }
}

impl PolicyDates {
    /// Pairs a registration and a renewal date
    ///
    /// # Errors
    ///
    /// Returns `RegistrationAfterRenewal` if the dates are out of order.
    pub fn new(registration: NaiveDate, renewal: NaiveDate) -> Result<Self, TemporalError> {
        if registration > renewal {
            return Err(TemporalError::RegistrationAfterRenewal { registration, renewal });
        }
        Ok(Self { registration, renewal })
    }

    /// Resolves possibly-missing dates
    ///
    /// A missing renewal date is the day after `today`; a missing
    /// registration date is one calendar year before renewal (Feb 29 falls
    /// back to Feb 28).
    ///
    /// # Errors
    ///
    /// Returns `RegistrationAfterRenewal` if the dates are out of order, or
    /// `OutOfRange` if a default cannot be represented.
    pub fn resolve(
        registration: Option<NaiveDate>,
        renewal: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, TemporalError> {
        let renewal = match renewal {
            Some(date) => date,
            None => today
                .checked_add_signed(Duration::days(1))
                .ok_or(TemporalError::OutOfRange(today))?,
        };
        let registration = match registration {
            Some(date) => date,
            None => renewal
                .checked_sub_months(Months::new(12))
                .ok_or(TemporalError::OutOfRange(renewal))?,
        };

        Self::new(registration, renewal)
    }

    pub fn registration(&self) -> NaiveDate {
        self.registration
    }

    pub fn renewal(&self) -> NaiveDate {
        self.renewal
    }

    /// Age of the vehicle at renewal
    pub fn vehicle_age(&self) -> VehicleAge {
        let days = (self.renewal - self.registration).num_days();
        VehicleAge(Decimal::from(days) / Decimal::from(DAYS_PER_RATING_YEAR))
    }
}
