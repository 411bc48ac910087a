//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of rupee amounts using
//! rust_decimal, so premium chains stay exact from the first rate lookup to
//! the grand total. Amounts keep their full precision; rounding to paise or
//! whole rupees happens only when an amount is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Display prefix for rupee amounts
pub const RUPEE_PREFIX: &str = "Rs";

/// Number of decimal places in a displayed rupee amount (paise)
pub const PAISE_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Cannot parse amount from '{0}'")]
    Parse(String),
}

/// A rupee amount
///
/// The calculator works in a single currency, so Money carries no currency
/// code. Arithmetic is exact; `Display` rounds to paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Zero rupees
    pub const ZERO: Money = Money { amount: Decimal::ZERO };

    /// Creates a new Money value without rounding
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates Money from a whole number of rupees
    pub fn from_rupees(rupees: i64) -> Self {
        Self::new(Decimal::from(rupees))
    }

    /// Creates Money from paise (e.g., 10050 is Rs 100.50)
    pub fn from_paise(paise: i64) -> Self {
        Self::new(Decimal::new(paise, PAISE_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs())
    }

    /// Returns the amount, or zero if it is negative
    pub fn non_negative(&self) -> Self {
        if self.is_negative() {
            Self::ZERO
        } else {
            *self
        }
    }

    /// Caps the amount at `ceiling`
    pub fn at_most(&self, ceiling: Money) -> Self {
        if self.amount > ceiling.amount {
            ceiling
        } else {
            *self
        }
    }

    /// Adds two amounts, returning `None` on overflow
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Self::new)
    }

    /// Rounds to paise, half away from zero
    pub fn round_to_paise(&self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(PAISE_PLACES, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Rounds to whole rupees, half away from zero
    pub fn round_to_rupee(&self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor)
    }

    /// Formats as whole rupees with Indian digit grouping, e.g. `Rs 1,23,457`
    pub fn to_rupee_string(&self) -> String {
        let rounded = self.round_to_rupee();
        let digits = rounded.amount.abs().trunc().to_string();
        let sign = if rounded.is_negative() { "-" } else { "" };
        format!("{}{} {}", sign, RUPEE_PREFIX, group_indian(&digits))
    }
}

/// Groups an unsigned digit string the Indian way: the last three digits,
/// then pairs (`12345678` becomes `1,23,45,678`)
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (rest, last3) = digits.split_at(digits.len() - 3);
    let lead = rest.len() % 2;
    let mut groups: Vec<&str> = Vec::new();
    if lead == 1 {
        groups.push(&rest[..1]);
    }
    let mut i = lead;
    while i < rest.len() {
        groups.push(&rest[i..i + 2]);
        i += 2;
    }

    format!("{},{}", groups.join(","), last3)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_paise();
        let text = format!("{:.2}", rounded.amount.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let sign = if rounded.is_negative() { "-" } else { "" };
        write!(f, "{}{} {}.{}", sign, RUPEE_PREFIX, group_indian(whole), fraction)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses the `Display` form back (`Rs 1,23,456.78`, `-Rs 500.00`),
    /// also accepting a bare number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let digits: String = unsigned
            .strip_prefix(RUPEE_PREFIX)
            .unwrap_or(unsigned)
            .trim()
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let amount = Decimal::from_str(&digits).map_err(|_| MoneyError::Parse(s.to_string()))?;
        Ok(Self::new(if negative { -amount } else { amount }))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.amount += other.amount;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.amount - other.amount)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}

/// Represents a percentage rate (e.g., a discount or premium rate)
///
/// Every percent a user types, and every tabulated percent, becomes a Rate
/// through `from_percentage`, which is the single place the divide-by-100
/// happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// A zero rate
    pub const ZERO: Rate = Rate { value: Decimal::ZERO };

    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns true for a zero rate
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: &Money) -> Money {
        money.multiply(self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_keeps_full_precision() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_money_from_paise() {
        let m = Money::from_paise(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
        assert_eq!((-a).amount(), dec!(-100.00));
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian("5"), "5");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn test_display_rounds_to_paise() {
        assert_eq!(Money::new(dec!(40779.22)).to_string(), "Rs 40,779.22");
        assert_eq!(Money::new(dec!(1575.9)).to_string(), "Rs 1,575.90");
        assert_eq!(Money::new(dec!(0.005)).to_string(), "Rs 0.01");
        assert_eq!(Money::new(dec!(-500)).to_string(), "-Rs 500.00");
    }

    #[test]
    fn test_rupee_string_rounds_to_whole_rupees() {
        assert_eq!(Money::new(dec!(40779.5)).to_rupee_string(), "Rs 40,780");
        assert_eq!(Money::new(dec!(123456.4)).to_rupee_string(), "Rs 1,23,456");
        assert_eq!(Money::new(dec!(-1050)).to_rupee_string(), "-Rs 1,050");
    }

    #[test]
    fn test_parse_display_form() {
        let m: Money = "Rs 1,23,456.78".parse().unwrap();
        assert_eq!(m.amount(), dec!(123456.78));

        let neg: Money = "-Rs 500.00".parse().unwrap();
        assert_eq!(neg.amount(), dec!(-500.00));

        assert!("Rs abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_non_negative_and_cap() {
        assert_eq!(Money::from_rupees(-5).non_negative(), Money::ZERO);
        assert_eq!(Money::from_rupees(700).at_most(Money::from_rupees(500)), Money::from_rupees(500));
        assert_eq!(Money::from_rupees(300).at_most(Money::from_rupees(500)), Money::from_rupees(300));
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::from_percentage(dec!(5.0));
        let amount = Money::new(dec!(1000.00));

        let charge = rate.apply(&amount);
        assert_eq!(charge.amount(), dec!(50.00));
        assert_eq!(rate.to_string(), "5%");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn display_then_parse_is_paise_exact(paise in -10_000_000_000i64..10_000_000_000i64) {
            let money = Money::from_paise(paise);
            let parsed: Money = money.to_string().parse().unwrap();
            prop_assert_eq!(parsed.amount(), money.amount());
        }

        #[test]
        fn money_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_paise(a);
            let mb = Money::from_paise(b);
            let mc = Money::from_paise(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }
    }
}
