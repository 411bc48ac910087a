//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for money and premium breakdowns
//! that give more meaningful failure messages than a bare `assert_eq!`.

use core_kernel::Money;
use domain_rating::{PremiumBreakdown, Section};
use rust_decimal::Decimal;

/// Asserts that a Money value equals an expected decimal amount exactly
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual.amount(),
        expected
    );
}

/// Asserts that two Money values are within `tolerance` of each other
pub fn assert_money_approx_eq(actual: Money, expected: Money, tolerance: Decimal) {
    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money.amount());
}

/// Asserts that a Money value is not negative
pub fn assert_money_non_negative(money: Money) {
    assert!(!money.is_negative(), "Expected non-negative money, got {}", money.amount());
}

/// Asserts the grand total identity and that the OD total is the sum of its
/// lines, both exactly
pub fn assert_breakdown_consistent(breakdown: &PremiumBreakdown) {
    let od_lines: Money = breakdown
        .lines()
        .iter()
        .filter(|line| matches!(line.section, Section::OwnDamage | Section::Discounts))
        .map(|line| line.amount)
        .sum();
    assert_eq!(
        breakdown.total_own_damage, od_lines,
        "Total OD {} is not the sum of its lines {}",
        breakdown.total_own_damage, od_lines
    );

    let expected = breakdown.total_own_damage
        + breakdown.total_liability
        + breakdown.taxes.od_gst
        + breakdown.taxes.tp_gst();
    assert_eq!(
        breakdown.grand_total, expected,
        "Grand total {} does not equal OD + TP + GST {}",
        breakdown.grand_total, expected
    );
}

/// Asserts that every OD and TP premium line is non-negative and every
/// discount line is non-positive
///
/// Taxes follow the sign of the OD total and are not checked.
pub fn assert_line_signs(breakdown: &PremiumBreakdown) {
    for line in breakdown.lines() {
        match line.section {
            Section::Discounts => assert!(
                !line.amount.is_positive(),
                "Discount line '{}' is positive: {}",
                line.label,
                line.amount.amount()
            ),
            Section::OwnDamage | Section::Liability => assert!(
                !line.amount.is_negative(),
                "Premium line '{}' is negative: {}",
                line.label,
                line.amount.amount()
            ),
            Section::Taxes | Section::Summary => {}
        }
    }
}
