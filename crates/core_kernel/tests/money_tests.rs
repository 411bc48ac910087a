//! Unit tests for the Money module
//!
//! Tests cover construction, exact arithmetic, rounding at display time,
//! rupee formatting with Indian digit grouping, and rates.

use core_kernel::money::group_indian;
use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_every_digit() {
        let m = Money::new(dec!(218.875));
        assert_eq!(m.amount(), dec!(218.875));
    }

    #[test]
    fn test_from_rupees_and_paise() {
        assert_eq!(Money::from_rupees(8755).amount(), dec!(8755));
        assert_eq!(Money::from_paise(157590).amount(), dec!(1575.90));
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::ZERO);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub_neg() {
        let a = Money::from_rupees(8755);
        let b = Money::new(dec!(875.5));

        assert_eq!(a + b, Money::new(dec!(9630.5)));
        assert_eq!(a - b, Money::new(dec!(7879.5)));
        assert_eq!(-b, Money::new(dec!(-875.5)));
    }

    #[test]
    fn test_sum_of_lines() {
        let lines = [Money::from_rupees(8755), Money::from_rupees(27186), Money::new(dec!(1575.9))];
        let total: Money = lines.iter().sum();
        assert_eq!(total, Money::new(dec!(37516.9)));
    }

    #[test]
    fn test_checked_add_reports_overflow() {
        let a = Money::new(dec!(1000.25));
        assert_eq!(a.checked_add(Money::from_rupees(1)), Some(Money::new(dec!(1001.25))));
        assert_eq!(Money::new(Decimal::MAX).checked_add(Money::from_rupees(1)), None);
    }

    #[test]
    fn test_multiply_by_scalar() {
        assert_eq!(Money::from_rupees(50).multiply(dec!(3)), Money::from_rupees(150));
        assert_eq!(Money::from_rupees(50) * Decimal::from(3), Money::from_rupees(150));
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        let m = -Money::ZERO;
        assert!(!m.is_negative());
        assert!(m.is_zero());
    }

    #[test]
    fn test_clamps() {
        assert_eq!(Money::from_rupees(-10).non_negative(), Money::ZERO);
        assert_eq!(Money::from_rupees(10).non_negative(), Money::from_rupees(10));
        assert_eq!(Money::from_rupees(2188).at_most(Money::from_rupees(500)), Money::from_rupees(500));
        assert_eq!(Money::from_rupees(-1).at_most(Money::from_rupees(500)), Money::from_rupees(-1));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(Money::new(dec!(218.875)).round_to_paise().amount(), dec!(218.88));
        assert_eq!(Money::new(dec!(-218.875)).round_to_paise().amount(), dec!(-218.88));
        assert_eq!(Money::new(dec!(40779.5)).round_to_rupee().amount(), dec!(40780));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("40779"), "40,779");
        assert_eq!(group_indian("500000"), "5,00,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(dec!(40779.22)).to_string(), "Rs 40,779.22");
        assert_eq!(Money::from_rupees(-500).to_string(), "-Rs 500.00");
        assert_eq!(Money::ZERO.to_string(), "Rs 0.00");
    }

    #[test]
    fn test_rupee_string() {
        assert_eq!(Money::new(dec!(40779.22)).to_rupee_string(), "Rs 40,779");
        assert_eq!(Money::new(dec!(-1050.4)).to_rupee_string(), "-Rs 1,050");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Rs 40,779.22".parse::<Money>().unwrap(), Money::new(dec!(40779.22)));
        assert_eq!("-Rs 2,188.75".parse::<Money>().unwrap(), Money::new(dec!(-2188.75)));
        assert_eq!("1575.9".parse::<Money>().unwrap(), Money::new(dec!(1575.9)));
        assert!(matches!("Rs lots".parse::<Money>(), Err(MoneyError::Parse(_))));
    }

    #[test]
    fn test_serde_is_exact() {
        let m = Money::new(dec!(218.875));
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_percentage_divided_once() {
        let rate = Rate::from_percentage(dec!(10));
        assert_eq!(rate.as_decimal(), dec!(0.1));
        assert_eq!(rate.as_percentage(), dec!(10));
        assert_eq!(rate.apply(&Money::from_rupees(8755)), Money::new(dec!(875.5)));
    }

    #[test]
    fn test_zero_rate() {
        assert!(Rate::ZERO.is_zero());
        assert!(Rate::ZERO.apply(&Money::from_rupees(1000)).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::from_percentage(dec!(5)).to_string(), "5%");
    }
}
