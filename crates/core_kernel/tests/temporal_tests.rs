//! Unit tests for policy dates and vehicle age

use chrono::NaiveDate;
use core_kernel::{PolicyDates, TemporalError, VehicleAge};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod vehicle_age {
    use super::*;

    #[test]
    fn test_leap_year_adds_a_day() {
        // 2019-01-01 to 2024-01-01 spans 2020's leap day
        let age = VehicleAge::between(date(2019, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(age.years(), Decimal::from(1826) / Decimal::from(365));
        assert!(!age.is_under(dec!(5)));
    }

    #[test]
    fn test_bracket_boundary_exact() {
        let age = VehicleAge::between(date(2022, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(age.years(), dec!(2));
        assert!(!age.is_under(dec!(2)));
        assert!(age.is_under(dec!(2.0001)));
    }

    #[test]
    fn test_from_years_clamps_negative() {
        assert_eq!(VehicleAge::from_years(dec!(-1)), VehicleAge::NEW);
    }

    #[test]
    fn test_display() {
        assert_eq!(VehicleAge::from_years(dec!(3)).to_string(), "3 years");
        assert_eq!(VehicleAge::from_years(dec!(0.5)).to_string(), "0.5 years");
    }
}

mod policy_dates {
    use super::*;

    #[test]
    fn test_explicit_dates_kept() {
        let dates = PolicyDates::resolve(Some(date(2021, 1, 1)), Some(date(2024, 1, 1)), date(2030, 1, 1)).unwrap();

        assert_eq!(dates.registration(), date(2021, 1, 1));
        assert_eq!(dates.renewal(), date(2024, 1, 1));
        assert_eq!(dates.vehicle_age().years(), dec!(3));
    }

    #[test]
    fn test_missing_registration_defaults_from_given_renewal() {
        let dates = PolicyDates::resolve(None, Some(date(2024, 6, 15)), date(2020, 1, 1)).unwrap();
        assert_eq!(dates.registration(), date(2023, 6, 15));
    }

    #[test]
    fn test_default_renewal_after_explicit_registration_rejected() {
        let result = PolicyDates::resolve(Some(date(2024, 12, 31)), None, date(2024, 1, 1));

        assert_eq!(
            result,
            Err(TemporalError::RegistrationAfterRenewal {
                registration: date(2024, 12, 31),
                renewal: date(2024, 1, 2),
            })
        );
    }

    #[test]
    fn test_new_rejects_out_of_order() {
        let result = PolicyDates::new(date(2024, 3, 2), date(2024, 3, 1));
        assert!(matches!(result, Err(TemporalError::RegistrationAfterRenewal { .. })));

        let dates = PolicyDates::new(date(2024, 3, 1), date(2024, 3, 1)).unwrap();
        assert_eq!(dates.vehicle_age(), VehicleAge::NEW);
    }

    #[test]
    fn test_deserialize_checks_order() {
        let dates: PolicyDates =
            serde_json::from_str(r#"{"registration":"2021-01-01","renewal":"2024-01-01"}"#).unwrap();
        assert_eq!(dates.vehicle_age().years(), dec!(3));

        let result = serde_json::from_str::<PolicyDates>(r#"{"registration":"2024-01-02","renewal":"2024-01-01"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("after renewal date"));
    }

    #[test]
    fn test_serialize_round_trips() {
        let dates = PolicyDates::new(date(2022, 5, 10), date(2024, 5, 10)).unwrap();
        let json = serde_json::to_string(&dates).unwrap();
        assert_eq!(serde_json::from_str::<PolicyDates>(&json).unwrap(), dates);
    }

    #[test]
    fn test_out_of_range_default() {
        let result = PolicyDates::resolve(None, None, NaiveDate::MAX);
        assert_eq!(result, Err(TemporalError::OutOfRange(NaiveDate::MAX)));
    }
}
