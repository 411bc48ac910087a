//! Pre-built Test Fixtures
//!
//! Dates that land on exact vehicle ages and quote requests for the
//! reference scenarios, with the amounts they are known to produce.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_rating::{PolicyDetails, QuoteRequest, SumInsuredCategory, SumInsuredEntry, TrailerUse, Zone};
use rust_decimal_macros::dec;

/// Fixture for policy dates
pub struct DateFixtures;

impl DateFixtures {
    /// Renewal date shared by every scenario
    pub fn renewal() -> NaiveDate {
        date(2024, 1, 1)
    }

    /// "Today" for normalization; a month before renewal
    pub fn today() -> NaiveDate {
        date(2023, 12, 1)
    }

    /// Registration exactly one rating year (365 days) before renewal
    pub fn registered_one_year() -> NaiveDate {
        date(2023, 1, 1)
    }

    /// Registration exactly three rating years (1,095 days) before renewal
    pub fn registered_three_years() -> NaiveDate {
        date(2021, 1, 1)
    }

    /// Registration five calendar years before renewal (1,826 days, just over 5)
    pub fn registered_five_years() -> NaiveDate {
        date(2019, 1, 1)
    }

    /// Registration so that the age is `days` / 365
    pub fn registered_days_before_renewal(days: i64) -> NaiveDate {
        Self::renewal() - chrono::Duration::days(days)
    }
}

/// Fixture for quote requests
pub struct QuoteFixtures;

impl QuoteFixtures {
    /// Zone A, age 3, GVW 10,000 kg, IDV Rs 5,00,000, no add-ons
    pub fn plain_vehicle() -> QuoteRequest {
        QuoteRequest {
            registration_date: Some(DateFixtures::registered_three_years()),
            renewal_date: Some(DateFixtures::renewal()),
            zone: Zone::A,
            gvw_kg: dec!(10000),
            sum_insured: vec![SumInsuredEntry::new(SumInsuredCategory::IdvVehicle, dec!(500000))],
            ..Default::default()
        }
    }

    /// Plain vehicle pulling a non-agricultural trailer with IDV Rs 1,00,000
    pub fn with_trailer() -> QuoteRequest {
        let mut request = Self::plain_vehicle();
        request.trailer = Some(TrailerUse::NonAgricultural);
        request
            .sum_insured
            .push(SumInsuredEntry::new(SumInsuredCategory::IdvTrailer, dec!(100000)));
        request
    }

    pub fn policy_details() -> PolicyDetails {
        PolicyDetails {
            insured_name: "Ravi Transport Co".to_string(),
            previous_policy_number: "GCV/2023/000123".to_string(),
            registration_number: "MH-12-AB-1234".to_string(),
            engine_number: "ENG998877".to_string(),
            chassis_number: "CHS556677".to_string(),
        }
    }
}

/// Known amounts for the plain vehicle
pub struct ExpectedFixtures;

impl ExpectedFixtures {
    pub fn plain_basic_od() -> Money {
        Money::from_rupees(8755)
    }

    pub fn plain_basic_tp() -> Money {
        Money::from_rupees(27186)
    }

    pub fn plain_od_gst() -> Money {
        Money::new(dec!(1575.90))
    }

    pub fn plain_tp_gst() -> Money {
        Money::new(dec!(3262.32))
    }

    pub fn plain_grand_total() -> Money {
        Money::new(dec!(40779.22))
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}
