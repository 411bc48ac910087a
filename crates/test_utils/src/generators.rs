//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating quote requests that always
//! pass normalization: non-negative amounts, percents in 0..=100, and a
//! registration date on or before renewal.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_rating::request::{EmiRequest, NilDepRequest, OwnDamageCoverRequest, PaidCrew};
use domain_rating::PolicyDetails;
use domain_rating::{
    CngSelection, LiabilityCovers, NcbTier, QuoteRequest, SumInsuredCategory, SumInsuredEntry,
    TrailerUse, Zone,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::DateFixtures;

/// Strategy for generating zones
pub fn zone_strategy() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::A), Just(Zone::B), Just(Zone::Other)]
}

/// Strategy for generating every NCB tier
pub fn ncb_tier_strategy() -> impl Strategy<Value = NcbTier> {
    proptest::sample::select(NcbTier::ALL.to_vec())
}

pub fn cng_strategy() -> impl Strategy<Value = CngSelection> {
    prop_oneof![
        Just(CngSelection::Off),
        Just(CngSelection::Extra),
        Just(CngSelection::Inbuilt),
    ]
}

pub fn trailer_strategy() -> impl Strategy<Value = Option<TrailerUse>> {
    prop_oneof![
        Just(None),
        Just(Some(TrailerUse::Agricultural)),
        Just(Some(TrailerUse::NonAgricultural)),
    ]
}

/// Strategy for vehicle age in days, up to 15 years
pub fn age_days_strategy() -> impl Strategy<Value = i64> {
    0i64..(15 * 365)
}

/// Strategy for registration dates relative to the fixture renewal date
pub fn registration_strategy() -> impl Strategy<Value = NaiveDate> {
    age_days_strategy().prop_map(DateFixtures::registered_days_before_renewal)
}

/// Strategy for gross vehicle weight in kilograms, with up to 2 decimals
pub fn gvw_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..6_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for rupee amounts in paise, up to Rs 1 crore
pub fn rupee_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy for Money values from rupee amounts
pub fn money_strategy() -> impl Strategy<Value = Money> {
    rupee_amount_strategy().prop_map(Money::new)
}

/// Strategy for percentages (0% to 100%, two decimals)
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10000u32).prop_map(|n| Decimal::new(i64::from(n), 2))
}

pub fn sum_insured_strategy() -> impl Strategy<Value = Vec<SumInsuredEntry>> {
    let category = prop_oneof![
        Just(SumInsuredCategory::IdvVehicle),
        Just(SumInsuredCategory::NonElectrical),
        Just(SumInsuredCategory::Allied),
        Just(SumInsuredCategory::Articulated),
        Just(SumInsuredCategory::ElectricalAccessories),
        Just(SumInsuredCategory::IdvTrailer),
    ];
    proptest::collection::vec(
        (category, rupee_amount_strategy()).prop_map(|(c, amount)| SumInsuredEntry::new(c, amount)),
        0..6,
    )
}

pub fn own_damage_covers_strategy() -> impl Strategy<Value = OwnDamageCoverRequest> {
    (
        any::<bool>(),
        proptest::option::of((percentage_strategy(), any::<bool>())),
        proptest::option::of(0i64..5_000_000i64),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of((rupee_amount_strategy(), 1u32..=3u32)),
    )
        .prop_map(|(imt23, nil_dep, towing, rti, geo, consumables, emi)| OwnDamageCoverRequest {
            imt23,
            nil_dep: nil_dep.map(|(discount_pct, renewal_discount)| NilDepRequest {
                discount_pct,
                renewal_discount,
            }),
            towing_value: towing.map(|paise| Decimal::new(paise, 2)),
            return_to_invoice: rti,
            geographic_extension: geo,
            consumables,
            emi_protection: emi.map(|(value, term_months)| EmiRequest { value, term_months }),
        })
}

pub fn liability_covers_strategy() -> impl Strategy<Value = LiabilityCovers> {
    let heads = || proptest::option::of(0u32..20u32);
    (
        any::<bool>(),
        heads(),
        proptest::option::of((0u32..5u32, 0u32..5u32, 0u32..5u32)),
        any::<bool>(),
        heads(),
        heads(),
    )
        .prop_map(|(pa_owner_driver, ll_employees, crew, pa_paid_driver, ll_nfpp_other, ll_nfpp_incl)| {
            LiabilityCovers {
                pa_owner_driver,
                ll_employees,
                ll_paid_crew: crew.map(|(drivers, cleaners, conductors)| PaidCrew {
                    drivers,
                    cleaners,
                    conductors,
                }),
                pa_paid_driver,
                ll_nfpp_other,
                ll_nfpp_incl,
            }
        })
}

/// Strategy for free-text policy details, including line breaks, tabs and
/// bracketed text
pub fn policy_details_strategy() -> impl Strategy<Value = PolicyDetails> {
    let text = || r"[A-Za-z0-9 :/\[\]\n\r\t-]{0,24}";
    (text(), text(), text(), text(), text()).prop_map(
        |(insured_name, previous_policy_number, registration_number, engine_number, chassis_number)| {
            PolicyDetails {
                insured_name,
                previous_policy_number,
                registration_number,
                engine_number,
                chassis_number,
            }
        },
    )
}

/// Strategy for complete, valid quote requests
pub fn quote_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        (registration_strategy(), zone_strategy(), gvw_strategy(), trailer_strategy()),
        (sum_insured_strategy(), cng_strategy(), rupee_amount_strategy()),
        (any::<bool>(), ncb_tier_strategy(), any::<bool>(), percentage_strategy()),
        (own_damage_covers_strategy(), liability_covers_strategy()),
    )
        .prop_map(
            |(
                (registration, zone, gvw_kg, trailer),
                (sum_insured, cng, cng_value),
                (previous_claim, ncb, anti_theft, underwriter_discount_pct),
                (own_damage_covers, liability_covers),
            )| QuoteRequest {
                registration_date: Some(registration),
                renewal_date: Some(DateFixtures::renewal()),
                zone,
                gvw_kg,
                trailer,
                sum_insured,
                cng,
                cng_value,
                previous_claim,
                ncb,
                own_damage_covers,
                liability_covers,
                anti_theft,
                underwriter_discount_pct,
                ..Default::default()
            },
        )
}
