//! Tariff tables and constants for GCCV (other than 3 wheeler)
//!
//! Age brackets are half-open on the upper bound: an age of exactly 5
//! years rates in the "5 and above" bracket. Tabulated percents are turned
//! into rates with `Rate::from_percentage`; multipliers quoted as plain
//! decimals use `Rate::new`.

use core_kernel::{Money, Rate, VehicleAge};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::vehicle::{TrailerUse, Zone};

// ============================================================================
// Own damage
// ============================================================================

/// GVW above which each extra kilogram is loaded
pub const GVW_LOADING_THRESHOLD_KG: Decimal = dec!(12000);

/// Loading per kilogram above the threshold
pub const GVW_LOADING_PER_KG: Decimal = dec!(0.27);

pub const ELECTRICAL_ACCESSORIES_RATE: Rate = Rate::new(dec!(0.04));
pub const CNG_EXTRA_RATE: Rate = Rate::new(dec!(0.04));
pub const IMT23_RATE: Rate = Rate::new(dec!(0.15));
pub const INBUILT_CNG_RATE: Rate = Rate::new(dec!(0.05));

/// Flat OD loading for geographic extension
pub const GEOGRAPHIC_EXTENSION_OD: Money = Money::new(dec!(400));

pub const TRAILER_OD_AGRICULTURAL_RATE: Rate = Rate::new(dec!(0.0087));
pub const TRAILER_OD_NON_AGRICULTURAL_RATE: Rate = Rate::new(dec!(0.0105));

/// EMI protection is only sold below this age
pub const EMI_PROTECTION_MAX_AGE: Decimal = dec!(4.5);

// ============================================================================
// Discounts
// ============================================================================

pub const ANTI_THEFT_RATE: Rate = Rate::new(dec!(0.025));
pub const ANTI_THEFT_CAP: Money = Money::new(dec!(500));
pub const NIL_DEP_RENEWAL_RATE: Rate = Rate::new(dec!(0.05));

// ============================================================================
// Liability
// ============================================================================

pub const PA_OWNER_DRIVER: Money = Money::new(dec!(320));
pub const LL_EMPLOYEE_PER_HEAD: Money = Money::new(dec!(50));
pub const LL_PAID_CREW_PER_HEAD: Money = Money::new(dec!(50));
pub const PA_PAID_DRIVER: Money = Money::new(dec!(60));
pub const LL_NFPP_PER_HEAD: Money = Money::new(dec!(75));
pub const GEOGRAPHIC_EXTENSION_TP: Money = Money::new(dec!(100));
pub const CNG_KIT_TP: Money = Money::new(dec!(60));
pub const TRAILER_TP_AGRICULTURAL: Money = Money::new(dec!(910));
pub const TRAILER_TP_NON_AGRICULTURAL: Money = Money::new(dec!(2485));

// ============================================================================
// Taxes
// ============================================================================

pub const OD_GST_RATE: Rate = Rate::new(dec!(0.18));
pub const BASIC_TP_GST_RATE: Rate = Rate::new(dec!(0.12));
pub const TP_ADDON_GST_RATE: Rate = Rate::new(dec!(0.18));

/// OD tariff rate (percent of sum insured) by zone and vehicle age
pub fn od_rate_percent(zone: Zone, age: VehicleAge) -> Decimal {
    let (under_5, under_7, older) = match zone {
        Zone::A => (dec!(1.751), dec!(1.795), dec!(1.839)),
        Zone::B => (dec!(1.743), dec!(1.787), dec!(1.83)),
        Zone::Other => (dec!(1.726), dec!(1.77), dec!(1.812)),
    };

    if age.is_under(dec!(5)) {
        under_5
    } else if age.is_under(dec!(7)) {
        under_7
    } else {
        older
    }
}

/// Return-to-invoice rate; none from age 3
pub fn rti_rate(age: VehicleAge) -> Option<Rate> {
    let percent = if age.is_under(dec!(1)) {
        dec!(0.45)
    } else if age.is_under(dec!(2)) {
        dec!(0.55)
    } else if age.is_under(dec!(3)) {
        dec!(0.70)
    } else {
        return None;
    };
    Some(Rate::from_percentage(percent))
}

/// Consumables cover rate; none from age 5
pub fn consumables_rate(age: VehicleAge) -> Option<Rate> {
    let percent = if age.is_under(dec!(1)) {
        dec!(0.15)
    } else if age.is_under(dec!(2)) {
        dec!(0.18)
    } else if age.is_under(dec!(3)) {
        dec!(0.22)
    } else if age.is_under(dec!(4)) {
        dec!(0.25)
    } else if age.is_under(dec!(5)) {
        dec!(0.27)
    } else {
        return None;
    };
    Some(Rate::from_percentage(percent))
}

/// Nil-depreciation rate; none from age 5
pub fn nil_dep_rate(age: VehicleAge) -> Option<Rate> {
    let seven_months = Decimal::from(7) / Decimal::from(12);
    let percent = if age.is_under(seven_months) {
        dec!(10)
    } else if age.is_under(dec!(2)) {
        dec!(20)
    } else if age.is_under(dec!(5)) {
        dec!(30)
    } else {
        return None;
    };
    Some(Rate::from_percentage(percent))
}

/// Towing cover rate, tiered by the towing limit
pub fn towing_rate(limit: Money) -> Rate {
    let limit = limit.amount();
    if limit <= dec!(10000) {
        Rate::new(dec!(0.05))
    } else if limit <= dec!(20000) {
        Rate::new(dec!(0.075))
    } else {
        Rate::new(dec!(0.10))
    }
}

/// EMI protection rate; one-month cover is cheaper than any longer term
pub fn emi_protection_rate(term_months: u32) -> Rate {
    if term_months == 1 {
        Rate::new(dec!(0.05))
    } else {
        Rate::new(dec!(0.09))
    }
}

/// Trailer OD rate by trailer use
pub fn trailer_od_rate(usage: TrailerUse) -> Rate {
    match usage {
        TrailerUse::Agricultural => TRAILER_OD_AGRICULTURAL_RATE,
        TrailerUse::NonAgricultural => TRAILER_OD_NON_AGRICULTURAL_RATE,
    }
}

/// Trailer TP premium by trailer use
pub fn trailer_tp(usage: TrailerUse) -> Money {
    match usage {
        TrailerUse::Agricultural => TRAILER_TP_AGRICULTURAL,
        TrailerUse::NonAgricultural => TRAILER_TP_NON_AGRICULTURAL,
    }
}

/// Basic third-party premium by GVW bracket (upper bounds inclusive)
pub fn basic_tp(gvw_kg: Decimal) -> Money {
    let premium = if gvw_kg <= dec!(7500) {
        16049
    } else if gvw_kg <= dec!(12000) {
        27186
    } else if gvw_kg <= dec!(20000) {
        35313
    } else if gvw_kg <= dec!(40000) {
        43950
    } else {
        44242
    };
    Money::from_rupees(premium)
}
