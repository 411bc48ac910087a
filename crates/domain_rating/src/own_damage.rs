//! Own-damage premium lines
//!
//! Each function is one step of the OD chain and consumes only raw input
//! or lines computed before it. The calculator decides the order.

use core_kernel::{Money, Rate, VehicleAge};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{EmiCover, OwnDamageCovers};
use crate::sum_insured::SumInsured;
use crate::tables::{self, GVW_LOADING_PER_KG, GVW_LOADING_THRESHOLD_KG};
use crate::vehicle::{CngSelection, TrailerUse};

/// Own-damage premium lines, all non-negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnDamagePremium {
    pub basic_od: Money,
    pub gvw_loading: Money,
    pub electrical_accessories: Money,
    pub cng_extra: Money,
    pub imt23: Money,
    pub towing: Money,
    pub geographic_extension: Money,
    pub return_to_invoice: Money,
    pub consumables: Money,
    pub nil_depreciation: Money,
    pub emi_protection: Money,
    pub trailer_od: Money,
    pub inbuilt_cng: Money,
}

impl OwnDamagePremium {
    /// Sum of every premium line
    pub fn total(&self) -> Money {
        [
            self.basic_od,
            self.gvw_loading,
            self.electrical_accessories,
            self.cng_extra,
            self.imt23,
            self.towing,
            self.geographic_extension,
            self.return_to_invoice,
            self.consumables,
            self.nil_depreciation,
            self.emi_protection,
            self.trailer_od,
            self.inbuilt_cng,
        ]
        .iter()
        .sum()
    }

    /// Basic OD, electrical accessories, GVW loading, CNG extra and IMT-23:
    /// the basis the underwriter discount is taken on
    pub fn underwriting_basis(&self) -> Money {
        self.basic_od + self.electrical_accessories + self.gvw_loading + self.cng_extra + self.imt23
    }
}

pub fn basic_od(sum_insured: &SumInsured, od_rate_percent: Decimal) -> Money {
    Rate::from_percentage(od_rate_percent).apply(&sum_insured.base())
}

/// Loading per kilogram above 12,000 kg
pub fn gvw_loading(gvw_kg: Decimal) -> Money {
    if gvw_kg <= GVW_LOADING_THRESHOLD_KG {
        return Money::ZERO;
    }
    Money::new((gvw_kg - GVW_LOADING_THRESHOLD_KG) * GVW_LOADING_PER_KG)
}

pub fn electrical_accessories(sum_insured: &SumInsured) -> Money {
    tables::ELECTRICAL_ACCESSORIES_RATE.apply(&sum_insured.electrical_accessories)
}

/// Only an after-market kit is rated here; an inbuilt kit loads the OD
/// total instead (see `inbuilt_cng`)
pub fn cng_extra(cng: CngSelection, cng_value: Money) -> Money {
    match cng {
        CngSelection::Extra => tables::CNG_EXTRA_RATE.apply(&cng_value),
        CngSelection::Off | CngSelection::Inbuilt => Money::ZERO,
    }
}

pub fn towing(limit: Option<Money>) -> Money {
    match limit {
        Some(limit) if limit.is_positive() => tables::towing_rate(limit).apply(&limit),
        _ => Money::ZERO,
    }
}

pub fn geographic_extension(selected: bool) -> Money {
    if selected {
        tables::GEOGRAPHIC_EXTENSION_OD
    } else {
        Money::ZERO
    }
}

pub fn return_to_invoice(selected: bool, age: VehicleAge, sum_insured: &SumInsured) -> Money {
    if !selected {
        return Money::ZERO;
    }
    tables::rti_rate(age)
        .map(|rate| rate.apply(&sum_insured.invoice_value()))
        .unwrap_or(Money::ZERO)
}

/// Consumables basis is base sum insured, electrical accessories and trailer
/// IDV, plus the CNG kit value when `include_cng` is set
pub fn consumables(
    selected: bool,
    age: VehicleAge,
    sum_insured: &SumInsured,
    cng_value: Money,
    include_cng: bool,
) -> Money {
    if !selected {
        return Money::ZERO;
    }
    let Some(rate) = tables::consumables_rate(age) else {
        return Money::ZERO;
    };

    let mut basis = sum_insured.base() + sum_insured.electrical_accessories + sum_insured.idv_trailer;
    if include_cng {
        basis += cng_value;
    }
    rate.apply(&basis)
}

/// 15% of basic OD, electrical, GVW loading, towing, geographic extension
/// and CNG extra
pub fn imt23(selected: bool, lines: &OwnDamagePremium) -> Money {
    if !selected {
        return Money::ZERO;
    }
    let basis = lines.basic_od
        + lines.electrical_accessories
        + lines.gvw_loading
        + lines.towing
        + lines.geographic_extension
        + lines.cng_extra;
    tables::IMT23_RATE.apply(&basis)
}

/// Nil-dep rate on basic OD, electrical, GVW loading, CNG extra,
/// geographic extension and IMT-23
pub fn nil_depreciation(covers: &OwnDamageCovers, age: VehicleAge, lines: &OwnDamagePremium) -> Money {
    if covers.nil_dep.is_none() {
        return Money::ZERO;
    }
    let Some(rate) = tables::nil_dep_rate(age) else {
        return Money::ZERO;
    };

    let basis = lines.basic_od
        + lines.electrical_accessories
        + lines.gvw_loading
        + lines.cng_extra
        + lines.geographic_extension
        + lines.imt23;
    rate.apply(&basis)
}

pub fn emi_protection(cover: Option<EmiCover>, age: VehicleAge) -> Money {
    match cover {
        Some(emi) if age.is_under(tables::EMI_PROTECTION_MAX_AGE) => {
            tables::emi_protection_rate(emi.term_months).apply(&emi.value)
        }
        _ => Money::ZERO,
    }
}

pub fn trailer_od(trailer: Option<TrailerUse>, sum_insured: &SumInsured) -> Money {
    match trailer {
        Some(usage) if sum_insured.idv_trailer.is_positive() => {
            tables::trailer_od_rate(usage).apply(&sum_insured.idv_trailer)
        }
        _ => Money::ZERO,
    }
}

/// 5% of basic OD, electrical, GVW loading, IMT-23, geographic extension
/// and consumables, net of the underwriter discount; never below zero
pub fn inbuilt_cng(cng: CngSelection, lines: &OwnDamagePremium, underwriter_discount: Money) -> Money {
    if cng != CngSelection::Inbuilt {
        return Money::ZERO;
    }
    let subtotal = lines.basic_od
        + lines.electrical_accessories
        + lines.gvw_loading
        + lines.imt23
        + lines.geographic_extension
        + lines.consumables
        - underwriter_discount;
    tables::INBUILT_CNG_RATE.apply(&subtotal.non_negative())
}
