//! Normalized rating input
//!
//! `RatingInput` is built once per calculation from a `QuoteRequest`. Dates
//! are resolved, the vehicle age and sum insured totals are derived, amounts
//! and percents are checked, and percents become `Rate`s. The calculator
//! reads nothing else.

use chrono::NaiveDate;
use core_kernel::{Money, PolicyDates, Rate, VehicleAge};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RatingError;
use crate::request::{LiabilityCovers, QuoteRequest};
use crate::sum_insured::SumInsured;
use crate::vehicle::{CngSelection, NcbTier, TrailerUse, Zone};

/// Largest accepted amount or weight, and largest sum insured total per
/// category. Keeps every product and sum in the calculation well inside
/// `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Immutable, validated input to the premium calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingInput {
    pub dates: PolicyDates,
    pub age: VehicleAge,
    pub zone: Zone,
    pub gvw_kg: Decimal,
    pub seating_capacity: u32,
    pub trailer: Option<TrailerUse>,
    pub sum_insured: SumInsured,
    pub cng: CngSelection,
    /// Zero when no kit is fitted
    pub cng_value: Money,
    pub fleet_owner: bool,
    pub previous_claim: bool,
    pub ncb: NcbTier,
    pub covers: OwnDamageCovers,
    pub liability: LiabilityCovers,
    pub anti_theft: bool,
    pub underwriter_discount: Rate,
}

/// Validated own-damage covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnDamageCovers {
    pub imt23: bool,
    pub nil_dep: Option<NilDepCover>,
    /// Towing limit
    pub towing: Option<Money>,
    pub return_to_invoice: bool,
    pub geographic_extension: bool,
    pub consumables: bool,
    pub emi_protection: Option<EmiCover>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NilDepCover {
    pub discount: Rate,
    pub renewal_discount: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiCover {
    pub value: Money,
    pub term_months: u32,
}

impl RatingInput {
    /// Normalizes a quote request
    ///
    /// `today` anchors the default renewal date so the result depends only
    /// on its arguments.
    ///
    /// # Errors
    ///
    /// - registration date after renewal date
    /// - negative GVW, sum insured, CNG, towing or EMI amount
    /// - any of those above `MAX_AMOUNT`, or a sum insured category totalling
    ///   more than `MAX_AMOUNT`
    /// - a percent outside 0..=100
    pub fn from_request(request: &QuoteRequest, today: NaiveDate) -> Result<Self, RatingError> {
        if request.registration_date.is_none() || request.renewal_date.is_none() {
            tracing::debug!(
                registration = ?request.registration_date,
                renewal = ?request.renewal_date,
                %today,
                "Defaulting missing policy dates"
            );
        }
        let dates = PolicyDates::resolve(request.registration_date, request.renewal_date, today)?;
        let age = dates.vehicle_age();

        let gvw_kg = amount("gvw_kg", request.gvw_kg)?;
        let sum_insured = SumInsured::aggregate(&request.sum_insured, request.trailer.is_some())?;

        let cng_value = match request.cng {
            CngSelection::Off => Money::ZERO,
            CngSelection::Extra | CngSelection::Inbuilt => {
                Money::new(amount("cng_value", request.cng_value)?)
            }
        };

        let requested = &request.own_damage_covers;
        let nil_dep = match requested.nil_dep {
            Some(nil_dep) => Some(NilDepCover {
                discount: percent("nil_dep.discount_pct", nil_dep.discount_pct)?,
                renewal_discount: nil_dep.renewal_discount,
            }),
            None => None,
        };
        let towing = match requested.towing_value {
            Some(value) => Some(Money::new(amount("towing_value", value)?)),
            None => None,
        };
        let emi_protection = match requested.emi_protection {
            Some(emi) => Some(EmiCover {
                value: Money::new(amount("emi_protection.value", emi.value)?),
                term_months: emi.term_months,
            }),
            None => None,
        };

        let covers = OwnDamageCovers {
            imt23: requested.imt23,
            nil_dep,
            towing,
            return_to_invoice: requested.return_to_invoice,
            geographic_extension: requested.geographic_extension,
            consumables: requested.consumables,
            emi_protection,
        };

        Ok(Self {
            dates,
            age,
            zone: request.zone,
            gvw_kg,
            seating_capacity: request.seating_capacity,
            trailer: request.trailer,
            sum_insured,
            cng: request.cng,
            cng_value,
            fleet_owner: request.fleet_owner,
            previous_claim: request.previous_claim,
            ncb: request.ncb,
            covers,
            liability: request.liability_covers,
            anti_theft: request.anti_theft,
            underwriter_discount: percent("underwriter_discount_pct", request.underwriter_discount_pct)?,
        })
    }

    /// NCB rate that applies to this renewal
    ///
    /// Zero after a claim on the previous policy, and zero when the tier is
    /// locked by a name transfer.
    pub fn ncb_rate(&self) -> Rate {
        if self.previous_claim || self.ncb.is_locked() {
            return Rate::ZERO;
        }
        Rate::from_percentage(self.ncb.discount_percent())
    }
}

fn amount(field: &str, value: Decimal) -> Result<Decimal, RatingError> {
    if value < Decimal::ZERO {
        return Err(RatingError::negative_amount(field, value));
    }
    if value > MAX_AMOUNT {
        return Err(RatingError::amount_too_large(field, value));
    }
    Ok(value)
}

fn percent(field: &str, value: Decimal) -> Result<Rate, RatingError> {
    if value < Decimal::ZERO || value > dec!(100) {
        return Err(RatingError::percent_out_of_range(field, value));
    }
    Ok(Rate::from_percentage(value))
}
