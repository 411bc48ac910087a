//! Quote request as assembled by the collaborator
//!
//! Every field has a default, so a partially filled form deserializes.
//! Nothing here is trusted yet: `RatingInput::from_request` validates and
//! normalizes it before any rate is applied.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sum_insured::SumInsuredEntry;
use crate::vehicle::{CngSelection, NcbTier, TrailerUse, Zone};

/// Raw quote request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    /// Date of registration; defaults to one year before renewal
    pub registration_date: Option<NaiveDate>,
    /// Renewal date; defaults to the day after the quote date
    pub renewal_date: Option<NaiveDate>,
    pub zone: Zone,
    /// Gross vehicle weight in kilograms
    pub gvw_kg: Decimal,
    /// Carried for the record; not rated
    pub seating_capacity: u32,
    /// Attached trailer, if any
    pub trailer: Option<TrailerUse>,
    pub sum_insured: Vec<SumInsuredEntry>,
    pub cng: CngSelection,
    /// Value of the CNG kit
    pub cng_value: Decimal,
    /// Carried for the record; not rated
    pub fleet_owner: bool,
    pub previous_claim: bool,
    pub ncb: NcbTier,
    pub own_damage_covers: OwnDamageCoverRequest,
    pub liability_covers: LiabilityCovers,
    pub anti_theft: bool,
    /// Underwriter discount, in percent
    pub underwriter_discount_pct: Decimal,
    /// Printed on the statement header only
    pub policy_details: Option<PolicyDetails>,
}

/// Optional own-damage covers as entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnDamageCoverRequest {
    pub imt23: bool,
    pub nil_dep: Option<NilDepRequest>,
    /// Towing limit, when towing cover is chosen
    pub towing_value: Option<Decimal>,
    pub return_to_invoice: bool,
    pub geographic_extension: bool,
    pub consumables: bool,
    pub emi_protection: Option<EmiRequest>,
}

/// Nil-depreciation cover selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NilDepRequest {
    /// Discount on the nil-dep premium, in percent
    pub discount_pct: Decimal,
    /// Whether the nil-dep renewal discount applies
    pub renewal_discount: bool,
}

/// EMI protection selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmiRequest {
    /// Monthly instalment covered
    pub value: Decimal,
    pub term_months: u32,
}

/// Optional liability covers
///
/// Counts cannot be negative, so these are used as entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiabilityCovers {
    /// PA cover for the owner-driver
    pub pa_owner_driver: bool,
    /// LL for employees: number of employees
    pub ll_employees: Option<u32>,
    /// LL for paid driver, cleaner and conductor
    pub ll_paid_crew: Option<PaidCrew>,
    /// PA cover for the paid driver
    pub pa_paid_driver: bool,
    /// LL for non-fare-paying passengers, other than employees
    pub ll_nfpp_other: Option<u32>,
    /// LL for non-fare-paying passengers, including employees
    pub ll_nfpp_incl: Option<u32>,
}

/// Head counts of paid crew
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaidCrew {
    pub drivers: u32,
    pub cleaners: u32,
    pub conductors: u32,
}

impl PaidCrew {
    pub fn head_count(&self) -> u32 {
        self.drivers
            .saturating_add(self.cleaners)
            .saturating_add(self.conductors)
    }
}

/// Policy particulars printed above a statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyDetails {
    pub insured_name: String,
    pub previous_policy_number: String,
    pub registration_number: String,
    pub engine_number: String,
    pub chassis_number: String,
}
