//! Vehicle and policy-level selections
//!
//! Enumerations the collaborator picks from when assembling a quote request.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Rating zone of the vehicle's registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    /// Any zone other than A or B
    #[default]
    #[serde(rename = "other", alias = "C")]
    Other,
}

/// How a CNG kit, if any, is fitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CngSelection {
    /// No CNG kit
    #[default]
    Off,
    /// Kit fitted after manufacture; its value is rated separately
    Extra,
    /// Factory-fitted kit; loads the OD premium instead
    Inbuilt,
}

impl CngSelection {
    /// Returns true if any CNG kit is fitted
    pub fn is_fitted(&self) -> bool {
        !matches!(self, CngSelection::Off)
    }
}

/// Use of an attached trailer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailerUse {
    Agricultural,
    NonAgricultural,
}

/// No-Claim-Bonus tier carried over from the previous policy
///
/// Each tier maps to the NCB discount percent allowed on renewal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NcbTier {
    /// No tier selected
    #[default]
    #[serde(rename = "", alias = "unset")]
    Unset,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "25")]
    TwentyFive,
    #[serde(rename = "35")]
    ThirtyFive,
    #[serde(rename = "45")]
    FortyFive,
    #[serde(rename = "50")]
    Fifty,
    /// Ownership changed; NCB does not carry over
    #[serde(rename = "name_transferred")]
    NameTransferred,
}

impl NcbTier {
    /// All tiers, in selection order
    pub const ALL: [NcbTier; 8] = [
        NcbTier::Unset,
        NcbTier::Zero,
        NcbTier::Twenty,
        NcbTier::TwentyFive,
        NcbTier::ThirtyFive,
        NcbTier::FortyFive,
        NcbTier::Fifty,
        NcbTier::NameTransferred,
    ];

    /// NCB discount percent earned on renewal from this tier
    pub fn discount_percent(&self) -> Decimal {
        match self {
            NcbTier::Zero => dec!(20),
            NcbTier::Twenty => dec!(25),
            NcbTier::TwentyFive => dec!(35),
            NcbTier::ThirtyFive => dec!(45),
            NcbTier::FortyFive => dec!(50),
            NcbTier::Fifty => dec!(50),
            NcbTier::Unset => dec!(0),
            NcbTier::NameTransferred => dec!(0),
        }
    }

    /// Returns true if the tier forces a zero NCB regardless of history
    pub fn is_locked(&self) -> bool {
        matches!(self, NcbTier::NameTransferred)
    }
}
