//! Sum insured categories and their aggregation
//!
//! The collaborator supplies sum insured as rows of `{category, amount}`;
//! a category may appear on several rows, and missing categories are zero.

use core_kernel::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RatingError;
use crate::input::MAX_AMOUNT;

/// Sum insured category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SumInsuredCategory {
    /// Insured declared value of the vehicle
    #[serde(rename = "idv_vehicle")]
    IdvVehicle,
    /// Non-electrical accessories
    #[serde(rename = "non_elec")]
    NonElectrical,
    /// Allied body
    #[serde(rename = "allied")]
    Allied,
    /// Articulated body
    #[serde(rename = "articulated")]
    Articulated,
    /// Electrical and electronic accessories
    #[serde(rename = "elec_access")]
    ElectricalAccessories,
    /// Insured declared value of the trailer; only valid with a trailer
    #[serde(rename = "idv_trailer")]
    IdvTrailer,
}

impl SumInsuredCategory {
    /// Form key of the category
    pub fn key(&self) -> &'static str {
        match self {
            SumInsuredCategory::IdvVehicle => "idv_vehicle",
            SumInsuredCategory::NonElectrical => "non_elec",
            SumInsuredCategory::Allied => "allied",
            SumInsuredCategory::Articulated => "articulated",
            SumInsuredCategory::ElectricalAccessories => "elec_access",
            SumInsuredCategory::IdvTrailer => "idv_trailer",
        }
    }
}

/// One sum insured row as entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumInsuredEntry {
    pub category: SumInsuredCategory,
    pub amount: Decimal,
}

impl SumInsuredEntry {
    pub fn new(category: SumInsuredCategory, amount: Decimal) -> Self {
        Self { category, amount }
    }
}

/// Sum insured totals per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumInsured {
    pub idv_vehicle: Money,
    pub non_electrical: Money,
    pub allied: Money,
    pub articulated: Money,
    pub electrical_accessories: Money,
    pub idv_trailer: Money,
}

impl SumInsured {
    /// Sums rows per category
    ///
    /// Trailer rows are dropped when no trailer is fitted.
    ///
    /// # Errors
    ///
    /// Returns `NegativeAmount` for any negative row, and `AmountTooLarge`
    /// when a category total would exceed `MAX_AMOUNT`.
    pub fn aggregate(entries: &[SumInsuredEntry], trailer_fitted: bool) -> Result<Self, RatingError> {
        let mut totals = SumInsured::default();

        for entry in entries {
            if entry.amount.is_sign_negative() && !entry.amount.is_zero() {
                return Err(RatingError::negative_amount(
                    format!("sum_insured.{}", entry.category.key()),
                    entry.amount,
                ));
            }

            let total = match entry.category {
                SumInsuredCategory::IdvVehicle => &mut totals.idv_vehicle,
                SumInsuredCategory::NonElectrical => &mut totals.non_electrical,
                SumInsuredCategory::Allied => &mut totals.allied,
                SumInsuredCategory::Articulated => &mut totals.articulated,
                SumInsuredCategory::ElectricalAccessories => &mut totals.electrical_accessories,
                SumInsuredCategory::IdvTrailer if trailer_fitted => &mut totals.idv_trailer,
                SumInsuredCategory::IdvTrailer => {
                    tracing::warn!(amount = %entry.amount, "Ignoring trailer IDV row without a trailer");
                    continue;
                }
            };

            *total = total
                .checked_add(Money::new(entry.amount))
                .filter(|sum| sum.amount() <= MAX_AMOUNT)
                .ok_or_else(|| {
                    RatingError::amount_too_large(format!("sum_insured.{}", entry.category.key()), entry.amount)
                })?;
        }

        Ok(totals)
    }

    /// Base sum insured: vehicle, non-electrical, allied and articulated.
    /// Electrical accessories and the trailer are rated separately.
    pub fn base(&self) -> Money {
        self.idv_vehicle + self.non_electrical + self.allied + self.articulated
    }

    /// Invoice-protected value: vehicle plus allied body
    pub fn invoice_value(&self) -> Money {
        self.idv_vehicle + self.allied
    }

    /// Total for a category
    pub fn get(&self, category: SumInsuredCategory) -> Money {
        match category {
            SumInsuredCategory::IdvVehicle => self.idv_vehicle,
            SumInsuredCategory::NonElectrical => self.non_electrical,
            SumInsuredCategory::Allied => self.allied,
            SumInsuredCategory::Articulated => self.articulated,
            SumInsuredCategory::ElectricalAccessories => self.electrical_accessories,
            SumInsuredCategory::IdvTrailer => self.idv_trailer,
        }
    }
}
