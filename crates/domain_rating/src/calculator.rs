//! Premium calculator
//!
//! Runs the OD chain, the discount chain, the liability chain and GST over
//! one normalized input. The order below follows the data dependencies:
//! IMT-23 needs the base OD lines, nil-dep needs IMT-23, the underwriter
//! discount needs both, and inbuilt CNG, anti-theft and NCB need the
//! underwriter discount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::breakdown::PremiumBreakdown;
use crate::discounts::{self, DiscountAmounts, OwnDamageDiscounts};
use crate::error::RatingError;
use crate::input::RatingInput;
use crate::liability::LiabilityPremium;
use crate::own_damage::{self, OwnDamagePremium};
use crate::request::QuoteRequest;
use crate::tables;

/// Calculation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingOptions {
    /// Add the CNG kit value to the consumables basis
    pub consumable_includes_cng: bool,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            consumable_includes_cng: true,
        }
    }
}

/// Computes premium breakdowns
///
/// Stateless apart from its options; one instance can serve any number of
/// calculations.
#[derive(Debug, Clone, Default)]
pub struct PremiumCalculator {
    options: RatingOptions,
}

impl PremiumCalculator {
    pub fn new(options: RatingOptions) -> Self {
        Self { options }
    }

    /// Normalizes a request and computes its breakdown
    ///
    /// # Errors
    ///
    /// Returns the normalization error, if any. The computation itself
    /// cannot fail.
    pub fn quote(&self, request: &QuoteRequest, today: NaiveDate) -> Result<PremiumBreakdown, RatingError> {
        let input = RatingInput::from_request(request, today)?;
        Ok(self.compute(&input))
    }

    /// Computes the premium breakdown for a normalized input
    pub fn compute(&self, input: &RatingInput) -> PremiumBreakdown {
        let age = input.age;
        let si = &input.sum_insured;
        let covers = &input.covers;
        let od_rate_percent = tables::od_rate_percent(input.zone, age);

        let mut od = OwnDamagePremium {
            basic_od: own_damage::basic_od(si, od_rate_percent),
            gvw_loading: own_damage::gvw_loading(input.gvw_kg),
            electrical_accessories: own_damage::electrical_accessories(si),
            cng_extra: own_damage::cng_extra(input.cng, input.cng_value),
            towing: own_damage::towing(covers.towing),
            geographic_extension: own_damage::geographic_extension(covers.geographic_extension),
            return_to_invoice: own_damage::return_to_invoice(covers.return_to_invoice, age, si),
            consumables: own_damage::consumables(
                covers.consumables,
                age,
                si,
                input.cng_value,
                self.options.consumable_includes_cng,
            ),
            emi_protection: own_damage::emi_protection(covers.emi_protection, age),
            trailer_od: own_damage::trailer_od(input.trailer, si),
            ..Default::default()
        };
        od.imt23 = own_damage::imt23(covers.imt23, &od);
        od.nil_depreciation = own_damage::nil_depreciation(covers, age, &od);

        let underwriter = discounts::underwriter(input.underwriter_discount, &od);
        od.inbuilt_cng = own_damage::inbuilt_cng(input.cng, &od, underwriter);

        let anti_theft = discounts::anti_theft(input.anti_theft, &od, underwriter);
        let nil_dep_discount = discounts::nil_dep_discount(covers.nil_dep, od.nil_depreciation);
        let nil_dep_renewal = discounts::nil_dep_renewal(covers.nil_dep, od.nil_depreciation);
        let ncb_basis = discounts::ncb_basis(&od, anti_theft, nil_dep_renewal, nil_dep_discount, underwriter);
        let no_claim_bonus = discounts::no_claim_bonus(input.ncb_rate(), ncb_basis);

        let discounts = OwnDamageDiscounts::from_magnitudes(DiscountAmounts {
            anti_theft,
            nil_dep_discount,
            nil_dep_renewal,
            underwriter,
            no_claim_bonus,
            ncb_basis,
        });

        let liability = LiabilityPremium::rate(input);
        let breakdown = PremiumBreakdown::assemble(age, od_rate_percent, od, discounts, liability);

        tracing::debug!(
            age = %age,
            zone = ?input.zone,
            od_rate = %od_rate_percent,
            total_od = %breakdown.total_own_damage.amount(),
            total_liability = %breakdown.total_liability.amount(),
            grand_total = %breakdown.grand_total.amount(),
            "Premium computed"
        );

        breakdown
    }
}

/// Computes a breakdown with the default options
pub fn compute_premium(input: &RatingInput) -> PremiumBreakdown {
    PremiumCalculator::default().compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Money;
    use rust_decimal_macros::dec;

    use crate::sum_insured::{SumInsuredCategory, SumInsuredEntry};
    use crate::vehicle::Zone;

    fn scenario_one() -> QuoteRequest {
        QuoteRequest {
            registration_date: NaiveDate::from_ymd_opt(2021, 1, 1),
            renewal_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            zone: Zone::A,
            gvw_kg: dec!(10000),
            sum_insured: vec![SumInsuredEntry::new(SumInsuredCategory::IdvVehicle, dec!(500000))],
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_vehicle_grand_total() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let breakdown = PremiumCalculator::default().quote(&scenario_one(), today).unwrap();

        assert_eq!(breakdown.own_damage.basic_od, Money::from_rupees(8755));
        assert_eq!(breakdown.total_own_damage, Money::from_rupees(8755));
        assert_eq!(breakdown.liability.basic_tp, Money::from_rupees(27186));
        assert_eq!(breakdown.grand_total, Money::new(dec!(40779.22)));
    }

    #[test]
    fn test_free_function_matches_calculator() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        let input = RatingInput::from_request(&scenario_one(), today).unwrap();

        assert_eq!(compute_premium(&input), PremiumCalculator::default().compute(&input));
    }
}
