//! Third-party liability premium
//!
//! Basic TP is set by the GVW bracket; every add-on is a flat amount or a
//! per-head rate, and zero when not selected.

use core_kernel::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::RatingInput;
use crate::tables;

/// Liability lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilityPremium {
    pub basic_tp: Money,
    pub pa_owner_driver: Money,
    pub ll_employees: Money,
    pub ll_paid_crew: Money,
    pub pa_paid_driver: Money,
    pub ll_nfpp_other: Money,
    pub ll_nfpp_incl: Money,
    pub geographic_extension: Money,
    pub cng_kit: Money,
    pub trailer: Money,
}

impl LiabilityPremium {
    /// Rates the liability side of a normalized input
    pub fn rate(input: &RatingInput) -> Self {
        let covers = &input.liability;

        Self {
            basic_tp: tables::basic_tp(input.gvw_kg),
            pa_owner_driver: flat(covers.pa_owner_driver, tables::PA_OWNER_DRIVER),
            ll_employees: per_head(covers.ll_employees, tables::LL_EMPLOYEE_PER_HEAD),
            ll_paid_crew: per_head(
                covers.ll_paid_crew.map(|crew| crew.head_count()),
                tables::LL_PAID_CREW_PER_HEAD,
            ),
            pa_paid_driver: flat(covers.pa_paid_driver, tables::PA_PAID_DRIVER),
            ll_nfpp_other: per_head(covers.ll_nfpp_other, tables::LL_NFPP_PER_HEAD),
            ll_nfpp_incl: per_head(covers.ll_nfpp_incl, tables::LL_NFPP_PER_HEAD),
            geographic_extension: flat(input.covers.geographic_extension, tables::GEOGRAPHIC_EXTENSION_TP),
            cng_kit: flat(input.cng.is_fitted(), tables::CNG_KIT_TP),
            trailer: input.trailer.map(tables::trailer_tp).unwrap_or(Money::ZERO),
        }
    }

    /// Sum of the add-on lines (everything but basic TP)
    pub fn total_addons(&self) -> Money {
        [
            self.pa_owner_driver,
            self.ll_employees,
            self.ll_paid_crew,
            self.pa_paid_driver,
            self.ll_nfpp_other,
            self.ll_nfpp_incl,
            self.geographic_extension,
            self.cng_kit,
            self.trailer,
        ]
        .iter()
        .sum()
    }

    /// Basic TP plus add-ons
    pub fn total(&self) -> Money {
        self.basic_tp + self.total_addons()
    }
}

fn flat(selected: bool, amount: Money) -> Money {
    if selected {
        amount
    } else {
        Money::ZERO
    }
}

fn per_head(count: Option<u32>, rate: Money) -> Money {
    match count {
        Some(heads) => rate * Decimal::from(heads),
        None => Money::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_head_and_flat() {
        assert_eq!(per_head(Some(3), tables::LL_NFPP_PER_HEAD), Money::from_rupees(225));
        assert_eq!(per_head(None, tables::LL_NFPP_PER_HEAD), Money::ZERO);
        assert_eq!(flat(true, tables::PA_OWNER_DRIVER), Money::from_rupees(320));
        assert_eq!(flat(false, tables::PA_OWNER_DRIVER), Money::ZERO);
    }
}
