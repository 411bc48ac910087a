//! Own-damage discount lines
//!
//! Discounts are line items inside the OD total and are stored as signed,
//! non-positive amounts. The helpers here return the discount as a
//! magnitude; `OwnDamageDiscounts::from_magnitudes` applies the sign.

use core_kernel::{Money, Rate};
use serde::{Deserialize, Serialize};

use crate::input::NilDepCover;
use crate::own_damage::OwnDamagePremium;
use crate::tables;

/// Discount lines, each stored as a negative (or zero) amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnDamageDiscounts {
    pub anti_theft: Money,
    pub nil_dep_discount: Money,
    pub nil_dep_renewal: Money,
    pub underwriter: Money,
    pub no_claim_bonus: Money,
    /// Amount the NCB percent was applied to
    pub ncb_basis: Money,
}

/// Discount magnitudes before signing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountAmounts {
    pub anti_theft: Money,
    pub nil_dep_discount: Money,
    pub nil_dep_renewal: Money,
    pub underwriter: Money,
    pub no_claim_bonus: Money,
    pub ncb_basis: Money,
}

impl OwnDamageDiscounts {
    pub fn from_magnitudes(amounts: DiscountAmounts) -> Self {
        Self {
            anti_theft: -amounts.anti_theft,
            nil_dep_discount: -amounts.nil_dep_discount,
            nil_dep_renewal: -amounts.nil_dep_renewal,
            underwriter: -amounts.underwriter,
            no_claim_bonus: -amounts.no_claim_bonus,
            ncb_basis: amounts.ncb_basis,
        }
    }

    /// Sum of the signed discount lines (the NCB basis is not a line)
    pub fn total(&self) -> Money {
        self.anti_theft + self.nil_dep_discount + self.nil_dep_renewal + self.underwriter + self.no_claim_bonus
    }
}

/// Underwriter discount on basic OD, electrical, GVW loading, CNG extra and
/// IMT-23
pub fn underwriter(rate: Rate, lines: &OwnDamagePremium) -> Money {
    rate.apply(&lines.underwriting_basis()).non_negative()
}

/// 2.5% of the underwriting basis net of the underwriter discount, capped
/// at Rs 500
///
/// Not floored at zero. With percents limited to 0..=100 the net basis
/// cannot go negative, so the floor is never needed.
pub fn anti_theft(selected: bool, lines: &OwnDamagePremium, underwriter_discount: Money) -> Money {
    if !selected {
        return Money::ZERO;
    }
    let candidate = tables::ANTI_THEFT_RATE.apply(&(lines.underwriting_basis() - underwriter_discount));
    candidate.at_most(tables::ANTI_THEFT_CAP)
}

/// User-supplied percent of the nil-dep premium
pub fn nil_dep_discount(cover: Option<NilDepCover>, nil_dep_premium: Money) -> Money {
    match cover {
        Some(cover) => cover.discount.apply(&nil_dep_premium).non_negative(),
        None => Money::ZERO,
    }
}

/// 5% of the nil-dep premium when the renewal discount is claimed
pub fn nil_dep_renewal(cover: Option<NilDepCover>, nil_dep_premium: Money) -> Money {
    match cover {
        Some(cover) if cover.renewal_discount => {
            tables::NIL_DEP_RENEWAL_RATE.apply(&nil_dep_premium).non_negative()
        }
        _ => Money::ZERO,
    }
}

/// Amount the NCB percent applies to: the rated OD lines that earn NCB,
/// net of every discount taken before it
pub fn ncb_basis(
    lines: &OwnDamagePremium,
    anti_theft: Money,
    nil_dep_renewal: Money,
    nil_dep_discount: Money,
    underwriter: Money,
) -> Money {
    lines.basic_od
        + lines.electrical_accessories
        + lines.gvw_loading
        + lines.cng_extra
        + lines.geographic_extension
        + lines.imt23
        + lines.towing
        + lines.nil_depreciation
        - anti_theft
        - nil_dep_renewal
        - nil_dep_discount
        - underwriter
}

/// NCB discount; `rate` is already zero after a claim or a name transfer.
/// Never negative.
pub fn no_claim_bonus(rate: Rate, basis: Money) -> Money {
    if rate.is_zero() {
        return Money::ZERO;
    }
    rate.apply(&basis).non_negative()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lines(basic_od: i64) -> OwnDamagePremium {
        OwnDamagePremium {
            basic_od: Money::from_rupees(basic_od),
            ..Default::default()
        }
    }

    #[test]
    fn test_anti_theft_capped() {
        assert_eq!(anti_theft(true, &lines(10000), Money::ZERO), Money::from_rupees(250));
        assert_eq!(anti_theft(true, &lines(100000), Money::ZERO), Money::from_rupees(500));
        assert_eq!(anti_theft(false, &lines(100000), Money::ZERO), Money::ZERO);
    }

    #[test]
    fn test_anti_theft_net_of_underwriter() {
        assert_eq!(
            anti_theft(true, &lines(10000), Money::from_rupees(2000)),
            Money::from_rupees(200)
        );
    }

    #[test]
    fn test_underwriter_divides_percent() {
        let rate = Rate::from_percentage(dec!(10));
        assert_eq!(underwriter(rate, &lines(8755)), Money::new(dec!(875.5)));
    }

    #[test]
    fn test_nil_dep_discounts() {
        let cover = Some(NilDepCover {
            discount: Rate::from_percentage(dec!(50)),
            renewal_discount: true,
        });
        let premium = Money::from_rupees(2000);

        assert_eq!(nil_dep_discount(cover, premium), Money::from_rupees(1000));
        assert_eq!(nil_dep_renewal(cover, premium), Money::from_rupees(100));
        assert_eq!(nil_dep_discount(None, premium), Money::ZERO);
    }

    #[test]
    fn test_ncb_never_negative() {
        let rate = Rate::from_percentage(dec!(20));
        assert_eq!(no_claim_bonus(rate, Money::from_rupees(-100)), Money::ZERO);
        assert_eq!(no_claim_bonus(rate, Money::from_rupees(1000)), Money::from_rupees(200));
        assert_eq!(no_claim_bonus(Rate::ZERO, Money::from_rupees(1000)), Money::ZERO);
    }

    #[test]
    fn test_discounts_are_signed() {
        let discounts = OwnDamageDiscounts::from_magnitudes(DiscountAmounts {
            anti_theft: Money::from_rupees(500),
            underwriter: Money::from_rupees(100),
            ..Default::default()
        });
        assert_eq!(discounts.anti_theft, Money::from_rupees(-500));
        assert_eq!(discounts.total(), Money::from_rupees(-600));
    }
}
