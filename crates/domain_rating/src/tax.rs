//! GST on the quote
//!
//! OD is taxed at 18%. On the liability side basic TP is taxed at 12% and
//! the add-ons at 18%.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::liability::LiabilityPremium;
use crate::tables::{BASIC_TP_GST_RATE, OD_GST_RATE, TP_ADDON_GST_RATE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxes {
    pub od_gst: Money,
    pub tp_gst_basic: Money,
    pub tp_gst_addons: Money,
}

impl Taxes {
    pub fn assess(total_own_damage: Money, liability: &LiabilityPremium) -> Self {
        Self {
            od_gst: OD_GST_RATE.apply(&total_own_damage),
            tp_gst_basic: BASIC_TP_GST_RATE.apply(&liability.basic_tp),
            tp_gst_addons: TP_ADDON_GST_RATE.apply(&liability.total_addons()),
        }
    }

    pub fn tp_gst(&self) -> Money {
        self.tp_gst_basic + self.tp_gst_addons
    }

    pub fn gst_total(&self) -> Money {
        self.od_gst + self.tp_gst()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_split_tp_rates() {
        let liability = LiabilityPremium {
            basic_tp: Money::from_rupees(27186),
            pa_owner_driver: Money::from_rupees(320),
            ..Default::default()
        };
        let taxes = Taxes::assess(Money::from_rupees(8755), &liability);

        assert_eq!(taxes.od_gst, Money::new(dec!(1575.9)));
        assert_eq!(taxes.tp_gst_basic, Money::new(dec!(3262.32)));
        assert_eq!(taxes.tp_gst_addons, Money::new(dec!(57.6)));
        assert_eq!(taxes.gst_total(), Money::new(dec!(4895.82)));
    }
}
