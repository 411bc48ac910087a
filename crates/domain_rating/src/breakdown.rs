//! Premium breakdown
//!
//! The output of one calculation. Every component is a named amount so a
//! consumer can render it, hide it when zero, or audit it on its own.

use core_kernel::{Money, VehicleAge};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::discounts::OwnDamageDiscounts;
use crate::liability::LiabilityPremium;
use crate::own_damage::OwnDamagePremium;
use crate::tax::Taxes;

/// Line labels, shared by the breakdown and the rendered statement
pub mod labels {
    pub const BASIC_OD: &str = "Basic OD";
    pub const GVW_LOADING: &str = "GVW Loading";
    pub const ELECTRICAL_ACCESSORIES: &str = "Electric Accessories";
    pub const CNG_EXTRA: &str = "CNG Extra";
    pub const IMT23: &str = "IMT-23";
    pub const TOWING: &str = "Towing Charge";
    pub const GEOGRAPHIC_AREA: &str = "Geographic Area";
    pub const RETURN_TO_INVOICE: &str = "Return to Invoice";
    pub const CONSUMABLES: &str = "Consumable";
    pub const NIL_DEPRECIATION: &str = "Nil Depreciation";
    pub const EMI_PROTECTION: &str = "EMI Protection";
    pub const TRAILER_OD: &str = "Trailer OD";
    pub const INBUILT_CNG: &str = "Inbuilt CNG OD";

    pub const ANTI_THEFT: &str = "Anti Theft Discount";
    pub const NIL_DEP_DISCOUNT: &str = "Nil Dep Discount";
    pub const NIL_DEP_RENEWAL: &str = "Nil Dep Renewal Discount";
    pub const UNDERWRITER: &str = "U/W Discount";
    pub const NCB: &str = "NCB Discount";

    pub const BASIC_TP: &str = "Basic TP";
    pub const PA_OWNER_DRIVER: &str = "PA Owner-Driver";
    pub const LL_EMPLOYEES: &str = "LL Employees";
    pub const LL_PAID_CREW: &str = "LL Paid Driver/Cleaner/Conductor";
    pub const PA_PAID_DRIVER: &str = "PA Paid Driver";
    pub const LL_NFPP_OTHER: &str = "LL NFPP (Other)";
    pub const LL_NFPP_INCL: &str = "LL NFPP (Incl. Employees)";
    pub const GEOGRAPHIC_TP: &str = "Geographic Extension TP";
    pub const CNG_KIT_TP: &str = "CNG Kit TP";
    pub const TRAILER_TP: &str = "Trailer TP";

    pub const OD_GST: &str = "OD GST @ 18%";
    pub const TP_GST_BASIC: &str = "TP GST @ 12% (Basic TP)";
    pub const TP_GST_ADDONS: &str = "TP GST @ 18% (Add-ons)";

    pub const TOTAL_OD: &str = "Total OD";
    pub const TOTAL_LIABILITY: &str = "Total Liability";
    pub const TOTAL_PREMIUM: &str = "Total Premium (OD + Liability)";
    pub const GST_TOTAL: &str = "GST (OD + TP)";
    pub const GRAND_TOTAL: &str = "Grand Total";
}

/// Section a breakdown line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    OwnDamage,
    Discounts,
    Liability,
    Taxes,
    Summary,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::OwnDamage,
        Section::Discounts,
        Section::Liability,
        Section::Taxes,
        Section::Summary,
    ];

    /// Heading used on the statement
    pub fn title(&self) -> &'static str {
        match self {
            Section::OwnDamage => "Own Damage (OD) Premium",
            Section::Discounts => "Discounts",
            Section::Liability => "Liability / TP Premium",
            Section::Taxes => "Taxes",
            Section::Summary => "Summary",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.title() == title)
    }
}

/// One named amount of the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub section: Section,
    pub label: &'static str,
    pub amount: Money,
    /// Shown even when zero (basic TP, NCB and the totals)
    pub always_shown: bool,
}

impl BreakdownLine {
    fn new(section: Section, label: &'static str, amount: Money) -> Self {
        Self { section, label, amount, always_shown: false }
    }

    fn pinned(section: Section, label: &'static str, amount: Money) -> Self {
        Self { section, label, amount, always_shown: true }
    }

    pub fn is_visible(&self) -> bool {
        self.always_shown || !self.amount.is_zero()
    }
}

/// Full premium breakdown of one quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub vehicle_age: VehicleAge,
    /// Tariff OD rate used, in percent of sum insured
    pub od_rate_percent: Decimal,
    pub own_damage: OwnDamagePremium,
    pub discounts: OwnDamageDiscounts,
    /// Premium lines plus (negative) discount lines
    pub total_own_damage: Money,
    pub liability: LiabilityPremium,
    pub total_liability: Money,
    pub taxes: Taxes,
    pub grand_total: Money,
}

impl PremiumBreakdown {
    /// Derives the totals, taxes and grand total from the rated lines
    pub fn assemble(
        vehicle_age: VehicleAge,
        od_rate_percent: Decimal,
        own_damage: OwnDamagePremium,
        discounts: OwnDamageDiscounts,
        liability: LiabilityPremium,
    ) -> Self {
        let total_own_damage = own_damage.total() + discounts.total();
        let total_liability = liability.total();
        let taxes = Taxes::assess(total_own_damage, &liability);
        let grand_total = total_own_damage + total_liability + taxes.od_gst + taxes.tp_gst();

        Self {
            vehicle_age,
            od_rate_percent,
            own_damage,
            discounts,
            total_own_damage,
            liability,
            total_liability,
            taxes,
            grand_total,
        }
    }

    /// OD plus liability, before GST
    pub fn total_premium(&self) -> Money {
        self.total_own_damage + self.total_liability
    }

    pub fn gst_total(&self) -> Money {
        self.taxes.gst_total()
    }

    /// Every line of the breakdown, in display order
    pub fn lines(&self) -> Vec<BreakdownLine> {
        use labels::*;

        let od = &self.own_damage;
        let disc = &self.discounts;
        let tp = &self.liability;

        vec![
            BreakdownLine::new(Section::OwnDamage, BASIC_OD, od.basic_od),
            BreakdownLine::new(Section::OwnDamage, GVW_LOADING, od.gvw_loading),
            BreakdownLine::new(Section::OwnDamage, ELECTRICAL_ACCESSORIES, od.electrical_accessories),
            BreakdownLine::new(Section::OwnDamage, CNG_EXTRA, od.cng_extra),
            BreakdownLine::new(Section::OwnDamage, IMT23, od.imt23),
            BreakdownLine::new(Section::OwnDamage, TOWING, od.towing),
            BreakdownLine::new(Section::OwnDamage, GEOGRAPHIC_AREA, od.geographic_extension),
            BreakdownLine::new(Section::OwnDamage, RETURN_TO_INVOICE, od.return_to_invoice),
            BreakdownLine::new(Section::OwnDamage, CONSUMABLES, od.consumables),
            BreakdownLine::new(Section::OwnDamage, NIL_DEPRECIATION, od.nil_depreciation),
            BreakdownLine::new(Section::OwnDamage, EMI_PROTECTION, od.emi_protection),
            BreakdownLine::new(Section::OwnDamage, TRAILER_OD, od.trailer_od),
            BreakdownLine::new(Section::OwnDamage, INBUILT_CNG, od.inbuilt_cng),
            BreakdownLine::new(Section::Discounts, ANTI_THEFT, disc.anti_theft),
            BreakdownLine::new(Section::Discounts, NIL_DEP_DISCOUNT, disc.nil_dep_discount),
            BreakdownLine::new(Section::Discounts, NIL_DEP_RENEWAL, disc.nil_dep_renewal),
            BreakdownLine::new(Section::Discounts, UNDERWRITER, disc.underwriter),
            BreakdownLine::pinned(Section::Discounts, NCB, disc.no_claim_bonus),
            BreakdownLine::pinned(Section::Liability, BASIC_TP, tp.basic_tp),
            BreakdownLine::new(Section::Liability, PA_OWNER_DRIVER, tp.pa_owner_driver),
            BreakdownLine::new(Section::Liability, LL_EMPLOYEES, tp.ll_employees),
            BreakdownLine::new(Section::Liability, LL_PAID_CREW, tp.ll_paid_crew),
            BreakdownLine::new(Section::Liability, PA_PAID_DRIVER, tp.pa_paid_driver),
            BreakdownLine::new(Section::Liability, LL_NFPP_OTHER, tp.ll_nfpp_other),
            BreakdownLine::new(Section::Liability, LL_NFPP_INCL, tp.ll_nfpp_incl),
            BreakdownLine::new(Section::Liability, GEOGRAPHIC_TP, tp.geographic_extension),
            BreakdownLine::new(Section::Liability, CNG_KIT_TP, tp.cng_kit),
            BreakdownLine::new(Section::Liability, TRAILER_TP, tp.trailer),
            BreakdownLine::new(Section::Taxes, OD_GST, self.taxes.od_gst),
            BreakdownLine::new(Section::Taxes, TP_GST_BASIC, self.taxes.tp_gst_basic),
            BreakdownLine::new(Section::Taxes, TP_GST_ADDONS, self.taxes.tp_gst_addons),
            BreakdownLine::pinned(Section::Summary, TOTAL_OD, self.total_own_damage),
            BreakdownLine::pinned(Section::Summary, TOTAL_LIABILITY, self.total_liability),
            BreakdownLine::pinned(Section::Summary, TOTAL_PREMIUM, self.total_premium()),
            BreakdownLine::pinned(Section::Summary, GST_TOTAL, self.gst_total()),
            BreakdownLine::pinned(Section::Summary, GRAND_TOTAL, self.grand_total),
        ]
    }

    /// Looks up a line by section and label
    pub fn line(&self, section: Section, label: &str) -> Option<Money> {
        self.lines()
            .into_iter()
            .find(|line| line.section == section && line.label == label)
            .map(|line| line.amount)
    }
}
