//! Test Data Builders
//!
//! Provides a builder for quote requests. Tests set only the fields they
//! care about; everything else keeps the plain-vehicle defaults from
//! `QuoteFixtures::plain_vehicle`.

use chrono::NaiveDate;
use domain_rating::request::{EmiRequest, NilDepRequest, PaidCrew};
use domain_rating::{
    CngSelection, LiabilityCovers, NcbTier, PolicyDetails, QuoteRequest, SumInsuredCategory,
    SumInsuredEntry, TrailerUse, Zone,
};
use rust_decimal::Decimal;

use crate::fixtures::QuoteFixtures;

/// Builder for constructing quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Starts from the zone A, 3-year-old, 10,000 kg plain vehicle
    pub fn new() -> Self {
        Self {
            request: QuoteFixtures::plain_vehicle(),
        }
    }

    /// Starts from an empty request (every field defaulted)
    pub fn empty() -> Self {
        Self {
            request: QuoteRequest::default(),
        }
    }

    pub fn with_dates(mut self, registration: NaiveDate, renewal: NaiveDate) -> Self {
        self.request.registration_date = Some(registration);
        self.request.renewal_date = Some(renewal);
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.request.zone = zone;
        self
    }

    pub fn with_gvw(mut self, gvw_kg: Decimal) -> Self {
        self.request.gvw_kg = gvw_kg;
        self
    }

    /// Replaces the vehicle IDV row
    pub fn with_idv(mut self, amount: Decimal) -> Self {
        self.request
            .sum_insured
            .retain(|entry| entry.category != SumInsuredCategory::IdvVehicle);
        self.request
            .sum_insured
            .push(SumInsuredEntry::new(SumInsuredCategory::IdvVehicle, amount));
        self
    }

    /// Adds a sum insured row
    pub fn with_sum_insured(mut self, category: SumInsuredCategory, amount: Decimal) -> Self {
        self.request.sum_insured.push(SumInsuredEntry::new(category, amount));
        self
    }

    /// Fits a trailer with the given IDV
    pub fn with_trailer(mut self, usage: TrailerUse, idv: Decimal) -> Self {
        self.request.trailer = Some(usage);
        self.with_sum_insured(SumInsuredCategory::IdvTrailer, idv)
    }

    pub fn with_cng(mut self, cng: CngSelection, value: Decimal) -> Self {
        self.request.cng = cng;
        self.request.cng_value = value;
        self
    }

    pub fn with_ncb(mut self, tier: NcbTier) -> Self {
        self.request.ncb = tier;
        self
    }

    pub fn with_previous_claim(mut self) -> Self {
        self.request.previous_claim = true;
        self
    }

    pub fn with_imt23(mut self) -> Self {
        self.request.own_damage_covers.imt23 = true;
        self
    }

    pub fn with_nil_dep(mut self, discount_pct: Decimal, renewal_discount: bool) -> Self {
        self.request.own_damage_covers.nil_dep = Some(NilDepRequest {
            discount_pct,
            renewal_discount,
        });
        self
    }

    pub fn with_towing(mut self, value: Decimal) -> Self {
        self.request.own_damage_covers.towing_value = Some(value);
        self
    }

    pub fn with_return_to_invoice(mut self) -> Self {
        self.request.own_damage_covers.return_to_invoice = true;
        self
    }

    pub fn with_geographic_extension(mut self) -> Self {
        self.request.own_damage_covers.geographic_extension = true;
        self
    }

    pub fn with_consumables(mut self) -> Self {
        self.request.own_damage_covers.consumables = true;
        self
    }

    pub fn with_emi_protection(mut self, value: Decimal, term_months: u32) -> Self {
        self.request.own_damage_covers.emi_protection = Some(EmiRequest { value, term_months });
        self
    }

    pub fn with_liability(mut self, covers: LiabilityCovers) -> Self {
        self.request.liability_covers = covers;
        self
    }

    pub fn with_paid_crew(mut self, drivers: u32, cleaners: u32, conductors: u32) -> Self {
        self.request.liability_covers.ll_paid_crew = Some(PaidCrew {
            drivers,
            cleaners,
            conductors,
        });
        self
    }

    pub fn with_anti_theft(mut self) -> Self {
        self.request.anti_theft = true;
        self
    }

    pub fn with_underwriter_discount(mut self, percent: Decimal) -> Self {
        self.request.underwriter_discount_pct = percent;
        self
    }

    pub fn with_policy_details(mut self, details: PolicyDetails) -> Self {
        self.request.policy_details = Some(details);
        self
    }

    /// Builds the request
    pub fn build(self) -> QuoteRequest {
        self.request
    }
}
