//! GCCV Premium Rating Domain
//!
//! Computes the annual premium for a goods-carrying commercial vehicle
//! (other than a three-wheeler): own-damage premium and add-on covers,
//! discounts, third-party liability, GST and the grand total.
//!
//! # Architecture
//!
//! - **Request**: `QuoteRequest` is the form as submitted, deserialized from JSON
//! - **Input**: `RatingInput` is the validated request; normalization is the
//!   only fallible step
//! - **Calculation**: `PremiumCalculator` runs the OD, discount, TP and GST
//!   chains and returns a `PremiumBreakdown`
//! - **Presentation**: `QuoteStatement` renders a breakdown as text and reads
//!   it back
//!
//! # Rating flow
//!
//! ```text
//! QuoteRequest -> RatingInput -> OD lines -> discounts -> NCB
//!                                         \-> TP lines
//!                             -> GST -> PremiumBreakdown -> QuoteStatement
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{PremiumCalculator, QuoteRequest, QuoteStatement};
//!
//! let request: QuoteRequest = serde_json::from_str(json)?;
//! let breakdown = PremiumCalculator::default().quote(&request, today)?;
//! println!("{}", QuoteStatement::render(&breakdown, request.policy_details.as_ref()));
//! ```

pub mod vehicle;
pub mod tables;
pub mod sum_insured;
pub mod request;
pub mod input;
pub mod own_damage;
pub mod discounts;
pub mod liability;
pub mod tax;
pub mod breakdown;
pub mod calculator;
pub mod render;
pub mod error;

pub use vehicle::{Zone, CngSelection, TrailerUse, NcbTier};
pub use sum_insured::{SumInsured, SumInsuredCategory, SumInsuredEntry};
pub use request::{QuoteRequest, OwnDamageCoverRequest, LiabilityCovers, PolicyDetails};
pub use input::{RatingInput, OwnDamageCovers, MAX_AMOUNT};
pub use own_damage::OwnDamagePremium;
pub use discounts::OwnDamageDiscounts;
pub use liability::LiabilityPremium;
pub use tax::Taxes;
pub use breakdown::{PremiumBreakdown, BreakdownLine, Section};
pub use calculator::{PremiumCalculator, RatingOptions, compute_premium};
pub use render::QuoteStatement;
pub use error::RatingError;
