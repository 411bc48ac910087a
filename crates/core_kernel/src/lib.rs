//! Core Kernel - Foundational types for the GCCV premium calculator
//!
//! This crate provides the building blocks used by the rating domain:
//! - Money with exact decimal arithmetic and rupee display formatting
//! - Rates that turn user-facing percents into multipliers
//! - Policy dates and the fractional vehicle age derived from them

pub mod money;
pub mod temporal;
pub mod error;

pub use money::{Money, Rate, MoneyError};
pub use temporal::{PolicyDates, VehicleAge, TemporalError};
pub use error::CoreError;
