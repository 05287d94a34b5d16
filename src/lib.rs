//! Travel Risk Advisor — deterministic synthetic risk ratings per country.
//!
//! Modular structure:
//! - [`seed`] — FNV-1a seed hashing and the mulberry32 stream
//! - [`risk`] — Risk levels, categories, and the per-country generator
//! - [`catalog`] — Static country catalog (compiled-in or JSON)
//! - [`index`] — Compute-once record map, map fills, and search
//! - [`brief`] — Plain-text country brief
//! - [`logging`] — Structured logging

pub mod config;
pub mod error;
pub mod seed;
pub mod risk;
pub mod catalog;
pub mod index;
pub mod brief;
pub mod logging;

pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use risk::{generate_country_risk, worst_risk, CountryRisk, RiskCategory, RiskLevel};
pub use catalog::{CountryCatalog, CountryEntry};
pub use index::RiskIndex;
pub use brief::render_brief;
pub use logging::StructuredLogger;
