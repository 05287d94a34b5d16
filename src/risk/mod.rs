//! Risk taxonomy, fixed narrative text, and the per-country generator.

mod generator;
mod level;
mod text;

pub use generator::{
    generate_country_risk, generate_country_risk_as_of, CategoryRisk, CategoryRisks, CountryRisk,
};
pub use level::{worst_risk, RiskCategory, RiskLevel, RiskLevelMeta};
pub use text::{category_description, checklist, overall_advisory, placeholder_sources, Source};
