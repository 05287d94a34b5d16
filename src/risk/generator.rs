//! Country risk generation: identity → seeded stream → three category draws,
//! worst-of overall, and a synthetic "last updated" date from a fourth draw.

use super::level::{worst_risk, RiskCategory, RiskLevel};
use super::text::{category_description, overall_advisory, placeholder_sources, Source};
use crate::seed::generator_for;
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::debug;

/// Window (in days) for the synthetic "last updated" offset.
const RECENCY_WINDOW_DAYS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRisk {
    pub category: RiskCategory,
    pub level: RiskLevel,
    pub description: String,
}

impl CategoryRisk {
    fn new(category: RiskCategory, level: RiskLevel) -> Self {
        Self {
            category,
            level,
            description: category_description(category, level),
        }
    }
}

/// One entry per category, serialized as an object keyed by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRisks {
    pub security: CategoryRisk,
    pub health: CategoryRisk,
    pub political: CategoryRisk,
}

impl CategoryRisks {
    /// Entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRisk> {
        [&self.security, &self.health, &self.political].into_iter()
    }

    pub fn levels(&self) -> [RiskLevel; 3] {
        [self.security.level, self.health.level, self.political.level]
    }
}

impl Index<RiskCategory> for CategoryRisks {
    type Output = CategoryRisk;

    fn index(&self, category: RiskCategory) -> &CategoryRisk {
        match category {
            RiskCategory::Security => &self.security,
            RiskCategory::Health => &self.health,
            RiskCategory::Political => &self.political,
        }
    }
}

/// Generated risk record for one country. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRisk {
    pub id: i64,
    pub name: String,
    #[serde(rename = "flagEmoji", skip_serializing_if = "Option::is_none", default)]
    pub flag_emoji: Option<String>,
    pub overall: RiskLevel,
    pub categories: CategoryRisks,
    pub sources: Vec<Source>,
    #[serde(rename = "lastUpdatedISO")]
    pub last_updated_iso: String,
    pub advisory: String,
}

/// Generate the record for `(id, name)` anchored on today's UTC date.
pub fn generate_country_risk(id: i64, name: &str, flag_emoji: Option<&str>) -> CountryRisk {
    generate_country_risk_as_of(id, name, flag_emoji, Utc::now().date_naive())
}

/// Same as [`generate_country_risk`] with an explicit date anchor. Levels do
/// not depend on `today`; only `last_updated_iso` does.
pub fn generate_country_risk_as_of(
    id: i64,
    name: &str,
    flag_emoji: Option<&str>,
    today: NaiveDate,
) -> CountryRisk {
    let mut rng = generator_for(id, name);

    // Draw order is security, health, political; it fixes the output.
    let security = RiskLevel::from_draw(rng.next_f64());
    let health = RiskLevel::from_draw(rng.next_f64());
    let political = RiskLevel::from_draw(rng.next_f64());
    let overall = worst_risk([security, health, political]);

    let days_ago = (rng.next_f64() * RECENCY_WINDOW_DAYS).floor() as u64;
    let last_updated = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);

    debug!(id, name, %overall, days_ago, "generated country risk");

    CountryRisk {
        id,
        name: name.to_string(),
        flag_emoji: flag_emoji.map(str::to_string),
        overall,
        categories: CategoryRisks {
            security: CategoryRisk::new(RiskCategory::Security, security),
            health: CategoryRisk::new(RiskCategory::Health, health),
            political: CategoryRisk::new(RiskCategory::Political, political),
        },
        sources: placeholder_sources(),
        last_updated_iso: last_updated.format("%Y-%m-%d").to_string(),
        advisory: overall_advisory(overall).to_string(),
    }
}
