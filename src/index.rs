//! Per-country risk records computed once per catalog and reused for map
//! fills, search, and detail views.

use crate::catalog::CountryCatalog;
use crate::error::{AdvisorError, Result};
use crate::risk::{generate_country_risk_as_of, CountryRisk, RiskLevel};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::info;

/// Fill for countries that have no record.
pub const NO_DATA_COLOR: &str = "#e5e7eb";

/// Parse a `YYYY-MM-DD` date anchor.
pub fn parse_as_of(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AdvisorError::InvalidDate(s.to_string()))
}

/// Search result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOption {
    pub id: i64,
    pub name: String,
    pub risk: RiskLevel,
}

fn by_display_name(a: &SearchOption, b: &SearchOption) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Read-only id → record map plus name-sorted options.
#[derive(Debug, Clone)]
pub struct RiskIndex {
    records: HashMap<i64, CountryRisk>,
    options: Vec<SearchOption>,
    as_of: NaiveDate,
}

impl RiskIndex {
    pub fn build(catalog: &CountryCatalog, today: NaiveDate) -> Self {
        let mut records = HashMap::with_capacity(catalog.len());
        let mut options = Vec::with_capacity(catalog.len());
        for entry in catalog.iter() {
            let risk = generate_country_risk_as_of(entry.id, &entry.name, entry.flag_emoji.as_deref(), today);
            options.push(SearchOption {
                id: entry.id,
                name: entry.name.clone(),
                risk: risk.overall,
            });
            records.insert(entry.id, risk);
        }
        options.sort_by(by_display_name);

        let mut counts = [0usize; 4];
        for o in &options {
            counts[o.risk as usize] += 1;
        }
        info!(
            countries = records.len(),
            green = counts[0],
            yellow = counts[1],
            orange = counts[2],
            red = counts[3],
            %today,
            "risk index built"
        );

        Self {
            records,
            options,
            as_of: today,
        }
    }

    pub fn get(&self, id: i64) -> Option<&CountryRisk> {
        self.records.get(&id)
    }

    /// Overall color for a map fill; [`NO_DATA_COLOR`] when `id` is unknown.
    pub fn fill_color(&self, id: i64) -> &'static str {
        self.get(id)
            .map(|r| r.overall.color_hex())
            .unwrap_or(NO_DATA_COLOR)
    }

    /// All countries sorted by name.
    pub fn options(&self) -> &[SearchOption] {
        &self.options
    }

    /// Case-insensitive substring match on names. An empty (or blank) query
    /// returns the first `limit` options.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SearchOption> {
        let q = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| q.is_empty() || o.name.to_lowercase().contains(&q))
            .take(limit)
            .collect()
    }

    /// Option whose name equals `query` ignoring case and surrounding whitespace.
    pub fn find_exact(&self, query: &str) -> Option<&SearchOption> {
        let q = query.trim().to_lowercase();
        self.options.iter().find(|o| o.name.to_lowercase() == q)
    }

    pub fn records(&self) -> impl Iterator<Item = &CountryRisk> {
        self.options.iter().filter_map(|o| self.records.get(&o.id))
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
