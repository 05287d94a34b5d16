//! Static country catalog: stable integer id, display name, optional alpha-2
//! code and flag glyph. Validation of identities happens here, before
//! anything reaches the risk generator.

mod builtin;

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Regional Indicator Symbol Letter A.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alpha2: Option<String>,
    #[serde(rename = "flagEmoji", skip_serializing_if = "Option::is_none", default)]
    pub flag_emoji: Option<String>,
}

impl CountryEntry {
    pub fn new(id: i64, name: impl Into<String>, alpha2: Option<&str>) -> Self {
        let alpha2 = alpha2.map(|a| a.to_ascii_uppercase());
        let flag_emoji = alpha2.as_deref().and_then(alpha2_to_flag_emoji);
        Self {
            id,
            name: name.into(),
            alpha2,
            flag_emoji,
        }
    }
}

/// Two ASCII letters → pair of regional indicator symbols. Anything else → `None`.
pub fn alpha2_to_flag_emoji(alpha2: &str) -> Option<String> {
    let code = alpha2.to_ascii_uppercase();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    code.bytes()
        .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
        .collect()
}

/// Catalog record as found in a JSON file. Ids may be numbers or numeric strings.
#[derive(Debug, Deserialize)]
struct RawCountry {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    alpha2: Option<String>,
}

fn parse_id(raw: &serde_json::Value) -> Option<i64> {
    match raw {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read-only list of countries, in insertion order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    entries: Vec<CountryEntry>,
    by_id: HashMap<i64, usize>,
}

impl CountryCatalog {
    /// Build from entries. Later duplicates of an id are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = CountryEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.by_id.contains_key(&entry.id) {
                warn!(id = entry.id, name = %entry.name, "duplicate country id skipped");
                continue;
            }
            catalog.by_id.insert(entry.id, catalog.entries.len());
            catalog.entries.push(entry);
        }
        catalog
    }

    /// Compiled-in world catalog.
    pub fn builtin() -> Self {
        Self::from_entries(
            builtin::COUNTRIES
                .iter()
                .map(|(id, name, alpha2)| CountryEntry::new(*id, *name, Some(*alpha2))),
        )
    }

    /// Parse a JSON array of `{id, name, alpha2?}`. Entries without a usable id
    /// or name are skipped; a missing alpha-2 is looked up from the numeric id.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: Vec<RawCountry> = serde_json::from_str(data)?;
        let total = raw.len();
        let mut skipped = 0usize;
        let entries: Vec<CountryEntry> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, r)| {
                let id = r.id.as_ref().and_then(parse_id);
                let name = r.name.filter(|n| !n.is_empty());
                match (id, name) {
                    (Some(id), Some(name)) => {
                        let alpha2 = r.alpha2.or_else(|| builtin::alpha2_for_numeric(id).map(str::to_string));
                        Some(CountryEntry::new(id, name, alpha2.as_deref()))
                    }
                    _ => {
                        skipped += 1;
                        warn!(index, "catalog entry without valid id or name skipped");
                        None
                    }
                }
            })
            .collect();
        let catalog = Self::from_entries(entries);
        info!(total, skipped, loaded = catalog.len(), "country catalog parsed");
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| AdvisorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Configured file if any, otherwise the compiled-in list.
    pub fn from_config(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn get(&self, id: i64) -> Option<&CountryEntry> {
        self.by_id.get(&id).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_from_alpha2() {
        assert_eq!(alpha2_to_flag_emoji("US").as_deref(), Some("🇺🇸"));
        assert_eq!(alpha2_to_flag_emoji("fr").as_deref(), Some("🇫🇷"));
        assert_eq!(alpha2_to_flag_emoji("USA"), None);
        assert_eq!(alpha2_to_flag_emoji("1A"), None);
        assert_eq!(alpha2_to_flag_emoji(""), None);
        assert_eq!(alpha2_to_flag_emoji("ÉU"), None);
    }

    #[test]
    fn builtin_has_unique_ids_and_flags() {
        let c = CountryCatalog::builtin();
        assert_eq!(c.len(), builtin::COUNTRIES.len());
        assert!(c.iter().all(|e| e.flag_emoji.is_some()));
        let us = c.get(840).unwrap();
        assert_eq!(us.name, "United States of America");
        assert_eq!(us.alpha2.as_deref(), Some("US"));
    }

    #[test]
    fn json_accepts_string_and_number_ids() {
        let c = CountryCatalog::from_json_str(
            r#"[
                {"id": "840", "name": "United States of America"},
                {"id": 250, "name": "France", "alpha2": "fr"},
                {"id": 999, "name": "Atlantis"}
            ]"#,
        )
        .unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(840).unwrap().flag_emoji.as_deref(), Some("🇺🇸"));
        assert_eq!(c.get(250).unwrap().alpha2.as_deref(), Some("FR"));
        let atlantis = c.get(999).unwrap();
        assert_eq!(atlantis.alpha2, None);
        assert_eq!(atlantis.flag_emoji, None);
    }

    #[test]
    fn json_skips_invalid_entries() {
        let c = CountryCatalog::from_json_str(
            r#"[
                {"id": "-99", "name": "N. Cyprus"},
                {"name": "Kosovo"},
                {"id": "abc", "name": "Nowhere"},
                {"id": 4},
                {"id": 8, "name": ""},
                {"id": 1.5, "name": "Fractional"},
                {"id": 4, "name": "Afghanistan"},
                {"id": 4, "name": "Duplicate"}
            ]"#,
        )
        .unwrap();
        let ids: Vec<i64> = c.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![-99, 4]);
        assert_eq!(c.get(4).unwrap().name, "Afghanistan");
    }

    #[test]
    fn json_rejects_non_array() {
        assert!(matches!(
            CountryCatalog::from_json_str(r#"{"id": 1}"#),
            Err(AdvisorError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = CountryCatalog::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AdvisorError::Io { .. }));
    }
}
