//! Integration test: config load, catalog load, index build, generation, brief.

use chrono::NaiveDate;
use std::path::Path;
use travel_risk_advisor::{
    brief::render_brief,
    catalog::CountryCatalog,
    config::AdvisorConfig,
    index::RiskIndex,
    risk::{generate_country_risk, generate_country_risk_as_of, worst_risk, RiskLevel},
    seed::{fnv1a_32, Mulberry32},
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn config_load_default() {
    let c = AdvisorConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.search.max_results, 15);
    assert!(c.catalog_path.is_none());
    assert!(!c.log.json);
}

#[test]
fn config_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"search": {"max_results": 5}, "log": {"level": "debug", "json": true}}"#).unwrap();
    let c = AdvisorConfig::load(&path);
    assert_eq!(c.search.max_results, 5);
    assert_eq!(c.log.level, "debug");
    assert!(c.log.json);
    assert!(c.catalog_path.is_none());
}

#[test]
fn config_load_malformed_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();
    let c = AdvisorConfig::load(&path);
    assert_eq!(c.search.max_results, 15);
}

#[test]
fn reference_vectors() {
    assert_eq!(fnv1a_32(""), 0x811c_9dc5);
    assert_eq!(fnv1a_32("1:Test"), 114_206_642);
    assert_eq!(Mulberry32::new(0).next_f64(), 0.266_429_208_684_712_65);
}

#[test]
fn catalog_file_to_brief() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json");
    std::fs::write(
        &path,
        r#"[{"id": "840", "name": "United States of America"}, {"id": "250", "name": "France"}, {"name": "Kosovo"}]"#,
    )
    .unwrap();

    let mut config = AdvisorConfig::default();
    config.catalog_path = Some(path);
    let catalog = CountryCatalog::from_config(config.catalog_path.as_deref()).unwrap();
    assert_eq!(catalog.len(), 2);

    let index = RiskIndex::build(&catalog, anchor());
    let us = index.get(840).unwrap();
    assert_eq!(us.overall, RiskLevel::Red);
    assert_eq!(us.flag_emoji.as_deref(), Some("🇺🇸"));

    let brief = render_brief(us);
    assert!(brief.starts_with("🇺🇸 United States of America\n"));
    assert!(brief.contains("Last updated: 2024-05-24"));
}

#[test]
fn builtin_index_is_consistent() {
    let catalog = CountryCatalog::builtin();
    let index = RiskIndex::build(&catalog, anchor());
    assert_eq!(index.len(), catalog.len());
    for entry in catalog.iter() {
        let r = index.get(entry.id).unwrap();
        assert_eq!(r.overall, worst_risk(r.categories.levels()));
        assert_eq!(index.fill_color(entry.id), r.overall.color_hex());
    }
    // Options are name-sorted and cover every country.
    assert_eq!(index.options().len(), catalog.len());
    let names: Vec<String> = index.options().iter().map(|o| o.name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn builtin_search_default_limit() {
    let config = AdvisorConfig::default();
    let index = RiskIndex::build(&CountryCatalog::builtin(), anchor());
    assert_eq!(index.search("", config.search.max_results).len(), 15);
    let guinea: Vec<&str> = index
        .search("guinea", config.search.max_results)
        .iter()
        .map(|o| o.name.as_str())
        .collect();
    assert_eq!(guinea, vec!["Eq. Guinea", "Guinea", "Guinea-Bissau", "Papua New Guinea"]);
}

#[test]
fn same_day_generation_is_identical() {
    let a = generate_country_risk(840, "United States of America", None);
    let b = generate_country_risk(840, "United States of America", None);
    // Both calls may straddle midnight; levels and text never depend on the date.
    assert_eq!(a.categories, b.categories);
    assert_eq!(a.overall, b.overall);
    assert_eq!(a.advisory, b.advisory);
    let pinned = generate_country_risk_as_of(840, "United States of America", None, anchor());
    assert_eq!(a.categories, pinned.categories);
}

#[test]
fn records_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (0..250)
                    .map(|i| generate_country_risk_as_of(t * 250 + i, "Country", None, anchor()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let parallel: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    for (i, r) in parallel.iter().enumerate() {
        assert_eq!(r, &generate_country_risk_as_of(i as i64, "Country", None, anchor()));
    }
}
