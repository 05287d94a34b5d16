//! Plain-text country brief: the detail view without styling.

use crate::risk::{checklist, CountryRisk, RiskCategory};
use std::fmt::Write;

const NO_FLAG: &str = "🌍";
const DISCLAIMER: &str = "Demo data: ratings are synthetic and sources are placeholders.";

pub fn render_brief(risk: &CountryRisk) -> String {
    let mut out = String::with_capacity(1024);
    let flag = risk.flag_emoji.as_deref().unwrap_or(NO_FLAG);
    let overall = risk.overall.meta();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} {}", flag, risk.name);
    let _ = writeln!(
        out,
        "Overall: {} ({}) | {}",
        overall.label, risk.overall, overall.policy_label
    );
    let _ = writeln!(out, "Last updated: {}", risk.last_updated_iso);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", risk.advisory);
    let _ = writeln!(out);

    let _ = writeln!(out, "Before you go:");
    for item in checklist(risk.overall) {
        let _ = writeln!(out, "  - {}", item);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Categories:");
    for category in RiskCategory::ALL {
        let c = &risk.categories[category];
        let _ = writeln!(out, "  {}: {} ({})", category.label(), c.level.label(), c.level);
        let _ = writeln!(out, "    {}", c.description);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Sources:");
    for s in &risk.sources {
        let _ = writeln!(out, "  - {}", s.label);
    }
    let _ = writeln!(out, "{}", DISCLAIMER);
    out
}
