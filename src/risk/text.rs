//! Fixed narrative text. Category descriptions are base ⊕ suffix, so only
//! 3 + 4 sentences are stored for the 12 combinations.

use super::level::{RiskCategory, RiskLevel};
use serde::{Deserialize, Serialize};

fn category_base(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Security => "Security conditions can vary by region, time, and local events.",
        RiskCategory::Health => {
            "Health risks depend on seasonality, local capacity, and access to care."
        }
        RiskCategory::Political => {
            "Political conditions may change quickly during elections, protests, or policy shifts."
        }
    }
}

fn level_suffix(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Green => " Routine precautions are generally sufficient for business travel.",
        RiskLevel::Yellow => " Maintain heightened situational awareness and confirm local guidance.",
        RiskLevel::Orange => {
            " Plan mitigations in advance and consider restricting movement and night travel."
        }
        RiskLevel::Red => {
            " Avoid non-essential travel; conditions may be volatile and hard to mitigate."
        }
    }
}

pub fn category_description(category: RiskCategory, level: RiskLevel) -> String {
    let mut s = String::with_capacity(160);
    s.push_str(category_base(category));
    s.push_str(level_suffix(level));
    s
}

/// Advisory paragraph keyed by the overall level.
pub fn overall_advisory(overall: RiskLevel) -> &'static str {
    match overall {
        RiskLevel::Green => "Proceed with standard corporate travel practices. Confirm entry requirements and keep a basic communications plan.",
        RiskLevel::Yellow => "Proceed with increased caution. Align itinerary with local guidance, avoid known hotspots, and confirm escalation contacts.",
        RiskLevel::Orange => "Travel should be reconsidered unless essential. A security review and mitigation plan is recommended before booking.",
        RiskLevel::Red => "Do not travel. Conditions are considered high-risk and difficult to mitigate reliably for routine business travel.",
    }
}

/// Pre-travel action items for the overall level.
pub fn checklist(overall: RiskLevel) -> [&'static str; 3] {
    match overall {
        RiskLevel::Green => [
            "Confirm entry/visa requirements and local work authorization.",
            "Share itinerary and emergency contacts with your travel program.",
            "Carry standard travel insurance and keep receipts for claims.",
        ],
        RiskLevel::Yellow => [
            "Avoid predictable routines; confirm safe transport from airport/hotel.",
            "Review medical coverage and locate a reputable clinic near work sites.",
            "Confirm escalation contacts and check-in cadence with your team.",
        ],
        RiskLevel::Orange => [
            "Request a security review and documented mitigation plan before booking.",
            "Restrict movement to essential locations; avoid night travel.",
            "Carry redundant communications and verify evacuation options.",
        ],
        RiskLevel::Red => [
            "Do not travel. Seek alternatives (remote meetings, third-party support).",
            "If already in-country, follow corporate security guidance immediately.",
            "Maintain a low profile and prepare contingency plans.",
        ],
    }
}

/// Labeled reference attached to every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub label: String,
    pub href: String,
}

const PLACEHOLDER_SOURCES: [&str; 3] = ["US State Department", "UK Foreign Office", "France Diplomatie"];

pub fn placeholder_sources() -> Vec<Source> {
    PLACEHOLDER_SOURCES
        .iter()
        .map(|label| Source {
            label: (*label).to_string(),
            href: "#".to_string(),
        })
        .collect()
}
