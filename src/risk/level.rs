//! Risk taxonomy: four ordered levels, three fixed categories, and the static
//! presentation table keyed by level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity, least to most severe. Declaration order is the total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Presentation descriptor for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskLevelMeta {
    pub key: RiskLevel,
    pub label: &'static str,
    pub policy_label: &'static str,
    pub color_hex: &'static str,
}

const LEVEL_META: [RiskLevelMeta; 4] = [
    RiskLevelMeta {
        key: RiskLevel::Green,
        label: "Normal precautions",
        policy_label: "Standard travel",
        color_hex: "#10b981",
    },
    RiskLevelMeta {
        key: RiskLevel::Yellow,
        label: "Exercise increased caution",
        policy_label: "Manager approval recommended",
        color_hex: "#fbbf24",
    },
    RiskLevelMeta {
        key: RiskLevel::Orange,
        label: "Reconsider travel",
        policy_label: "Security review required",
        color_hex: "#f97316",
    },
    RiskLevelMeta {
        key: RiskLevel::Red,
        label: "Do not travel",
        policy_label: "Travel prohibited",
        color_hex: "#ef4444",
    },
];

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Green,
        RiskLevel::Yellow,
        RiskLevel::Orange,
        RiskLevel::Red,
    ];

    /// Classify a draw in `[0, 1)`. Thresholds are half-open; a value on a
    /// boundary lands in the more severe bucket.
    pub fn from_draw(r: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&r), "draw out of range: {r}");
        if r < 0.55 {
            RiskLevel::Green
        } else if r < 0.80 {
            RiskLevel::Yellow
        } else if r < 0.93 {
            RiskLevel::Orange
        } else {
            RiskLevel::Red
        }
    }

    /// 0 for green up to 3 for red.
    pub fn severity(self) -> u8 {
        self as u8
    }

    pub fn meta(self) -> &'static RiskLevelMeta {
        &LEVEL_META[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn policy_label(self) -> &'static str {
        self.meta().policy_label
    }

    pub fn color_hex(self) -> &'static str {
        self.meta().color_hex
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Green => "green",
            RiskLevel::Yellow => "yellow",
            RiskLevel::Orange => "orange",
            RiskLevel::Red => "red",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most severe level in `levels`; `Green` for an empty sequence.
pub fn worst_risk<I>(levels: I) -> RiskLevel
where
    I: IntoIterator<Item = RiskLevel>,
{
    levels
        .into_iter()
        .fold(RiskLevel::Green, |worst, next| if next > worst { next } else { worst })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Security,
    Health,
    Political,
}

impl RiskCategory {
    /// Fixed order; also the draw order of the generator.
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Security,
        RiskCategory::Health,
        RiskCategory::Political,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Security => "Security",
            RiskCategory::Health => "Health",
            RiskCategory::Political => "Political stability",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Security => "security",
            RiskCategory::Health => "health",
            RiskCategory::Political => "political",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
