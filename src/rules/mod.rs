//! Aspect rule configuration: per-report-type orb tables, house-correction
//! thresholds, validation strategy and the user-override merge.
//!
//! The base configuration comes from an external rules store and is
//! read-only from this crate's perspective; overrides are always applied
//! to a private copy (see [`merge::apply_overrides`]).

pub mod defaults;
pub mod merge;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Body;

pub use defaults::default_config;
pub use merge::apply_overrides;

/// Report types, each with its own stored ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Natal,
    Transit,
    Synastry,
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportType::Natal => "NATAL",
            ReportType::Transit => "TRANSIT",
            ReportType::Synastry => "SYNASTRY",
        };
        f.write_str(name)
    }
}

/// The five major aspects and their exact angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    /// The canonical exact angle of this aspect.
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Sextile => "sextile",
            AspectType::Square => "square",
            AspectType::Trine => "trine",
            AspectType::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the allowed orb for a detected aspect is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStrategy {
    /// Either party's personal sensitivity activates the aspect:
    /// `allowed = max(orb(a), orb(b))`. Used for natal and synastry work.
    UmbrellaMax,
    /// Only the receiving body's tolerance governs:
    /// `allowed = orb(b)`. Used for transits.
    ReceiverPriority,
}

impl fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationStrategy::UmbrellaMax => "UMBRELLA_MAX",
            ValidationStrategy::ReceiverPriority => "RECEIVER_PRIORITY",
        };
        f.write_str(name)
    }
}

/// House-boundary correction thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCorrectionRules {
    pub enabled: bool,
    /// Threshold when the next house is angular (1, 4, 7, 10)
    pub angular_orb: f64,
    /// Threshold for all other houses
    pub other_orb: f64,
}

impl Default for HouseCorrectionRules {
    fn default() -> Self {
        Self {
            enabled: true,
            angular_orb: 2.0,
            other_orb: 1.0,
        }
    }
}

/// The `rules.*` section of a ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicRules {
    pub house_correction: HouseCorrectionRules,
    pub strategy: ValidationStrategy,
}

/// Orb table: allowed deviation per (body, aspect type) pair.
pub type OrbTable = BTreeMap<Body, BTreeMap<AspectType, f64>>;

/// A complete per-report-type ruleset.
///
/// This is also the document shape the external rules store hands back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRuleConfig {
    pub report_type: ReportType,
    pub rules: LogicRules,
    pub orbs: OrbTable,
    /// Bodies participating in aspect scans
    pub active_bodies: Vec<Body>,
}

impl AspectRuleConfig {
    /// Allowed orb for a (body, aspect type) pair, if configured.
    pub fn orb_for(&self, body: Body, aspect: AspectType) -> Option<f64> {
        self.orbs.get(&body).and_then(|table| table.get(&aspect)).copied()
    }
}

/// User-supplied overrides, merged field-by-field onto a private copy of
/// the base config.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverrides {
    /// Patches for the `rules.*` section
    #[serde(default)]
    pub logic_settings: Option<LogicSettingsPatch>,
    /// Per-body orb patches; only the listed aspect types change
    #[serde(default)]
    pub orbs: Option<BTreeMap<Body, BTreeMap<AspectType, f64>>>,
    /// When present, the final orb table is filtered to exactly this list
    #[serde(default)]
    pub active_bodies: Option<Vec<Body>>,
}

impl UserOverrides {
    /// Parse overrides from a request JSON document.
    pub fn from_json(doc: &str) -> crate::error::EngineResult<Self> {
        serde_json::from_str(doc).map_err(|e| {
            crate::error::ChartError::validation(
                format!("malformed overrides document: {e}"),
                crate::error::ErrorContext::new("parse_overrides"),
            )
        })
    }
}

/// Field-level patch for [`LogicRules`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicSettingsPatch {
    #[serde(default)]
    pub house_correction_enabled: Option<bool>,
    #[serde(default)]
    pub angular_orb: Option<f64>,
    #[serde(default)]
    pub other_orb: Option<f64>,
    #[serde(default)]
    pub strategy: Option<ValidationStrategy>,
}
