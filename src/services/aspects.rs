//! Aspect classification and rule-driven validation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::backends::RulesStore;
use crate::models::angle::angular_separation;
use crate::models::{Body, BodyPosition};
use crate::rules::{
    apply_overrides, default_config, AspectRuleConfig, AspectType, ReportType, UserOverrides,
    ValidationStrategy,
};

/// Coarse detection window around the canonical exact angles.
///
/// Deliberately wider than any real orb: a cheap pre-filter, not the
/// validity test. A single fixed constant for all aspect types.
pub const DETECTION_WINDOW_DEG: f64 = 12.0;

/// A classified and validated planet-to-planet aspect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectResult {
    pub body_a: Body,
    pub body_b: Body,
    /// Detected aspect type; `None` when nothing fell in the detection
    /// window (the result is then invalid by definition)
    pub aspect: Option<AspectType>,
    /// Deviation from the exact angle, degrees
    pub orb: f64,
    /// Allowed limit under the applied strategy
    pub allowed: f64,
    pub valid: bool,
    pub strategy: ValidationStrategy,
    /// Human-readable account of the decision, for audit
    pub rationale: String,
}

/// Resolve the effective ruleset for a report type.
///
/// Loads the stored base config, recovering from a missing document with
/// the hardcoded defaults, then merges user overrides into a private
/// copy. The stored base is never mutated.
pub fn effective_config(
    store: &dyn RulesStore,
    report_type: ReportType,
    overrides: Option<&UserOverrides>,
) -> AspectRuleConfig {
    let base = match store.get(report_type) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using hardcoded default ruleset");
            default_config(report_type)
        }
    };
    match overrides {
        Some(user) => apply_overrides(&base, user),
        None => base,
    }
}

/// Classify a separation angle against the canonical exact angles.
///
/// Returns the nearest of {0, 60, 90, 120, 180} within the fixed
/// detection window, or `None`.
pub fn classify_aspect(angle: f64) -> Option<AspectType> {
    AspectType::ALL
        .iter()
        .map(|&aspect| (aspect, (angle - aspect.exact_angle()).abs()))
        .filter(|(_, deviation)| *deviation <= DETECTION_WINDOW_DEG)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(aspect, _)| aspect)
}

/// Validate a potential aspect between two bodies.
///
/// `body_b` is the receiving side: under `RECEIVER_PRIORITY` its orb
/// alone governs, so argument order matters for transit work.
pub fn validate_aspect(
    body_a: Body,
    body_b: Body,
    angle: f64,
    config: &AspectRuleConfig,
) -> AspectResult {
    let strategy = config.rules.strategy;

    let Some(aspect) = classify_aspect(angle) else {
        return AspectResult {
            body_a,
            body_b,
            aspect: None,
            orb: 0.0,
            allowed: 0.0,
            valid: false,
            strategy,
            rationale: format!(
                "separation {angle:.2}° matches no aspect within the \
                 ±{DETECTION_WINDOW_DEG}° detection window"
            ),
        };
    };

    let orb = (angle - aspect.exact_angle()).abs();
    let orb_a = config.orb_for(body_a, aspect);
    let orb_b = config.orb_for(body_b, aspect);

    // A body missing from the orb table contributes a zero allowance.
    let (allowed, basis) = match strategy {
        ValidationStrategy::UmbrellaMax => {
            let a = orb_a.unwrap_or(0.0);
            let b = orb_b.unwrap_or(0.0);
            (
                a.max(b),
                format!(
                    "max({body_a} {}, {body_b} {})",
                    describe_orb(orb_a),
                    describe_orb(orb_b)
                ),
            )
        }
        ValidationStrategy::ReceiverPriority => (
            orb_b.unwrap_or(0.0),
            format!("receiver {body_b} {}", describe_orb(orb_b)),
        ),
    };

    let valid = orb <= allowed;
    AspectResult {
        body_a,
        body_b,
        aspect: Some(aspect),
        orb,
        allowed,
        valid,
        strategy,
        rationale: format!(
            "{aspect} (exact {:.0}°) at separation {angle:.2}°: orb {orb:.2}° vs \
             allowed {allowed:.2}° [{strategy}: {basis}] -> {}",
            aspect.exact_angle(),
            if valid { "valid" } else { "out of orb" }
        ),
    }
}

fn describe_orb(orb: Option<f64>) -> String {
    match orb {
        Some(v) => format!("{v:.2}°"),
        None => "unconfigured (0°)".to_string(),
    }
}

/// Scan all pairs of active bodies for aspects.
///
/// Returns one result per pair whose separation fell inside the
/// detection window, valid or not; callers filter on `valid` as needed.
/// Pair order follows the active-body list, so the receiving body of
/// each pair is the later one.
pub fn aspects_between(
    positions: &BTreeMap<Body, BodyPosition>,
    config: &AspectRuleConfig,
) -> Vec<AspectResult> {
    let bodies: Vec<Body> = config
        .active_bodies
        .iter()
        .copied()
        .filter(|body| positions.contains_key(body))
        .collect();

    let mut results = Vec::new();
    for (i, &a) in bodies.iter().enumerate() {
        for &b in &bodies[i + 1..] {
            let angle = angular_separation(positions[&a].longitude, positions[&b].longitude);
            let result = validate_aspect(a, b, angle, config);
            if result.aspect.is_some() {
                results.push(result);
            }
        }
    }
    results
}

#[cfg(test)]
#[path = "aspects_tests.rs"]
mod aspects_tests;
