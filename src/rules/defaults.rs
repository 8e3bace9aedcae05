//! Hardcoded fallback rulesets.
//!
//! Used when the rules store has no document for a report type; a missing
//! ruleset is a recoverable condition, not a hard failure.

use std::collections::BTreeMap;

use crate::models::Body;

use super::{
    AspectRuleConfig, AspectType, HouseCorrectionRules, LogicRules, OrbTable, ReportType,
    ValidationStrategy,
};

/// The default ruleset for a report type.
///
/// Orb widths follow the usual luminary > planet > point hierarchy.
/// Natal and synastry validate with `UMBRELLA_MAX`; transits with
/// `RECEIVER_PRIORITY`.
pub fn default_config(report_type: ReportType) -> AspectRuleConfig {
    let strategy = match report_type {
        ReportType::Natal | ReportType::Synastry => ValidationStrategy::UmbrellaMax,
        ReportType::Transit => ValidationStrategy::ReceiverPriority,
    };

    AspectRuleConfig {
        report_type,
        rules: LogicRules {
            house_correction: HouseCorrectionRules::default(),
            strategy,
        },
        orbs: default_orb_table(),
        active_bodies: Body::ALL.to_vec(),
    }
}

/// Default orb table covering every tracked body and aspect type.
pub fn default_orb_table() -> OrbTable {
    let mut table = OrbTable::new();
    for body in Body::ALL {
        table.insert(body, body_orbs(body));
    }
    table
}

fn body_orbs(body: Body) -> BTreeMap<AspectType, f64> {
    // (conjunction, sextile, square, trine, opposition)
    let (conj, sext, square, trine, opp) = match body {
        Body::Sun => (8.0, 6.0, 8.0, 8.0, 8.0),
        Body::Moon => (8.0, 6.0, 6.0, 8.0, 8.0),
        Body::Mercury | Body::Venus | Body::Mars => (6.0, 4.0, 6.0, 6.0, 6.0),
        Body::Jupiter | Body::Saturn => (6.0, 4.0, 6.0, 6.0, 6.0),
        Body::Uranus | Body::Neptune | Body::Pluto => (5.0, 3.0, 5.0, 5.0, 5.0),
        Body::MeanNode | Body::Lilith => (3.0, 2.0, 3.0, 3.0, 3.0),
    };
    BTreeMap::from([
        (AspectType::Conjunction, conj),
        (AspectType::Sextile, sext),
        (AspectType::Square, square),
        (AspectType::Trine, trine),
        (AspectType::Opposition, opp),
    ])
}
