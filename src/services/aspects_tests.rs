use std::collections::BTreeMap;

use super::*;
use crate::backends::InMemoryRulesStore;
use crate::rules::LogicSettingsPatch;

#[test]
fn classifies_nearest_exact_angle() {
    assert_eq!(classify_aspect(0.0), Some(AspectType::Conjunction));
    assert_eq!(classify_aspect(4.0), Some(AspectType::Conjunction));
    assert_eq!(classify_aspect(58.0), Some(AspectType::Sextile));
    assert_eq!(classify_aspect(90.0), Some(AspectType::Square));
    assert_eq!(classify_aspect(128.0), Some(AspectType::Trine));
    assert_eq!(classify_aspect(179.5), Some(AspectType::Opposition));
}

#[test]
fn detection_window_edges() {
    assert_eq!(classify_aspect(12.0), Some(AspectType::Conjunction));
    assert_eq!(classify_aspect(12.1), None);
    // Between sextile and square: 75 is 15 from both, out of window
    assert_eq!(classify_aspect(75.0), None);
    // 74 is 14 from sextile, 16 from square: still out
    assert_eq!(classify_aspect(74.0), None);
    // 72 is 12 from sextile: in window, nearest is sextile
    assert_eq!(classify_aspect(72.0), Some(AspectType::Sextile));
}

#[test]
fn spec_scenario_sun_moon_square_umbrella_max() {
    // Sun at 10°, Moon at 100°: separation 90°, exact square.
    // Sun.square = 8, Moon.square = 6, UMBRELLA_MAX -> allowed 8.
    let config = default_config(ReportType::Natal);
    assert_eq!(config.orb_for(Body::Sun, AspectType::Square), Some(8.0));
    assert_eq!(config.orb_for(Body::Moon, AspectType::Square), Some(6.0));

    let angle = crate::models::angle::angular_separation(10.0, 100.0);
    assert_eq!(angle, 90.0);

    let result = validate_aspect(Body::Sun, Body::Moon, angle, &config);
    assert_eq!(result.aspect, Some(AspectType::Square));
    assert_eq!(result.orb, 0.0);
    assert_eq!(result.allowed, 8.0);
    assert!(result.valid);
    assert_eq!(result.strategy, ValidationStrategy::UmbrellaMax);
    assert!(result.rationale.contains("UMBRELLA_MAX"));
}

#[test]
fn umbrella_max_takes_the_wider_orb_either_way() {
    let config = default_config(ReportType::Natal);
    // Separation 97°: square with orb 7. Moon alone (6°) would reject,
    // Sun's 8° carries it under UMBRELLA_MAX regardless of order.
    let forward = validate_aspect(Body::Sun, Body::Moon, 97.0, &config);
    let reverse = validate_aspect(Body::Moon, Body::Sun, 97.0, &config);
    assert!(forward.valid);
    assert!(reverse.valid);
    assert_eq!(forward.allowed, 8.0);
    assert_eq!(reverse.allowed, 8.0);
}

#[test]
fn receiver_priority_is_asymmetric() {
    let config = default_config(ReportType::Transit);
    assert_eq!(config.rules.strategy, ValidationStrategy::ReceiverPriority);

    // Orb 7 square. Receiver Moon allows 6 -> invalid; receiver Sun
    // allows 8 -> valid.
    let to_moon = validate_aspect(Body::Sun, Body::Moon, 97.0, &config);
    assert!(!to_moon.valid);
    assert_eq!(to_moon.allowed, 6.0);

    let to_sun = validate_aspect(Body::Moon, Body::Sun, 97.0, &config);
    assert!(to_sun.valid);
    assert_eq!(to_sun.allowed, 8.0);
}

#[test]
fn out_of_window_separation_is_invalid_with_no_type() {
    let config = default_config(ReportType::Natal);
    let result = validate_aspect(Body::Venus, Body::Mars, 40.0, &config);
    assert_eq!(result.aspect, None);
    assert!(!result.valid);
    assert!(result.rationale.contains("detection window"));
}

#[test]
fn missing_orb_entry_contributes_zero() {
    let mut config = default_config(ReportType::Natal);
    config.orbs.remove(&Body::Lilith);

    // Receiver unconfigured under RECEIVER_PRIORITY: only exact would pass
    config.rules.strategy = ValidationStrategy::ReceiverPriority;
    let result = validate_aspect(Body::Sun, Body::Lilith, 91.0, &config);
    assert_eq!(result.allowed, 0.0);
    assert!(!result.valid);

    // Exact partile still validates at allowed 0
    let exact = validate_aspect(Body::Sun, Body::Lilith, 90.0, &config);
    assert!(exact.valid);
}

#[test]
fn effective_config_recovers_from_missing_ruleset() {
    let store = InMemoryRulesStore::new();
    let config = effective_config(&store, ReportType::Synastry, None);
    assert_eq!(config, default_config(ReportType::Synastry));
}

#[test]
fn effective_config_applies_overrides_to_a_private_copy() {
    let store = InMemoryRulesStore::with_defaults();
    let overrides = UserOverrides {
        logic_settings: Some(LogicSettingsPatch {
            strategy: Some(ValidationStrategy::ReceiverPriority),
            ..Default::default()
        }),
        orbs: Some(BTreeMap::from([(
            Body::Mars,
            BTreeMap::from([(AspectType::Square, 2.0)]),
        )])),
        active_bodies: None,
    };

    let merged = effective_config(&store, ReportType::Natal, Some(&overrides));
    assert_eq!(merged.rules.strategy, ValidationStrategy::ReceiverPriority);
    assert_eq!(merged.orb_for(Body::Mars, AspectType::Square), Some(2.0));

    // The stored base is untouched
    let fresh = effective_config(&store, ReportType::Natal, None);
    assert_eq!(fresh.rules.strategy, ValidationStrategy::UmbrellaMax);
    assert_eq!(fresh.orb_for(Body::Mars, AspectType::Square), Some(6.0));
}

#[test]
fn pairwise_scan_respects_active_bodies_and_skips_missing() {
    let mut positions = BTreeMap::new();
    positions.insert(Body::Sun, crate::models::BodyPosition::new(Body::Sun, 10.0, 1.0, false));
    positions.insert(Body::Moon, crate::models::BodyPosition::new(Body::Moon, 100.0, 13.0, false));
    positions.insert(Body::Mars, crate::models::BodyPosition::new(Body::Mars, 190.0, 0.5, false));

    let mut config = default_config(ReportType::Natal);
    config.active_bodies = vec![Body::Sun, Body::Moon, Body::Venus];

    let results = aspects_between(&positions, &config);
    // Venus has no position; only the Sun-Moon pair is scanned
    assert_eq!(results.len(), 1);
    assert_eq!((results[0].body_a, results[0].body_b), (Body::Sun, Body::Moon));
    assert_eq!(results[0].aspect, Some(AspectType::Square));
    assert!(results[0].valid);
}
