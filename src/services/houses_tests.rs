use super::*;
use crate::backends::FixedHouseSolver;

fn equal_frame(asc: f64) -> HouseFrame {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_degrees(asc + i as f64 * 30.0);
    }
    HouseFrame::new(cusps, asc, normalize_degrees(asc + 270.0)).unwrap()
}

fn no_correction() -> HouseCorrectionRules {
    HouseCorrectionRules {
        enabled: false,
        ..Default::default()
    }
}

#[test]
fn every_longitude_maps_to_exactly_one_house() {
    // Uneven but valid partition (Porphyry-like widths)
    let cusps = [
        95.0, 120.0, 150.0, 185.0, 215.0, 245.0, 275.0, 300.0, 330.0, 5.0, 35.0, 65.0,
    ];
    let frame = HouseFrame::new(cusps, 95.0, 5.0).unwrap();
    let rules = no_correction();

    let mut lon = 0.0;
    while lon < 360.0 {
        let mut hits = 0;
        for i in 0..12 {
            let start = frame.cusps()[i].longitude;
            let end = frame.cusps()[(i + 1) % 12].longitude;
            if in_arc(lon, start, end) {
                hits += 1;
            }
        }
        assert_eq!(hits, 1, "longitude {lon} hit {hits} houses");
        // And the assigner agrees with the raw membership test
        let assignment = assign_house(lon, &frame, &rules);
        assert!(!assignment.corrected);
        lon += 0.31;
    }
}

#[test]
fn base_assignment_without_correction() {
    let frame = equal_frame(95.0);
    let rules = no_correction();

    assert_eq!(assign_house(100.0, &frame, &rules).house, 1);
    assert_eq!(assign_house(125.0, &frame, &rules).house, 2);
    // Exactly on a cusp belongs to the house it opens
    assert_eq!(assign_house(95.0, &frame, &rules).house, 1);
    assert_eq!(assign_house(125.0 - 1e-9, &frame, &rules).house, 1);
    // Wraparound arc: house 12 spans 65..95 through no boundary, but
    // house 10 spans 5..35; a longitude of 0.5 falls in house 9 (335..5)
    assert_eq!(assign_house(0.5, &frame, &rules).house, 9);
}

#[test]
fn correction_promotes_near_angular_cusp() {
    // Body at 93.5° sits 1.5° before the Ascendant cusp at 95°, inside
    // the 2.0° angular threshold.
    let frame = equal_frame(95.0);
    let rules = HouseCorrectionRules::default();

    let assignment = assign_house(93.5, &frame, &rules);
    assert_eq!(assignment.house, 1);
    assert!(assignment.corrected);
    assert!(assignment.note.contains("angular"));
}

#[test]
fn spec_scenario_body_close_to_ascendant() {
    // Ascendant 95.0°, body 92.5°, angular threshold widened to 3.0°
    // puts the body within range of cusp 1.
    let frame = equal_frame(95.0);
    let rules = HouseCorrectionRules {
        enabled: true,
        angular_orb: 3.0,
        other_orb: 1.0,
    };

    let assignment = assign_house(92.5, &frame, &rules);
    assert_eq!(assignment.house, 1);
    assert!(assignment.corrected);
}

#[test]
fn default_angular_threshold_is_two_degrees() {
    let frame = equal_frame(95.0);
    let rules = HouseCorrectionRules::default();

    // 2.0° before the Ascendant: inside the angular threshold
    let promoted = assign_house(93.0, &frame, &rules);
    assert_eq!(promoted.house, 1);
    assert!(promoted.corrected);

    // 2.5° before: outside, stays in house 12
    let kept = assign_house(92.5, &frame, &rules);
    assert_eq!(kept.house, 12);
    assert!(!kept.corrected);
}

#[test]
fn non_angular_threshold_is_tighter() {
    let frame = equal_frame(95.0);
    let rules = HouseCorrectionRules::default();

    // Next cusp is house 2 (non-angular, 1.0° threshold).
    // 0.8° before cusp 2 at 125°: promoted.
    let promoted = assign_house(124.2, &frame, &rules);
    assert_eq!(promoted.house, 2);
    assert!(promoted.corrected);

    // 1.5° before: stays in house 1.
    let kept = assign_house(123.5, &frame, &rules);
    assert_eq!(kept.house, 1);
    assert!(!kept.corrected);
}

#[test]
fn disabled_correction_never_promotes() {
    let frame = equal_frame(95.0);
    let assignment = assign_house(94.9, &frame, &no_correction());
    assert_eq!(assignment.house, 12);
    assert!(!assignment.corrected);
    assert!(!assignment.note.is_empty());
}

#[test]
fn rationale_note_is_always_present() {
    let frame = equal_frame(0.0);
    let rules = HouseCorrectionRules::default();
    for lon in [0.0, 29.5, 100.0, 359.9] {
        let assignment = assign_house(lon, &frame, &rules);
        assert!(!assignment.note.is_empty(), "empty note at {lon}");
    }
}

#[test]
fn compute_houses_passes_through_solver_frame() {
    let solver = FixedHouseSolver::equal(185.0);
    let frame = compute_houses(
        &solver,
        JulianDay::new(2_451_545.0),
        &GeoLocation {
            latitude: 51.5,
            longitude: -0.1,
        },
        HouseSystem::Equal,
    )
    .unwrap();
    assert_eq!(frame.ascendant(), 185.0);
}

#[test]
fn compute_houses_failure_is_fatal() {
    let solver = FixedHouseSolver::failing();
    let result = compute_houses(
        &solver,
        JulianDay::new(2_451_545.0),
        &GeoLocation {
            latitude: 51.5,
            longitude: -0.1,
        },
        HouseSystem::Placidus,
    );
    assert!(result.is_err());
}
