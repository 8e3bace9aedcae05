//! House computation and house assignment.
//!
//! Cusp solving is delegated to the injected solver (fatal on failure);
//! assignment places a longitude into the cusp partition and applies the
//! proximity-based boundary correction.

use crate::api::GeoLocation;
use crate::backends::{HouseSolver, HouseSystem};
use crate::error::EngineResult;
use crate::models::angle::{forward_arc, in_arc, normalize_degrees};
use crate::models::{HouseFrame, JulianDay};
use crate::rules::HouseCorrectionRules;

/// Houses whose cusps are chart angles (Asc, IC, Desc, MC).
const ANGULAR_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Solve the house frame for a moment and location.
///
/// Unlike per-body position failures, a solver failure here is fatal:
/// there is no chart without Ascendant and Midheaven.
pub fn compute_houses(
    solver: &dyn HouseSolver,
    jd: JulianDay,
    location: &GeoLocation,
    system: HouseSystem,
) -> EngineResult<HouseFrame> {
    let frame = solver.solve(jd, location, system)?;
    log::debug!(
        "solved houses: asc={:.4}, mc={:.4}",
        frame.ascendant(),
        frame.midheaven()
    );
    Ok(frame)
}

/// Result of placing a body into the house partition.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseAssignment {
    /// Final house number, 1-12
    pub house: u8,
    /// Whether the boundary correction moved the body forward
    pub corrected: bool,
    /// Human-readable rationale for audit, always present
    pub note: String,
}

/// Assign a longitude to a house, with boundary correction.
///
/// Base rule: the body belongs to house `i` when its longitude lies on
/// the half-open arc from cusp `i` to cusp `i+1` (wraparound at 0° Aries
/// handled). When correction is enabled and the body sits within the
/// threshold of the next cusp (2.0° by default if the next house is
/// angular, 1.0° otherwise), it is reassigned to that next house.
pub fn assign_house(
    longitude: f64,
    frame: &HouseFrame,
    rules: &HouseCorrectionRules,
) -> HouseAssignment {
    let lon = normalize_degrees(longitude);
    let cusps = frame.cusps();

    let mut base_house = 12;
    for i in 0..12 {
        let start = cusps[i].longitude;
        let end = cusps[(i + 1) % 12].longitude;
        if in_arc(lon, start, end) {
            base_house = cusps[i].number;
            break;
        }
    }

    let next_house = base_house % 12 + 1;
    let next_cusp = frame.cusp_longitude(next_house);
    let distance = forward_arc(lon, next_cusp);

    if rules.enabled {
        let next_is_angular = ANGULAR_HOUSES.contains(&next_house);
        let threshold = if next_is_angular {
            rules.angular_orb
        } else {
            rules.other_orb
        };
        if distance <= threshold {
            return HouseAssignment {
                house: next_house,
                corrected: true,
                note: format!(
                    "longitude {lon:.4}° is {distance:.4}° before cusp {next_house} \
                     ({} house, threshold {threshold:.2}°); promoted from house {base_house}",
                    if next_is_angular { "angular" } else { "non-angular" }
                ),
            };
        }
    }

    HouseAssignment {
        house: base_house,
        corrected: false,
        note: format!(
            "longitude {lon:.4}° lies in house {base_house} \
             ({:.4}° after its cusp, {distance:.4}° before cusp {next_house})",
            forward_arc(frame.cusp_longitude(base_house), lon)
        ),
    }
}

#[cfg(test)]
#[path = "houses_tests.rs"]
mod houses_tests;
