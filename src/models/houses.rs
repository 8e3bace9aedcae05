//! House cusps, the validated 12-house frame, and the chart angles.

use serde::{Deserialize, Serialize};

use super::angle::{angular_separation, forward_arc, normalize_degrees};
use crate::error::{ChartError, EngineResult, ErrorContext, Stage};

/// Tolerance for the Ascendant/Midheaven anchoring checks, and for the
/// partition closure check, in degrees.
const FRAME_TOLERANCE_DEG: f64 = 1e-3;

/// A single house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12
    pub number: u8,
    /// Cusp longitude in `[0, 360)`
    pub longitude: f64,
}

/// The twelve house cusps plus the Ascendant and Midheaven.
///
/// Construction validates the solver contract: cusps in house-number
/// order form a circular, gap-free, non-overlapping partition of
/// `[0, 360)`, the Ascendant coincides with cusp 1 and the Midheaven
/// with cusp 10.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    cusps: [HouseCusp; 12],
    ascendant: f64,
    midheaven: f64,
}

impl HouseFrame {
    /// Build a frame from 12 cusp longitudes in house-number order.
    ///
    /// Fails with a fatal houses-stage error when the cusps do not form a
    /// valid partition or the angles do not anchor to cusps 1 and 10.
    pub fn new(cusp_longitudes: [f64; 12], ascendant: f64, midheaven: f64) -> EngineResult<Self> {
        let normalized: Vec<f64> = cusp_longitudes
            .iter()
            .map(|&c| normalize_degrees(c))
            .collect();

        // Forward arcs between consecutive cusps must all be positive and
        // close the circle exactly once.
        let mut total = 0.0;
        for i in 0..12 {
            let arc = forward_arc(normalized[i], normalized[(i + 1) % 12]);
            if arc <= 0.0 {
                return Err(frame_error(format!(
                    "cusp {} and cusp {} coincide or overlap",
                    i + 1,
                    ((i + 1) % 12) + 1
                )));
            }
            total += arc;
        }
        if (total - 360.0).abs() > FRAME_TOLERANCE_DEG {
            return Err(frame_error(format!(
                "cusps are not in house-number order (arcs sum to {total:.4}°)"
            )));
        }

        let ascendant = normalize_degrees(ascendant);
        let midheaven = normalize_degrees(midheaven);
        if angular_separation(ascendant, normalized[0]) > FRAME_TOLERANCE_DEG {
            return Err(frame_error(format!(
                "ascendant {ascendant:.4}° does not coincide with cusp 1 at {:.4}°",
                normalized[0]
            )));
        }
        if angular_separation(midheaven, normalized[9]) > FRAME_TOLERANCE_DEG {
            return Err(frame_error(format!(
                "midheaven {midheaven:.4}° does not coincide with cusp 10 at {:.4}°",
                normalized[9]
            )));
        }

        let mut cusps = [HouseCusp {
            number: 0,
            longitude: 0.0,
        }; 12];
        for (i, &longitude) in normalized.iter().enumerate() {
            cusps[i] = HouseCusp {
                number: (i + 1) as u8,
                longitude,
            };
        }

        Ok(Self {
            cusps,
            ascendant,
            midheaven,
        })
    }

    /// All cusps in house-number order.
    pub fn cusps(&self) -> &[HouseCusp; 12] {
        &self.cusps
    }

    /// Cusp longitude for a house number (1-12).
    pub fn cusp_longitude(&self, house: u8) -> f64 {
        self.cusps[((house - 1) % 12) as usize].longitude
    }

    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.midheaven
    }
}

fn frame_error(message: String) -> ChartError {
    ChartError::backend(
        Stage::Houses,
        message,
        ErrorContext::new("house_frame_validation"),
    )
}

/// The four chart angles plus the Part of Fortune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Angles {
    pub ascendant: f64,
    pub midheaven: f64,
    /// Ascendant + 180° mod 360
    pub descendant: f64,
    /// Midheaven + 180° mod 360
    pub imum_coeli: f64,
    /// Absent when the Sun or Moon position failed to compute
    pub part_of_fortune: Option<f64>,
}

impl Angles {
    /// Derive the angles from a house frame and an optional Part of Fortune.
    pub fn from_frame(frame: &HouseFrame, part_of_fortune: Option<f64>) -> Self {
        Self {
            ascendant: frame.ascendant(),
            midheaven: frame.midheaven(),
            descendant: normalize_degrees(frame.ascendant() + 180.0),
            imum_coeli: normalize_degrees(frame.midheaven() + 180.0),
            part_of_fortune,
        }
    }
}
