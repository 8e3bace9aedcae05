//! House-cusp solver boundary.
//!
//! Cusp solving (Placidus and friends) is delegated to an external
//! backend. The engine's contract on the returned frame (cusps in
//! house-number order, Ascendant == cusp 1, Midheaven == cusp 10) is
//! enforced by [`HouseFrame::new`], so a solver can only hand back a
//! valid frame. Solver failure is fatal to the whole chart.

use serde::{Deserialize, Serialize};

use crate::api::GeoLocation;
use crate::error::{ChartError, EngineResult, ErrorContext, Stage};
use crate::models::angle::normalize_degrees;
use crate::models::{HouseFrame, JulianDay};

/// House division method, passed through to the solver opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Porphyry,
    WholeSign,
    Equal,
}

/// Solves house cusps and angles for a moment and location.
pub trait HouseSolver: Send + Sync {
    fn solve(
        &self,
        jd: JulianDay,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> EngineResult<HouseFrame>;
}

/// Deterministic in-memory solver for unit testing and local runs.
///
/// Either divides the circle equally from a configured Ascendant, or
/// returns an explicit cusp table; can also be set to fail to exercise
/// the fatal-houses path.
#[derive(Debug, Clone)]
pub struct FixedHouseSolver {
    mode: SolverMode,
}

#[derive(Debug, Clone)]
enum SolverMode {
    Equal { ascendant: f64 },
    Explicit(Box<HouseFrame>),
    Failing,
}

impl FixedHouseSolver {
    /// Equal 30° houses from the given Ascendant; Midheaven falls on
    /// cusp 10 (Ascendant + 270°).
    pub fn equal(ascendant: f64) -> Self {
        Self {
            mode: SolverMode::Equal {
                ascendant: normalize_degrees(ascendant),
            },
        }
    }

    /// Return the given frame verbatim.
    pub fn explicit(frame: HouseFrame) -> Self {
        Self {
            mode: SolverMode::Explicit(Box::new(frame)),
        }
    }

    /// Always fail, for testing the fatal path.
    pub fn failing() -> Self {
        Self {
            mode: SolverMode::Failing,
        }
    }
}

impl HouseSolver for FixedHouseSolver {
    fn solve(
        &self,
        _jd: JulianDay,
        location: &GeoLocation,
        _system: HouseSystem,
    ) -> EngineResult<HouseFrame> {
        match &self.mode {
            SolverMode::Equal { ascendant } => {
                let mut cusps = [0.0; 12];
                for (i, cusp) in cusps.iter_mut().enumerate() {
                    *cusp = normalize_degrees(ascendant + i as f64 * 30.0);
                }
                HouseFrame::new(cusps, *ascendant, normalize_degrees(ascendant + 270.0))
            }
            SolverMode::Explicit(frame) => Ok((**frame).clone()),
            SolverMode::Failing => Err(ChartError::backend(
                Stage::Houses,
                "injected house solver failure",
                ErrorContext::new("fixed_house_solver").with_details(format!(
                    "latitude={}, longitude={}",
                    location.latitude, location.longitude
                )),
            )),
        }
    }
}
