//! Ephemeris backend boundary.
//!
//! The numerical planetary-motion algorithm lives behind this trait; the
//! engine only consumes raw `(longitude, speed)` samples and layers the
//! chart geometry on top.

use std::collections::{BTreeMap, BTreeSet};

use crate::api::GeoLocation;
use crate::error::{ChartError, EngineResult, ErrorContext, Stage};
use crate::models::{Body, JulianDay};

/// Raw per-body ephemeris output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    /// Ecliptic longitude in degrees (not yet normalized)
    pub longitude: f64,
    /// Daily motion in degrees per day
    pub speed: f64,
}

/// Computes raw body positions for an Ephemeris-Time Julian Day.
///
/// Implementations must be `Send + Sync`; per-body calls are independent
/// and may be fanned out by the caller.
pub trait Ephemeris: Send + Sync {
    /// Compute longitude and daily speed for one body.
    ///
    /// `observer` switches the backend to topocentric mode when present.
    fn compute(
        &self,
        jd: JulianDay,
        body: Body,
        observer: Option<&GeoLocation>,
    ) -> EngineResult<EphemerisSample>;
}

/// Deterministic in-memory ephemeris for unit testing and local runs.
///
/// Holds a fixed table of per-body samples and can be told to fail for
/// individual bodies to exercise failure-isolation paths.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    table: BTreeMap<Body, EphemerisSample>,
    failing: BTreeSet<Body>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body with a fixed longitude and speed.
    pub fn with_body(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        self.table.insert(body, EphemerisSample { longitude, speed });
        self
    }

    /// Make computation fail for a body.
    pub fn with_failure(mut self, body: Body) -> Self {
        self.failing.insert(body);
        self
    }
}

impl Ephemeris for FixedEphemeris {
    fn compute(
        &self,
        _jd: JulianDay,
        body: Body,
        _observer: Option<&GeoLocation>,
    ) -> EngineResult<EphemerisSample> {
        if self.failing.contains(&body) {
            return Err(ChartError::backend(
                Stage::Positions,
                "injected ephemeris failure",
                ErrorContext::new("fixed_ephemeris").with_entity(body.name()),
            ));
        }
        self.table.get(&body).copied().ok_or_else(|| {
            ChartError::backend(
                Stage::Positions,
                "body not present in fixed ephemeris table",
                ErrorContext::new("fixed_ephemeris").with_entity(body.name()),
            )
        })
    }
}
