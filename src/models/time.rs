//! Julian Day representation and the resolved birth moment.
//!
//! JD 2440587.5 = 1970-01-01 00:00:00 UTC (the unix epoch).
//! Conversion between the UT and Ephemeris-Time scales applies a
//! deterministic delta-T polynomial (Espenak & Meeus piecewise fit).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Julian Day of the unix epoch.
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Day value.
///
/// The same newtype carries both UT and ET day counts; `ResolvedMoment`
/// keeps the two scales in separate fields.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Create a new Julian Day value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Create from a unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self(timestamp / 86_400.0 + JD_UNIX_EPOCH)
    }

    /// Convert to a unix timestamp.
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.0 - JD_UNIX_EPOCH) * 86_400.0
    }

    /// Create from a chrono UTC datetime.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let secs = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        Self::from_unix_timestamp(secs)
    }

    /// Apply delta-T for the given decimal year, yielding the
    /// Ephemeris-Time Julian Day consumed by the ephemeris backend.
    pub fn to_ephemeris_time(self, decimal_year: f64) -> JulianDay {
        JulianDay(self.0 + delta_t_seconds(decimal_year) / 86_400.0)
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay(v)
    }
}

/// Delta-T (TT - UT1) in seconds for a decimal year.
///
/// Piecewise polynomial fit after Espenak & Meeus, valid 1900-2150 with a
/// long-term parabola outside that range. Deterministic by construction;
/// no leap-second tables involved.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&year) {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// A birth moment resolved to UTC, Julian Day and timezone.
///
/// Derived once from a `BirthQuery`; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMoment {
    /// The birth instant in UTC
    pub utc: DateTime<Utc>,
    /// Julian Day on the UT scale
    pub jd_ut: JulianDay,
    /// Julian Day on the Ephemeris-Time scale (delta-T applied)
    pub jd_et: JulianDay,
    /// The IANA zone the wall clock was interpreted in
    pub zone: String,
    /// Whether daylight saving time was in effect at the moment
    pub dst: bool,
}
