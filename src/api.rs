//! Public DTO surface of the engine.
//!
//! `BirthQuery` is the single input; `ChartResult` is the single output.
//! All types (de)serialize to the JSON wire shapes consumed by the
//! surrounding report orchestration.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, EngineResult, ErrorContext};
use crate::models::{Angles, Body, BodyPosition, HouseFrame, ResolvedMoment, ZodiacalCoordinate};

/// A geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// A birth moment as submitted by the caller.
///
/// Immutable and validated at construction: latitude must lie in
/// `[-90, 90]`, longitude in `[-180, 180]`. Deserializes from
/// `{date, time, latitude, longitude, timezone?}` with an ISO-8601 date
/// and a `"HH:MM"` or `"HH:MM:SS"` time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthQueryWire")]
pub struct BirthQuery {
    date: NaiveDate,
    time: NaiveTime,
    latitude: f64,
    longitude: f64,
    timezone: Option<String>,
}

impl BirthQuery {
    /// Create a validated query. An explicit IANA zone, when given,
    /// takes precedence over coordinate-derived resolution.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        latitude: f64,
        longitude: f64,
        timezone: Option<String>,
    ) -> EngineResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !latitude.is_finite() {
            return Err(ChartError::validation(
                format!("latitude {latitude} outside [-90, 90]"),
                ErrorContext::new("birth_query").with_entity("latitude"),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) || !longitude.is_finite() {
            return Err(ChartError::validation(
                format!("longitude {longitude} outside [-180, 180]"),
                ErrorContext::new("birth_query").with_entity("longitude"),
            ));
        }
        Ok(Self {
            date,
            time,
            latitude,
            longitude,
            timezone,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Explicit IANA zone override, if the caller supplied one.
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Raw wire shape for `BirthQuery`.
#[derive(Debug, Deserialize)]
struct BirthQueryWire {
    date: String,
    time: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    timezone: Option<String>,
}

impl TryFrom<BirthQueryWire> for BirthQuery {
    type Error = ChartError;

    fn try_from(wire: BirthQueryWire) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(&wire.date, "%Y-%m-%d").map_err(|e| {
            ChartError::validation(
                format!("unparseable date {:?}: {e}", wire.date),
                ErrorContext::new("birth_query").with_entity("date"),
            )
        })?;
        let time = NaiveTime::parse_from_str(&wire.time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&wire.time, "%H:%M"))
            .map_err(|e| {
                ChartError::validation(
                    format!("unparseable time {:?}: {e}", wire.time),
                    ErrorContext::new("birth_query").with_entity("time"),
                )
            })?;
        BirthQuery::new(date, time, wire.latitude, wire.longitude, wire.timezone)
    }
}

/// Per-body entry of a chart result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBodyEntry {
    pub longitude: f64,
    pub speed: f64,
    pub retrograde: bool,
    #[serde(flatten)]
    pub zodiac: ZodiacalCoordinate,
    pub house: Option<u8>,
}

impl From<&BodyPosition> for ChartBodyEntry {
    fn from(pos: &BodyPosition) -> Self {
        Self {
            longitude: pos.longitude,
            speed: pos.speed,
            retrograde: pos.retrograde,
            zodiac: pos.zodiac,
            house: pos.house,
        }
    }
}

/// Per-house entry of a chart result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartHouseEntry {
    pub number: u8,
    pub cusp_longitude: f64,
    #[serde(flatten)]
    pub zodiac: ZodiacalCoordinate,
}

/// The full computed chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    #[serde(rename = "resolvedMoment")]
    pub moment: ResolvedMoment,
    /// One entry per tracked body; bodies whose ephemeris computation
    /// failed are absent.
    pub bodies: BTreeMap<Body, ChartBodyEntry>,
    /// The twelve houses in house-number order
    pub houses: Vec<ChartHouseEntry>,
    pub angles: Angles,
}

impl ChartResult {
    /// Assemble the output DTO from the computed stages.
    pub fn assemble(
        moment: ResolvedMoment,
        positions: &BTreeMap<Body, BodyPosition>,
        frame: &HouseFrame,
        angles: Angles,
    ) -> Self {
        let bodies = positions
            .iter()
            .map(|(&body, pos)| (body, ChartBodyEntry::from(pos)))
            .collect();
        let houses = frame
            .cusps()
            .iter()
            .map(|cusp| ChartHouseEntry {
                number: cusp.number,
                cusp_longitude: cusp.longitude,
                zodiac: ZodiacalCoordinate::from_longitude(cusp.longitude),
            })
            .collect();
        Self {
            moment,
            bodies,
            houses,
            angles,
        }
    }
}
