//! Tracked celestial bodies and their computed chart positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::zodiac::ZodiacalCoordinate;

/// A tracked celestial body.
///
/// The set matches what the chart tracks: the ten planets plus the mean
/// lunar node and Lilith (mean lunar apogee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
    Lilith,
}

impl Body {
    /// All tracked bodies, in traditional order.
    pub const ALL: [Body; 12] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::MeanNode,
        Body::Lilith,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::MeanNode => "Mean Node",
            Body::Lilith => "Lilith",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A body's computed chart position.
///
/// Produced by the position calculator without a house, then finalized by
/// the house assigner through [`BodyPosition::with_house`], which returns
/// a new value rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude in `[0, 360)`
    pub longitude: f64,
    /// Daily motion in degrees per day (negative when retrograde)
    pub speed: f64,
    /// Apparent backward motion flag, subject to the never-retrograde rule
    pub retrograde: bool,
    /// Formatted sign/degree/minute/second breakdown
    pub zodiac: ZodiacalCoordinate,
    /// Assigned house number (1-12), absent until house assignment runs
    pub house: Option<u8>,
}

impl BodyPosition {
    /// Build a position from normalized ephemeris output. House is unset.
    pub fn new(body: Body, longitude: f64, speed: f64, retrograde: bool) -> Self {
        Self {
            body,
            longitude,
            speed,
            retrograde,
            zodiac: ZodiacalCoordinate::from_longitude(longitude),
            house: None,
        }
    }

    /// Finalize with an assigned house, returning a new value.
    pub fn with_house(self, house: u8) -> Self {
        Self {
            house: Some(house),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zodiac::ZodiacSign;

    #[test]
    fn position_formats_zodiac_on_construction() {
        let pos = BodyPosition::new(Body::Mars, 95.5, 0.6, false);
        assert_eq!(pos.zodiac.sign, ZodiacSign::Cancer);
        assert_eq!(pos.zodiac.degree, 5);
        assert_eq!(pos.house, None);
    }

    #[test]
    fn with_house_returns_new_value() {
        let pos = BodyPosition::new(Body::Venus, 10.0, 1.2, false);
        let housed = pos.clone().with_house(7);
        assert_eq!(pos.house, None);
        assert_eq!(housed.house, Some(7));
        assert_eq!(housed.longitude, pos.longitude);
    }

    #[test]
    fn body_serde_uses_snake_case() {
        let json = serde_json::to_string(&Body::MeanNode).unwrap();
        assert_eq!(json, "\"mean_node\"");
        let back: Body = serde_json::from_str("\"lilith\"").unwrap();
        assert_eq!(back, Body::Lilith);
    }
}
