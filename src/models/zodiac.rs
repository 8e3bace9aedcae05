//! Zodiac signs and the carry-propagating degree formatter.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::angle::normalize_degrees;

/// The twelve zodiac signs, in ecliptic order from 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in ecliptic order.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for a 0-based index, modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// 0-based index of this sign (Aries = 0).
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Ecliptic longitude where this sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decimal ecliptic longitude broken down into sign / degree / minute /
/// second, with arc-second rounding carries propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacalCoordinate {
    pub sign: ZodiacSign,
    pub degree: u8,
    pub minute: u8,
    pub second: u8,
}

impl ZodiacalCoordinate {
    /// Break a decimal longitude into sign/degree/minute/second.
    ///
    /// Rounding seconds can overflow into minutes, minutes into degrees,
    /// and degrees into the next sign; the carries must run in exactly
    /// that order or positions within an arc-second of a sign boundary
    /// land in the wrong sign.
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        let mut sign_index = (lon / 30.0).floor() as usize;
        let remainder = lon - sign_index as f64 * 30.0;

        let mut degree = remainder.floor();
        let minutes_full = (remainder - degree) * 60.0;
        let mut minute = minutes_full.floor();
        let mut second = ((minutes_full - minute) * 60.0).round();

        if second >= 60.0 {
            second = 0.0;
            minute += 1.0;
        }
        if minute >= 60.0 {
            minute = 0.0;
            degree += 1.0;
        }
        if degree >= 30.0 {
            degree = 0.0;
            sign_index = (sign_index + 1) % 12;
        }

        Self {
            sign: ZodiacSign::from_index(sign_index),
            degree: degree as u8,
            minute: minute as u8,
            second: second as u8,
        }
    }

    /// Reconstruct the decimal longitude (exact to the arc-second).
    pub fn to_longitude(&self) -> f64 {
        self.sign.start_longitude()
            + self.degree as f64
            + self.minute as f64 / 60.0
            + self.second as f64 / 3600.0
    }
}

impl fmt::Display for ZodiacalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:02}\" {}",
            self.degree, self.minute, self.second, self.sign
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARC_SECOND: f64 = 1.0 / 3600.0;

    #[test]
    fn splits_mid_sign_longitude() {
        let z = ZodiacalCoordinate::from_longitude(125.5);
        assert_eq!(z.sign, ZodiacSign::Leo);
        assert_eq!(z.degree, 5);
        assert_eq!(z.minute, 30);
        assert_eq!(z.second, 0);
    }

    #[test]
    fn round_trips_within_an_arc_second() {
        let mut deg = 0.0;
        while deg < 360.0 {
            let z = ZodiacalCoordinate::from_longitude(deg);
            let back = z.to_longitude();
            let err = (back - deg).abs().min((back - deg + 360.0).abs());
            assert!(
                err <= ARC_SECOND / 2.0 + 1e-9,
                "round trip off by {err} at {deg}"
            );
            deg += 0.073; // irregular step so sign boundaries get sampled
        }
    }

    #[test]
    fn periodic_in_full_turns() {
        for &deg in &[0.0, 13.37, 199.99, 359.5] {
            let base = ZodiacalCoordinate::from_longitude(deg);
            assert_eq!(base, ZodiacalCoordinate::from_longitude(deg + 360.0));
            assert_eq!(base, ZodiacalCoordinate::from_longitude(deg - 720.0));
        }
    }

    #[test]
    fn carries_across_sign_boundary() {
        // Within one arc-second of 30°: must carry into 0°0'0" Taurus,
        // never 30°0'0" Aries.
        let z = ZodiacalCoordinate::from_longitude(29.99999972);
        assert_eq!(z.sign, ZodiacSign::Taurus);
        assert_eq!((z.degree, z.minute, z.second), (0, 0, 0));
    }

    #[test]
    fn carries_across_pisces_into_aries() {
        let z = ZodiacalCoordinate::from_longitude(359.99999972);
        assert_eq!(z.sign, ZodiacSign::Aries);
        assert_eq!((z.degree, z.minute, z.second), (0, 0, 0));
    }

    #[test]
    fn second_carry_stops_at_minute_when_possible() {
        // 10°20'59.7" rounds to 10°21'00", no degree carry
        let lon = 10.0 + 20.0 / 60.0 + 59.7 / 3600.0;
        let z = ZodiacalCoordinate::from_longitude(lon);
        assert_eq!(z.sign, ZodiacSign::Aries);
        assert_eq!((z.degree, z.minute, z.second), (10, 21, 0));
    }

    #[test]
    fn negative_longitude_normalizes_first() {
        let z = ZodiacalCoordinate::from_longitude(-30.0);
        assert_eq!(z.sign, ZodiacSign::Pisces);
        assert_eq!((z.degree, z.minute, z.second), (0, 0, 0));
    }
}
