//! Part of Fortune.
//!
//! Pure formula application; whether the chart is diurnal (Sun above the
//! horizon) is decided by the caller from the Sun's house placement.

use crate::models::angle::normalize_degrees;

/// Compute the Part of Fortune longitude.
///
/// Diurnal charts use `asc + moon - sun`; nocturnal charts swap the
/// luminaries: `asc + sun - moon`. Result is normalized to `[0, 360)`.
pub fn part_of_fortune(ascendant: f64, sun: f64, moon: f64, diurnal: bool) -> f64 {
    let raw = if diurnal {
        ascendant + moon - sun
    } else {
        ascendant + sun - moon
    };
    normalize_degrees(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diurnal_formula() {
        // Asc 10°, Moon 200°, Sun 300° -> (10 + 200 - 300) mod 360 = 270°
        assert_eq!(part_of_fortune(10.0, 300.0, 200.0, true), 270.0);
    }

    #[test]
    fn nocturnal_formula_swaps_luminaries() {
        // Asc 10°, Sun 300°, Moon 200° -> (10 + 300 - 200) mod 360 = 110°
        assert_eq!(part_of_fortune(10.0, 300.0, 200.0, false), 110.0);
    }

    #[test]
    fn result_is_normalized() {
        let pof = part_of_fortune(350.0, 10.0, 40.0, true);
        assert!((0.0..360.0).contains(&pof));
        assert_eq!(pof, 20.0);
    }

    #[test]
    fn new_moon_fortune_sits_on_the_ascendant() {
        // Sun conjunct Moon: both formulas collapse to the Ascendant
        assert_eq!(part_of_fortune(123.0, 45.0, 45.0, true), 123.0);
        assert_eq!(part_of_fortune(123.0, 45.0, 45.0, false), 123.0);
    }
}
