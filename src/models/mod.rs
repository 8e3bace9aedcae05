//! Value types of the chart engine: angle math, time scales, zodiac
//! breakdowns, bodies and houses.

pub mod angle;
pub mod body;
pub mod houses;
pub mod time;
pub mod zodiac;

pub use body::{Body, BodyPosition};
pub use houses::{Angles, HouseCusp, HouseFrame};
pub use time::{JulianDay, ResolvedMoment};
pub use zodiac::{ZodiacSign, ZodiacalCoordinate};
