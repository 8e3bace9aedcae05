//! Per-body position computation over the ephemeris backend.
//!
//! Failures are isolated at body granularity: a body the backend cannot
//! compute is simply absent from the result map, and every other body
//! (and the houses/angles downstream) proceeds unaffected.

use std::collections::{BTreeMap, BTreeSet};

use crate::api::GeoLocation;
use crate::backends::Ephemeris;
use crate::models::angle::normalize_degrees;
use crate::models::{Body, BodyPosition, JulianDay};

/// Position post-processing configuration.
#[derive(Debug, Clone)]
pub struct PositionConfig {
    /// Bodies reported as direct regardless of computed speed sign.
    ///
    /// A product rule, not a physics fact: mean points oscillate around
    /// a mean motion and are presented as never retrograde.
    pub never_retrograde: BTreeSet<Body>,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            never_retrograde: BTreeSet::from([Body::MeanNode, Body::Lilith]),
        }
    }
}

/// Compute positions for the requested bodies.
///
/// `observer` switches the backend to topocentric mode. The result holds
/// one entry per body the backend computed; houses are not assigned yet.
pub fn compute_positions(
    ephemeris: &dyn Ephemeris,
    jd: JulianDay,
    bodies: &[Body],
    observer: Option<&GeoLocation>,
    config: &PositionConfig,
) -> BTreeMap<Body, BodyPosition> {
    let mut positions = BTreeMap::new();
    for &body in bodies {
        match ephemeris.compute(jd, body, observer) {
            Ok(sample) => {
                let longitude = normalize_degrees(sample.longitude);
                let retrograde =
                    sample.speed < 0.0 && !config.never_retrograde.contains(&body);
                positions.insert(
                    body,
                    BodyPosition::new(body, longitude, sample.speed, retrograde),
                );
            }
            Err(err) => {
                log::warn!("position computation failed for {body}: {err}");
            }
        }
    }
    positions
}
