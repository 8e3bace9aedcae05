//! Coordinate-to-zone resolution.
//!
//! Chains the lookup backend's containment and nearest-zone queries and
//! falls back to UTC, so resolution never fails.

use crate::backends::TimezoneLookup;

/// Resolve an IANA zone for validated coordinates.
///
/// Order: containing zone, then nearest zone by boundary distance (open
/// ocean), then `"UTC"`. Always returns a usable zone.
pub fn resolve_zone(lookup: &dyn TimezoneLookup, latitude: f64, longitude: f64) -> String {
    if let Some(zone) = lookup.zone_at(latitude, longitude) {
        return zone;
    }
    if let Some(zone) = lookup.nearest_zone(latitude, longitude) {
        log::debug!(
            "no zone contains ({latitude}, {longitude}); using nearest zone {zone}"
        );
        return zone;
    }
    log::warn!("timezone lookup found no zone for ({latitude}, {longitude}); falling back to UTC");
    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::ZoneTableLookup;

    #[test]
    fn resolves_contained_point() {
        let lookup = ZoneTableLookup::builtin();
        assert_eq!(resolve_zone(&lookup, 48.9, 2.3), "Europe/Paris");
    }

    #[test]
    fn ocean_point_uses_nearest() {
        let lookup = ZoneTableLookup::builtin();
        // Mid North Atlantic: nothing contains it but a nearest exists
        let zone = resolve_zone(&lookup, 45.0, -40.0);
        assert_ne!(zone, "UTC");
    }

    #[test]
    fn empty_backend_falls_back_to_utc() {
        let lookup = ZoneTableLookup::empty();
        assert_eq!(resolve_zone(&lookup, 0.0, 0.0), "UTC");
    }
}
