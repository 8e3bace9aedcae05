//! Timezone-by-coordinate lookup boundary.
//!
//! A real deployment backs this with a timezone-boundary polygon dataset;
//! the bundled implementation approximates containment with a
//! representative-point table and a great-circle radius cut, which keeps
//! the resolver chain (containment, nearest, UTC) fully exercisable
//! without external data.

/// Central angle (degrees) within which a table point counts as
/// "containing" the query coordinate.
const CONTAINMENT_RADIUS_DEG: f64 = 10.0;

/// Looks up an IANA zone for a coordinate.
pub trait TimezoneLookup: Send + Sync {
    /// Zone whose boundary contains the point, if any.
    fn zone_at(&self, latitude: f64, longitude: f64) -> Option<String>;

    /// Nearest zone by boundary distance, for points no zone contains
    /// (open ocean).
    fn nearest_zone(&self, latitude: f64, longitude: f64) -> Option<String>;
}

#[derive(Debug, Clone, Copy)]
struct ZoneEntry {
    zone: &'static str,
    latitude: f64,
    longitude: f64,
}

/// Representative-point zone table.
#[derive(Debug, Clone)]
pub struct ZoneTableLookup {
    entries: Vec<ZoneEntry>,
}

impl ZoneTableLookup {
    /// Table covering the major inhabited regions.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ZONES.to_vec(),
        }
    }

    /// Empty table; every lookup misses. Useful for testing the UTC
    /// fallback.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn best_match(&self, latitude: f64, longitude: f64) -> Option<(&'static str, f64)> {
        self.entries
            .iter()
            .map(|e| {
                (
                    e.zone,
                    central_angle_deg(latitude, longitude, e.latitude, e.longitude),
                )
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Default for ZoneTableLookup {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TimezoneLookup for ZoneTableLookup {
    fn zone_at(&self, latitude: f64, longitude: f64) -> Option<String> {
        self.best_match(latitude, longitude)
            .filter(|(_, distance)| *distance <= CONTAINMENT_RADIUS_DEG)
            .map(|(zone, _)| zone.to_string())
    }

    fn nearest_zone(&self, latitude: f64, longitude: f64) -> Option<String> {
        self.best_match(latitude, longitude)
            .map(|(zone, _)| zone.to_string())
    }
}

/// Great-circle central angle between two coordinates, in degrees.
fn central_angle_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    (2.0 * a.sqrt().asin()).to_degrees()
}

const BUILTIN_ZONES: [ZoneEntry; 40] = [
    ZoneEntry { zone: "America/Anchorage", latitude: 61.2, longitude: -149.9 },
    ZoneEntry { zone: "America/Los_Angeles", latitude: 34.1, longitude: -118.2 },
    ZoneEntry { zone: "America/Denver", latitude: 39.7, longitude: -105.0 },
    ZoneEntry { zone: "America/Chicago", latitude: 41.9, longitude: -87.6 },
    ZoneEntry { zone: "America/New_York", latitude: 40.7, longitude: -74.0 },
    ZoneEntry { zone: "America/Toronto", latitude: 43.7, longitude: -79.4 },
    ZoneEntry { zone: "America/Mexico_City", latitude: 19.4, longitude: -99.1 },
    ZoneEntry { zone: "America/Bogota", latitude: 4.7, longitude: -74.1 },
    ZoneEntry { zone: "America/Lima", latitude: -12.0, longitude: -77.0 },
    ZoneEntry { zone: "America/Santiago", latitude: -33.5, longitude: -70.7 },
    ZoneEntry { zone: "America/Argentina/Buenos_Aires", latitude: -34.6, longitude: -58.4 },
    ZoneEntry { zone: "America/Sao_Paulo", latitude: -23.6, longitude: -46.6 },
    ZoneEntry { zone: "Atlantic/Reykjavik", latitude: 64.1, longitude: -21.9 },
    ZoneEntry { zone: "Europe/Lisbon", latitude: 38.7, longitude: -9.1 },
    ZoneEntry { zone: "Europe/London", latitude: 51.5, longitude: -0.1 },
    ZoneEntry { zone: "Europe/Madrid", latitude: 40.4, longitude: -3.7 },
    ZoneEntry { zone: "Europe/Paris", latitude: 48.9, longitude: 2.3 },
    ZoneEntry { zone: "Europe/Rome", latitude: 41.9, longitude: 12.5 },
    ZoneEntry { zone: "Europe/Berlin", latitude: 52.5, longitude: 13.4 },
    ZoneEntry { zone: "Europe/Warsaw", latitude: 52.2, longitude: 21.0 },
    ZoneEntry { zone: "Europe/Athens", latitude: 38.0, longitude: 23.7 },
    ZoneEntry { zone: "Europe/Istanbul", latitude: 41.0, longitude: 29.0 },
    ZoneEntry { zone: "Europe/Moscow", latitude: 55.8, longitude: 37.6 },
    ZoneEntry { zone: "Africa/Cairo", latitude: 30.0, longitude: 31.2 },
    ZoneEntry { zone: "Africa/Lagos", latitude: 6.5, longitude: 3.4 },
    ZoneEntry { zone: "Africa/Nairobi", latitude: -1.3, longitude: 36.8 },
    ZoneEntry { zone: "Africa/Johannesburg", latitude: -26.2, longitude: 28.0 },
    ZoneEntry { zone: "Asia/Dubai", latitude: 25.2, longitude: 55.3 },
    ZoneEntry { zone: "Asia/Karachi", latitude: 24.9, longitude: 67.0 },
    ZoneEntry { zone: "Asia/Kolkata", latitude: 19.1, longitude: 72.9 },
    ZoneEntry { zone: "Asia/Dhaka", latitude: 23.8, longitude: 90.4 },
    ZoneEntry { zone: "Asia/Bangkok", latitude: 13.8, longitude: 100.5 },
    ZoneEntry { zone: "Asia/Shanghai", latitude: 31.2, longitude: 121.5 },
    ZoneEntry { zone: "Asia/Hong_Kong", latitude: 22.3, longitude: 114.2 },
    ZoneEntry { zone: "Asia/Tokyo", latitude: 35.7, longitude: 139.7 },
    ZoneEntry { zone: "Asia/Seoul", latitude: 37.6, longitude: 127.0 },
    ZoneEntry { zone: "Asia/Jakarta", latitude: -6.2, longitude: 106.8 },
    ZoneEntry { zone: "Australia/Perth", latitude: -31.9, longitude: 115.9 },
    ZoneEntry { zone: "Australia/Sydney", latitude: -33.9, longitude: 151.2 },
    ZoneEntry { zone: "Pacific/Auckland", latitude: -36.8, longitude: 174.8 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_near_a_city() {
        let lookup = ZoneTableLookup::builtin();
        assert_eq!(
            lookup.zone_at(40.7, -74.0).as_deref(),
            Some("America/New_York")
        );
        assert_eq!(
            lookup.zone_at(51.4, 0.2).as_deref(),
            Some("Europe/London")
        );
    }

    #[test]
    fn open_ocean_misses_containment_but_has_a_nearest() {
        let lookup = ZoneTableLookup::builtin();
        // Mid South Atlantic
        assert_eq!(lookup.zone_at(-35.0, -20.0), None);
        assert!(lookup.nearest_zone(-35.0, -20.0).is_some());
    }

    #[test]
    fn empty_table_misses_everything() {
        let lookup = ZoneTableLookup::empty();
        assert_eq!(lookup.zone_at(0.0, 0.0), None);
        assert_eq!(lookup.nearest_zone(0.0, 0.0), None);
    }

    #[test]
    fn central_angle_is_zero_at_same_point() {
        assert!(central_angle_deg(12.3, 45.6, 12.3, 45.6) < 1e-9);
    }
}
