//! Local wall-clock to UTC instant and Julian Day resolution.

use chrono::{LocalResult, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::api::BirthQuery;
use crate::error::{ChartError, EngineResult, ErrorContext};
use crate::models::{JulianDay, ResolvedMoment};

/// Resolve a birth query to a UTC instant and Ephemeris-Time Julian Day.
///
/// `derived_zone` is the coordinate-derived zone from the timezone
/// resolver; an explicit zone on the query always wins over it. The wall
/// clock is localized DST-aware: an ambiguous local time (the fall-back
/// hour) takes the earlier offset, a nonexistent local time (the
/// spring-forward gap) is a validation error.
pub fn resolve_moment(query: &BirthQuery, derived_zone: &str) -> EngineResult<ResolvedMoment> {
    // Constructed queries are already validated; guard anyway so this
    // entry point holds its own contract.
    if !(-90.0..=90.0).contains(&query.latitude()) {
        return Err(ChartError::validation(
            format!("latitude {} outside [-90, 90]", query.latitude()),
            ErrorContext::new("resolve_moment").with_entity("latitude"),
        ));
    }
    if !(-180.0..=180.0).contains(&query.longitude()) {
        return Err(ChartError::validation(
            format!("longitude {} outside [-180, 180]", query.longitude()),
            ErrorContext::new("resolve_moment").with_entity("longitude"),
        ));
    }

    let zone_name = query.timezone().unwrap_or(derived_zone);
    let tz: Tz = zone_name.parse().map_err(|_| {
        ChartError::validation(
            format!("unknown IANA zone {zone_name:?}"),
            ErrorContext::new("resolve_moment").with_entity(zone_name),
        )
    })?;

    let naive = query.date().and_time(query.time());
    let localized = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _later) => {
            log::debug!("ambiguous local time {naive} in {zone_name}; taking earlier offset");
            earlier
        }
        LocalResult::None => {
            return Err(ChartError::validation(
                format!("local time {naive} does not exist in {zone_name} (DST gap)"),
                ErrorContext::new("resolve_moment").with_entity(zone_name),
            ));
        }
    };

    let dst = localized.offset().dst_offset().num_seconds() != 0;
    let utc = localized.with_timezone(&Utc);
    let jd_ut = JulianDay::from_datetime(&utc);
    let jd_et = jd_ut.to_ephemeris_time(decimal_year(&utc));

    log::debug!(
        "resolved {naive} {zone_name} -> {utc} (jd_ut={:.6}, jd_et={:.6}, dst={dst})",
        jd_ut.value(),
        jd_et.value()
    );

    Ok(ResolvedMoment {
        utc,
        jd_ut,
        jd_et,
        zone: zone_name.to_string(),
        dst,
    })
}

/// Decimal year for the delta-T polynomial (mid-month convention).
fn decimal_year(utc: &chrono::DateTime<Utc>) -> f64 {
    use chrono::Datelike;
    utc.year() as f64 + (utc.month() as f64 - 0.5) / 12.0
}
