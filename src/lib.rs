//! # horoscope-core
//!
//! Astrological chart geometry engine: converts a birth moment (date,
//! time, coordinates) into zodiacal positions, house cusps, angles and
//! rule-validated planet-to-planet aspects.
//!
//! The crate is pure computation. Everything with an external footprint
//! sits behind an injected trait in [`backends`]:
//!
//! - [`backends::Ephemeris`]: raw per-body `(longitude, speed)`
//! - [`backends::HouseSolver`]: cusps, Ascendant, Midheaven
//! - [`backends::TimezoneLookup`]: coordinate-to-zone lookup
//! - [`backends::RulesStore`]: per-report-type aspect rulesets
//!
//! Each trait ships with a deterministic in-memory implementation, so the
//! full pipeline runs without a numerical ephemeris or a database.
//!
//! ## Pipeline
//!
//! ```text
//! BirthQuery
//!   -> resolve_zone        (coordinates -> IANA zone, never fails)
//!   -> resolve_moment      (wall clock -> UTC + JD(UT) + JD(ET))
//!   -> compute_positions   (per body, failures isolated)
//!   -> compute_houses      (fatal on failure)
//!   -> assign_house        (partition + proximity correction)
//!   -> part_of_fortune     (sect from the Sun's house)
//!   => ChartResult
//! ```
//!
//! Aspect scanning is a separate pass over computed positions, driven by
//! the effective ruleset of a report type ([`services::effective_config`]).
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{NaiveDate, NaiveTime};
//! use horoscope_core::api::BirthQuery;
//! use horoscope_core::backends::{
//!     FixedEphemeris, FixedHouseSolver, InMemoryRulesStore, ZoneTableLookup,
//! };
//! use horoscope_core::models::Body;
//! use horoscope_core::rules::ReportType;
//! use horoscope_core::services::ChartService;
//!
//! let ephemeris = FixedEphemeris::new()
//!     .with_body(Body::Sun, 84.2, 0.96)
//!     .with_body(Body::Moon, 201.7, 13.18);
//! let service = ChartService::new(
//!     Arc::new(ZoneTableLookup::builtin()),
//!     Arc::new(ephemeris),
//!     Arc::new(FixedHouseSolver::equal(95.0)),
//!     Arc::new(InMemoryRulesStore::with_defaults()),
//! )
//! .with_bodies(vec![Body::Sun, Body::Moon]);
//!
//! let query = BirthQuery::new(
//!     NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
//!     NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
//!     40.71,
//!     -74.0,
//!     None,
//! )
//! .unwrap();
//!
//! let chart = service.compute_chart(&query, ReportType::Natal, None).unwrap();
//! assert_eq!(chart.houses.len(), 12);
//! assert!(chart.bodies.contains_key(&Body::Sun));
//! ```

pub mod api;
pub mod backends;
pub mod error;
pub mod models;
pub mod rules;
pub mod services;

pub use api::{BirthQuery, ChartResult};
pub use error::{ChartError, EngineResult, ErrorContext, Stage};
pub use services::ChartService;
