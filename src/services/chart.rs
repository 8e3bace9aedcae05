//! Chart orchestration over the injected backends.
//!
//! Composes the components in fixed dependency order: timezone →
//! moment → {positions, houses} → house assignment → Part of Fortune,
//! and exposes the aspect scan for the report layer.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{BirthQuery, ChartResult};
use crate::backends::{Ephemeris, HouseSolver, HouseSystem, RulesStore, TimezoneLookup};
use crate::error::EngineResult;
use crate::models::{Angles, Body, BodyPosition};
use crate::rules::{ReportType, UserOverrides};
use crate::services::aspects::{aspects_between, effective_config, AspectResult};
use crate::services::fortune::part_of_fortune;
use crate::services::houses::{assign_house, compute_houses};
use crate::services::moment::resolve_moment;
use crate::services::positions::{compute_positions, PositionConfig};
use crate::services::timezone::resolve_zone;

/// Houses above the horizon; the Sun in one of these makes the chart
/// diurnal for the Part of Fortune.
const DIURNAL_HOUSES: std::ops::RangeInclusive<u8> = 7..=12;

/// The chart computation engine, owning its injected collaborators.
///
/// Stateless per call: every value is created and consumed within one
/// `compute_chart` invocation, so a single instance is safe to share
/// across threads.
pub struct ChartService {
    timezone: Arc<dyn TimezoneLookup>,
    ephemeris: Arc<dyn Ephemeris>,
    house_solver: Arc<dyn HouseSolver>,
    rules_store: Arc<dyn RulesStore>,
    house_system: HouseSystem,
    bodies: Vec<Body>,
    position_config: PositionConfig,
    topocentric: bool,
}

impl ChartService {
    pub fn new(
        timezone: Arc<dyn TimezoneLookup>,
        ephemeris: Arc<dyn Ephemeris>,
        house_solver: Arc<dyn HouseSolver>,
        rules_store: Arc<dyn RulesStore>,
    ) -> Self {
        Self {
            timezone,
            ephemeris,
            house_solver,
            rules_store,
            house_system: HouseSystem::default(),
            bodies: Body::ALL.to_vec(),
            position_config: PositionConfig::default(),
            topocentric: true,
        }
    }

    /// Use a different house division method.
    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = system;
        self
    }

    /// Track a custom body set instead of the default twelve.
    pub fn with_bodies(mut self, bodies: Vec<Body>) -> Self {
        self.bodies = bodies;
        self
    }

    /// Toggle topocentric positions. When disabled the ephemeris is
    /// called without an observer and computes geocentric positions.
    pub fn with_topocentric(mut self, topocentric: bool) -> Self {
        self.topocentric = topocentric;
        self
    }

    /// Compute the full chart for a birth query.
    ///
    /// House-correction thresholds come from the effective ruleset of
    /// `report_type` (with `overrides` merged in). Per-body ephemeris
    /// failures leave that body absent; a house-solver failure aborts.
    pub fn compute_chart(
        &self,
        query: &BirthQuery,
        report_type: ReportType,
        overrides: Option<&UserOverrides>,
    ) -> EngineResult<ChartResult> {
        let zone = resolve_zone(
            self.timezone.as_ref(),
            query.latitude(),
            query.longitude(),
        );
        let moment = resolve_moment(query, &zone)?;
        let location = query.location();

        let observer = if self.topocentric {
            Some(&location)
        } else {
            None
        };
        let raw_positions = compute_positions(
            self.ephemeris.as_ref(),
            moment.jd_et,
            &self.bodies,
            observer,
            &self.position_config,
        );
        let frame = compute_houses(
            self.house_solver.as_ref(),
            moment.jd_et,
            &location,
            self.house_system,
        )?;

        let config = effective_config(self.rules_store.as_ref(), report_type, overrides);
        let correction = &config.rules.house_correction;

        let mut positions: BTreeMap<Body, BodyPosition> = BTreeMap::new();
        for (body, position) in raw_positions {
            let assignment = assign_house(position.longitude, &frame, correction);
            if assignment.corrected {
                log::debug!("{body}: {}", assignment.note);
            }
            positions.insert(body, position.with_house(assignment.house));
        }

        let fortune = self.fortune_for(&positions, frame.ascendant());
        let angles = Angles::from_frame(&frame, fortune);

        Ok(ChartResult::assemble(moment, &positions, &frame, angles))
    }

    /// Scan computed positions for validated aspects under the effective
    /// ruleset of `report_type`.
    pub fn compute_aspects(
        &self,
        positions: &BTreeMap<Body, BodyPosition>,
        report_type: ReportType,
        overrides: Option<&UserOverrides>,
    ) -> Vec<AspectResult> {
        let config = effective_config(self.rules_store.as_ref(), report_type, overrides);
        aspects_between(positions, &config)
    }

    /// Part of Fortune, when both luminaries computed.
    ///
    /// Sect comes from the Sun's assigned house: houses 7-12 lie above
    /// the horizon, making the chart diurnal.
    fn fortune_for(
        &self,
        positions: &BTreeMap<Body, BodyPosition>,
        ascendant: f64,
    ) -> Option<f64> {
        let sun = positions.get(&Body::Sun)?;
        let moon = positions.get(&Body::Moon)?;
        let diurnal = sun.house.map(|h| DIURNAL_HOUSES.contains(&h))?;
        Some(part_of_fortune(
            ascendant,
            sun.longitude,
            moon.longitude,
            diurnal,
        ))
    }
}
