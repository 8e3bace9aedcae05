//! Computation services, composed leaves-first by the chart orchestrator.

pub mod aspects;
pub mod chart;
pub mod fortune;
pub mod houses;
pub mod moment;
pub mod positions;
pub mod timezone;

pub use aspects::{
    aspects_between, classify_aspect, effective_config, validate_aspect, AspectResult,
    DETECTION_WINDOW_DEG,
};
pub use chart::ChartService;
pub use fortune::part_of_fortune;
pub use houses::{assign_house, compute_houses, HouseAssignment};
pub use moment::resolve_moment;
pub use positions::{compute_positions, PositionConfig};
pub use timezone::resolve_zone;
