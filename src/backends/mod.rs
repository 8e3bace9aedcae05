//! Injected collaborator boundaries.
//!
//! Each external dependency of the engine (ephemeris, house solver,
//! timezone lookup, rules store) is a trait with a deterministic
//! in-memory implementation for unit testing and local development, so
//! swapping in a real backend never touches the computation code.

pub mod ephemeris;
pub mod house_solver;
pub mod rules_store;
pub mod timezone;

pub use ephemeris::{Ephemeris, EphemerisSample, FixedEphemeris};
pub use house_solver::{FixedHouseSolver, HouseSolver, HouseSystem};
pub use rules_store::{InMemoryRulesStore, RulesStore};
pub use timezone::{TimezoneLookup, ZoneTableLookup};
