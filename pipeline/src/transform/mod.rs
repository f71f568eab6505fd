//! Transformation module.
//!
//! - Observations: required columns, year filter, typed rows
//! - Aggregate: group-by-and-sum with reference metadata
//! - Pipeline: end-to-end preparation run

pub mod aggregate;
pub mod observations;
pub mod pipeline;

pub use aggregate::{aggregate, Aggregator};
pub use observations::{collect_observations, Observation, ObservationSet, REQUIRED_COLUMNS};
pub use pipeline::*;
