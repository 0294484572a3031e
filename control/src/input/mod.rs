//! Interpretation of raw input levels.

pub mod edge;
pub mod snapshot;
