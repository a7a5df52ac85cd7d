//! Domain types for the metro planner.
//!
//! Stations, lines and line sets. All types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod line;
mod station;

pub use error::DomainError;
pub use line::{Line, Lines};
pub use station::{Station, StationId};
