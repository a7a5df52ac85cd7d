//! Route planning over a metro network.
//!
//! A query runs in stages, each a pure function over the frozen network:
//!
//! 1. [`shortest_paths`] computes fastest times and predecessor links.
//! 2. [`reconstruct`] turns the links into a node path, and
//!    [`dedup_by_name`] collapses interchange twins into rider-facing stops.
//! 3. [`path_distance`] and [`fare`] price the journey.
//! 4. [`directions`] narrates it, announcing line changes.
//!
//! [`Planner::plan`] runs all of them for a [`RouteQuery`].

mod config;
mod dijkstra;
mod directions;
mod fare;
mod path;
mod search;


pub use config::{PlannerConfig, Selection};
pub use dijkstra::{ShortestPaths, shortest_paths};
pub use directions::{Directions, RouteWarning, Step, directions};
pub use fare::{FareDay, apply_card_discount, fare};
pub use path::{dedup_by_name, path_distance, reconstruct};
pub use search::{Planner, RouteError, RouteQuery, RouteResult, plan};
