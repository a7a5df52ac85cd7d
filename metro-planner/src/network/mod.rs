//! The metro network graph.
//!
//! Stations plus a symmetric, time- and distance-weighted adjacency list.
//! A network is assembled once (by hand through [`NetworkBuilder`], from a
//! JSON [`Topology`], or as the built-in [`delhi_metro`] data) and is
//! read-only afterwards, so any number of route queries may share it.

mod delhi;
mod error;
mod graph;
mod topology;

pub use delhi::delhi_metro;
pub use error::NetworkError;
pub use graph::{Edge, Network, NetworkBuilder};
pub use topology::{EdgeRecord, StationRecord, Topology};
