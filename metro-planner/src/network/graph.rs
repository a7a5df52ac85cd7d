//! Network graph and builder.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{Lines, Station, StationId};

use super::NetworkError;

/// A directed half of a connection between two stations.
///
/// Connections are always stored as a symmetric pair of edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: StationId,
    pub to: StationId,
    /// Travel time in minutes
    pub minutes: u32,
    /// Track distance in kilometres
    pub km: f64,
}

/// A frozen metro network.
///
/// Station ids are exactly `0..len()`, every station has at least one line,
/// and adjacency is symmetric. There is no way to mutate a `Network` once
/// built.
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    adjacency: Vec<Vec<Edge>>,
}

impl Network {
    /// Returns the number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Check whether an id belongs to this network.
    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Result<&Station, NetworkError> {
        self.stations
            .get(id.index())
            .ok_or(NetworkError::InvalidStation {
                id,
                len: self.stations.len(),
            })
    }

    /// Returns the outgoing edges of a station, in insertion order.
    pub fn neighbors(&self, id: StationId) -> Result<&[Edge], NetworkError> {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .ok_or(NetworkError::InvalidStation {
                id,
                len: self.stations.len(),
            })
    }

    /// All stations, indexed by id.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the number of connections (each symmetric pair counted once).
    pub fn connection_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the fastest edge from `from` to `to`, if they are adjacent.
    ///
    /// When parallel edges tie on time, the first inserted wins. This is the
    /// edge a shortest-path relaxation would have used.
    pub fn edge_between(&self, from: StationId, to: StationId) -> Option<&Edge> {
        self.adjacency
            .get(from.index())?
            .iter()
            .filter(|edge| edge.to == to)
            .reduce(|best, edge| if edge.minutes < best.minutes { edge } else { best })
    }

    /// Find every station node with the given name, in ascending id order.
    pub fn find_by_name(&self, name: &str) -> Vec<StationId> {
        self.stations
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.id)
            .collect()
    }

    /// Resolve a station name to its lowest-numbered node.
    pub fn resolve(&self, name: &str) -> Option<StationId> {
        self.stations.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// Distinct station names in first-seen order.
    pub fn station_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.stations
            .iter()
            .map(|s| s.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Outgoing edges of an id already known to be valid.
    pub(crate) fn edges(&self, id: StationId) -> &[Edge] {
        &self.adjacency[id.index()]
    }
}

/// Builder for assembling a network.
///
/// Stations are numbered in the order they are added. Edges can only join
/// stations that already exist, and both directions are inserted together.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<Station>,
    adjacency: Vec<Vec<Edge>>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, returning its id.
    pub fn add_station(&mut self, name: impl Into<String>, lines: Lines) -> StationId {
        let id = StationId(self.stations.len());
        self.stations.push(Station::new(id, name, lines));
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two stations in both directions.
    ///
    /// Either both edges are inserted or, on error, neither is.
    pub fn add_edge(
        &mut self,
        from: StationId,
        to: StationId,
        minutes: u32,
        km: f64,
    ) -> Result<(), NetworkError> {
        let len = self.stations.len();
        for id in [from, to] {
            if id.index() >= len {
                return Err(NetworkError::InvalidStation { id, len });
            }
        }
        if !km.is_finite() || km < 0.0 {
            return Err(NetworkError::InvalidDistance { from, to, km });
        }

        self.adjacency[from.index()].push(Edge {
            from,
            to,
            minutes,
            km,
        });
        self.adjacency[to.index()].push(Edge {
            from: to,
            to: from,
            minutes,
            km,
        });
        Ok(())
    }

    /// Returns the number of stations added so far.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Freeze the network.
    pub fn build(self) -> Network {
        Network {
            stations: self.stations,
            adjacency: self.adjacency,
        }
    }
}
