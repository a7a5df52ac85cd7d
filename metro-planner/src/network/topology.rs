//! Topology input format.
//!
//! A topology is the plain-data description of a network as supplied by
//! whatever maintains the station list: stations with slash-separated line
//! labels, and undirected connections. Coordinates may be present for map
//! drawing but play no part in routing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Lines, StationId};

use super::{Network, NetworkBuilder, NetworkError};

/// A station as it appears in topology data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: usize,
    pub name: String,
    /// Slash-separated line names, e.g. `"Blue/Yellow"`
    pub lines: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// An undirected connection as it appears in topology data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub minutes: u32,
    pub km: f64,
}

/// A complete network description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub stations: Vec<StationRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Topology {
    /// Parse a topology from JSON.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a topology from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Describe an existing network.
    ///
    /// Each connection is written once, from its lower-numbered end.
    pub fn from_network(network: &Network) -> Self {
        let stations = network
            .stations()
            .iter()
            .map(|s| StationRecord {
                id: s.id.index(),
                name: s.name.clone(),
                lines: s.lines.to_string(),
                x: None,
                y: None,
            })
            .collect();

        let edges = network
            .stations()
            .iter()
            .flat_map(|s| network.edges(s.id))
            .filter(|e| e.from < e.to)
            .map(|e| EdgeRecord {
                from: e.from.index(),
                to: e.to.index(),
                minutes: e.minutes,
                km: e.km,
            })
            .collect();

        Self { stations, edges }
    }

    pub fn to_json_pretty(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Network {
    /// Build a network from topology data.
    ///
    /// Station records may appear in any order but their ids must be exactly
    /// `0..n`. Line labels are validated and every edge is inserted in both
    /// directions.
    pub fn from_topology(topology: &Topology) -> Result<Self, NetworkError> {
        let mut records: Vec<&StationRecord> = topology.stations.iter().collect();
        records.sort_by_key(|r| r.id);

        let mut builder = NetworkBuilder::new();
        for (expected, record) in records.into_iter().enumerate() {
            if record.id != expected {
                return Err(NetworkError::NonDenseIds {
                    expected,
                    found: record.id,
                });
            }
            let lines = Lines::parse(&record.lines).map_err(|source| NetworkError::Lines {
                id: record.id,
                name: record.name.clone(),
                source,
            })?;
            builder.add_station(record.name.clone(), lines);
        }

        for edge in &topology.edges {
            builder.add_edge(StationId(edge.from), StationId(edge.to), edge.minutes, edge.km)?;
        }

        let network = builder.build();
        debug!(
            stations = network.len(),
            connections = network.connection_count(),
            "Loaded network topology"
        );
        Ok(network)
    }
}
