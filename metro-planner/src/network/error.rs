//! Network construction and lookup errors.

use crate::domain::{DomainError, StationId};

/// Errors from building, loading or querying a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A station id outside the network's id range
    #[error("invalid station {id}: network has {len} stations")]
    InvalidStation { id: StationId, len: usize },

    /// An edge distance that is negative or not finite
    #[error("invalid distance {km} km on edge {from} - {to}")]
    InvalidDistance {
        from: StationId,
        to: StationId,
        km: f64,
    },

    /// Topology station ids do not form the range `0..n`
    #[error("station ids must be dense from 0: expected {expected}, found {found}")]
    NonDenseIds { expected: usize, found: usize },

    /// A station's line label failed validation
    #[error("station {id} ({name}): {source}")]
    Lines {
        id: usize,
        name: String,
        #[source]
        source: DomainError,
    },

    /// Reading a topology file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Topology JSON was malformed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
