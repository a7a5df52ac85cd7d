//! Station types.

use std::fmt;

use serde::Serialize;

use super::{Line, Lines};

/// Dense handle for a station node.
///
/// Ids index into the network's station table, so a network of `n` stations
/// uses exactly the ids `0..n`. Whether an id is in range is only known to
/// the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the id as a table index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A station node.
///
/// Names are not unique: an interchange complex may be modelled as one node
/// per line, all sharing the complex's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub lines: Lines,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>, lines: Lines) -> Self {
        Self {
            id,
            name: name.into(),
            lines,
        }
    }

    /// Check whether this station is served by a line.
    pub fn serves(&self, line: Line) -> bool {
        self.lines.contains(line)
    }

    /// Check whether this node belongs to the same named station as another.
    pub fn same_place(&self, other: &Station) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.lines)
    }
}
