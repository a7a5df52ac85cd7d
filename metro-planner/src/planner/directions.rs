//! Step-by-step directions with line changes.
//!
//! The rider starts on a line that reaches the second stop where possible,
//! then stays on it until a stop is not served by it. At that point they
//! change, at the previous stop, to a line that serves both stops. Only one
//! stop ahead is ever considered, so this keeps the current line as long as
//! possible rather than minimising the number of changes.
//!
//! A route can pass a named station it already visited. That station is
//! listed once, so the stops either side of the second visit are not
//! connected; the change is then made where the route rejoins the earlier
//! station.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::domain::{Line, Station, StationId};
use crate::network::Network;

/// One instruction in a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Board at the first stop.
    Start {
        station: StationId,
        name: String,
        line: Line,
    },
    /// Ride on to the next stop.
    Continue { station: StationId, name: String },
    /// Change lines at a stop already reached.
    Change {
        line: Line,
        at: StationId,
        name: String,
    },
}

/// A condition worth reporting that does not invalidate the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum RouteWarning {
    /// Consecutive stops are adjacent in the network but share no line, so
    /// the change step names a line the previous stop does not serve.
    NoCommonLine { from: StationId, to: StationId },
}

impl fmt::Display for RouteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteWarning::NoCommonLine { from, to } => {
                write!(f, "stations {from} and {to} are connected but share no line")
            }
        }
    }
}

/// Directions for a route, plus any warnings raised while producing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directions {
    pub steps: Vec<Step>,
    pub warnings: Vec<RouteWarning>,
}

impl Directions {
    /// Number of line changes.
    pub fn line_changes(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, Step::Change { .. }))
            .count()
    }
}

/// Produce directions for a deduplicated stop sequence on `network`.
pub fn directions(network: &Network, stops: &[Station]) -> Directions {
    let mut out = Directions::default();

    let Some(first) = stops.first() else {
        return out;
    };

    let mut current = match stops.get(1) {
        Some(next) => first
            .lines
            .first_shared_with(&next.lines)
            .unwrap_or(first.lines.first()),
        None => first.lines.first(),
    };

    out.steps.push(Step::Start {
        station: first.id,
        name: first.name.clone(),
        line: current,
    });

    for (n, pair) in stops.windows(2).enumerate() {
        let (prev, stop) = (&pair[0], &pair[1]);

        if !stop.serves(current) {
            let (line, at) = if reaches(network, prev, stop) {
                (change_line(prev, stop, &mut out.warnings), prev)
            } else {
                match rejoin(network, &stops[..=n], stop) {
                    Some(twin) => (
                        twin.lines
                            .first_shared_with(&stop.lines)
                            .unwrap_or(stop.lines.first()),
                        twin,
                    ),
                    None => (
                        prev.lines
                            .first_shared_with(&stop.lines)
                            .unwrap_or(stop.lines.first()),
                        prev,
                    ),
                }
            };
            current = line;
            out.steps.push(Step::Change {
                line,
                at: at.id,
                name: at.name.clone(),
            });
        }

        out.steps.push(Step::Continue {
            station: stop.id,
            name: stop.name.clone(),
        });
    }

    out
}

/// Line to change to between two connected stops.
fn change_line(prev: &Station, stop: &Station, warnings: &mut Vec<RouteWarning>) -> Line {
    match stop.lines.first_shared_with(&prev.lines) {
        Some(line) => line,
        None => {
            warn!(
                from = %prev.name,
                to = %stop.name,
                "Consecutive stops share no line"
            );
            warnings.push(RouteWarning::NoCommonLine {
                from: prev.id,
                to: stop.id,
            });
            stop.lines.first()
        }
    }
}

/// Check whether `stop` is adjacent to any node named like `prev`.
fn reaches(network: &Network, prev: &Station, stop: &Station) -> bool {
    network.neighbors(stop.id).is_ok_and(|edges| {
        edges.iter().any(|edge| {
            network
                .station(edge.to)
                .is_ok_and(|s| s.same_place(prev))
        })
    })
}

/// Neighbour of `stop` sharing a name with one of `earlier`, preferring one
/// that serves a line of `stop`.
fn rejoin<'n>(network: &'n Network, earlier: &[Station], stop: &Station) -> Option<&'n Station> {
    let edges = network.neighbors(stop.id).ok()?;
    let mut candidates = edges
        .iter()
        .filter_map(|edge| network.station(edge.to).ok())
        .filter(|s| earlier.iter().any(|e| e.same_place(s)))
        .peekable();

    let fallback = candidates.peek().copied();
    candidates
        .find(|s| s.lines.first_shared_with(&stop.lines).is_some())
        .or(fallback)
}
