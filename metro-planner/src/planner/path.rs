//! Path reconstruction and interchange deduplication.
//!
//! The engine's path runs over graph nodes, so changing lines at an
//! interchange shows up as a hop between two nodes with the same name. The
//! rider-facing route lists each named station once.

use std::collections::HashSet;

use tracing::error;

use crate::domain::StationId;
use crate::network::Network;

use super::dijkstra::ShortestPaths;
use super::search::RouteError;

/// Walk predecessor links back from `end` to `start`.
///
/// Returns the node path in travel order, `start` first. Fails with
/// [`RouteError::Unreachable`] if the links never arrive at `start`, which
/// means `end` was not reached or the links are corrupt.
pub fn reconstruct(
    start: StationId,
    end: StationId,
    paths: &ShortestPaths,
) -> Result<Vec<StationId>, RouteError> {
    let mut path = vec![end];
    let mut at = end;

    while at != start {
        // A valid chain visits each station at most once
        if path.len() > paths.len() {
            break;
        }
        match paths.predecessor(at) {
            Some(prev) => {
                path.push(prev);
                at = prev;
            }
            None => break,
        }
    }

    debug_assert!(at == start, "broken predecessor chain from {end} to {start}");
    if at != start {
        error!(start = %start, end = %end, "Predecessor chain does not reach start");
        return Err(RouteError::Unreachable { start, end });
    }

    path.reverse();
    Ok(path)
}

/// Keep each named station once, at its first appearance.
///
/// Every later node whose name has already been seen is dropped, whether or
/// not it is adjacent to the earlier one.
pub fn dedup_by_name(network: &Network, path: &[StationId]) -> Vec<StationId> {
    let mut seen = HashSet::new();
    path.iter()
        .copied()
        .filter(|&id| match network.station(id) {
            Ok(station) => seen.insert(station.name.as_str()),
            Err(_) => false,
        })
        .collect()
}

/// Physical distance travelled along a node path, in kilometres.
///
/// Hops between two nodes of the same named station are interchange
/// transfers and count as zero. Every other hop counts in full, including
/// hops into and out of a node that deduplication later drops because the
/// route passes a station it already visited.
pub fn path_distance(network: &Network, path: &[StationId]) -> Result<f64, RouteError> {
    let mut total = 0.0;

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let a = network
            .station(from)
            .map_err(|_| RouteError::InvalidStation(from))?;
        let b = network
            .station(to)
            .map_err(|_| RouteError::InvalidStation(to))?;
        if a.same_place(b) {
            continue;
        }
        let edge = network
            .edge_between(from, to)
            .ok_or(RouteError::Unreachable { start: from, end: to })?;
        total += edge.km;
    }

    Ok(total)
}
