//! Single-source shortest travel times.
//!
//! Classic Dijkstra over edge minutes. Stations are settled in order of
//! (time, id), so when several stations are equally close the lowest id is
//! settled first. That order fixes which predecessor each station records
//! and therefore which of several equally fast paths is reconstructed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::domain::StationId;
use crate::network::Network;

use super::config::Selection;
use super::search::RouteError;

/// Shortest times and predecessor links from one start station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: StationId,
    /// `None` means unreachable.
    minutes: Vec<Option<u32>>,
    predecessor: Vec<Option<StationId>>,
}

impl ShortestPaths {
    /// The station the search started from.
    pub fn start(&self) -> StationId {
        self.start
    }

    /// Shortest travel time to a station, or `None` if it cannot be reached
    /// (or is not in the network).
    pub fn minutes_to(&self, id: StationId) -> Option<u32> {
        self.minutes.get(id.index()).copied().flatten()
    }

    /// The station before `id` on its shortest path.
    pub fn predecessor(&self, id: StationId) -> Option<StationId> {
        self.predecessor.get(id.index()).copied().flatten()
    }

    pub fn is_reachable(&self, id: StationId) -> bool {
        self.minutes_to(id).is_some()
    }

    /// Number of stations the arrays cover.
    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u32,
    node: StationId,
}

// Min-heap by cost, then by id (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute shortest travel times from `start` to every station.
///
/// Fails only if `start` is not a station of `network`.
pub fn shortest_paths(
    network: &Network,
    start: StationId,
    selection: Selection,
) -> Result<ShortestPaths, RouteError> {
    if !network.contains(start) {
        return Err(RouteError::InvalidStation(start));
    }

    let n = network.len();
    let mut paths = ShortestPaths {
        start,
        minutes: vec![None; n],
        predecessor: vec![None; n],
    };
    paths.minutes[start.index()] = Some(0);

    let settled = match selection {
        Selection::LinearScan => linear_scan(network, &mut paths),
        Selection::BinaryHeap => binary_heap(network, &mut paths),
    };

    trace!(start = %start, settled, "Shortest paths computed");
    Ok(paths)
}

/// Relax every edge out of `current`, reporting each improved station to `improved`.
fn relax(
    network: &Network,
    paths: &mut ShortestPaths,
    current: StationId,
    cost: u32,
    mut improved: impl FnMut(StationId, u32),
) {
    for edge in network.edges(current) {
        let next_cost = cost.saturating_add(edge.minutes);
        let slot = &mut paths.minutes[edge.to.index()];
        let better = match *slot {
            Some(best) => next_cost < best,
            None => true,
        };
        if better {
            *slot = Some(next_cost);
            paths.predecessor[edge.to.index()] = Some(current);
            improved(edge.to, next_cost);
        }
    }
}

fn linear_scan(network: &Network, paths: &mut ShortestPaths) -> usize {
    let mut visited = vec![false; network.len()];
    let mut settled = 0;

    loop {
        // Find the unvisited station with minimum time; strict `<` keeps the lowest id on ties
        let mut next: Option<(u32, usize)> = None;
        for (idx, minutes) in paths.minutes.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            if let Some(m) = *minutes {
                let closer = match next {
                    Some((best, _)) => m < best,
                    None => true,
                };
                if closer {
                    next = Some((m, idx));
                }
            }
        }

        // No reachable unvisited stations
        let Some((cost, idx)) = next else {
            break;
        };

        visited[idx] = true;
        settled += 1;
        relax(network, paths, StationId(idx), cost, |_, _| {});
    }

    settled
}

fn binary_heap(network: &Network, paths: &mut ShortestPaths) -> usize {
    let mut visited = vec![false; network.len()];
    let mut heap = BinaryHeap::new();
    let mut settled = 0;

    heap.push(State {
        cost: 0,
        node: paths.start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if visited[node.index()] {
            continue;
        }
        // Skip if we've found a better path since this entry was pushed
        if paths.minutes[node.index()].is_some_and(|best| cost > best) {
            continue;
        }

        visited[node.index()] = true;
        settled += 1;
        relax(network, paths, node, cost, |next, next_cost| {
            heap.push(State {
                cost: next_cost,
                node: next,
            });
        });
    }

    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Lines;
    use crate::network::{NetworkBuilder, delhi_metro};

    fn id(i: usize) -> StationId {
        StationId(i)
    }

    /// Diamond: 0 -> {1, 2} -> 3, both branches 10 minutes.
    fn diamond() -> Network {
        let mut b = NetworkBuilder::new();
        for name in ["S", "L", "R", "T"] {
            b.add_station(name, Lines::parse("Blue").unwrap());
        }
        b.add_edge(id(0), id(2), 4, 1.0).unwrap();
        b.add_edge(id(0), id(1), 4, 1.0).unwrap();
        b.add_edge(id(1), id(3), 6, 1.0).unwrap();
        b.add_edge(id(2), id(3), 6, 1.0).unwrap();
        b.build()
    }

    #[test]
    fn start_is_zero() {
        let net = delhi_metro().unwrap();
        let paths = shortest_paths(&net, id(0), Selection::LinearScan).unwrap();
        assert_eq!(paths.start(), id(0));
        assert_eq!(paths.minutes_to(id(0)), Some(0));
        assert_eq!(paths.predecessor(id(0)), None);
        assert_eq!(paths.len(), 33);
    }

    #[test]
    fn along_one_line() {
        let net = delhi_metro().unwrap();
        let paths = shortest_paths(&net, id(0), Selection::LinearScan).unwrap();
        // Dwarka -> Rajiv Chowk (Blue) is three hops
        assert_eq!(paths.minutes_to(id(3)), Some(15));
        assert_eq!(paths.predecessor(id(3)), Some(id(2)));
        // Crossing to the Yellow node costs a transfer
        assert_eq!(paths.minutes_to(id(13)), Some(17));
        assert_eq!(paths.predecessor(id(13)), Some(id(3)));
    }

    #[test]
    fn magenta_shortcut_to_huda() {
        let net = delhi_metro().unwrap();
        let paths = shortest_paths(&net, id(0), Selection::LinearScan).unwrap();
        // Dwarka -> Janakpuri West -> (Magenta) -> Hauz Khas -> HUDA
        assert_eq!(paths.minutes_to(id(18)), Some(24));
        assert_eq!(paths.predecessor(id(18)), Some(id(17)));
        assert_eq!(paths.predecessor(id(17)), Some(id(31)));
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        let net = diamond();
        for selection in [Selection::LinearScan, Selection::BinaryHeap] {
            let paths = shortest_paths(&net, id(0), selection).unwrap();
            assert_eq!(paths.minutes_to(id(3)), Some(10));
            // L (1) and R (2) are both 4 minutes out; L settles first and claims T
            assert_eq!(paths.predecessor(id(3)), Some(id(1)));
        }
    }

    #[test]
    fn unreachable_is_none() {
        let mut b = NetworkBuilder::new();
        let a = b.add_station("A", Lines::parse("Blue").unwrap());
        let c = b.add_station("C", Lines::parse("Red").unwrap());
        let net = b.build();

        let paths = shortest_paths(&net, a, Selection::BinaryHeap).unwrap();
        assert!(paths.is_reachable(a));
        assert!(!paths.is_reachable(c));
        assert_eq!(paths.minutes_to(c), None);
        assert_eq!(paths.predecessor(c), None);
    }

    #[test]
    fn invalid_start() {
        let net = diamond();
        assert!(matches!(
            shortest_paths(&net, id(4), Selection::LinearScan),
            Err(RouteError::InvalidStation(s)) if s == id(4)
        ));
    }

    #[test]
    fn zero_weight_edges() {
        let mut b = NetworkBuilder::new();
        for name in ["A", "B", "C"] {
            b.add_station(name, Lines::parse("Pink").unwrap());
        }
        b.add_edge(id(0), id(1), 0, 0.0).unwrap();
        b.add_edge(id(1), id(2), 0, 0.0).unwrap();
        let net = b.build();

        let paths = shortest_paths(&net, id(0), Selection::LinearScan).unwrap();
        assert_eq!(paths.minutes_to(id(2)), Some(0));
        assert_eq!(paths.predecessor(id(2)), Some(id(1)));
        assert_eq!(
            paths,
            shortest_paths(&net, id(0), Selection::BinaryHeap).unwrap()
        );
    }

    #[test]
    fn strategies_agree_on_reference_network() {
        let net = delhi_metro().unwrap();
        for start in net.stations().iter().map(|s| s.id) {
            let scan = shortest_paths(&net, start, Selection::LinearScan).unwrap();
            let heap = shortest_paths(&net, start, Selection::BinaryHeap).unwrap();
            assert_eq!(scan, heap, "strategies differ from {start}");
        }
    }
}
