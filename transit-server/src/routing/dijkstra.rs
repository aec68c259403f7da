//! Shortest-path search over the station graph.
//!
//! Binary-heap Dijkstra with lazily discarded stale entries. Edge
//! weights are non-negative by construction (`u32` minutes), which is
//! the invariant that lets Dijkstra finalize stations in non-decreasing
//! distance order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use super::graph::{Graph, Weight};
use crate::domain::StationId;

/// A minimum-cost route through the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Total travel time in minutes.
    pub cost: Weight,

    /// Stations visited in order, start and end inclusive.
    pub path: Vec<StationId>,
}

/// Heap entry: a station with a tentative distance.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    dist: Weight,
    station: StationId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped so the BinaryHeap pops the minimum distance first.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a minimum-time path from `start` to `end`.
///
/// Returns `None` when the end station is unreachable from the start.
/// Among equal-cost paths the choice is unspecified; only the cost is
/// guaranteed minimal.
///
/// Callers are responsible for validating that both ids exist in the
/// graph and that `start != end`.
pub fn shortest_path(graph: &Graph, start: &StationId, end: &StationId) -> Option<ShortestPath> {
    let mut dist: HashMap<StationId, Weight> = HashMap::with_capacity(graph.station_count());
    let mut prev: HashMap<StationId, StationId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(start.clone(), 0);
    heap.push(Candidate {
        dist: 0,
        station: start.clone(),
    });

    while let Some(Candidate { dist: d, station }) = heap.pop() {
        // Stale entry: a shorter route to this station was already found.
        if dist.get(&station).is_some_and(|&best| d > best) {
            continue;
        }

        if &station == end {
            break;
        }

        for (neighbor, weight) in graph.neighbors(&station) {
            let next = d + weight;
            if dist.get(neighbor).is_none_or(|&best| next < best) {
                dist.insert(neighbor.clone(), next);
                prev.insert(neighbor.clone(), station.clone());
                heap.push(Candidate {
                    dist: next,
                    station: neighbor.clone(),
                });
            }
        }
    }

    let cost = *dist.get(end)?;

    // Walk predecessors backward from the end to rebuild the path.
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(predecessor) = prev.get(current) {
        path.push(predecessor.clone());
        current = predecessor;
    }

    if path.last() != Some(start) {
        return None;
    }

    path.reverse();
    Some(ShortestPath { cost, path })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::dataset::{Dataset, DatasetFile, LineRecord, StationRecord};
    use proptest::prelude::*;
    use std::collections::HashSet;

    const STATIONS: &[&str] = &["A", "B", "C", "D", "E"];

    fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
        proptest::collection::vec(
            (0..STATIONS.len(), 0..STATIONS.len(), 0u32..15)
                .prop_filter("distinct endpoints", |(a, b, _)| a != b),
            0..10,
        )
    }

    fn graph_from(edges: &[(usize, usize, u32)]) -> Graph {
        let dataset = Dataset::from_records(DatasetFile {
            stations: STATIONS
                .iter()
                .map(|s| StationRecord {
                    id: s.to_string(),
                    name: s.to_string(),
                })
                .collect(),
            lines: edges
                .iter()
                .enumerate()
                .map(|(i, (u, v, w))| LineRecord {
                    line_id: format!("L{i}"),
                    line_name: format!("Line {i}"),
                    color: "#888888".to_string(),
                    station_ids: vec![STATIONS[*u].to_string(), STATIONS[*v].to_string()],
                    travel_time_between_stations: *w,
                })
                .collect(),
            transfers: vec![],
        })
        .unwrap();

        Graph::build(&dataset).0
    }

    /// Minimum cost over every simple path, by exhaustive DFS.
    fn brute_force_cost(graph: &Graph, start: &StationId, end: &StationId) -> Option<u32> {
        fn go(
            graph: &Graph,
            current: &StationId,
            end: &StationId,
            visited: &mut HashSet<StationId>,
            cost: u32,
            best: &mut Option<u32>,
        ) {
            if current == end {
                *best = Some(best.map_or(cost, |b: u32| b.min(cost)));
                return;
            }
            for (neighbor, weight) in graph.neighbors(current) {
                if visited.insert(neighbor.clone()) {
                    go(graph, neighbor, end, visited, cost + weight, best);
                    visited.remove(neighbor);
                }
            }
        }

        let mut best = None;
        let mut visited = HashSet::from([start.clone()]);
        go(graph, start, end, &mut visited, 0, &mut best);
        best
    }

    proptest! {
        /// Dijkstra's cost matches exhaustive path enumeration.
        #[test]
        fn optimal_against_brute_force(edges in arb_edges()) {
            let graph = graph_from(&edges);
            let start = StationId::parse("A").unwrap();
            let end = StationId::parse("E").unwrap();

            let found = shortest_path(&graph, &start, &end);
            let expected = brute_force_cost(&graph, &start, &end);

            prop_assert_eq!(found.as_ref().map(|f| f.cost), expected);
        }

        /// Any returned path is valid: correct endpoints, every hop an
        /// edge, and the cost equal to the sum of its edge weights.
        #[test]
        fn returned_path_is_valid(edges in arb_edges()) {
            let graph = graph_from(&edges);
            let start = StationId::parse("A").unwrap();
            let end = StationId::parse("D").unwrap();

            if let Some(found) = shortest_path(&graph, &start, &end) {
                prop_assert!(found.path.len() >= 2);
                prop_assert_eq!(found.path.first(), Some(&start));
                prop_assert_eq!(found.path.last(), Some(&end));

                let mut sum = 0u32;
                for pair in found.path.windows(2) {
                    let weight = graph.weight(&pair[0], &pair[1]);
                    prop_assert!(weight.is_some());
                    sum += weight.unwrap();
                }
                prop_assert_eq!(sum, found.cost);
            }
        }
    }
}
