//! Weighted undirected graph over the station network.
//!
//! Built once from the dataset at startup: consecutive stations on a
//! line contribute edges at the line's travel time, transfers at their
//! walking time. The edge index remembers which line first covered each
//! station pair, which later lets the segmenter tell "riding line L"
//! from "walking a transfer".

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::dataset::Dataset;
use crate::domain::{LineId, StationId};

/// Travel time between two adjacent stations, in minutes.
pub type Weight = u32;

/// An unordered station pair, normalized so `(a, b)` and `(b, a)` hash
/// and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationPair(StationId, StationId);

impl StationPair {
    /// Normalize a pair of station ids.
    pub fn new(a: &StationId, b: &StationId) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }
}

/// Index from an unordered adjacent station pair to the first line (in
/// dataset declaration order) whose consecutive stations cover it.
///
/// Pairs served only by a transfer have no entry; the segmenter treats
/// an unindexed path edge as a transfer.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    lines: HashMap<StationPair, LineId>,
}

impl EdgeIndex {
    /// The line covering the edge between `a` and `b`, if any.
    pub fn line_for(&self, a: &StationId, b: &StationId) -> Option<&LineId> {
        self.lines.get(&StationPair::new(a, b))
    }

    /// Number of line-covered pairs.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no pair is covered by a line.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Weighted undirected adjacency over station ids.
///
/// Symmetric by construction: every edge is inserted in both directions
/// with the same weight. Every dataset station has an entry, so
/// isolated stations are representable with zero edges rather than
/// absent.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: HashMap<StationId, HashMap<StationId, Weight>>,
}

impl Graph {
    /// Build the graph and edge index from a validated dataset.
    ///
    /// When several insertions target the same station pair (parallel
    /// lines, or a line and a transfer), the minimum weight wins. The
    /// pair keeps its line label only while some line achieves that
    /// minimum: a transfer that strictly undercuts every line on the
    /// pair takes the label with it, and the edge then segments as a
    /// transfer.
    pub fn build(dataset: &Dataset) -> (Graph, EdgeIndex) {
        let mut adjacency: HashMap<StationId, HashMap<StationId, Weight>> = dataset
            .station_ids()
            .map(|id| (id.clone(), HashMap::new()))
            .collect();
        let mut index = EdgeIndex::default();

        for line in dataset.lines() {
            for (u, v) in line.segments() {
                insert_edge(&mut adjacency, u, v, line.travel_time);
                index
                    .lines
                    .entry(StationPair::new(u, v))
                    .or_insert_with(|| line.id.clone());
            }
        }

        for transfer in dataset.transfers() {
            let undercut = insert_edge(&mut adjacency, &transfer.from, &transfer.to, transfer.time);
            if undercut {
                index
                    .lines
                    .remove(&StationPair::new(&transfer.from, &transfer.to));
            }
        }

        (Graph { adjacency }, index)
    }

    /// Edge weight between two stations, if they are adjacent.
    pub fn weight(&self, from: &StationId, to: &StationId) -> Option<Weight> {
        self.adjacency.get(from).and_then(|n| n.get(to)).copied()
    }

    /// Neighbors of a station with their edge weights.
    ///
    /// Empty for isolated or unknown stations.
    pub fn neighbors(&self, station: &StationId) -> impl Iterator<Item = (&StationId, Weight)> {
        self.adjacency
            .get(station)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor, *weight))
    }

    /// Returns true if the graph has a node for this station.
    pub fn contains(&self, station: &StationId) -> bool {
        self.adjacency.contains_key(station)
    }

    /// All station nodes, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> {
        self.adjacency.keys()
    }

    /// Number of station nodes.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }
}

/// Insert both directions of an edge, keeping the minimum weight when
/// the pair already has one. Returns true when the new weight strictly
/// undercut an existing weight.
fn insert_edge(
    adjacency: &mut HashMap<StationId, HashMap<StationId, Weight>>,
    u: &StationId,
    v: &StationId,
    weight: Weight,
) -> bool {
    let mut undercut = false;

    for (a, b) in [(u, v), (v, u)] {
        match adjacency.entry(a.clone()).or_default().entry(b.clone()) {
            Entry::Occupied(mut existing) => {
                if weight < *existing.get() {
                    *existing.get_mut() = weight;
                    undercut = true;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(weight);
            }
        }
    }

    undercut
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::dataset::{DatasetFile, LineRecord, StationRecord, TransferRecord};
    use proptest::prelude::*;

    const STATIONS: &[&str] = &["A", "B", "C", "D", "E", "F"];

    /// An arbitrary two-station line or transfer between distinct
    /// stations, as (from index, to index, weight, is_transfer).
    fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize, u32, bool)>> {
        proptest::collection::vec(
            (0..STATIONS.len(), 0..STATIONS.len(), 0u32..20, any::<bool>())
                .prop_filter("distinct endpoints", |(a, b, _, _)| a != b),
            0..12,
        )
    }

    fn build_from_edges(edges: &[(usize, usize, u32, bool)]) -> (Graph, EdgeIndex) {
        let mut lines = Vec::new();
        let mut transfers = Vec::new();

        for (i, &(a, b, weight, is_transfer)) in edges.iter().enumerate() {
            if is_transfer {
                transfers.push(TransferRecord {
                    from_station_id: STATIONS[a].to_string(),
                    to_station_id: STATIONS[b].to_string(),
                    transfer_time: weight,
                });
            } else {
                lines.push(LineRecord {
                    line_id: format!("L{i}"),
                    line_name: format!("Line {i}"),
                    color: "#888888".to_string(),
                    station_ids: vec![STATIONS[a].to_string(), STATIONS[b].to_string()],
                    travel_time_between_stations: weight,
                });
            }
        }

        let dataset = Dataset::from_records(DatasetFile {
            stations: STATIONS
                .iter()
                .map(|s| StationRecord {
                    id: s.to_string(),
                    name: s.to_string(),
                })
                .collect(),
            lines,
            transfers,
        })
        .unwrap();

        Graph::build(&dataset)
    }

    proptest! {
        /// Symmetry: every edge has the same weight in both directions.
        #[test]
        fn graph_is_symmetric(edges in arb_edges()) {
            let (graph, _) = build_from_edges(&edges);

            for station in graph.stations() {
                for (neighbor, weight) in graph.neighbors(station) {
                    prop_assert_eq!(graph.weight(neighbor, station), Some(weight));
                }
            }
        }

        /// The realized weight of a pair is the minimum over every
        /// line and transfer that covers it.
        #[test]
        fn realized_weight_is_minimum(edges in arb_edges()) {
            let (graph, _) = build_from_edges(&edges);

            for &(a, b, _, _) in &edges {
                let u = StationId::parse(STATIONS[a]).unwrap();
                let v = StationId::parse(STATIONS[b]).unwrap();
                let expected = edges
                    .iter()
                    .filter(|&&(x, y, _, _)| (x, y) == (a, b) || (x, y) == (b, a))
                    .map(|&(_, _, w, _)| w)
                    .min();
                prop_assert_eq!(graph.weight(&u, &v), expected);
            }
        }

        /// Every station node exists even when nothing connects it.
        #[test]
        fn all_stations_present(edges in arb_edges()) {
            let (graph, _) = build_from_edges(&edges);
            prop_assert_eq!(graph.station_count(), STATIONS.len());
        }
    }
}
