//! Route planning orchestration.
//!
//! Wires the graph, pathfinder, and segmenter into a single call:
//! validate the query, find a minimum-time path over the startup-built
//! graph, and segment it into an itinerary.

use std::sync::Arc;

use tracing::{debug, info};

use super::dijkstra::{self, ShortestPath};
use super::graph::{EdgeIndex, Graph};
use super::segment::segment_path;
use crate::dataset::Dataset;
use crate::domain::{Itinerary, Station, StationId};

/// A rejected or failed route query.
///
/// `UnknownStation` and `SameStation` are invalid requests; `NoRoute`
/// is a well-formed query whose endpoints simply aren't connected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The query names a station the dataset does not define.
    #[error("unknown station id: {0}")]
    UnknownStation(StationId),

    /// Start and destination are the same station.
    #[error("start and destination cannot be the same")]
    SameStation,

    /// No sequence of lines and transfers connects the endpoints.
    #[error("no route found from {from} to {to}")]
    NoRoute {
        /// Display name of the start station.
        from: String,
        /// Display name of the destination station.
        to: String,
    },
}

/// Stateless route planner over an immutable dataset.
///
/// The graph and edge index are built once at construction and shared
/// read-only across requests; planning never mutates, so a single
/// instance serves any number of concurrent queries.
pub struct RouteService {
    dataset: Arc<Dataset>,
    graph: Graph,
    edge_index: EdgeIndex,
}

impl RouteService {
    /// Build the planner from a validated dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let (graph, edge_index) = Graph::build(&dataset);
        info!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            lines = dataset.lines().len(),
            "route graph built"
        );

        Self {
            dataset,
            graph,
            edge_index,
        }
    }

    /// The dataset the planner was built from.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// All stations, sorted by display name ascending.
    pub fn stations(&self) -> Vec<&Station> {
        self.dataset.stations_by_name()
    }

    /// Plan a minimum-time itinerary from `start` to `end`.
    pub fn plan(&self, start: &StationId, end: &StationId) -> Result<Itinerary, RouteError> {
        for station in [start, end] {
            if !self.dataset.contains_station(station) {
                return Err(RouteError::UnknownStation(station.clone()));
            }
        }
        if start == end {
            return Err(RouteError::SameStation);
        }

        let ShortestPath { cost, path } = dijkstra::shortest_path(&self.graph, start, end)
            .ok_or_else(|| self.no_route(start, end))?;
        debug!(%start, %end, cost, hops = path.len() - 1, "route found");

        let steps = segment_path(&path, &self.edge_index);
        Ok(Itinerary::new(cost, steps))
    }

    fn no_route(&self, start: &StationId, end: &StationId) -> RouteError {
        let name = |id: &StationId| {
            self.dataset
                .station_name(id)
                .unwrap_or(id.as_str())
                .to_string()
        };

        RouteError::NoRoute {
            from: name(start),
            to: name(end),
        }
    }
}
