//! Route planning over the transit network.
//!
//! This module implements the core pipeline that answers "how do I get
//! from station A to station B": build a weighted undirected graph from
//! the dataset, run Dijkstra for a minimum-time path, then segment the
//! path into ride and transfer steps.

mod dijkstra;
mod graph;
mod segment;
mod service;

pub use dijkstra::{ShortestPath, shortest_path};
pub use graph::{EdgeIndex, Graph, StationPair, Weight};
pub use segment::segment_path;
pub use service::{RouteError, RouteService};
