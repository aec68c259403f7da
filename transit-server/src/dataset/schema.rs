//! Raw dataset file records.
//!
//! These types map directly to the JSON dataset file. They carry
//! whatever the file says; validation happens in
//! [`Dataset::from_records`](super::Dataset::from_records), which turns
//! them into domain types or rejects the file.

use serde::Deserialize;

/// Top-level dataset file: the three static tables.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFile {
    /// All stations in the network.
    pub stations: Vec<StationRecord>,

    /// All lines, in declaration order.
    pub lines: Vec<LineRecord>,

    /// All inter-line transfer connections.
    pub transfers: Vec<TransferRecord>,
}

/// A station entry in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    /// Unique station identifier.
    pub id: String,

    /// Human-readable display name.
    pub name: String,
}

/// A line entry in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRecord {
    /// Unique line identifier.
    pub line_id: String,

    /// Human-readable display name.
    pub line_name: String,

    /// Display color.
    pub color: String,

    /// Ordered station ids the line serves.
    pub station_ids: Vec<String>,

    /// Minutes between each consecutive pair of stations.
    pub travel_time_between_stations: u32,
}

/// A transfer entry in the dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRecord {
    /// One endpoint of the connection.
    pub from_station_id: String,

    /// The other endpoint.
    pub to_station_id: String,

    /// Walking time in minutes.
    pub transfer_time: u32,
}
