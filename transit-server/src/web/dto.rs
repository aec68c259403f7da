//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::domain::{Itinerary, Station, StationId, Step};

/// Request to compute a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Id of the start station.
    pub start_station_id: String,

    /// Id of the destination station.
    pub end_station_id: String,
}

/// A station in the listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station id, usable in route requests.
    pub id: String,

    /// Display name.
    pub name: String,
}

/// A computed itinerary.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Total travel time in minutes.
    pub total_time: u32,

    /// Number of stops traversed end to end.
    pub total_stops: u32,

    /// Ordered instructions to follow.
    pub steps: Vec<StepResult>,
}

/// One instruction of an itinerary.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepResult {
    Ride(RideResult),
    Transfer(TransferResult),
}

/// Riding one line across one or more stops.
#[derive(Debug, Serialize)]
pub struct RideResult {
    /// Display name of the line to board.
    pub line_name: String,

    /// Display color of the line.
    pub line_color: String,

    /// Display name of the station where the ride begins.
    pub start_station: String,

    /// Display name of the station where the ride ends.
    pub end_station: String,

    /// Number of stops traversed.
    pub stops: u32,
}

/// Walking a transfer connection between two stations.
#[derive(Debug, Serialize)]
pub struct TransferResult {
    /// Display name of the station where the walk begins.
    pub from_station: String,

    /// Display name of the station where the walk ends.
    pub to_station: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable reason for the failure.
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
        }
    }
}

impl RouteResponse {
    /// Create from a domain Itinerary, resolving ids to display names
    /// against the dataset.
    pub fn from_itinerary(itinerary: &Itinerary, dataset: &Dataset) -> Self {
        Self {
            total_time: itinerary.total_time,
            total_stops: itinerary.total_stops,
            steps: itinerary
                .steps
                .iter()
                .map(|step| StepResult::from_step(step, dataset))
                .collect(),
        }
    }
}

impl StepResult {
    /// Create from a domain Step, resolving display names.
    fn from_step(step: &Step, dataset: &Dataset) -> Self {
        match step {
            Step::Ride {
                line,
                from,
                to,
                stops,
            } => {
                let (line_name, line_color) = dataset
                    .line(line)
                    .map(|l| (l.name.clone(), l.color.clone()))
                    .unwrap_or_else(|| (line.as_str().to_string(), String::new()));

                StepResult::Ride(RideResult {
                    line_name,
                    line_color,
                    start_station: station_name(dataset, from),
                    end_station: station_name(dataset, to),
                    stops: *stops,
                })
            }
            Step::Transfer { from, to } => StepResult::Transfer(TransferResult {
                from_station: station_name(dataset, from),
                to_station: station_name(dataset, to),
            }),
        }
    }
}

/// Display name for a station, falling back to the raw id.
fn station_name(dataset: &Dataset, id: &StationId) -> String {
    dataset.station_name(id).unwrap_or(id.as_str()).to_string()
}
