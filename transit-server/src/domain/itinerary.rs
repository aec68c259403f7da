//! Itinerary types.
//!
//! An `Itinerary` is the user-facing answer to a route query: total
//! travel time, total stop count, and the ordered steps to follow.

use super::{LineId, StationId};

/// A single instruction in an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Ride one line across one or more consecutive stops.
    Ride {
        /// The line to board.
        line: LineId,
        /// Station where the ride begins.
        from: StationId,
        /// Station where the ride ends.
        to: StationId,
        /// Number of stops traversed (always at least 1).
        stops: u32,
    },

    /// Walk a transfer connection between two stations.
    Transfer {
        /// Station where the walk begins.
        from: StationId,
        /// Station where the walk ends.
        to: StationId,
    },
}

impl Step {
    /// Returns the station where this step begins.
    pub fn origin(&self) -> &StationId {
        match self {
            Step::Ride { from, .. } => from,
            Step::Transfer { from, .. } => from,
        }
    }

    /// Returns the station where this step ends.
    pub fn destination(&self) -> &StationId {
        match self {
            Step::Ride { to, .. } => to,
            Step::Transfer { to, .. } => to,
        }
    }

    /// Returns true if this is a ride step.
    pub fn is_ride(&self) -> bool {
        matches!(self, Step::Ride { .. })
    }

    /// Returns true if this is a transfer step.
    pub fn is_transfer(&self) -> bool {
        matches!(self, Step::Transfer { .. })
    }

    /// Number of path edges this step covers.
    ///
    /// A ride covers one edge per stop; a transfer covers exactly one.
    pub fn edge_count(&self) -> u32 {
        match self {
            Step::Ride { stops, .. } => *stops,
            Step::Transfer { .. } => 1,
        }
    }
}

/// A complete itinerary from origin to destination.
///
/// Steps partition the underlying path: every path edge is covered by
/// exactly one step, so `total_stops` always equals the number of path
/// edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Total travel time in minutes.
    pub total_time: u32,

    /// Number of path edges traversed end to end.
    pub total_stops: u32,

    /// Ordered instructions to follow.
    pub steps: Vec<Step>,
}

impl Itinerary {
    /// Assembles an itinerary, deriving the stop count from the steps.
    pub fn new(total_time: u32, steps: Vec<Step>) -> Self {
        let total_stops = steps.iter().map(Step::edge_count).sum();

        Self {
            total_time,
            total_stops,
            steps,
        }
    }

    /// Number of ride steps.
    pub fn ride_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_ride()).count()
    }

    /// Number of transfer steps.
    pub fn transfer_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_transfer()).count()
    }

    /// Returns true if the whole trip stays on a single line.
    pub fn is_direct(&self) -> bool {
        self.steps.len() == 1 && self.steps[0].is_ride()
    }
}
