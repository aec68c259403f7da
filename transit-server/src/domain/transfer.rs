//! Transfer connections between stations.

use super::StationId;

/// Error returned for an invalid transfer definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transfer endpoints must differ")]
pub struct InvalidTransfer;

/// A walking/interchange connection between two stations, not carried
/// by any line.
///
/// Transfers are symmetric: a transfer from A to B is traversable from
/// B to A in the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// One endpoint of the connection.
    pub from: StationId,

    /// The other endpoint.
    pub to: StationId,

    /// Walking time in minutes.
    pub time: u32,
}

impl Transfer {
    /// Creates a new transfer between two distinct stations.
    pub fn new(from: StationId, to: StationId, time: u32) -> Result<Self, InvalidTransfer> {
        if from == to {
            return Err(InvalidTransfer);
        }

        Ok(Self { from, to, time })
    }
}
