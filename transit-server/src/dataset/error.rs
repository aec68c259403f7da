//! Dataset loading and validation errors.
//!
//! Every variant here is fatal: the process must never serve traffic
//! over a dataset that failed validation.

use std::path::PathBuf;

use crate::domain::{
    InvalidLine, InvalidLineId, InvalidStationId, InvalidTransfer, LineId, StationId,
};

/// Errors raised while loading or validating the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset file is not valid JSON for the expected schema.
    #[error("failed to parse dataset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A station record carries a malformed id.
    #[error("station {name:?}: {source}")]
    BadStationId {
        name: String,
        source: InvalidStationId,
    },

    /// Two station records share one id.
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// A line record carries a malformed id.
    #[error("line {name:?}: {source}")]
    BadLineId { name: String, source: InvalidLineId },

    /// Two line records share one id.
    #[error("duplicate line id {0}")]
    DuplicateLine(LineId),

    /// A line's station sequence contains a malformed id.
    #[error("line {line}: {source}")]
    BadLineStation {
        line: LineId,
        source: InvalidStationId,
    },

    /// A line serves a station the dataset does not define.
    #[error("line {line} references unknown station {station}")]
    UnknownLineStation { line: LineId, station: StationId },

    /// A line definition is structurally invalid.
    #[error("line {line}: {source}")]
    BadLine { line: LineId, source: InvalidLine },

    /// A transfer endpoint is a malformed id.
    #[error("transfer endpoint {value:?}: {source}")]
    BadTransferStation {
        value: String,
        source: InvalidStationId,
    },

    /// A transfer references a station the dataset does not define.
    #[error("transfer references unknown station {station}")]
    UnknownTransferStation { station: StationId },

    /// A transfer definition is structurally invalid.
    #[error("transfer {from} -> {to}: {source}")]
    BadTransfer {
        from: StationId,
        to: StationId,
        source: InvalidTransfer,
    },
}
