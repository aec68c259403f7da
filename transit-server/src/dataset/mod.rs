//! Static transit dataset: loading, validation, and lookup.
//!
//! The dataset is loaded once at startup from a JSON file and is
//! immutable thereafter, so it is safe to share read-only across
//! request handlers. Malformed or internally inconsistent data (a line
//! or transfer referencing an unknown station) is rejected here, before
//! any of it can reach the graph builder.

mod error;
mod schema;

pub use error::DatasetError;
pub use schema::{DatasetFile, LineRecord, StationRecord, TransferRecord};

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Line, LineId, Station, StationId, Transfer};

/// Immutable in-memory transit dataset.
///
/// Lines keep their declaration order from the file, which later
/// determines which line labels an edge served by several.
#[derive(Debug, Clone)]
pub struct Dataset {
    stations: HashMap<StationId, Station>,
    lines: Vec<Line>,
    transfers: Vec<Transfer>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file: DatasetFile =
            serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_records(file)
    }

    /// Validate raw file records into a dataset.
    ///
    /// # Errors
    ///
    /// Returns the first integrity violation found: malformed or
    /// duplicate ids, lines with fewer than two or repeated stations,
    /// references to stations the file does not define, or a transfer
    /// connecting a station to itself.
    pub fn from_records(file: DatasetFile) -> Result<Self, DatasetError> {
        let mut stations = HashMap::with_capacity(file.stations.len());
        for record in file.stations {
            let id = StationId::parse(&record.id).map_err(|source| DatasetError::BadStationId {
                name: record.name.clone(),
                source,
            })?;
            let station = Station::new(id.clone(), record.name);
            if stations.insert(id.clone(), station).is_some() {
                return Err(DatasetError::DuplicateStation(id));
            }
        }

        let mut lines: Vec<Line> = Vec::with_capacity(file.lines.len());
        for record in file.lines {
            let id = LineId::parse(&record.line_id).map_err(|source| DatasetError::BadLineId {
                name: record.line_name.clone(),
                source,
            })?;
            if lines.iter().any(|line| line.id == id) {
                return Err(DatasetError::DuplicateLine(id));
            }

            let mut sequence = Vec::with_capacity(record.station_ids.len());
            for value in &record.station_ids {
                let station =
                    StationId::parse(value).map_err(|source| DatasetError::BadLineStation {
                        line: id.clone(),
                        source,
                    })?;
                if !stations.contains_key(&station) {
                    return Err(DatasetError::UnknownLineStation {
                        line: id.clone(),
                        station,
                    });
                }
                sequence.push(station);
            }

            let line = Line::new(
                id.clone(),
                record.line_name,
                record.color,
                sequence,
                record.travel_time_between_stations,
            )
            .map_err(|source| DatasetError::BadLine { line: id, source })?;
            lines.push(line);
        }

        let mut transfers = Vec::with_capacity(file.transfers.len());
        for record in file.transfers {
            let from = StationId::parse(&record.from_station_id).map_err(|source| {
                DatasetError::BadTransferStation {
                    value: record.from_station_id.clone(),
                    source,
                }
            })?;
            let to = StationId::parse(&record.to_station_id).map_err(|source| {
                DatasetError::BadTransferStation {
                    value: record.to_station_id.clone(),
                    source,
                }
            })?;
            for endpoint in [&from, &to] {
                if !stations.contains_key(endpoint) {
                    return Err(DatasetError::UnknownTransferStation {
                        station: endpoint.clone(),
                    });
                }
            }

            let transfer = Transfer::new(from.clone(), to.clone(), record.transfer_time)
                .map_err(|source| DatasetError::BadTransfer { from, to, source })?;
            transfers.push(transfer);
        }

        Ok(Self {
            stations,
            lines,
            transfers,
        })
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Display name for a station, if the id is known.
    pub fn station_name(&self, id: &StationId) -> Option<&str> {
        self.stations.get(id).map(|s| s.name.as_str())
    }

    /// Returns true if the dataset defines this station.
    pub fn contains_station(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// All station ids, in no particular order.
    pub fn station_ids(&self) -> impl Iterator<Item = &StationId> {
        self.stations.keys()
    }

    /// All stations, sorted by display name ascending (ties broken by
    /// id so the listing is deterministic).
    pub fn stations_by_name(&self) -> Vec<&Station> {
        let mut all: Vec<&Station> = self.stations.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        all
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Look up a line by id.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// All lines, in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All transfer connections.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
}
