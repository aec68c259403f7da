//! Line types.
//!
//! A `Line` is an ordered sequence of stations traversed in either
//! direction, with a uniform travel time between every consecutive pair.

use std::collections::HashSet;
use std::fmt;

use super::StationId;

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A validated line identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    ///
    /// The input must be non-empty and must not start or end with
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidLineId {
                reason: "must not have surrounding whitespace",
            });
        }

        Ok(LineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned for a structurally invalid line definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLine {
    /// A line must serve at least two stations to carry any edge.
    #[error("line must serve at least two stations")]
    TooFewStations,

    /// The same station appears twice in the sequence.
    #[error("line serves station {0} more than once")]
    DuplicateStation(StationId),
}

/// A transit line.
///
/// The station sequence is validated at construction: at least two
/// stations, no duplicates. Travel time applies uniformly between every
/// consecutive pair, in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Unique identifier within the dataset.
    pub id: LineId,

    /// Human-readable display name.
    pub name: String,

    /// Display color (e.g. a hex code).
    pub color: String,

    /// Ordered stations the line serves.
    stations: Vec<StationId>,

    /// Minutes between each consecutive pair of stations.
    pub travel_time: u32,
}

impl Line {
    /// Constructs a line from a validated station sequence.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sequence has fewer than two stations or
    /// serves the same station twice.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        stations: Vec<StationId>,
        travel_time: u32,
    ) -> Result<Self, InvalidLine> {
        if stations.len() < 2 {
            return Err(InvalidLine::TooFewStations);
        }

        let mut seen = HashSet::with_capacity(stations.len());
        for station in &stations {
            if !seen.insert(station) {
                return Err(InvalidLine::DuplicateStation(station.clone()));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            color: color.into(),
            stations,
            travel_time,
        })
    }

    /// The stations the line serves, in order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Consecutive station pairs along the line.
    ///
    /// Each pair is one graph edge, traversable in either direction at
    /// the line's travel time.
    pub fn segments(&self) -> impl Iterator<Item = (&StationId, &StationId)> {
        self.stations.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn line(stations: &[&str]) -> Result<Line, InvalidLine> {
        Line::new(
            LineId::parse("L1").unwrap(),
            "Red Line",
            "#e53935",
            stations.iter().map(|s| id(s)).collect(),
            5,
        )
    }

    #[test]
    fn valid_line() {
        let line = line(&["S1", "S2", "S3"]).unwrap();
        assert_eq!(line.id.as_str(), "L1");
        assert_eq!(line.name, "Red Line");
        assert_eq!(line.color, "#e53935");
        assert_eq!(line.travel_time, 5);
        assert_eq!(line.stations().len(), 3);
    }

    #[test]
    fn reject_too_few_stations() {
        assert_eq!(line(&[]), Err(InvalidLine::TooFewStations));
        assert_eq!(line(&["S1"]), Err(InvalidLine::TooFewStations));
    }

    #[test]
    fn reject_duplicate_station() {
        assert_eq!(
            line(&["S1", "S2", "S1"]),
            Err(InvalidLine::DuplicateStation(id("S1")))
        );
    }

    #[test]
    fn segments_are_consecutive_pairs() {
        let line = line(&["S1", "S2", "S3"]).unwrap();
        let segments: Vec<_> = line.segments().collect();
        assert_eq!(segments, vec![(&id("S1"), &id("S2")), (&id("S2"), &id("S3"))]);
    }

    #[test]
    fn two_station_line_has_one_segment() {
        let line = line(&["S1", "S2"]).unwrap();
        assert_eq!(line.segments().count(), 1);
    }

    #[test]
    fn line_id_parse() {
        assert!(LineId::parse("L1").is_ok());
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse(" L1").is_err());
    }

    #[test]
    fn line_id_display() {
        let id = LineId::parse("L1").unwrap();
        assert_eq!(format!("{}", id), "L1");
        assert_eq!(format!("{:?}", id), "LineId(L1)");
    }
}
