//! Station identifier and record types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated station identifier.
///
/// Identifiers are opaque, unique within a dataset, and stable for the
/// dataset's lifetime. This type guarantees the id is non-empty and
/// carries no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StationId;
///
/// let id = StationId::parse("S1").unwrap();
/// assert_eq!(id.as_str(), "S1");
///
/// // Empty ids are rejected
/// assert!(StationId::parse("").is_err());
///
/// // Padded ids are rejected
/// assert!(StationId::parse(" S1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty and must not start or end with
    /// whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationId {
                reason: "must not have surrounding whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point in the transit network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique identifier within the dataset.
    pub id: StationId,

    /// Human-readable display name.
    pub name: String,
}

impl Station {
    /// Creates a new station.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid station ids: non-empty, no
    /// surrounding whitespace.
    fn valid_id_string() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_-]{1,16}"
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Padded strings are always rejected
        #[test]
        fn padded_rejected(s in valid_id_string()) {
            let leading = format!(" {}", s);
            let trailing = format!("{} ", s);
            prop_assert!(StationId::parse(&leading).is_err());
            prop_assert!(StationId::parse(&trailing).is_err());
        }
    }
}
