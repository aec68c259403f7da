//! Domain types for the transit route planner.
//!
//! This module contains the core domain model types that represent the
//! validated transit network. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod itinerary;
mod line;
mod station;
mod transfer;

pub use itinerary::{Itinerary, Step};
pub use line::{InvalidLine, InvalidLineId, Line, LineId};
pub use station::{InvalidStationId, Station, StationId};
pub use transfer::{InvalidTransfer, Transfer};
