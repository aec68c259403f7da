//! Path segmentation into itinerary steps.
//!
//! Walks a shortest path one edge at a time and groups consecutive
//! edges on the same line into a single ride step. An edge no line
//! covers is a transfer and closes the current run; a change of line at
//! a shared station closes the run without emitting a transfer.

use super::graph::EdgeIndex;
use crate::domain::{LineId, StationId, Step};

/// The ride currently being accumulated while walking the path.
struct Run {
    line: LineId,
    start: StationId,
    stops: u32,
}

impl Run {
    fn close(self, end: &StationId) -> Step {
        Step::Ride {
            line: self.line,
            from: self.start,
            to: end.clone(),
            stops: self.stops,
        }
    }
}

/// Split a path into ride and transfer steps.
///
/// Every edge of `path` lands in exactly one step: a transfer covers
/// one edge, a ride covers `stops` edges. Only edges absent from the
/// index are transfers; two lines meeting at a station produce adjacent
/// ride steps, never a transfer step.
pub fn segment_path(path: &[StationId], index: &EdgeIndex) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut run: Option<Run> = None;

    for pair in path.windows(2) {
        let (u, v) = (&pair[0], &pair[1]);

        match index.line_for(u, v) {
            // No line covers this edge: it is a transfer.
            None => {
                if let Some(finished) = run.take() {
                    steps.push(finished.close(u));
                }
                steps.push(Step::Transfer {
                    from: u.clone(),
                    to: v.clone(),
                });
            }

            Some(line) => match run {
                // Same line continues: one more stop on the run.
                Some(ref mut active) if active.line == *line => active.stops += 1,

                // New line (or first edge): close any active run and
                // start a fresh one at this station.
                _ => {
                    if let Some(finished) = run.take() {
                        steps.push(finished.close(u));
                    }
                    run = Some(Run {
                        line: line.clone(),
                        start: u.clone(),
                        stops: 1,
                    });
                }
            },
        }
    }

    // A run open at the end of the walk rides through to the last station.
    if let (Some(finished), Some(end)) = (run, path.last()) {
        steps.push(finished.close(end));
    }

    steps
}
