//! Presentation policies turning a sequence of deltas into console output.

mod snapshot;
mod think;

pub use snapshot::SnapshotDiff;
pub use think::{CLOSE_MARKER, OPEN_MARKER, OutputEvent, ThinkAnswerReducer, ThinkState, step};
