//! Structural errors reported by the patch.

use thiserror::Error;

use crate::point::{Extent, Point};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Structural invariant violations reported by
/// [`Patch::check_invariants`](crate::Patch::check_invariants).
pub enum PatchError {
    #[error("hunk {index} at output {start} touches the previous hunk")]
    /// Two consecutive hunks have no unchanged text between them.
    AdjacentHunks {
        /// Index of the second hunk.
        index: usize,
        /// Output start of the second hunk.
        start: Point,
    },

    #[error("hunk {index} at output {start} replaces nothing with nothing")]
    /// A hunk with an empty input extent and empty replacement text was kept.
    IdentityHunk {
        /// Index of the hunk.
        index: usize,
        /// Output start of the hunk.
        start: Point,
    },

    #[error("hunk {index} records output extent {recorded} but its text spans {actual}")]
    /// The cached output extent disagrees with the replacement text.
    ExtentMismatch {
        /// Index of the hunk.
        index: usize,
        /// The cached extent.
        recorded: Extent,
        /// The extent measured from the text.
        actual: Extent,
    },
}
