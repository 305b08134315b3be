#![warn(missing_docs)]
//! Text Patch - Position Translation Across Recorded Edits
//!
//! # Overview
//!
//! `text-patch` records a stream of text replacements made to a document and translates
//! row/column positions between the document before the replacements (the *input*) and after
//! them (the *output*), in either direction, without ever holding the full text.
//!
//! Typical consumers keep markers, diagnostics, syntax state or diff views valid while a
//! document is edited incrementally, and rebase those edits when the underlying file changes
//! on disk.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Patch (splice / rebase / translate)        │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Hunk list (gap-relative, merged eagerly)   │  ← Change Storage
//! ├─────────────────────────────────────────────┤
//! │  Point / Extent arithmetic                  │  ← Coordinates
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use text_patch::{Extent, Patch, Point};
//!
//! let mut patch = Patch::new();
//!
//! // The output text at 0:3..0:7 was replaced by "hello".
//! patch.splice_with_text(Point::new(0, 3), Extent::new(0, 4), "hello");
//!
//! // Unchanged text after the edit moved one column to the right.
//! assert_eq!(patch.translate_input_position(Point::new(0, 9)), Point::new(0, 10));
//! assert_eq!(patch.translate_output_position(Point::new(0, 10)), Point::new(0, 9));
//! assert!(patch.is_changed_at_output_position(Point::new(0, 4)));
//!
//! // The input document gained two characters at its start.
//! patch.splice_input(Point::new(0, 0), Extent::new(0, 0), Extent::new(0, 2));
//! assert_eq!(patch.changes()[0].start, Point::new(0, 5));
//! ```
//!
//! # Module Description
//!
//! - [`point`] - row/column positions, extents and traversal
//! - [`patch`] - the hunk list and its splice, rebase and translation algorithms
//! - [`config`] - construction options
//! - [`error`] - structural invariant violations
//!
//! # Coordinates
//!
//! - Rows are separated by `'\n'`
//! - Columns count Unicode scalar values (`char`)
//! - Ranges are half-open: `start..start + extent`

pub mod config;
pub mod error;
pub mod patch;
pub mod point;
mod text;

pub use config::PatchConfig;
pub use error::PatchError;
pub use patch::{Change, Patch};
pub use point::{Extent, Point, PointError};
