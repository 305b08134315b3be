//! Row/column point arithmetic.
//!
//! Every position computed by [`Patch`](crate::Patch) is built from two primitives:
//!
//! - [`Point::traverse`]: advance a position by an [`Extent`].
//! - [`Point::traversal`]: the [`Extent`] separating two positions.
//!
//! The two are mutual inverses: `p.traverse(e).traversal(p) == e`.
//!
//! Columns are counted in Unicode scalar values (`char`), rows are separated by `'\n'`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use thiserror::Error;

/// Errors produced at the point-arithmetic boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    #[error("negative coordinate ({row}, {column})")]
    /// A signed coordinate was below zero.
    Negative {
        /// The rejected row (or row count).
        row: i64,
        /// The rejected column (or column count).
        column: i64,
    },

    #[error("traversal end {end} precedes start {start}")]
    /// A traversal distance was requested with `end < start`.
    Reversed {
        /// The requested start position.
        start: Point,
        /// The requested end position.
        end: Point,
    },
}

/// A position: zero-based row, and zero-based column within that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column in characters within the row.
    pub column: usize,
}

/// A distance between two [`Point`]s.
///
/// When `rows == 0` the extent is a pure column distance. Otherwise `columns`
/// is the column reached on the final row, independent of the starting column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Number of row boundaries crossed.
    pub rows: usize,
    /// Column distance (same row) or final column (after crossing rows).
    pub columns: usize,
}

fn non_negative(row: i64, column: i64) -> Result<(usize, usize), PointError> {
    match (usize::try_from(row), usize::try_from(column)) {
        (Ok(row), Ok(column)) => Ok((row, column)),
        _ => Err(PointError::Negative { row, column }),
    }
}

impl Point {
    /// The document start.
    pub const ZERO: Self = Self { row: 0, column: 0 };

    /// Create a new point.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Create a point from signed coordinates, rejecting negative values.
    pub fn try_new(row: i64, column: i64) -> Result<Self, PointError> {
        let (row, column) = non_negative(row, column)?;
        Ok(Self { row, column })
    }

    /// Returns `true` for the document start.
    pub fn is_zero(&self) -> bool {
        self.row == 0 && self.column == 0
    }

    /// Advance this position by `extent`.
    pub fn traverse(self, extent: Extent) -> Point {
        if extent.rows == 0 {
            Point::new(self.row, self.column + extent.columns)
        } else {
            Point::new(self.row + extent.rows, extent.columns)
        }
    }

    /// The extent that leads from `start` to `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self < start`. Use [`Point::checked_traversal`] when the order is not known.
    pub fn traversal(self, start: Point) -> Extent {
        assert!(
            self >= start,
            "traversal end {self} precedes start {start}"
        );
        self.traversal_unchecked(start)
    }

    /// Like [`Point::traversal`], but reports reversed arguments as an error.
    pub fn checked_traversal(self, start: Point) -> Result<Extent, PointError> {
        if self < start {
            return Err(PointError::Reversed { start, end: self });
        }
        Ok(self.traversal_unchecked(start))
    }

    fn traversal_unchecked(self, start: Point) -> Extent {
        if self.row == start.row {
            Extent::new(0, self.column - start.column)
        } else {
            Extent::new(self.row - start.row, self.column)
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl Add<Extent> for Point {
    type Output = Point;

    fn add(self, extent: Extent) -> Point {
        self.traverse(extent)
    }
}

impl Sub<Point> for Point {
    type Output = Extent;

    /// Same as [`Point::traversal`]; panics if `self < start`.
    fn sub(self, start: Point) -> Extent {
        self.traversal(start)
    }
}

impl TryFrom<(i64, i64)> for Point {
    type Error = PointError;

    fn try_from((row, column): (i64, i64)) -> Result<Self, Self::Error> {
        Self::try_new(row, column)
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl Extent {
    /// The empty extent.
    pub const ZERO: Self = Self {
        rows: 0,
        columns: 0,
    };

    /// Create a new extent.
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Create an extent from signed components, rejecting negative values.
    pub fn try_new(rows: i64, columns: i64) -> Result<Self, PointError> {
        let (rows, columns) = non_negative(rows, columns)?;
        Ok(Self { rows, columns })
    }

    /// Returns `true` if the extent covers nothing.
    pub fn is_zero(&self) -> bool {
        self.rows == 0 && self.columns == 0
    }

    /// The extent spanned by `text`.
    ///
    /// Rows count `'\n'` characters; columns count the characters after the last one.
    pub fn of_text(text: &str) -> Self {
        let rows = text.matches('\n').count();
        let tail = match text.rfind('\n') {
            Some(idx) => &text[idx + 1..],
            None => text,
        };
        Self::new(rows, tail.chars().count())
    }

    /// The extent covering `self` followed immediately by `next`.
    pub fn concat(self, next: Extent) -> Extent {
        let end = Point::ZERO.traverse(self).traverse(next);
        Extent::new(end.row, end.column)
    }

    /// Reinterpret this extent as the position it reaches from the document start.
    pub fn to_point(self) -> Point {
        Point::ZERO.traverse(self)
    }
}

impl Ord for Extent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rows
            .cmp(&other.rows)
            .then_with(|| self.columns.cmp(&other.columns))
    }
}

impl PartialOrd for Extent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Extent {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}
