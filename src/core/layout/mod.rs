//! Span-aware layout engine
//!
//! Computes the minimum column widths and row heights that display every
//! cell's text without truncation, distributing the extra space demanded by
//! merged cells across the columns or rows they cover.
//!
//! # Architecture
//!
//! ```text
//! table + merges -> normalize -> complete spans -> column_widths / row_heights
//! ```
//!
//! Both solvers run two passes over the grid in row-major order. Pass A sizes
//! columns (rows) from single-column (single-row) spans; pass B then grows
//! the covered range of every multi-column (multi-row) span that still falls
//! short. Pass B mutates the vector in place, so a later span sees the growth
//! caused by earlier ones, and a span is revisited once per coordinate it
//! covers.
//!
//! # Example
//!
//! ```rust
//! use spangrid::{column_widths, normalize, row_heights, Span};
//!
//! let table = vec![vec!["VeryLongHeader", ""], vec!["A", "B"]];
//! let spans = normalize(&table, &[Span::rect(0, 0, 1, 2)]).unwrap();
//! assert_eq!(column_widths(&table, &spans).unwrap(), vec![7, 6]);
//! assert_eq!(row_heights(&table, &spans).unwrap(), vec![1, 1]);
//! ```

mod heights;
mod widths;


use super::index::SpanIndex;
use super::normalize::normalize;
use super::span::Span;
use crate::utils::error::{LayoutError, LayoutResult};

pub use heights::{row_heights, row_heights_with_floor};
pub use widths::{column_widths, column_widths_with_floor, MIN_COLUMN_WIDTH};

/// Solved layout of one table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize))]
pub struct GridLayout {
    /// Complete span partition in canonical order
    pub spans: Vec<Span>,
    /// Minimum width of each column
    pub widths: Vec<usize>,
    /// Minimum height of each row; -1 when nothing sized the row
    pub heights: Vec<i64>,
}

/// Normalize `merges` and solve widths and heights for `table`
pub fn layout<S: AsRef<str>>(table: &[Vec<S>], merges: &[Span]) -> LayoutResult<GridLayout> {
    let spans = normalize(table, merges)?;
    let widths = column_widths(table, &spans)?;
    let heights = row_heights(table, &spans)?;
    Ok(GridLayout {
        spans,
        widths,
        heights,
    })
}

/// The span owning `(row, column)`, or an error naming the gap
fn owner<'a>(index: &SpanIndex<'a>, row: usize, column: usize) -> LayoutResult<&'a Span> {
    index
        .lookup(row, column)
        .ok_or_else(|| LayoutError::uncovered(row, column))
}

/// Text of the span's anchor cell
fn anchor_text<'t, S: AsRef<str>>(table: &'t [Vec<S>], span: &Span) -> LayoutResult<&'t str> {
    let anchor = span
        .anchor()
        .ok_or_else(|| LayoutError::malformed(0, 0, "span has no coordinates"))?;
    table
        .get(anchor.row)
        .and_then(|cells| cells.get(anchor.column))
        .map(AsRef::as_ref)
        .ok_or_else(|| LayoutError::malformed(anchor.row, anchor.column, "anchor outside the grid"))
}

/// Per-slot increments that spread `shortage` over `count` slots
///
/// Every slot gets `shortage / count`; the first `shortage % count` slots get
/// one more.
fn shortage_shares(shortage: usize, count: usize) -> impl Iterator<Item = usize> {
    let per_slot = shortage / count;
    let remainder = shortage % count;
    (0..count).map(move |i| per_slot + usize::from(i < remainder))
}
