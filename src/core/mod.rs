//! Core layout modules
//!
//! This module contains the span-aware layout engine:
//! - `span`: grid coordinates and spans
//! - `index`: coordinate to span lookup
//! - `normalize`: merge list to complete span partition
//! - `layout`: column width and row height solvers

pub mod index;
pub mod layout;
pub mod normalize;
pub mod span;

// Re-export main types and functions
pub use index::{lookup_span, SpanIndex};
pub use layout::{
    column_widths, column_widths_with_floor, layout, row_heights, row_heights_with_floor,
    GridLayout, MIN_COLUMN_WIDTH,
};
pub use normalize::{check_rectangular, normalize};
pub use span::{Coord, Span};
