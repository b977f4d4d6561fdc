//! # spangrid
//!
//! Span-aware layout engine for text grid tables, written in Rust.
//!
//! A table is a rectangular grid of cell texts, some of which are merged
//! across rows and columns. spangrid turns the merge list into a complete
//! span partition, solves the minimum column widths and row heights that
//! fit every cell, and draws the result as a reStructuredText grid table.
//!
//! ## Features
//!
//! - **Span normalization**: merge lists are validated and completed into a
//!   canonical, order-independent partition of the grid
//! - **Width/height solving**: extra space needed by merged cells is spread
//!   over the columns and rows they cover, left/top first
//! - **Rendering**: reST grid tables with optional header separator
//! - **Builders**: place rows of colspan/rowspan cells on a grid
//! - **Input documents**: JSON and CSV tables, TOML options (`data-loading`)
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Layout
//!
//! ```rust
//! use spangrid::{column_widths, normalize, row_heights, Span};
//!
//! let table = vec![vec!["Header", ""], vec!["A", "B"]];
//! let spans = normalize(&table, &[Span::rect(0, 0, 1, 2)]).unwrap();
//! assert_eq!(spans.len(), 3);
//! assert_eq!(column_widths(&table, &spans).unwrap(), vec![3, 3]);
//! assert_eq!(row_heights(&table, &spans).unwrap(), vec![1, 1]);
//! ```
//!
//! ### Rendering
//!
//! ```rust
//! use spangrid::{render_table, RenderOptions, Span};
//!
//! let table = vec![vec!["Header", ""], vec!["A", "B"]];
//! let grid = render_table(&table, &[Span::rect(0, 0, 1, 2)], &RenderOptions::default()).unwrap();
//! assert_eq!(grid, "+--------+\n| Header |\n+----+---+\n| A  | B |\n+----+---+");
//! ```

/// Core layout modules
pub mod core;

/// Feature modules - building, rendering, input documents
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the layout engine
pub use crate::core::{
    check_rectangular, column_widths, column_widths_with_floor, layout, lookup_span, normalize,
    row_heights, row_heights_with_floor, Coord, GridLayout, Span, SpanIndex, MIN_COLUMN_WIDTH,
};

// Re-export feature modules
pub use features::builder;
pub use features::render;
pub use features::{render_table, GridBuilder, RenderOptions, SpanCell};

#[cfg(feature = "data-loading")]
pub use features::input;
#[cfg(feature = "data-loading")]
pub use features::{parse_csv_table, parse_json_table, parse_table, InputFormat, TableInput};

// Re-export utilities
pub use utils::error::{LayoutError, LayoutResult};
pub use utils::text;

/// Build a grid from rows of cells and render it
///
/// Convenience wrapper over [`GridBuilder`] and [`render_table`].
pub fn render_rows<R, C>(rows: R, options: &RenderOptions) -> LayoutResult<String>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<SpanCell>,
{
    let mut builder = GridBuilder::new();
    for row in rows {
        builder.push_row(row);
    }
    let (table, merges) = builder.finish();
    render_table(&table, &merges, options)
}
