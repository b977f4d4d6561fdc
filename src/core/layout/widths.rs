//! Column width solver

use log::{debug, trace};

use super::{anchor_text, owner, shortage_shares};
use crate::core::index::SpanIndex;
use crate::core::normalize::{check_in_grid, check_rectangular};
use crate::core::span::Span;
use crate::utils::error::{LayoutError, LayoutResult};
use crate::utils::text::longest_line_length;

/// Width every column starts from, even when all its cells are empty
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Minimum display width of every column of `table`
///
/// `spans` must be a complete partition of the grid (see
/// [`normalize`](crate::normalize)); a coordinate without a span fails with
/// [`LayoutError::UncoveredCell`].
///
/// A merge of `k` columns also gains the `k - 1` interior border characters
/// it removes, so its content may be that much wider than the sum of the
/// column widths.
pub fn column_widths<S: AsRef<str>>(table: &[Vec<S>], spans: &[Span]) -> LayoutResult<Vec<usize>> {
    column_widths_with_floor(table, spans, &[])
}

/// [`column_widths`] starting from `floor` instead of the bare minimum
///
/// Columns missing from `floor` start at [`MIN_COLUMN_WIDTH`]. The result is
/// never below `floor`, and feeding a solved vector back in returns it as is.
pub fn column_widths_with_floor<S: AsRef<str>>(
    table: &[Vec<S>],
    spans: &[Span],
    floor: &[usize],
) -> LayoutResult<Vec<usize>> {
    let columns = check_rectangular(table)?;
    for span in spans {
        check_in_grid(span, table.len(), columns)?;
    }
    let index = SpanIndex::new(spans);
    let mut widths: Vec<usize> = (0..columns)
        .map(|column| floor.get(column).map_or(MIN_COLUMN_WIDTH, |&w| w.max(MIN_COLUMN_WIDTH)))
        .collect();

    // Pass A: spans one column wide
    for row in 0..table.len() {
        for column in 0..columns {
            let span = owner(&index, row, column)?;
            if span.column_count() != 1 {
                continue;
            }
            let length = longest_line_length(anchor_text(table, span)?);
            if length > widths[column] {
                widths[column] = length;
            }
        }
    }

    // Pass B: merged spans, once per covered coordinate
    for row in 0..table.len() {
        for column in 0..columns {
            let span = owner(&index, row, column)?;
            let column_count = span.column_count();
            if column_count <= 1 {
                continue;
            }

            let text = anchor_text(table, span)?;
            let start = span.anchor().map_or(column, |anchor| anchor.column);
            let end = start + column_count;
            if end > columns {
                return Err(LayoutError::malformed(row, column, "span runs past the last column"));
            }

            let available = widths[start..end].iter().sum::<usize>() + column_count - 1;
            let length = longest_line_length(text);
            if length > available {
                let shortage = length - available;
                trace!(
                    "columns {}..{}: need {}, have {}, adding {}",
                    start,
                    end,
                    length,
                    available,
                    shortage
                );
                for (width, extra) in widths[start..end]
                    .iter_mut()
                    .zip(shortage_shares(shortage, column_count))
                {
                    *width += extra;
                }
            }
        }
    }

    debug!("column widths: {:?}", widths);
    Ok(widths)
}
