//! Row height solver

use log::{debug, trace};

use super::{anchor_text, owner, shortage_shares};
use crate::core::index::SpanIndex;
use crate::core::normalize::{check_in_grid, check_rectangular};
use crate::core::span::Span;
use crate::utils::error::{LayoutError, LayoutResult};
use crate::utils::text::line_count;

/// Height a row starts from; loses every comparison against real text
const UNSET_ROW_HEIGHT: i64 = -1;

/// Minimum display height, in text lines, of every row of `table`
///
/// The row-axis dual of [`column_widths`](crate::column_widths). A merge of
/// `k` rows already has `k - 1` separator lines to put text on, so those are
/// subtracted from its demand. Rows that no single-row span touches and no
/// merge had to grow keep the value -1.
pub fn row_heights<S: AsRef<str>>(table: &[Vec<S>], spans: &[Span]) -> LayoutResult<Vec<i64>> {
    row_heights_with_floor(table, spans, &[])
}

/// [`row_heights`] starting from `floor` instead of -1
pub fn row_heights_with_floor<S: AsRef<str>>(
    table: &[Vec<S>],
    spans: &[Span],
    floor: &[i64],
) -> LayoutResult<Vec<i64>> {
    let columns = check_rectangular(table)?;
    let rows = table.len();
    for span in spans {
        check_in_grid(span, rows, columns)?;
    }
    let index = SpanIndex::new(spans);
    let mut heights: Vec<i64> = (0..rows)
        .map(|row| floor.get(row).map_or(UNSET_ROW_HEIGHT, |&h| h.max(UNSET_ROW_HEIGHT)))
        .collect();

    // Pass A: spans one row tall
    for row in 0..rows {
        for column in 0..columns {
            let span = owner(&index, row, column)?;
            if span.row_count() != 1 {
                continue;
            }
            let height = line_count(anchor_text(table, span)?) as i64;
            if height > heights[row] {
                heights[row] = height;
            }
        }
    }

    // Pass B: merged spans, once per covered coordinate
    for row in 0..rows {
        for column in 0..columns {
            let span = owner(&index, row, column)?;
            let row_count = span.row_count();
            if row_count <= 1 {
                continue;
            }

            let text = anchor_text(table, span)?;
            let start = span.anchor().map_or(row, |anchor| anchor.row);
            let end = start + row_count;
            if end > rows {
                return Err(LayoutError::malformed(row, column, "span runs past the last row"));
            }

            let needed = line_count(text) as i64 - (row_count as i64 - 1);
            let current: i64 = heights[start..end].iter().sum();
            if needed > current {
                let shortage = (needed - current) as usize;
                trace!(
                    "rows {}..{}: need {}, have {}, adding {}",
                    start,
                    end,
                    needed,
                    current,
                    shortage
                );
                for (height, extra) in heights[start..end]
                    .iter_mut()
                    .zip(shortage_shares(shortage, row_count))
                {
                    *height += extra as i64;
                }
            }
        }
    }

    debug!("row heights: {:?}", heights);
    Ok(heights)
}
