//! reST grid table rendering
//!
//! Draws a table on a character canvas using the widths and heights solved
//! by the layout engine. Every span draws its own box, so borders inside a
//! merged cell are simply never drawn:
//!
//! ```text
//! +------+--------+
//! | Left | Top    |
//! |      +--------+
//! |      | Bottom |
//! +------+--------+
//! ```

use log::debug;

use crate::core::layout::{column_widths, row_heights};
use crate::core::normalize::{check_rectangular, normalize};
use crate::core::span::Span;
use crate::utils::error::LayoutResult;
use crate::utils::text::{clean_text, cushion, trim_blank_lines};

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
pub struct RenderOptions {
    /// Draw the border under the first row with `=` (reST header separator)
    /// Default: false
    pub use_headers: bool,

    /// Strip zero-width characters before measuring
    /// Default: true
    pub clean_text: bool,

    /// Drop leading and trailing blank lines of each cell
    /// Default: true
    pub trim_blank_lines: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_headers: false,
            clean_text: true,
            trim_blank_lines: true,
        }
    }
}

impl RenderOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// reST table with the first row marked as header
    pub fn rst() -> Self {
        Self {
            use_headers: true,
            ..Self::default()
        }
    }

    /// Text used exactly as given
    pub fn raw() -> Self {
        Self {
            use_headers: false,
            clean_text: false,
            trim_blank_lines: false,
        }
    }

    /// Apply the text preparation steps to one cell
    pub fn prepare(&self, text: &str) -> String {
        let text = if self.clean_text {
            clean_text(text)
        } else {
            text.to_string()
        };
        if self.trim_blank_lines {
            trim_blank_lines(&text)
        } else {
            text
        }
    }
}

/// Render `table` with its `merges` as a grid table
///
/// Cells are prepared per `options`, padded with one space on each side,
/// and laid out with [`column_widths`] and [`row_heights`]. The result has
/// no trailing newline.
pub fn render_table<S: AsRef<str>>(
    table: &[Vec<S>],
    merges: &[Span],
    options: &RenderOptions,
) -> LayoutResult<String> {
    if check_rectangular(table)? == 0 {
        return Ok(String::new());
    }
    let cushioned: Vec<Vec<String>> = table
        .iter()
        .map(|row| {
            row.iter()
                .map(|text| cushion(&options.prepare(text.as_ref())))
                .collect()
        })
        .collect();

    let spans = normalize(&cushioned, merges)?;
    let widths = column_widths(&cushioned, &spans)?;
    let heights = row_heights(&cushioned, &spans)?;

    let mut canvas = Canvas::new(&widths, &heights);
    let header_row = if options.use_headers && table.len() > 1 {
        Some(0)
    } else {
        None
    };
    for span in &spans {
        canvas.draw_span(span, &cushioned, header_row);
    }

    debug!(
        "rendered {} spans on a {}x{} canvas",
        spans.len(),
        canvas.lines.len(),
        canvas.lines.first().map_or(0, Vec::len)
    );
    Ok(canvas.finish())
}

/// Character canvas with precomputed border offsets
struct Canvas {
    /// x offset of the border left of each column, plus the right edge
    xs: Vec<usize>,
    /// y offset of the border above each row, plus the bottom edge
    ys: Vec<usize>,
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn new(widths: &[usize], heights: &[i64]) -> Self {
        let xs = border_offsets(widths.iter().copied());
        // A row left at -1 by the solver still gets its border line
        let ys = border_offsets(heights.iter().map(|&h| h.max(0) as usize));
        let width = xs.last().map_or(0, |&x| x + 1);
        let height = ys.last().map_or(0, |&y| y + 1);
        Canvas {
            xs,
            ys,
            lines: vec![vec![' '; width]; height],
        }
    }

    fn put(&mut self, y: usize, x: usize, ch: char) {
        let slot = &mut self.lines[y][x];
        *slot = match (*slot, ch) {
            ('+', _) | (_, '+') => '+',
            ('=', '-') => '=',
            _ => ch,
        };
    }

    fn draw_span(&mut self, span: &Span, table: &[Vec<String>], header_row: Option<usize>) {
        let Some(anchor) = span.anchor() else {
            return;
        };
        let (top, left) = (self.ys[anchor.row], self.xs[anchor.column]);
        let last_row = anchor.row + span.row_count() - 1;
        let bottom = self.ys[last_row + 1];
        let right = self.xs[anchor.column + span.column_count()];

        let top_fill = if header_row.is_some_and(|h| h + 1 == anchor.row) {
            '='
        } else {
            '-'
        };
        let bottom_fill = if header_row == Some(last_row) { '=' } else { '-' };

        for x in left + 1..right {
            self.put(top, x, top_fill);
            self.put(bottom, x, bottom_fill);
        }
        for y in top + 1..bottom {
            self.put(y, left, '|');
            self.put(y, right, '|');
        }
        for (y, x) in [(top, left), (top, right), (bottom, left), (bottom, right)] {
            self.put(y, x, '+');
        }

        let text = &table[anchor.row][anchor.column];
        for (i, line) in text.split('\n').enumerate() {
            let y = top + 1 + i;
            if y >= bottom {
                break;
            }
            for (j, ch) in line.chars().enumerate() {
                let x = left + 1 + j;
                if x >= right {
                    break;
                }
                self.lines[y][x] = ch;
            }
        }
    }

    fn finish(self) -> String {
        self.lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Border positions for consecutive cells of the given sizes
fn border_offsets(sizes: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut offsets = vec![0];
    let mut position = 0;
    for size in sizes {
        position += size + 1;
        offsets.push(position);
    }
    offsets
}
