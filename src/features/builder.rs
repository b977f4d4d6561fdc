//! Row-by-row grid builder
//!
//! Front ends (HTML, LaTeX, spreadsheets) describe tables as rows of cells
//! carrying `colspan`/`rowspan`. The builder places those cells on a
//! rectangular grid and records a merge span for every cell larger than
//! one coordinate, producing the `(table, merges)` pair that
//! [`normalize`](crate::normalize) expects.

use log::warn;

use crate::core::span::Span;

/// One input cell with its span sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanCell {
    pub text: String,
    /// Number of columns covered; zero is treated as one
    pub colspan: usize,
    /// Number of rows covered; zero is treated as one
    pub rowspan: usize,
}

impl SpanCell {
    pub fn new(text: impl Into<String>) -> Self {
        SpanCell {
            text: text.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    pub fn with_spans(text: impl Into<String>, rowspan: usize, colspan: usize) -> Self {
        SpanCell {
            text: text.into(),
            colspan,
            rowspan,
        }
    }
}

impl From<&str> for SpanCell {
    fn from(text: &str) -> Self {
        SpanCell::new(text)
    }
}

impl From<String> for SpanCell {
    fn from(text: String) -> Self {
        SpanCell::new(text)
    }
}

/// A merge waiting for the final row count
#[derive(Debug, Clone, Copy)]
struct PendingMerge {
    row: usize,
    column: usize,
    rowspan: usize,
    colspan: usize,
}

/// Grid builder with rowspan coverage tracking
#[derive(Debug, Default)]
pub struct GridBuilder {
    /// Placed rows; shadow positions hold empty text
    rows: Vec<Vec<String>>,
    /// Rows each column is still covered for by an earlier rowspan
    col_coverage: Vec<usize>,
    merges: Vec<PendingMerge>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one row of cells
    ///
    /// For each column position: if an earlier rowspan still covers it, a
    /// shadow cell is emitted and the coverage decremented; otherwise the
    /// next input cell is placed there and marks coverage for the rows
    /// below it. A colspan reaching into a column that a rowspan still
    /// covers is cut short at that column.
    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<SpanCell>,
    {
        let row_index = self.rows.len();
        let mut row: Vec<String> = Vec::new();
        let mut current_col = 0;

        for cell in cells {
            let cell = cell.into();

            while self.is_covered(current_col) {
                row.push(String::new());
                self.col_coverage[current_col] -= 1;
                current_col += 1;
            }

            let mut colspan = cell.colspan.max(1);
            let rowspan = cell.rowspan.max(1);

            if let Some(blocked) =
                (current_col + 1..current_col + colspan).find(|&column| self.is_covered(column))
            {
                warn!(
                    "colspan {} of {:?} at [{}, {}] runs into a rowspan; clamped to {} columns",
                    colspan,
                    cell.text,
                    row_index,
                    current_col,
                    blocked - current_col
                );
                colspan = blocked - current_col;
            }

            if current_col + colspan > self.col_coverage.len() {
                self.col_coverage.resize(current_col + colspan, 0);
            }
            for coverage in &mut self.col_coverage[current_col..current_col + colspan] {
                *coverage = rowspan - 1;
            }

            if colspan > 1 || rowspan > 1 {
                self.merges.push(PendingMerge {
                    row: row_index,
                    column: current_col,
                    rowspan,
                    colspan,
                });
            }

            row.push(cell.text);
            row.extend(std::iter::repeat_with(String::new).take(colspan - 1));
            current_col += colspan;
        }

        // Columns past the last input cell that a rowspan still covers
        for column in current_col..self.col_coverage.len() {
            if self.col_coverage[column] > 0 {
                row.resize(column + 1, String::new());
                self.col_coverage[column] -= 1;
            }
        }

        self.rows.push(row);
    }

    fn is_covered(&self, column: usize) -> bool {
        self.col_coverage.get(column).is_some_and(|&c| c > 0)
    }

    /// Finish the grid: pad short rows, clamp rowspans to the last row
    pub fn finish(self) -> (Vec<Vec<String>>, Vec<Span>) {
        let row_count = self.rows.len();
        let column_count = self.rows.iter().map(Vec::len).max().unwrap_or(0);

        let table = self
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize(column_count, String::new());
                row
            })
            .collect();

        let merges = self
            .merges
            .into_iter()
            .map(|merge| {
                let rows = merge.rowspan.min(row_count - merge.row);
                if rows < merge.rowspan {
                    warn!(
                        "rowspan {} at [{}, {}] clamped to {} rows",
                        merge.rowspan, merge.row, merge.column, rows
                    );
                }
                Span::rect(merge.row, merge.column, rows, merge.colspan)
            })
            .filter(|span| span.len() > 1)
            .collect();

        (table, merges)
    }
}
