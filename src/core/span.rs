//! Grid coordinates and spans

use std::fmt;

/// A `(row, column)` grid position, 0-indexed
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub fn new(row: usize, column: usize) -> Self {
        Coord { row, column }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, column): (usize, usize)) -> Self {
        Coord::new(row, column)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.column)
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, column]: [usize; 2]) -> Self {
        Coord::new(row, column)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

/// One logical cell: the grid coordinates it covers
///
/// Coordinates are kept sorted, so the first one is the anchor (top-left for
/// a rectangular span) and the only one whose text is used. Spans order
/// lexicographically over their coordinate sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Span {
    cells: Vec<Coord>,
}

impl From<Vec<Coord>> for Span {
    fn from(cells: Vec<Coord>) -> Self {
        Span::from_coords(cells)
    }
}

impl From<Span> for Vec<Coord> {
    fn from(span: Span) -> Self {
        span.cells
    }
}

impl Span {
    /// Build a span from `(row, column)` pairs; they are sorted, duplicates kept
    pub fn new(cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self::from_coords(cells.into_iter().map(Coord::from))
    }

    pub fn from_coords(cells: impl IntoIterator<Item = Coord>) -> Self {
        let mut cells: Vec<Coord> = cells.into_iter().collect();
        cells.sort();
        Span { cells }
    }

    /// A span covering exactly one cell
    pub fn single(row: usize, column: usize) -> Self {
        Span {
            cells: vec![Coord::new(row, column)],
        }
    }

    /// The rectangle of `rows` x `columns` cells anchored at `(row, column)`
    pub fn rect(row: usize, column: usize, rows: usize, columns: usize) -> Self {
        let cells = (row..row.saturating_add(rows))
            .flat_map(|r| (column..column.saturating_add(columns)).map(move |c| Coord::new(r, c)))
            .collect();
        Span { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The coordinate holding the span's text
    pub fn anchor(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.binary_search(&Coord::new(row, column)).is_ok()
    }

    /// Number of columns covered, `c1 - c0 + 1`; zero for an empty span
    pub fn column_count(&self) -> usize {
        let min = self.cells.iter().map(|c| c.column).min();
        let max = self.cells.iter().map(|c| c.column).max();
        match (min, max) {
            (Some(min), Some(max)) => (max - min).saturating_add(1),
            _ => 0,
        }
    }

    /// Number of rows covered, `r1 - r0 + 1`; zero for an empty span
    pub fn row_count(&self) -> usize {
        match (self.cells.first(), self.cells.last()) {
            (Some(first), Some(last)) => (last.row - first.row).saturating_add(1),
            _ => 0,
        }
    }

    /// Whether the coordinates form a complete rectangle without repeats
    pub fn is_rectangular(&self) -> bool {
        let Some(anchor) = self.anchor() else {
            return false;
        };
        let (rows, columns) = (self.row_count(), self.column_count());
        rows.checked_mul(columns) == Some(self.len())
            && *self == Span::rect(anchor.row, anchor.column, rows, columns)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}
