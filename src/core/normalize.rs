//! Merge span normalization
//!
//! Turns a table plus the list of non-trivial merges into a complete span
//! partition: every grid coordinate belongs to exactly one span, and the
//! list is in canonical lexicographic order.

use fxhash::FxHashSet;
use log::debug;

use super::span::{Coord, Span};
use crate::utils::error::{LayoutError, LayoutResult};

/// Check that every row has the column count of the first row
pub fn check_rectangular<S: AsRef<str>>(table: &[Vec<S>]) -> LayoutResult<usize> {
    let columns = table.first().map_or(0, Vec::len);
    for (row, cells) in table.iter().enumerate() {
        if cells.len() != columns {
            return Err(LayoutError::ragged(row, columns, cells.len()));
        }
    }
    Ok(columns)
}

/// Fail on the first coordinate of `span` outside a `rows` x `columns` grid
pub(crate) fn check_in_grid(span: &Span, rows: usize, columns: usize) -> LayoutResult<()> {
    match span
        .cells()
        .iter()
        .find(|cell| cell.row >= rows || cell.column >= columns)
    {
        Some(cell) => Err(LayoutError::malformed(
            cell.row,
            cell.column,
            format!("coordinate outside the {}x{} grid", rows, columns),
        )),
        None => Ok(()),
    }
}

/// Check merge spans against the grid before they are trusted
///
/// Each span must be non-empty, inside the grid and a full rectangle, and no
/// coordinate may be claimed by two spans. Spans are checked in canonical
/// order, so the reported coordinate does not depend on input order.
/// Returns the covered coordinates.
fn validate_merges(rows: usize, columns: usize, merges: &[Span]) -> LayoutResult<FxHashSet<Coord>> {
    let mut ordered: Vec<&Span> = merges.iter().collect();
    ordered.sort();

    let mut covered = FxHashSet::default();
    for span in ordered {
        let anchor = span
            .anchor()
            .ok_or_else(|| LayoutError::malformed(0, 0, "merge span is empty"))?;

        check_in_grid(span, rows, columns)?;

        if !span.is_rectangular() {
            return Err(LayoutError::malformed(
                anchor.row,
                anchor.column,
                "span does not cover a complete rectangle",
            ));
        }

        for cell in span.cells() {
            if !covered.insert(*cell) {
                return Err(LayoutError::malformed(
                    cell.row,
                    cell.column,
                    "coordinate is claimed by more than one span",
                ));
            }
        }
    }

    Ok(covered)
}

/// Build the complete span partition for `table`
///
/// Every coordinate not claimed by a merge becomes a single-cell span. The
/// merges are appended and the whole list is sorted lexicographically, so
/// the result does not depend on the order merges were supplied in.
pub fn normalize<S: AsRef<str>>(table: &[Vec<S>], merges: &[Span]) -> LayoutResult<Vec<Span>> {
    let columns = check_rectangular(table)?;
    let rows = table.len();
    let covered = validate_merges(rows, columns, merges)?;

    let mut spans: Vec<Span> = Vec::with_capacity(rows * columns - covered.len() + merges.len());
    for row in 0..rows {
        for column in 0..columns {
            if !covered.contains(&Coord::new(row, column)) {
                spans.push(Span::single(row, column));
            }
        }
    }
    spans.extend(merges.iter().cloned());
    spans.sort();

    debug!(
        "normalized {}x{} grid: {} merges, {} spans",
        rows,
        columns,
        merges.len(),
        spans.len()
    );

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_merges() {
        let table = vec![vec!["A", "B"], vec!["C", "D"]];
        let spans = normalize(&table, &[]).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::single(0, 0),
                Span::single(0, 1),
                Span::single(1, 0),
                Span::single(1, 1),
            ]
        );
    }

    #[test]
    fn test_header_merge() {
        let table = vec![vec!["Header", "Header"], vec!["A", "B"]];
        let spans = normalize(&table, &[Span::rect(0, 0, 1, 2)]).unwrap();
        assert_eq!(
            spans,
            vec![Span::rect(0, 0, 1, 2), Span::single(1, 0), Span::single(1, 1)]
        );
    }

    #[test]
    fn test_order_independent() {
        let table = vec![vec![""; 4]; 4];
        let a = vec![Span::rect(2, 2, 2, 2), Span::rect(0, 0, 2, 1)];
        let b = vec![Span::rect(0, 0, 2, 1), Span::rect(2, 2, 2, 2)];
        assert_eq!(normalize(&table, &a).unwrap(), normalize(&table, &b).unwrap());
    }

    #[test]
    fn test_partition_is_complete() {
        let table = vec![vec![""; 3]; 3];
        let merges = vec![Span::rect(0, 1, 2, 2), Span::rect(1, 0, 2, 1)];
        let spans = normalize(&table, &merges).unwrap();

        let mut seen: Vec<Coord> = spans.iter().flat_map(|s| s.cells().to_vec()).collect();
        seen.sort();
        let expected: Vec<Coord> = Span::rect(0, 0, 3, 3).cells().to_vec();
        assert_eq!(seen, expected);

        let mut sorted = spans.clone();
        sorted.sort();
        assert_eq!(spans, sorted);
    }

    #[test]
    fn test_empty_table() {
        let table: Vec<Vec<String>> = Vec::new();
        assert!(normalize(&table, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_ragged_table_rejected() {
        let table = vec![vec!["A", "B"], vec!["C"]];
        assert_eq!(
            normalize(&table, &[]),
            Err(LayoutError::ragged(1, 2, 1))
        );
    }

    #[test]
    fn test_overlapping_merges_rejected() {
        let table = vec![vec![""; 3]; 2];
        let merges = vec![Span::rect(0, 0, 1, 2), Span::rect(0, 1, 2, 1)];
        let err = normalize(&table, &merges).unwrap_err();
        assert_eq!(err.coordinate(), Some((0, 1)));
        assert!(err.to_string().contains("more than one span"));
    }

    #[test]
    fn test_out_of_grid_rejected() {
        let table = vec![vec![""; 2]; 2];
        let err = normalize(&table, &[Span::rect(1, 1, 1, 2)]).unwrap_err();
        assert_eq!(err.coordinate(), Some((1, 2)));
    }

    #[test]
    fn test_first_error_in_canonical_order() {
        let table = vec![vec![""; 2]; 2];
        let forward = vec![Span::rect(1, 1, 1, 2), Span::single(0, 5)];
        let backward = vec![Span::single(0, 5), Span::rect(1, 1, 1, 2)];
        assert_eq!(normalize(&table, &forward).unwrap_err().coordinate(), Some((0, 5)));
        assert_eq!(normalize(&table, &backward).unwrap_err().coordinate(), Some((0, 5)));
    }

    #[test]
    fn test_huge_coordinate_rejected() {
        let table = vec![vec!["a"]];
        let err = normalize(&table, &[Span::new([(0, 0), (0, usize::MAX)])]).unwrap_err();
        assert_eq!(err.coordinate(), Some((0, usize::MAX)));
    }

    #[test]
    fn test_non_rectangular_rejected() {
        let table = vec![vec![""; 2]; 2];
        let l_shape = Span::new([(0, 0), (0, 1), (1, 0)]);
        let err = normalize(&table, &[l_shape]).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedSpan { row: 0, column: 0, .. }));
    }

    #[test]
    fn test_empty_merge_rejected() {
        let table = vec![vec![""; 2]; 2];
        let err = normalize(&table, &[Span::from_coords(Vec::new())]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
