//! Integration tests for spangrid layout and rendering

use spangrid::{
    column_widths, layout, lookup_span, normalize, render_rows, render_table, row_heights,
    GridBuilder, LayoutError, RenderOptions, Span, SpanCell, SpanIndex,
};

// ============================================================================
// Normalization
// ============================================================================

mod normalization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_singletons_for_plain_grid() {
        let table = vec![vec!["A", "B"], vec!["C", "D"]];
        let spans = normalize(&table, &[]).unwrap();
        let pairs: Vec<Vec<(usize, usize)>> = spans
            .iter()
            .map(|s| s.cells().iter().map(|c| (c.row, c.column)).collect())
            .collect();
        assert_eq!(
            pairs,
            vec![
                vec![(0, 0)],
                vec![(0, 1)],
                vec![(1, 0)],
                vec![(1, 1)],
            ]
        );
    }

    #[test]
    fn test_merge_sorted_into_place() {
        let table = vec![vec!["Header", "Header"], vec!["A", "B"]];
        let spans = normalize(&table, &[Span::new([(0, 0), (0, 1)])]).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::new([(0, 0), (0, 1)]),
                Span::single(1, 0),
                Span::single(1, 1),
            ]
        );
    }

    #[test]
    fn test_every_coordinate_covered_once() {
        let table = vec![vec![""; 4]; 3];
        let merges = vec![
            Span::rect(0, 0, 2, 2),
            Span::rect(0, 3, 3, 1),
            Span::rect(2, 0, 1, 3),
        ];
        let spans = normalize(&table, &merges).unwrap();
        let index = SpanIndex::new(&spans);
        for row in 0..3 {
            for column in 0..4 {
                assert_eq!(index.lookup(row, column), lookup_span(&spans, row, column));
                assert!(index.lookup(row, column).is_some());
            }
        }
        let total: usize = spans.iter().map(Span::len).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn test_malformed_merges() {
        let table = vec![vec![""; 3]; 3];

        let overlap = normalize(&table, &[Span::rect(0, 0, 2, 2), Span::rect(1, 1, 2, 2)]);
        assert!(matches!(
            overlap,
            Err(LayoutError::MalformedSpan { row: 1, column: 1, .. })
        ));

        let outside = normalize(&table, &[Span::rect(2, 2, 2, 1)]);
        assert!(matches!(
            outside,
            Err(LayoutError::MalformedSpan { row: 3, column: 2, .. })
        ));

        let gap = normalize(&table, &[Span::new([(0, 0), (0, 2)])]);
        assert!(matches!(gap, Err(LayoutError::MalformedSpan { .. })));
    }
}

// ============================================================================
// Solvers
// ============================================================================

mod solvers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_header_widens_both_columns() {
        let table = vec![vec!["VeryLongHeader", "VeryLongHeader"], vec!["A", "B"]];
        let spans = normalize(&table, &[Span::rect(0, 0, 1, 2)]).unwrap();
        assert_eq!(column_widths(&table, &spans).unwrap(), vec![7, 6]);
    }

    #[test]
    fn test_rowspan_scenario() {
        let table = vec![vec!["Left", "Top"], vec!["Left", "Bottom"]];
        let spans = normalize(&table, &[Span::rect(0, 0, 2, 1)]).unwrap();
        assert_eq!(row_heights(&table, &spans).unwrap(), vec![1, 1]);
        assert_eq!(column_widths(&table, &spans).unwrap(), vec![4, 6]);
    }

    #[test]
    fn test_three_way_remainder() {
        // 3 columns of 3 plus 2 borders = 11; 16 chars leaves 5 short
        let table = vec![vec!["sixteen chars!!!", "", ""], vec!["a", "b", "c"]];
        let spans = normalize(&table, &[Span::rect(0, 0, 1, 3)]).unwrap();
        assert_eq!(column_widths(&table, &spans).unwrap(), vec![5, 5, 4]);
    }

    #[test]
    fn test_incomplete_partition_reports_coordinate() {
        let table = vec![vec!["A", "B"], vec!["C", "D"]];
        let spans = vec![Span::single(0, 0), Span::single(0, 1), Span::single(1, 0)];
        assert!(lookup_span(&spans, 1, 1).is_none());
        assert_eq!(
            column_widths(&table, &spans).unwrap_err(),
            LayoutError::uncovered(1, 1)
        );
    }

    #[test]
    fn test_layout_is_pure() {
        let table = vec![vec!["x\ny", "z"], vec!["", "w"]];
        let merges = [Span::rect(0, 0, 2, 1)];
        let first = layout(&table, &merges).unwrap();
        let second = layout(&table, &merges).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_solvers_run_on_independent_threads() {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                std::thread::spawn(move || {
                    let text = "x".repeat(10 + n);
                    let table = vec![vec![text.clone(), String::new()]];
                    let spans = normalize(&table, &[Span::rect(0, 0, 1, 2)]).unwrap();
                    column_widths(&table, &spans).unwrap()
                })
            })
            .collect();
        let results: Vec<Vec<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], vec![5, 4]);
        assert_eq!(results[3], vec![6, 6]);
    }
}

// ============================================================================
// Rendering
// ============================================================================

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_colspan_and_rowspan_together() {
        let rows = vec![
            vec![SpanCell::with_spans("Big", 2, 2), SpanCell::new("R1C3")],
            vec![SpanCell::new("R2C3")],
            vec![
                SpanCell::new("R3C1"),
                SpanCell::new("R3C2"),
                SpanCell::new("R3C3"),
            ],
        ];
        let expected = "\
+-------------+------+
| Big         | R1C3 |
|             +------+
|             | R2C3 |
+------+------+------+
| R3C1 | R3C2 | R3C3 |
+------+------+------+";
        assert_eq!(render_rows(rows, &RenderOptions::default()).unwrap(), expected);
    }

    #[test]
    fn test_colspan_under_rowspan_is_clamped() {
        let rows = vec![
            vec![SpanCell::new("A"), SpanCell::with_spans("B", 2, 1)],
            vec![SpanCell::with_spans("C", 1, 2)],
        ];
        let expected = "\
+---+---+
| A | B |
+---+   |
| C |   |
+---+---+";
        assert_eq!(render_rows(rows, &RenderOptions::default()).unwrap(), expected);
    }

    #[test]
    fn test_empty_cells() {
        let table = vec![vec!["", "B"], vec!["C", ""]];
        let expected = "\
+---+---+
|   | B |
+---+---+
| C |   |
+---+---+";
        assert_eq!(
            render_table(&table, &[], &RenderOptions::default()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_tall_merged_cell_grows_rows() {
        let mut builder = GridBuilder::new();
        builder.push_row([SpanCell::with_spans("1\n2\n3\n4", 2, 1), SpanCell::new("a")]);
        builder.push_row(["b"]);
        let (table, merges) = builder.finish();
        let expected = "\
+---+---+
| 1 | a |
| 2 |   |
| 3 +---+
| 4 | b |
+---+---+";
        assert_eq!(
            render_table(&table, &merges, &RenderOptions::default()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_header_row_with_merge() {
        let table = vec![vec!["Totals", ""], vec!["1", "2"]];
        let expected = "\
+--------+
| Totals |
+====+===+
| 1  | 2 |
+----+---+";
        assert_eq!(
            render_table(&table, &[Span::rect(0, 0, 1, 2)], &RenderOptions::rst()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_every_line_has_equal_width() {
        let rows = vec![
            vec![
                SpanCell::with_spans("wide merged title", 1, 3),
            ],
            vec![
                SpanCell::with_spans("tall", 2, 1),
                SpanCell::new("x"),
                SpanCell::new("y"),
            ],
            vec![SpanCell::with_spans("bottom right", 1, 2)],
        ];
        let out = render_rows(rows, &RenderOptions::default()).unwrap();
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{}", out);
    }
}

// ============================================================================
// Input documents
// ============================================================================

#[cfg(feature = "data-loading")]
mod documents {
    use super::*;
    use pretty_assertions::assert_eq;
    use spangrid::{parse_json_table, parse_table, InputFormat};

    #[test]
    fn test_json_grid_renders() {
        let input = r#"{
            "table": [["Left", "Top"], ["", "Bottom"]],
            "spans": [[[0, 0], [1, 0]]]
        }"#;
        let doc = parse_json_table(input).unwrap();
        let expected = "\
+------+--------+
| Left | Top    |
|      +--------+
|      | Bottom |
+------+--------+";
        assert_eq!(doc.render(&RenderOptions::default()).unwrap(), expected);
    }

    #[test]
    fn test_json_overlap_is_an_error() {
        let input = r#"{"table": [["a", "b"]], "spans": [[[0, 0], [0, 1]], [[0, 1]]]}"#;
        let doc = parse_json_table(input).unwrap();
        assert!(matches!(
            doc.render(&RenderOptions::default()),
            Err(LayoutError::MalformedSpan { .. })
        ));
    }

    #[test]
    fn test_csv_layout() {
        let doc = parse_table("name,qty\napple,3\n", InputFormat::Csv).unwrap();
        let grid = doc.layout().unwrap();
        assert_eq!(grid.widths, vec![5, 3]);
        assert_eq!(grid.heights, vec![1, 1]);
    }
}
