//! Python bindings for spangrid
//!
//! Spans cross the boundary as lists of `(row, column)` tuples, tables as
//! lists of lists of strings. Layout errors raise `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use spangrid::{LayoutError, RenderOptions, Span};

type PySpan = Vec<(usize, usize)>;

fn to_py_err(err: LayoutError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_spans(spans: Vec<PySpan>) -> Vec<Span> {
    spans.into_iter().map(Span::new).collect()
}

fn from_spans(spans: Vec<Span>) -> Vec<PySpan> {
    spans
        .into_iter()
        .map(|span| span.cells().iter().map(|c| (c.row, c.column)).collect())
        .collect()
}

/// Complete the merge list into a span partition of the grid
#[pyfunction]
fn normalize(table: Vec<Vec<String>>, spans: Vec<PySpan>) -> PyResult<Vec<PySpan>> {
    spangrid::normalize(&table, &to_spans(spans))
        .map(from_spans)
        .map_err(to_py_err)
}

/// Minimum width of each column for a complete span partition
#[pyfunction]
fn column_widths(table: Vec<Vec<String>>, spans: Vec<PySpan>) -> PyResult<Vec<usize>> {
    spangrid::column_widths(&table, &to_spans(spans)).map_err(to_py_err)
}

/// Minimum height of each row for a complete span partition
#[pyfunction]
fn row_heights(table: Vec<Vec<String>>, spans: Vec<PySpan>) -> PyResult<Vec<i64>> {
    spangrid::row_heights(&table, &to_spans(spans)).map_err(to_py_err)
}

/// Render the table with its merges as a reST grid table
#[pyfunction]
#[pyo3(signature = (table, spans=Vec::new(), use_headers=false))]
fn render(table: Vec<Vec<String>>, spans: Vec<PySpan>, use_headers: bool) -> PyResult<String> {
    let options = RenderOptions {
        use_headers,
        ..RenderOptions::new()
    };
    spangrid::render_table(&table, &to_spans(spans), &options).map_err(to_py_err)
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(column_widths, m)?)?;
    m.add_function(wrap_pyfunction!(row_heights, m)?)?;
    m.add_function(wrap_pyfunction!(render, m)?)?;
    Ok(())
}
