//! Table input documents
//!
//! Two JSON shapes are accepted:
//!
//! ```json
//! {"table": [["Header", ""], ["A", "B"]], "spans": [[[0, 0], [0, 1]]]}
//! {"rows": [[{"text": "Header", "colspan": 2}], ["A", "B"]]}
//! ```
//!
//! Both may carry an `"options"` object with [`RenderOptions`] fields. CSV
//! input is a plain grid without merges; TOML holds render options only.

use serde::Deserialize;

use super::builder::{GridBuilder, SpanCell};
use super::render::{render_table, RenderOptions};
use crate::core::layout::{layout, GridLayout};
use crate::core::span::Span;
use crate::utils::error::{LayoutError, LayoutResult};

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Pick a format from the file name, then from the content
    pub fn detect(path: Option<&str>, content: &str) -> Self {
        if let Some(path) = path {
            let lower = path.to_ascii_lowercase();
            if lower.ends_with(".json") {
                return InputFormat::Json;
            }
            if lower.ends_with(".csv") {
                return InputFormat::Csv;
            }
        }
        match content.trim_start().chars().next() {
            Some('{') => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// A loaded table ready for layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInput {
    pub table: Vec<Vec<String>>,
    pub merges: Vec<Span>,
    /// Options embedded in the document, if any
    pub options: Option<RenderOptions>,
}

impl TableInput {
    /// Render with the embedded options, or `fallback` when there are none
    pub fn render(&self, fallback: &RenderOptions) -> LayoutResult<String> {
        let options = self.options.as_ref().unwrap_or(fallback);
        render_table(&self.table, &self.merges, options)
    }

    /// Solve the layout of the raw table text
    pub fn layout(&self) -> LayoutResult<GridLayout> {
        layout(&self.table, &self.merges)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellDocument {
    Text(String),
    Cell {
        text: String,
        #[serde(default = "default_span")]
        colspan: usize,
        #[serde(default = "default_span")]
        rowspan: usize,
    },
}

fn default_span() -> usize {
    1
}

impl From<CellDocument> for SpanCell {
    fn from(cell: CellDocument) -> Self {
        match cell {
            CellDocument::Text(text) => SpanCell::new(text),
            CellDocument::Cell {
                text,
                colspan,
                rowspan,
            } => SpanCell::with_spans(text, rowspan, colspan),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    Grid {
        table: Vec<Vec<String>>,
        #[serde(default)]
        spans: Vec<Span>,
        #[serde(default)]
        options: Option<RenderOptions>,
    },
    Rows {
        rows: Vec<Vec<CellDocument>>,
        #[serde(default)]
        options: Option<RenderOptions>,
    },
}

fn json_error(err: serde_json::Error) -> LayoutError {
    if err.line() > 0 {
        LayoutError::parse_at(err.to_string(), err.line(), err.column())
    } else {
        LayoutError::parse(err.to_string())
    }
}

/// Parse a JSON table document
pub fn parse_json_table(input: &str) -> LayoutResult<TableInput> {
    // Syntax errors keep their position; shape errors come from the second step
    let value: serde_json::Value = serde_json::from_str(input).map_err(json_error)?;
    let document: TableDocument = serde_json::from_value(value).map_err(|_| {
        LayoutError::parse("expected an object with \"table\" (and \"spans\") or \"rows\"")
    })?;

    Ok(match document {
        TableDocument::Grid {
            table,
            spans,
            options,
        } => TableInput {
            table,
            merges: spans,
            options,
        },
        TableDocument::Rows { rows, options } => {
            let mut builder = GridBuilder::new();
            for row in rows {
                builder.push_row(row);
            }
            let (table, merges) = builder.finish();
            TableInput {
                table,
                merges,
                options,
            }
        }
    })
}

/// Parse CSV text; every record is a row, no merges
pub fn parse_csv_table(input: &str) -> LayoutResult<TableInput> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input.as_bytes());

    let mut table = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| match err.position() {
            Some(pos) => LayoutError::parse_at(err.to_string(), pos.line() as usize, 1),
            None => LayoutError::parse(err.to_string()),
        })?;
        table.push(record.iter().map(str::to_string).collect());
    }

    Ok(TableInput {
        table,
        merges: Vec::new(),
        options: None,
    })
}

/// Parse a table in the given format
pub fn parse_table(input: &str, format: InputFormat) -> LayoutResult<TableInput> {
    match format {
        InputFormat::Json => parse_json_table(input),
        InputFormat::Csv => parse_csv_table(input),
    }
}

/// Load [`RenderOptions`] from a TOML document; missing keys keep defaults
pub fn parse_options_toml(input: &str) -> LayoutResult<RenderOptions> {
    toml::from_str(input).map_err(|err| LayoutError::parse(err.to_string()))
}
