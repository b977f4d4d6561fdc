//! Error handling for grid layout
//!
//! This module provides a unified error type and result type for
//! normalization, solving, rendering and input loading.

use std::fmt;

/// Layout error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A table row does not have the same column count as the first row
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A merge span is empty, out of the grid, overlapping or not rectangular
    MalformedSpan {
        row: usize,
        column: usize,
        reason: String,
    },
    /// A grid coordinate is not covered by any span handed to a solver
    UncoveredCell { row: usize, column: usize },
    /// Parse error - an input document could not be parsed
    ParseError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// Invalid input
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::RaggedTable {
                row,
                expected,
                found,
            } => write!(
                f,
                "Ragged table: row {} has {} cells, expected {}",
                row, found, expected
            ),
            LayoutError::MalformedSpan {
                row,
                column,
                reason,
            } => write!(
                f,
                "Malformed span at row {}, column {}: {}",
                row, column, reason
            ),
            LayoutError::UncoveredCell { row, column } => write!(
                f,
                "Cell at row {}, column {} is not covered by any span",
                row, column
            ),
            LayoutError::ParseError {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Parse error at line {}, column {}: {}", l, c, message)
                } else if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            LayoutError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            LayoutError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        LayoutError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

// Convenience constructors for errors
impl LayoutError {
    pub fn ragged(row: usize, expected: usize, found: usize) -> Self {
        LayoutError::RaggedTable {
            row,
            expected,
            found,
        }
    }

    pub fn malformed(row: usize, column: usize, reason: impl Into<String>) -> Self {
        LayoutError::MalformedSpan {
            row,
            column,
            reason: reason.into(),
        }
    }

    pub fn uncovered(row: usize, column: usize) -> Self {
        LayoutError::UncoveredCell { row, column }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        LayoutError::ParseError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        LayoutError::ParseError {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        LayoutError::InvalidInput {
            message: message.into(),
        }
    }

    /// The grid coordinate an error points at, if any
    pub fn coordinate(&self) -> Option<(usize, usize)> {
        match self {
            LayoutError::MalformedSpan { row, column, .. }
            | LayoutError::UncoveredCell { row, column } => Some((*row, *column)),
            LayoutError::RaggedTable { row, expected, .. } => Some((*row, *expected)),
            _ => None,
        }
    }
}
