//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Cell text measurement and preparation

pub mod error;
pub mod text;

// Re-export commonly used items
pub use error::{LayoutError, LayoutResult};
pub use text::{clean_text, cushion, line_count, longest_line_length, trim_blank_lines};
