//! Feature modules - everything around the layout engine
//!
//! This module contains:
//! - Grid building from cells with colspan/rowspan
//! - reST grid table rendering
//! - Table input documents (JSON, CSV, TOML options)

pub mod builder;
#[cfg(feature = "data-loading")]
pub mod input;
pub mod render;

// Re-export commonly used types
pub use builder::{GridBuilder, SpanCell};
#[cfg(feature = "data-loading")]
pub use input::{
    parse_csv_table, parse_json_table, parse_options_toml, parse_table, InputFormat, TableInput,
};
pub use render::{render_table, RenderOptions};
