//! WASM bindings for spangrid
//!
//! This module provides JavaScript-accessible functions for laying out and
//! rendering JSON table documents.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::RenderOptions;

/// Render result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered grid table
    pub output: String,
    /// Whether rendering was successful
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
    /// `[row, column]` the error points at, when it names one
    pub cell: Option<(usize, usize)>,
}

#[cfg(feature = "wasm")]
impl RenderResult {
    fn from_result(result: crate::LayoutResult<String>) -> Self {
        match result {
            Ok(output) => RenderResult {
                output,
                success: true,
                error: None,
                cell: None,
            },
            Err(err) => RenderResult {
                output: String::new(),
                success: false,
                error: Some(err.to_string()),
                cell: err.coordinate(),
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render a JSON table document as a grid table
///
/// # Arguments
/// * `input` - JSON document (`{"table", "spans"}` or `{"rows"}`)
/// * `options` - Optional render options object; embedded options win
///
/// # Returns
/// `{output, success, error, cell}`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderGrid")]
pub fn render_grid_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let fallback: RenderOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let result = crate::parse_json_table(input).and_then(|doc| doc.render(&fallback));
    serde_wasm_bindgen::to_value(&RenderResult::from_result(result)).map_err(JsValue::from)
}

/// Solve the layout of a JSON table document
///
/// # Returns
/// `{spans, widths, heights}`; throws the error message on failure
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "layoutGrid")]
pub fn layout_grid_wasm(input: &str) -> Result<JsValue, JsValue> {
    let grid = crate::parse_json_table(input)
        .and_then(|doc| doc.layout())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    serde_wasm_bindgen::to_value(&grid).map_err(JsValue::from)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
