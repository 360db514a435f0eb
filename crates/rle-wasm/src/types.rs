//! JavaScript-facing run representation.
//!
//! Runs cross the boundary as plain objects (`{ character, length }`) built
//! with serde-wasm-bindgen, so callers get an ordinary array rather than a
//! handle to WASM memory.

use rle_core::run::{self, Run};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A run of one repeated character, as seen from JavaScript.
///
/// `character` is a one-character string; `length` is the repeat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsRun {
    pub character: String,
    pub length: usize,
}

impl From<Run> for JsRun {
    fn from(run: Run) -> Self {
        Self {
            character: run.character().to_string(),
            length: run.length(),
        }
    }
}

/// Split a string into its maximal runs.
///
/// # Returns
///
/// An array of `{ character: string, length: number }` objects in input order.
/// An empty string yields an empty array.
///
/// # Example
///
/// ```typescript
/// runs('aaaaa5663bbb');
/// // [{ character: 'a', length: 5 }, { character: '5', length: 1 }, ...]
/// ```
#[wasm_bindgen]
pub fn runs(input: &str) -> Result<JsValue, JsValue> {
    let found = collect_runs(input);
    serde_wasm_bindgen::to_value(&found)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize runs: {}", e)))
}

fn collect_runs(input: &str) -> Vec<JsRun> {
    run::runs(input).map(JsRun::from).collect()
}
