//! RLE WASM - WebAssembly bindings for run-length text encoding
//!
//! This crate exposes the rle-core encoder to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `encode` - Text and byte encoding bindings
//! - `types` - JavaScript-facing run representation
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode, runs } from '@rle/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! console.log(encode('aaaaa5663bbb')); // "a5516231b3"
//! console.log(runs('aab'));            // [{ character: 'a', length: 2 }, ...]
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod types;

// Re-export public types
pub use encode::{encode, encode_bytes, encoded_len};
pub use types::{runs, JsRun};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up: the encoder holds no global state
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
