//! Encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode`] - Run-length encode a JavaScript string
//! - [`encode_bytes`] - Validate a `Uint8Array` as UTF-8 and encode it
//! - [`encoded_len`] - UTF-8 byte length the encoded output will have
//!
//! # Example
//!
//! ```typescript
//! import { encode, encode_bytes } from '@rle/wasm';
//!
//! encode('444445555'); // "4554"
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! try {
//!   const encoded = encode_bytes(bytes);
//! } catch (e) {
//!   console.error(e); // "Malformed input: invalid UTF-8 sequence at byte 12"
//! }
//! ```

use rle_core::encode as rle;
use wasm_bindgen::prelude::*;

/// Run-length encode a string.
///
/// Every maximal run of one character becomes the character followed by the
/// decimal run length, e.g. `"aab"` becomes `"a2b1"`.
///
/// JavaScript strings are UTF-16; wasm-bindgen converts them to UTF-8 on the
/// way in, so surrogate pairs count as one character.
#[wasm_bindgen]
pub fn encode(input: &str) -> String {
    rle::encode(input)
}

/// Decode bytes as UTF-8 and run-length encode the result.
///
/// # Errors
///
/// Throws a string error if the bytes are not valid UTF-8. Nothing is encoded
/// in that case.
#[wasm_bindgen]
pub fn encode_bytes(bytes: &[u8]) -> Result<String, JsValue> {
    rle::encode_bytes(bytes).map_err(|e| {
        let message = e.to_string();
        report_rejection(&message);
        JsValue::from_str(&message)
    })
}

/// Size of the output `encode(input)` would produce, in UTF-8 bytes.
///
/// This is not the JavaScript `String.length` of the result, which counts
/// UTF-16 code units: for `"🦀🦀"` the encoded string is `"🦀2"`, which is 5
/// bytes here but has a `.length` of 3. Use it to size a byte buffer, e.g.
/// for `TextEncoder.encodeInto`.
#[wasm_bindgen]
pub fn encoded_len(input: &str) -> usize {
    rle::encoded_len(input)
}

#[cfg(target_arch = "wasm32")]
fn report_rejection(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn report_rejection(_message: &str) {}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_bytes_valid() {
        assert_eq!(encode_bytes(b"aaaaa5663bbb").unwrap(), "a5516231b3");
    }

    #[wasm_bindgen_test]
    fn test_encode_bytes_malformed() {
        let result = encode_bytes(&[0x61, 0xFF]);
        assert!(result.is_err());

        let message = result.unwrap_err().as_string().unwrap();
        assert_eq!(message, "Malformed input: invalid UTF-8 sequence at byte 1");
    }
}
