//! Encoding of raw bytes, validated as UTF-8 first.

use super::text::encode;
use thiserror::Error;

/// Errors that can occur before encoding begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input bytes are not valid UTF-8
    #[error("Malformed input: invalid UTF-8 sequence at byte {valid_up_to}")]
    MalformedInput { valid_up_to: usize },
}

/// Decode `input` as UTF-8 and run-length encode it.
///
/// Invalid UTF-8 is rejected as a whole; no partial output is produced.
///
/// # Errors
///
/// Returns [`EncodeError::MalformedInput`] carrying the offset of the first
/// invalid byte sequence.
pub fn encode_bytes(input: &[u8]) -> Result<String, EncodeError> {
    let text = std::str::from_utf8(input).map_err(|e| {
        log::debug!("rejecting {} byte input: {}", input.len(), e);
        EncodeError::MalformedInput {
            valid_up_to: e.valid_up_to(),
        }
    })?;

    Ok(encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes_valid() {
        assert_eq!(encode_bytes(b"").unwrap(), "");
        assert_eq!(encode_bytes(b"aaaaa5663bbb").unwrap(), "a5516231b3");
        assert_eq!(encode_bytes("ééé".as_bytes()).unwrap(), "é3");
    }

    #[test]
    fn test_encode_bytes_invalid_start() {
        let result = encode_bytes(&[0xFF, 0x61]);
        assert_eq!(result, Err(EncodeError::MalformedInput { valid_up_to: 0 }));
    }

    #[test]
    fn test_encode_bytes_invalid_middle() {
        let result = encode_bytes(&[0x61, 0x61, 0xC3, 0x28]);
        assert_eq!(result, Err(EncodeError::MalformedInput { valid_up_to: 2 }));
    }

    #[test]
    fn test_encode_bytes_truncated_sequence() {
        // First two bytes of a four-byte sequence
        let result = encode_bytes(&[0x61, 0xF0, 0x9F]);
        assert_eq!(result, Err(EncodeError::MalformedInput { valid_up_to: 1 }));
    }

    #[test]
    fn test_encode_bytes_surrogate_rejected() {
        // UTF-8 encoding of U+D800, which is not a valid code point
        let result = encode_bytes(&[0xED, 0xA0, 0x80]);
        assert!(matches!(result, Err(EncodeError::MalformedInput { .. })));
    }

    #[test]
    fn test_error_message() {
        let err = EncodeError::MalformedInput { valid_up_to: 7 };
        assert_eq!(
            err.to_string(),
            "Malformed input: invalid UTF-8 sequence at byte 7"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
