//! Run-length encoding of text.
//!
//! This module provides functionality for:
//! - Encoding text as a sequence of character + decimal count pairs
//! - Computing the exact encoded size ahead of time
//! - Validating raw bytes as UTF-8 before encoding
//!
//! # Format
//!
//! Every maximal run of one character becomes that character followed by the
//! run length in base 10. Singleton runs keep their explicit `1`, so `"ab"`
//! encodes as `"a1b1"`. There is no separator between pairs.
//!
//! # Examples
//!
//! ```ignore
//! use rle_core::encode::{encode, encode_bytes};
//!
//! assert_eq!(encode("aaaaa5663bbb"), "a5516231b3");
//! assert!(encode_bytes(&[0x61, 0xFF]).is_err());
//! ```

mod bytes;
mod text;

pub use bytes::{encode_bytes, EncodeError};
pub use text::{encode, encoded_len};
