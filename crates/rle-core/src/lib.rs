//! RLE Core - Run-length text encoding
//!
//! This crate rewrites text as a sequence of (character, count) pairs: every
//! maximal run of one repeated character is emitted once, followed by the
//! decimal number of repetitions.
//!
//! # Module Structure
//!
//! - `run` - The run model and the scanner state machine
//! - `encode` - Text and byte-level encoding entry points
//!
//! The encoder is a pure function: no I/O, no shared state, and it is safe to
//! call from any number of threads on independent inputs.

pub mod encode;
pub mod run;

pub use encode::{encode, encode_bytes, encoded_len, EncodeError};
pub use run::{runs, Run, RunState, Runs};
