//! Encoding of validated text.

use crate::run::{runs, Run, RunState};

/// Run-length encode `input`.
///
/// Each maximal run is written as its character followed by the decimal run
/// length. An empty input yields an empty string.
///
/// # Example
///
/// ```ignore
/// use rle_core::encode::encode;
///
/// assert_eq!(encode("444445555"), "4554");
/// assert_eq!(encode("a"), "a1");
/// ```
pub fn encode(input: &str) -> String {
    encode_chars(input.chars(), input.len())
}

/// Fold `chars` through the run scanner in a single pass.
///
/// `capacity` is only a starting size for the output buffer.
fn encode_chars(chars: impl Iterator<Item = char>, capacity: usize) -> String {
    let (mut output, mut state) = chars.fold(
        (String::with_capacity(capacity), RunState::new()),
        |(mut output, mut state), c| {
            if let Some(run) = state.push(c) {
                write_run(&mut output, run);
            }
            (output, state)
        },
    );

    // The last run has no following character to close it
    if let Some(run) = state.finish() {
        write_run(&mut output, run);
    }

    output
}

/// Exact byte length of `encode(input)`, without building the output.
pub fn encoded_len(input: &str) -> usize {
    runs(input).map(|run| run.encoded_len()).sum()
}

fn write_run(output: &mut String, run: Run) {
    output.push(run.character());
    output.push_str(&run.length().to_string());
}


// ============================================================================
// Property-Based Tests
// ============================================================================
