//! Runs of identical characters and the state machine that finds them.
//!
//! A [`Run`] is a maximal stretch of one repeated code point. [`RunState`]
//! tracks the run currently being scanned and hands back each run as soon as a
//! different character closes it. [`runs`] wraps the state machine in an
//! iterator over a whole string.
//!
//! Input is always scanned as `char`s, so a run boundary can never fall inside
//! a multi-byte UTF-8 sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::str::Chars;

/// A maximal run of one repeated character.
///
/// The length is never zero, which also holds for runs read back through
/// serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    character: char,
    length: NonZeroUsize,
}

impl Run {
    /// Create a run of `length` copies of `character`.
    pub fn new(character: char, length: NonZeroUsize) -> Self {
        Self { character, length }
    }

    /// Create a run of `length` copies of `character`, or `None` if `length`
    /// is zero.
    pub fn try_new(character: char, length: usize) -> Option<Self> {
        NonZeroUsize::new(length).map(|length| Self::new(character, length))
    }

    /// Create a run holding a single `character`.
    pub fn single(character: char) -> Self {
        Self::new(character, NonZeroUsize::MIN)
    }

    /// The repeated character
    pub fn character(&self) -> char {
        self.character
    }

    /// Number of consecutive repetitions
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Number of decimal digits needed to render the length.
    pub fn count_digits(&self) -> usize {
        self.length.ilog10() as usize + 1
    }

    /// Byte length of this run's encoded form.
    pub fn encoded_len(&self) -> usize {
        self.character.len_utf8() + self.count_digits()
    }

    fn extend(&mut self) {
        self.length = self.length.saturating_add(1);
    }
}

/// Renders the encoded form: the character followed by its decimal count.
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.character, self.length)
    }
}

/// Scanner state: either nothing seen yet, or inside a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run in progress
    #[default]
    Empty,
    /// A run in progress, not yet closed
    InRun(Run),
}

impl RunState {
    /// Create a scanner with no run in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next character.
    ///
    /// Returns the run that `c` closed, if it differs from the character of
    /// the run in progress.
    pub fn push(&mut self, c: char) -> Option<Run> {
        match self {
            RunState::InRun(run) if run.character == c => {
                run.extend();
                None
            }
            RunState::InRun(run) => {
                let closed = *run;
                *self = RunState::InRun(Run::single(c));
                Some(closed)
            }
            RunState::Empty => {
                *self = RunState::InRun(Run::single(c));
                None
            }
        }
    }

    /// Close the run in progress at end of input and reset to `Empty`.
    ///
    /// Must be called once the input is exhausted, otherwise the final run is
    /// lost.
    pub fn finish(&mut self) -> Option<Run> {
        match std::mem::take(self) {
            RunState::InRun(run) => Some(run),
            RunState::Empty => None,
        }
    }
}

/// Iterator over the maximal runs of a string, in input order.
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    chars: Chars<'a>,
    state: RunState,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        for c in self.chars.by_ref() {
            if let Some(run) = self.state.push(c) {
                return Some(run);
            }
        }
        self.state.finish()
    }
}

impl FusedIterator for Runs<'_> {}

/// Split `input` into its maximal runs.
///
/// Yields nothing for an empty string.
pub fn runs(input: &str) -> Runs<'_> {
    Runs {
        chars: input.chars(),
        state: RunState::new(),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Run lengths add up to the number of characters.
        #[test]
        fn prop_lengths_cover_input(input in ".{0,64}") {
            let total: usize = runs(&input).map(|run| run.length()).sum();
            prop_assert_eq!(total, input.chars().count());
        }

        /// Property: Adjacent runs never share a character (runs are maximal).
        #[test]
        fn prop_adjacent_runs_differ(input in "[ab1é]{0,64}") {
            let found: Vec<Run> = runs(&input).collect();
            for pair in found.windows(2) {
                prop_assert_ne!(pair[0].character(), pair[1].character());
            }
        }

        /// Property: Every run has a positive length.
        #[test]
        fn prop_lengths_positive(input in ".{0,64}") {
            prop_assert!(runs(&input).all(|run| run.length() >= 1));
        }

        /// Property: Expanding the runs reproduces the input.
        #[test]
        fn prop_runs_reassemble_input(input in "[xy🦀]{0,64}") {
            let rebuilt: String = runs(&input)
                .flat_map(|run| std::iter::repeat(run.character()).take(run.length()))
                .collect();
            prop_assert_eq!(rebuilt, input);
        }

        /// Property: Digit count matches the rendered length.
        #[test]
        fn prop_count_digits_matches_rendering(length in 1usize..=usize::MAX) {
            let run = Run::try_new('a', length).unwrap();
            prop_assert_eq!(run.count_digits(), length.to_string().len());
        }
    }
}
