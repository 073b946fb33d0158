//! Answer splitting: partition a typed romaji answer into one substring per
//! expected kana unit, tolerating typos, omissions and extra characters.
//!
//! Each unit is resolved by a small state machine:
//!
//! - `Matching`: an accepted spelling prefixes the remaining input. Longer
//!   spellings win, but a spelling after which the rest of the sequence can no
//!   longer be matched exactly loses to one that keeps it matchable (ん typed
//!   as "n" before な).
//! - `Resyncing`: no spelling matches, so look for the next unit's spelling
//!   in the input (then the one after, and so on). Found further along,
//!   everything up to it is this unit's (wrong) answer, which keeps one typo
//!   from bleeding into the next verdict. Found right at the cursor, this
//!   unit was left out and gets the empty string.
//! - `FallbackConsuming`: nothing ahead to resync on. Consume one vocabulary
//!   syllable, or as many characters as the unit's shortest spelling. A glyph
//!   missing from the table takes a single character.
//!
//! The output always has exactly one entry per expected unit: missing input
//! pads with empty strings and input left over after the last unit is dropped.

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::segment::Segment;
use crate::syllables::longest_syllable_at;

#[cfg(test)]
mod tests;

/// How a unit's share of the input was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStep {
    /// An accepted spelling matched at the cursor.
    Matched,
    /// Consumed up to where a later unit's spelling was found.
    Resynced,
    /// A later unit starts at the cursor; nothing consumed.
    Omitted,
    /// No resync point; consumed a syllable-sized chunk.
    Fallback,
    /// Input ran out before this unit.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPart {
    pub text: String,
    pub step: SplitStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Matching,
    Resyncing,
    FallbackConsuming,
}

/// Split `typed` into one substring per expected unit.
pub fn split(typed: &str, expected: &[Segment<'_>]) -> Vec<String> {
    split_detailed(typed, expected)
        .into_iter()
        .map(|part| part.text)
        .collect()
}

/// Like [`split`], but also reports which state decided each unit.
pub fn split_detailed(typed: &str, expected: &[Segment<'_>]) -> Vec<SplitPart> {
    let input = typed.trim().to_lowercase();
    let _span = debug_span!("split", units = expected.len(), input = input.as_str()).entered();
    Splitter::new(input, expected).run()
}

struct Splitter<'a> {
    input: String,
    /// Accepted spellings per unit, longest first (stable for equal lengths).
    units: Vec<Vec<&'a str>>,
    /// Memo for `can_complete`, keyed by (unit index, byte position).
    completable: HashMap<(usize, usize), bool>,
}

impl<'a> Splitter<'a> {
    fn new(input: String, expected: &'a [Segment<'_>]) -> Self {
        let units = expected
            .iter()
            .map(|seg| {
                let mut spellings: Vec<&str> =
                    seg.spellings().iter().map(String::as_str).collect();
                spellings.sort_by_key(|s| Reverse(s.len()));
                spellings
            })
            .collect();
        Self {
            input,
            units,
            completable: HashMap::new(),
        }
    }

    fn run(mut self) -> Vec<SplitPart> {
        let mut parts = Vec::with_capacity(self.units.len());
        let mut pos = 0;

        for i in 0..self.units.len() {
            if pos >= self.input.len() {
                parts.push(SplitPart {
                    text: String::new(),
                    step: SplitStep::Exhausted,
                });
                continue;
            }

            let mut state = State::Matching;
            let (len, step) = loop {
                match state {
                    State::Matching => match self.match_at(i, pos) {
                        Some(len) => break (len, SplitStep::Matched),
                        None => state = State::Resyncing,
                    },
                    State::Resyncing => match self.resync_offset(i, pos) {
                        Some(0) => {
                            debug!(unit = i, pos, "unit omitted");
                            break (0, SplitStep::Omitted);
                        }
                        Some(skip) => {
                            debug!(unit = i, pos, skip, "resynchronized");
                            break (skip, SplitStep::Resynced);
                        }
                        None => state = State::FallbackConsuming,
                    },
                    State::FallbackConsuming => {
                        let len = self.fallback_len(i, pos);
                        debug!(unit = i, pos, len, "fallback consumption");
                        break (len, SplitStep::Fallback);
                    }
                }
            };

            parts.push(SplitPart {
                text: self.input[pos..pos + len].to_string(),
                step,
            });
            pos += len;
        }

        if pos < self.input.len() {
            debug!(dropped = &self.input[pos..], "trailing input ignored");
        }
        parts
    }

    /// Byte lengths of unit `i`'s spellings that prefix the input at `pos`.
    fn prefix_lens(&self, i: usize, pos: usize) -> Vec<usize> {
        let rest = &self.input[pos..];
        self.units[i]
            .iter()
            .filter(|s| rest.starts_with(**s))
            .map(|s| s.len())
            .collect()
    }

    fn match_at(&mut self, i: usize, pos: usize) -> Option<usize> {
        let lens = self.prefix_lens(i, pos);
        let longest = *lens.first()?;
        let chosen = lens
            .into_iter()
            .find(|&len| self.can_complete(i + 1, pos + len))
            .unwrap_or(longest);
        Some(chosen)
    }

    /// Whether units `i..` can all be matched exactly starting at `pos`.
    /// Input left over after the last unit does not matter.
    fn can_complete(&mut self, i: usize, pos: usize) -> bool {
        if i == self.units.len() {
            return true;
        }
        if let Some(&known) = self.completable.get(&(i, pos)) {
            return known;
        }
        let result = self
            .prefix_lens(i, pos)
            .into_iter()
            .any(|len| self.can_complete(i + 1, pos + len));
        self.completable.insert((i, pos), result);
        result
    }

    /// Offset from `pos` at which a later unit can take over. Later units
    /// are tried nearest first; for each, a match further along beats one
    /// right at `pos`. `Some(0)` means that unit starts at the cursor and
    /// this one was left out.
    fn resync_offset(&self, i: usize, pos: usize) -> Option<usize> {
        let rest = &self.input[pos..];
        self.units[i + 1..].iter().find_map(|spellings| {
            let starts_at = |k: usize| spellings.iter().any(|s| rest[k..].starts_with(*s));
            rest.char_indices()
                .skip(1)
                .map(|(k, _)| k)
                .find(|&k| starts_at(k))
                .or_else(|| starts_at(0).then_some(0))
        })
    }

    fn fallback_len(&self, i: usize, pos: usize) -> usize {
        let rest = &self.input[pos..];
        let Some(shortest) = self.units[i].iter().map(|s| s.len()).min() else {
            // Unresolved glyph: a single character.
            return rest.chars().next().map_or(0, char::len_utf8);
        };
        if let Some(syllable) = longest_syllable_at(rest) {
            return syllable.len();
        }
        rest.char_indices()
            .nth(shortest)
            .map(|(k, _)| k)
            .unwrap_or(rest.len())
    }
}
