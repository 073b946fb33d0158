//! Kana segmentation: split a kana string into lookup units.

use tracing::debug;

use crate::kana::{KanaEntry, KanaTable};

/// One position of the expected sequence.
///
/// Glyphs missing from the table stay in the sequence as `Unresolved` so that
/// positions keep lining up with the displayed string; they accept nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    Resolved(&'t KanaEntry),
    Unresolved(String),
}

impl Segment<'_> {
    pub fn text(&self) -> &str {
        match self {
            Segment::Resolved(entry) => &entry.text,
            Segment::Unresolved(text) => text,
        }
    }

    /// Accepted spellings; empty for an unresolved glyph.
    pub fn spellings(&self) -> &[String] {
        match self {
            Segment::Resolved(entry) => &entry.spellings,
            Segment::Unresolved(_) => &[],
        }
    }

    /// Whether `romaji` is one of the accepted spellings, ignoring ASCII case.
    /// Always false for an unresolved glyph.
    pub fn accepts(&self, romaji: &str) -> bool {
        match self {
            Segment::Resolved(entry) => entry.accepts(romaji),
            Segment::Unresolved(_) => false,
        }
    }

    pub fn canonical(&self) -> Option<&str> {
        match self {
            Segment::Resolved(entry) => Some(entry.canonical()),
            Segment::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Segment::Resolved(_))
    }
}

/// Segment `text` against the global kana table.
pub fn segment(text: &str) -> Vec<Segment<'static>> {
    segment_with(KanaTable::global(), text)
}

/// Greedy longest match: a two-glyph window first, then a single glyph.
/// Never fails; unknown glyphs become [`Segment::Unresolved`].
pub fn segment_with<'t>(table: &'t KanaTable, text: &str) -> Vec<Segment<'t>> {
    // Byte offsets of every glyph boundary, including the end.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut segments = Vec::with_capacity(bounds.len().saturating_sub(1));
    let mut i = 0;
    while i + 1 < bounds.len() {
        if i + 2 < bounds.len() {
            if let Some(entry) = table.lookup(&text[bounds[i]..bounds[i + 2]]) {
                segments.push(Segment::Resolved(entry));
                i += 2;
                continue;
            }
        }
        let glyph = &text[bounds[i]..bounds[i + 1]];
        match table.lookup(glyph) {
            Some(entry) => segments.push(Segment::Resolved(entry)),
            None => {
                debug!(glyph, position = segments.len(), "unresolved kana");
                segments.push(Segment::Unresolved(glyph.to_string()));
            }
        }
        i += 1;
    }
    segments
}

/// Number of kana units in `text`, counting combos such as きゃ once.
pub fn count_units(text: &str) -> usize {
    segment(text).len()
}
