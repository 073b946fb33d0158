use super::CharacterAnalysis;
use crate::segment::{segment, Segment};
use crate::splitter::split;

pub(super) fn analyze(kana_text: &str, typed: &str) -> Vec<CharacterAnalysis> {
    analyze_segments(&segment(kana_text), typed)
}

/// Split `typed` against already-segmented units and judge each part.
pub fn analyze_segments(segments: &[Segment<'_>], typed: &str) -> Vec<CharacterAnalysis> {
    let parts = split(typed, segments);

    segments
        .iter()
        .zip(parts)
        .enumerate()
        .map(|(position, (seg, user_syllable))| CharacterAnalysis {
            character: seg.text().to_string(),
            is_correct: seg.accepts(&user_syllable),
            user_syllable,
            correct_syllables: seg.spellings().to_vec(),
            position,
        })
        .collect()
}
