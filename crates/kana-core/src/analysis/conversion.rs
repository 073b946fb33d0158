use tracing::debug;

use super::CharacterAnalysis;
use crate::romaji::to_hiragana;
use crate::segment::{segment, Segment};
use crate::unicode::katakana_to_hiragana;

pub(super) fn analyze(kana_text: &str, typed: &str) -> Vec<CharacterAnalysis> {
    let expected = segment(kana_text);
    let converted = to_hiragana(typed);
    let actual = segment(&converted);

    let pairs = if expected.len() == actual.len() {
        (0..actual.len()).map(Some).collect()
    } else {
        debug!(
            expected = expected.len(),
            actual = actual.len(),
            converted = converted.as_str(),
            "unit count mismatch, aligning"
        );
        align(&expected, &actual)
    };

    expected
        .iter()
        .zip(pairs)
        .enumerate()
        .map(|(position, (seg, pair))| {
            let user_syllable = pair
                .map(|j| actual[j].text().to_string())
                .unwrap_or_default();
            CharacterAnalysis {
                character: seg.text().to_string(),
                is_correct: same_unit(seg, &user_syllable),
                user_syllable,
                correct_syllables: seg.spellings().to_vec(),
                position,
            }
        })
        .collect()
}

fn same_unit(expected: &Segment<'_>, actual: &str) -> bool {
    expected.is_resolved() && katakana_to_hiragana(expected.text()) == actual
}

/// Minimum-edit-distance alignment of `actual` onto `expected`. Returns, for
/// every expected unit, the index of the actual unit it lines up with, or
/// `None` when the expected unit was dropped.
#[allow(clippy::needless_range_loop)]
fn align(expected: &[Segment<'_>], actual: &[Segment<'_>]) -> Vec<Option<usize>> {
    let (n, m) = (expected.len(), actual.len());
    let cost = |i: usize, j: usize| usize::from(!same_unit(&expected[i], actual[j].text()));

    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for i in 0..=n {
        d[i][0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost(i - 1, j - 1));
        }
    }

    // Walk back from the corner, preferring a pairing over a gap.
    let mut pairs = vec![None; n];
    let (mut i, mut j) = (n, m);
    while i > 0 {
        if j > 0 && d[i][j] == d[i - 1][j - 1] + cost(i - 1, j - 1) {
            pairs[i - 1] = Some(j - 1);
            i -= 1;
            j -= 1;
        } else if d[i][j] == d[i - 1][j] + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs
}
