//! Presentation-neutral feedback: the correct answer with wrong parts marked.

use serde::Serialize;

use crate::analysis::CharacterAnalysis;
use crate::settings::DisplaySettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSyllable {
    /// Always the unit's canonical spelling, never what the user typed.
    pub syllable: String,
    pub is_wrong: bool,
}

pub fn format(analysis: &[CharacterAnalysis]) -> Vec<FormattedSyllable> {
    analysis
        .iter()
        .map(|a| FormattedSyllable {
            syllable: a.correct_syllables.first().cloned().unwrap_or_default(),
            is_wrong: !a.is_correct,
        })
        .collect()
}

/// Join the syllables, wrapping wrong ones in the display markers:
/// `[ka]tana` with the default settings.
pub fn render_bracketed(formatted: &[FormattedSyllable], display: &DisplaySettings) -> String {
    let mut out = String::new();
    for f in formatted {
        if f.is_wrong {
            out.push_str(&display.wrong_open);
            out.push_str(&f.syllable);
            out.push_str(&display.wrong_close);
        } else {
            out.push_str(&f.syllable);
        }
    }
    out
}
