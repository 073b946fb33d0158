//! Per-unit verdicts for a typed answer to a kana question.
//!
//! [`analyze`] picks the strategy from the global settings; use
//! [`analyze_with`] or [`AnalysisStrategy::analyze`] to choose explicitly.
//! No strategy fails: unknown glyphs, empty answers and garbage input all come
//! back as well-formed results with `is_correct = false` where appropriate.

use serde::Serialize;
use tracing::debug_span;

mod conversion;
pub mod strategy;
mod syllable;

pub use strategy::{AnalysisStrategy, UnknownStrategy};
pub use syllable::analyze_segments;

use crate::settings::settings;

/// Verdict for one kana unit of the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAnalysis {
    /// The kana unit as displayed (one glyph or a combo).
    pub character: String,
    /// The part of the answer attributed to this unit.
    pub user_syllable: String,
    /// Accepted spellings, canonical first; empty for unknown glyphs.
    pub correct_syllables: Vec<String>,
    pub is_correct: bool,
    /// Index in the segmented sequence, not a character offset.
    pub position: usize,
}

/// Analyze `typed` against `kana_text` with the configured strategy.
pub fn analyze(kana_text: &str, typed: &str) -> Vec<CharacterAnalysis> {
    analyze_with(settings().analysis.strategy, kana_text, typed)
}

pub fn analyze_with(
    strategy: AnalysisStrategy,
    kana_text: &str,
    typed: &str,
) -> Vec<CharacterAnalysis> {
    let _span = debug_span!("analyze", strategy = strategy.name(), kana_text).entered();
    strategy.analyze(kana_text, typed)
}

/// Aggregate score over one analyzed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub correct: usize,
    pub total: usize,
}

impl AnalysisSummary {
    pub fn from_analysis(analysis: &[CharacterAnalysis]) -> Self {
        Self {
            correct: analysis.iter().filter(|a| a.is_correct).count(),
            total: analysis.len(),
        }
    }

    /// True only for a non-empty question answered entirely correctly.
    pub fn is_fully_correct(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    /// Share of correct units, rounded half up to a whole percent.
    pub fn score_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct * 200 + self.total) / (self.total * 2)) as u8
    }
}
