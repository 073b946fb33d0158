use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CharacterAnalysis;

/// Which analyzer turns a typed answer into per-unit verdicts.
///
/// `SyllableMatching` splits the romaji against each unit's accepted
/// spellings. `Conversion` converts the romaji to kana and compares kana;
/// its `user_syllable` fields hold kana rather than romaji.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStrategy {
    #[default]
    SyllableMatching,
    Conversion,
}

impl AnalysisStrategy {
    pub const ALL: [AnalysisStrategy; 2] = [Self::SyllableMatching, Self::Conversion];

    pub fn name(self) -> &'static str {
        match self {
            Self::SyllableMatching => "syllable_matching",
            Self::Conversion => "conversion",
        }
    }

    /// Analyze using the selected strategy.
    pub fn analyze(self, kana_text: &str, typed: &str) -> Vec<CharacterAnalysis> {
        match self {
            Self::SyllableMatching => super::syllable::analyze(kana_text, typed),
            Self::Conversion => super::conversion::analyze(kana_text, typed),
        }
    }
}

impl fmt::Display for AnalysisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown analysis strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for AnalysisStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
