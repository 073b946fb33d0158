//! Answer analysis for kana reading drills.
//!
//! Given a kana question (hiragana, katakana or a mix, including combos such
//! as きゃ) and the romaji the learner typed, work out which kana units were
//! answered correctly, tolerating typos, omissions and extra characters.
//!
//! ```
//! use kana_core::{analyze, format, render_bracketed, settings};
//!
//! let analysis = analyze("かたな", "batana");
//! let formatted = format(&analysis);
//! assert_eq!(render_bracketed(&formatted, &settings::settings().display), "[ka]tana");
//! ```

pub mod analysis;
pub mod format;
pub mod kana;
pub mod romaji;
pub mod segment;
pub mod settings;
pub mod splitter;
pub mod syllables;
pub mod unicode;


pub use analysis::{analyze, analyze_with, AnalysisStrategy, AnalysisSummary, CharacterAnalysis};
pub use format::{format, render_bracketed, FormattedSyllable};
pub use kana::{lookup, Category, KanaEntry, KanaTable};
pub use segment::{count_units, segment, Segment};
pub use splitter::split;
