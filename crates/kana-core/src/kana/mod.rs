//! Kana lookup table: each kana unit with its accepted romanized spellings.
//!
//! Hiragana entries come from an embedded TOML file (or a custom one installed
//! with [`KanaTable::init_custom`]); katakana twins are derived from them.

mod config;
mod table;

use serde::{Deserialize, Serialize};

pub use config::{parse_kana_toml, KanaTableError};
pub use table::KanaTable;

pub const DEFAULT_KANA_TOML: &str = include_str!("default_kana.toml");

/// Returns the embedded default kana table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_KANA_TOML
}

/// Informational tag; matching never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Plain,
    Voiced,
    Combo,
}

/// One kana unit: a single glyph or a two-glyph combo such as きゃ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanaEntry {
    pub text: String,
    /// Lowercase ASCII; the first entry is the canonical display form.
    pub spellings: Vec<String>,
    pub category: Category,
}

impl KanaEntry {
    pub fn new(text: impl Into<String>, spellings: Vec<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            spellings,
            category,
        }
    }

    pub fn canonical(&self) -> &str {
        self.spellings.first().map(String::as_str).unwrap_or("")
    }

    /// Case-insensitive membership test against the accepted spellings.
    pub fn accepts(&self, romaji: &str) -> bool {
        self.spellings.iter().any(|s| s.eq_ignore_ascii_case(romaji))
    }
}

/// Look up a kana unit in the global table.
pub fn lookup(text: &str) -> Option<&'static KanaEntry> {
    KanaTable::global().lookup(text)
}
