use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use super::{Category, KanaEntry};
use crate::unicode::is_hiragana;

#[derive(Deserialize)]
struct KanaConfig {
    #[serde(default)]
    plain: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    voiced: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    combo: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("kana table is empty")]
    Empty,
    #[error("key must be one or two hiragana glyphs: {0}")]
    InvalidKey(String),
    #[error("no spellings for key: {0}")]
    EmptySpellings(String),
    #[error("spelling {spelling:?} for {key} must be lowercase ASCII letters")]
    InvalidSpelling { key: String, spelling: String },
    #[error("key appears in more than one category: {0}")]
    DuplicateKey(String),
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into hiragana entries, ordered plain, voiced, combo.
pub fn parse_kana_toml(toml_str: &str) -> Result<Vec<KanaEntry>, KanaTableError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaTableError::Parse(e.to_string()))?;

    let sections = [
        (Category::Plain, config.plain),
        (Category::Voiced, config.voiced),
        (Category::Combo, config.combo),
    ];

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (category, section) in sections {
        for (key, spellings) in section {
            validate_key(&key)?;
            if spellings.is_empty() {
                return Err(KanaTableError::EmptySpellings(key));
            }
            if let Some(bad) = spellings
                .iter()
                .find(|s| s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase()))
            {
                return Err(KanaTableError::InvalidSpelling {
                    spelling: bad.clone(),
                    key,
                });
            }
            if !seen.insert(key.clone()) {
                return Err(KanaTableError::DuplicateKey(key));
            }
            entries.push(KanaEntry::new(key, spellings, category));
        }
    }

    if entries.is_empty() {
        return Err(KanaTableError::Empty);
    }
    Ok(entries)
}

fn validate_key(key: &str) -> Result<(), KanaTableError> {
    let glyphs = key.chars().count();
    if !(1..=2).contains(&glyphs) || !key.chars().all(is_hiragana) {
        return Err(KanaTableError::InvalidKey(key.to_string()));
    }
    Ok(())
}
