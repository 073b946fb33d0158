use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::config::{parse_kana_toml, KanaTableError};
use super::{KanaEntry, DEFAULT_KANA_TOML};
use crate::unicode::hiragana_to_katakana;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct KanaTable {
    entries: Vec<KanaEntry>,
    index: HashMap<String, usize>,
}

impl KanaTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KanaTableError> {
        // Validate eagerly
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanaTableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_KANA_TOML);
            KanaTable::from_toml(toml_str).expect("kana TOML must be valid")
        })
    }

    /// Build a standalone table from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self, KanaTableError> {
        Ok(Self::from_hiragana(parse_kana_toml(toml_str)?))
    }

    /// Build a table from hiragana entries, adding a katakana twin for each.
    pub fn from_hiragana(hiragana: Vec<KanaEntry>) -> Self {
        let _span = debug_span!("build_kana_table", hiragana = hiragana.len()).entered();

        let katakana: Vec<KanaEntry> = hiragana
            .iter()
            .map(|e| {
                KanaEntry::new(
                    hiragana_to_katakana(&e.text),
                    e.spellings.clone(),
                    e.category,
                )
            })
            .collect();

        let mut entries = hiragana;
        entries.extend(katakana);

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.text.clone()).or_insert(i);
        }
        debug!(units = entries.len(), "kana table ready");
        Self { entries, index }
    }

    pub fn lookup(&self, text: &str) -> Option<&KanaEntry> {
        self.index.get(text).map(|&i| &self.entries[i])
    }

    /// All entries: hiragana first (table order), then their katakana twins.
    pub fn entries(&self) -> &[KanaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
