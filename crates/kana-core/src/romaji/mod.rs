//! Romaji-to-kana conversion, used by the conversion analysis strategy.
//!
//! The trie is the inverse of the kana table, so a custom table also changes
//! what the converter understands.

mod convert;
mod trie;

pub use convert::{diagnose, diagnose_with, to_hiragana, to_hiragana_with, ConversionDiagnostics};
pub use trie::RomajiTrie;
