use serde::Serialize;

use super::trie::RomajiTrie;

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'i' | b'u' | b'e' | b'o')
}

/// Convert a typed romaji answer to hiragana.
///
/// Greedy longest match against the table spellings, with sokuon (っ) for a
/// doubled consonant and "nn" read as ん + n when a vowel or "y" follows
/// ("kanna" → かんな). Anything unconvertible is passed through unchanged.
pub fn to_hiragana(input: &str) -> String {
    to_hiragana_with(RomajiTrie::global(), input)
}

pub fn to_hiragana_with(trie: &RomajiTrie, input: &str) -> String {
    let input = input.trim().to_lowercase();
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len() * 3);
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if let Some((mut len, mut kana)) = trie.longest_match(rest) {
            if rest.starts_with("nn") && len == 2 {
                if let Some(&next) = bytes.get(pos + 2) {
                    if is_vowel(next) || next == b'y' {
                        // Leave the second n to start the next syllable.
                        (len, kana) = (1, "ん");
                    }
                }
            }
            out.push_str(kana);
            pos += len;
            continue;
        }

        let first = bytes[pos];
        if first.is_ascii_lowercase()
            && !is_vowel(first)
            && first != b'n'
            && bytes.get(pos + 1) == Some(&first)
        {
            out.push('っ');
            pos += 1;
            continue;
        }

        // Unconvertible: copy one character through.
        let ch_len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
        out.push_str(&rest[..ch_len]);
        pos += ch_len;
    }

    out
}

/// What the converter made of an answer, for showing learners and
/// maintainers which letters had no kana reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionDiagnostics {
    pub original: String,
    pub converted: String,
    pub has_unconverted: bool,
    /// ASCII characters left in `converted`, in order.
    pub unconverted: Vec<char>,
}

pub fn diagnose(input: &str) -> ConversionDiagnostics {
    diagnose_with(RomajiTrie::global(), input)
}

pub fn diagnose_with(trie: &RomajiTrie, input: &str) -> ConversionDiagnostics {
    let converted = to_hiragana_with(trie, input);
    let unconverted: Vec<char> = converted.chars().filter(char::is_ascii).collect();
    ConversionDiagnostics {
        original: input.to_string(),
        has_unconverted: !unconverted.is_empty(),
        converted,
        unconverted,
    }
}
