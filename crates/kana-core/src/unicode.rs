//! Character-level Unicode classification for kana text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー and the middle dot ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            // U+3097..U+309F have no katakana twin at +0x60 worth mapping
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a katakana string to hiragana. The inverse of
/// [`hiragana_to_katakana`] over the shared syllabary range.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
