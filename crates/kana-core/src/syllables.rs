//! The fixed vocabulary of romanized syllables.
//!
//! The splitter treats any of these as a complete token when it has to
//! carve a wrong answer out of the input, so "shi" typed for か is consumed
//! whole rather than as "sh" + "i".

use std::collections::HashSet;
use std::sync::OnceLock;

/// Longest token in [`VALID_SYLLABLES`], in bytes.
pub const MAX_SYLLABLE_LEN: usize = 3;

#[rustfmt::skip]
pub static VALID_SYLLABLES: &[&str] = &[
    // vowels
    "a", "i", "u", "e", "o",
    // consonant + vowel
    "ka", "ki", "ku", "ke", "ko",
    "sa", "shi", "si", "su", "se", "so",
    "ta", "chi", "ti", "tsu", "tu", "te", "to",
    "na", "ni", "nu", "ne", "no",
    "ha", "hi", "fu", "hu", "he", "ho",
    "ma", "mi", "mu", "me", "mo",
    "ya", "yu", "yo",
    "ra", "ri", "ru", "re", "ro",
    "wa", "wo",
    "n", "nn",
    // voiced and semi-voiced
    "ga", "gi", "gu", "ge", "go",
    "za", "ji", "zi", "zu", "ze", "zo",
    "da", "di", "du", "de", "do",
    "ba", "bi", "bu", "be", "bo",
    "pa", "pi", "pu", "pe", "po",
    // combos
    "kya", "kyu", "kyo",
    "sha", "shu", "sho", "sya", "syu", "syo",
    "cha", "chu", "cho", "cya", "cyu", "cyo", "tya", "tyu", "tyo",
    "nya", "nyu", "nyo",
    "hya", "hyu", "hyo",
    "mya", "myu", "myo",
    "rya", "ryu", "ryo",
    "gya", "gyu", "gyo",
    "ja", "ju", "jo", "jya", "jyu", "jyo", "zya", "zyu", "zyo",
    "bya", "byu", "byo",
    "pya", "pyu", "pyo",
];

fn vocabulary() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| VALID_SYLLABLES.iter().copied().collect())
}

pub fn is_valid_syllable(s: &str) -> bool {
    vocabulary().contains(s)
}

/// The longest vocabulary token that prefixes `input`, if any.
pub fn longest_syllable_at(input: &str) -> Option<&str> {
    (1..=MAX_SYLLABLE_LEN.min(input.len()))
        .rev()
        .filter(|&len| input.is_char_boundary(len))
        .map(|len| &input[..len])
        .find(|prefix| is_valid_syllable(prefix))
}
