use super::*;
use crate::kana::{Category, KanaEntry};
use crate::segment::segment;

fn entry(text: &str, spellings: &[&str]) -> KanaEntry {
    KanaEntry::new(
        text,
        spellings.iter().map(|s| s.to_string()).collect(),
        Category::Plain,
    )
}

fn resolved(entries: &[KanaEntry]) -> Vec<Segment<'_>> {
    entries.iter().map(Segment::Resolved).collect()
}

fn katana() -> Vec<KanaEntry> {
    vec![
        entry("か", &["ka"]),
        entry("た", &["ta"]),
        entry("な", &["na"]),
    ]
}

fn run(typed: &str, entries: &[KanaEntry]) -> Vec<String> {
    split(typed, &resolved(entries))
}

// --- single unit ---

#[test]
fn single_correct() {
    assert_eq!(run("a", &[entry("あ", &["a"])]), vec!["a"]);
}

#[test]
fn single_incorrect() {
    assert_eq!(run("ta", &[entry("か", &["ka"])]), vec!["ta"]);
}

#[test]
fn single_variant_spellings() {
    let shi = [entry("し", &["shi", "si"])];
    assert_eq!(run("shi", &shi), vec!["shi"]);
    assert_eq!(run("si", &shi), vec!["si"]);

    let tsu = [entry("つ", &["tsu", "tu"])];
    assert_eq!(run("tsu", &tsu), vec!["tsu"]);
    assert_eq!(run("tu", &tsu), vec!["tu"]);
}

#[test]
fn single_case_insensitive() {
    let ka = [entry("か", &["ka"])];
    assert_eq!(run("KA", &ka), vec!["ka"]);
    assert_eq!(run("Ka", &ka), vec!["ka"]);
}

#[test]
fn single_invalid_character() {
    assert_eq!(run("x", &[entry("か", &["ka"])]), vec!["x"]);
}

// --- multi unit ---

#[test]
fn all_correct() {
    assert_eq!(run("katana", &katana()), vec!["ka", "ta", "na"]);
}

#[test]
fn banana_only_last_correct() {
    assert_eq!(run("banana", &katana()), vec!["ba", "na", "na"]);
}

#[test]
fn batana_resyncs_after_leading_typo() {
    assert_eq!(run("batana", &katana()), vec!["ba", "ta", "na"]);
}

#[test]
fn kitana_first_wrong() {
    assert_eq!(run("kitana", &katana()), vec!["ki", "ta", "na"]);
}

#[test]
fn all_wrong_syllables() {
    assert_eq!(run("gagugu", &katana()), vec!["ga", "gu", "gu"]);
}

#[test]
fn combo_longest_match() {
    let units = [entry("きゃ", &["kya"]), entry("た", &["ta"])];
    assert_eq!(run("kyata", &units), vec!["kya", "ta"]);
}

#[test]
fn combo_variants() {
    let units = [
        entry("しゃ", &["sha", "sya"]),
        entry("ちゅ", &["chu", "cyu", "tyu"]),
        entry("きょ", &["kyo"]),
    ];
    assert_eq!(run("shachukyo", &units), vec!["sha", "chu", "kyo"]);
    assert_eq!(run("syacyukyo", &units), vec!["sya", "cyu", "kyo"]);
}

#[test]
fn unresolved_unit_gets_empty_string() {
    let ka = entry("か", &["ka"]);
    let na = entry("な", &["na"]);
    let units = vec![
        Segment::Resolved(&ka),
        Segment::Unresolved("っ".to_string()),
        Segment::Resolved(&na),
    ];
    assert_eq!(split("kana", &units), vec!["ka", "", "na"]);
}

#[test]
fn unresolved_unit_consumes_garbage() {
    let ka = entry("か", &["ka"]);
    let units = vec![Segment::Resolved(&ka), Segment::Unresolved("ー".to_string())];
    assert_eq!(split("kaxyz", &units), vec!["ka", "x"]);
}

#[test]
fn unresolved_fallback_takes_one_character() {
    // "shi" is a vocabulary syllable, but ー accepts nothing.
    let ka = entry("か", &["ka"]);
    let units = vec![Segment::Resolved(&ka), Segment::Unresolved("ー".to_string())];
    let parts = split_detailed("kashi", &units);
    assert_eq!(parts[1].text, "s");
    assert_eq!(parts[1].step, SplitStep::Fallback);
}

#[test]
fn unresolved_fallback_on_multibyte_input() {
    let units = vec![Segment::Unresolved("ー".to_string())];
    assert_eq!(split("ーka", &units), vec!["ー"]);
}

// --- edge cases ---

#[test]
fn empty_input_single_unit() {
    assert_eq!(run("", &[entry("か", &["ka"])]), vec![""]);
}

#[test]
fn empty_input_pads_every_unit() {
    assert_eq!(run("", &katana()), vec!["", "", ""]);
    assert_eq!(run("   ", &katana()), vec!["", "", ""]);
}

#[test]
fn no_units() {
    assert!(run("katana", &[]).is_empty());
}

#[test]
fn surrounding_whitespace_trimmed() {
    assert_eq!(run("  ka  ", &[entry("か", &["ka"])]), vec!["ka"]);
}

#[test]
fn short_input_pads_with_empty() {
    assert_eq!(run("ka", &katana()), vec!["ka", "", ""]);
}

#[test]
fn long_input_drops_excess() {
    // Excess input after the last unit is silently discarded.
    let units = [entry("か", &["ka"]), entry("た", &["ta"])];
    assert_eq!(run("katanaki", &units), vec!["ka", "ta"]);
}

#[test]
fn garbage_prefix_resyncs() {
    let units = [entry("か", &["ka"]), entry("た", &["ta"])];
    assert_eq!(run("xyta", &units), vec!["xy", "ta"]);
}

#[test]
fn digits_resync() {
    let units = [entry("か", &["ka"]), entry("た", &["ta"])];
    assert_eq!(run("1ta", &units), vec!["1", "ta"]);
}

#[test]
fn non_ascii_input_never_panics() {
    let units = [entry("か", &["ka"]), entry("た", &["ta"])];
    assert_eq!(run("かta", &units), vec!["か", "ta"]);
    assert_eq!(run("ｋａｔａ", &units), vec!["ｋａ", "ｔａ"]);
}

// --- real-world typos ---

#[test]
fn sakana_correct() {
    let units = [entry("さ", &["sa"]), entry("か", &["ka"]), entry("な", &["na"])];
    assert_eq!(run("sakana", &units), vec!["sa", "ka", "na"]);
}

#[test]
fn sakama_last_wrong() {
    let units = [entry("さ", &["sa"]), entry("か", &["ka"]), entry("な", &["na"])];
    assert_eq!(run("sakama", &units), vec!["sa", "ka", "ma"]);
}

#[test]
fn gakou_with_vowel_variants() {
    let units = [
        entry("が", &["ga"]),
        entry("こ", &["ko"]),
        entry("う", &["u", "o"]),
    ];
    assert_eq!(run("gakou", &units), vec!["ga", "ko", "u"]);
}

#[test]
fn kyou_combo() {
    let units = [entry("きょ", &["kyo"]), entry("う", &["u", "o"])];
    assert_eq!(run("kyou", &units), vec!["kyo", "u"]);
}

#[test]
fn kiyu_partial_combo_confusion() {
    let units = [entry("きょ", &["kyo"]), entry("う", &["u", "o"])];
    assert_eq!(run("kiyu", &units), vec!["kiy", "u"]);
}

#[test]
fn kalude_middle_wrong() {
    let units = [entry("か", &["ka"]), entry("ろ", &["ro"]), entry("で", &["de"])];
    assert_eq!(run("kalude", &units), vec!["ka", "lu", "de"]);
}

#[test]
fn wogebo_skips_to_later_unit() {
    let units = [entry("わ", &["wa"]), entry("ぱ", &["pa"]), entry("ぼ", &["bo"])];
    assert_eq!(run("wogebo", &units), vec!["woge", "", "bo"]);
}

#[test]
fn left_out_first_unit_is_empty() {
    assert_eq!(run("tana", &katana()), vec!["", "ta", "na"]);
    let sakana = [entry("さ", &["sa"]), entry("か", &["ka"]), entry("な", &["na"])];
    assert_eq!(run("kana", &sakana), vec!["", "ka", "na"]);
}

#[test]
fn left_out_unit_beats_later_resync_point() {
    // な at offset 2 must not pull か's slot past た at the cursor.
    let steps: Vec<SplitStep> = split_detailed("tana", &resolved(&katana()))
        .into_iter()
        .map(|p| p.step)
        .collect();
    assert_eq!(
        steps,
        vec![SplitStep::Omitted, SplitStep::Matched, SplitStep::Matched]
    );
}

#[test]
fn left_out_middle_unit_is_empty() {
    assert_eq!(run("kana", &katana()), vec!["ka", "", "na"]);
}

#[test]
fn gearya_resyncs_on_vowel() {
    let units = [
        entry("ば", &["ba"]),
        entry("あ", &["a"]),
        entry("りゃ", &["rya"]),
    ];
    assert_eq!(run("gearya", &units), vec!["ge", "a", "rya"]);
}

// --- state reporting ---

#[test]
fn steps_for_wogebo() {
    let units = [entry("わ", &["wa"]), entry("ぱ", &["pa"]), entry("ぼ", &["bo"])];
    let steps: Vec<SplitStep> = split_detailed("wogebo", &resolved(&units))
        .into_iter()
        .map(|p| p.step)
        .collect();
    assert_eq!(
        steps,
        vec![SplitStep::Resynced, SplitStep::Omitted, SplitStep::Matched]
    );
}

#[test]
fn steps_for_fallback_and_exhaustion() {
    let units = [entry("ひゃ", &["hya"]), entry("ぴょ", &["pyo"]), entry("ざ", &["za"])];
    let parts = split_detailed("zzz", &resolved(&units));
    assert_eq!(parts[0].text, "zzz");
    assert_eq!(parts[0].step, SplitStep::Fallback);
    assert_eq!(parts[1].step, SplitStep::Exhausted);
    assert_eq!(parts[2].step, SplitStep::Exhausted);
}

#[test]
fn fallback_prefers_vocabulary_syllable() {
    // "shi" is a whole syllable even though か's spelling has two letters.
    let units = [entry("か", &["ka"])];
    assert_eq!(run("shi", &units), vec!["shi"]);
}

#[test]
fn fallback_caps_at_remaining_input() {
    let units = [entry("ひゃ", &["hya"])];
    assert_eq!(run("zz", &units), vec!["zz"]);
}

// --- ambiguous spellings ---

#[test]
fn n_before_na_keeps_alignment() {
    let units = [entry("ん", &["n", "nn"]), entry("な", &["na"])];
    assert_eq!(run("nna", &units), vec!["n", "na"]);
}

#[test]
fn nn_used_when_it_still_aligns() {
    let units = [entry("ん", &["n", "nn"]), entry("か", &["ka"])];
    assert_eq!(run("nnka", &units), vec!["nn", "ka"]);
    assert_eq!(run("nka", &units), vec!["n", "ka"]);
}

#[test]
fn repeated_n_chain() {
    let units = [
        entry("ん", &["n", "nn"]),
        entry("ん", &["n", "nn"]),
        entry("な", &["na"]),
    ];
    assert_eq!(run("nnna", &units), vec!["n", "n", "na"]);
}

#[test]
fn longest_spelling_when_nothing_aligns() {
    let units = [entry("ん", &["n", "nn"]), entry("か", &["ka"])];
    assert_eq!(run("nnxx", &units), vec!["nn", "xx"]);
}

// --- real table ---

#[test]
fn real_table_katakana_rashibyo() {
    let segs = segment("フツビョ");
    assert_eq!(split("rashibyo", &segs), vec!["rashi", "", "byo"]);
}

#[test]
fn real_table_niyupebe() {
    let segs = segment("にゅぺべ");
    assert_eq!(split("niyupebe", &segs), vec!["niyu", "pe", "be"]);
}

#[test]
fn real_table_bannzkawa() {
    let segs = segment("ばなかわ");
    assert_eq!(split("bannzkawa", &segs), vec!["ba", "nnz", "ka", "wa"]);
}
