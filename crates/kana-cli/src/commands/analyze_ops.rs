use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};

use kana_core::analysis::{analyze_with, AnalysisStrategy, AnalysisSummary, CharacterAnalysis};
use kana_core::format::{format, render_bracketed, FormattedSyllable};
use kana_core::kana::{lookup, Category, KanaEntry};
use kana_core::romaji::{diagnose, ConversionDiagnostics};
use kana_core::segment::{segment, Segment};
use kana_core::settings::{settings, DisplaySettings};
use kana_core::unicode::is_kana;

use super::{read_file, CliError};

fn resolve_strategy(strategy: Option<AnalysisStrategy>) -> AnalysisStrategy {
    strategy.unwrap_or(settings().analysis.strategy)
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Plain => "plain",
        Category::Voiced => "voiced",
        Category::Combo => "combo",
    }
}

fn print_json<T: Serialize>(value: &T) {
    let text = die!(serde_json::to_string_pretty(value), "Error encoding JSON: {}");
    println!("{text}");
}

// --- analyze ---

#[derive(Debug, Serialize)]
struct AnalyzeReport<'a> {
    kana: &'a str,
    answer: &'a str,
    strategy: AnalysisStrategy,
    rendered: String,
    summary: AnalysisSummary,
    analysis: Vec<CharacterAnalysis>,
    formatted: Vec<FormattedSyllable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversion: Option<ConversionDiagnostics>,
}

/// Converter diagnostics, only meaningful for the conversion strategy.
fn conversion_diagnostics(
    strategy: AnalysisStrategy,
    answer: &str,
) -> Option<ConversionDiagnostics> {
    (strategy == AnalysisStrategy::Conversion).then(|| diagnose(answer))
}

fn describe_conversion(d: &ConversionDiagnostics) -> String {
    if d.has_unconverted {
        let letters: Vec<String> = d.unconverted.iter().map(char::to_string).collect();
        format!("converted: {} (unconverted: {})", d.converted, letters.join(" "))
    } else {
        format!("converted: {}", d.converted)
    }
}

pub fn analyze_cmd(kana: &str, answer: &str, strategy: Option<AnalysisStrategy>, json: bool) {
    let strategy = resolve_strategy(strategy);
    let analysis = analyze_with(strategy, kana, answer);
    let formatted = format(&analysis);
    let summary = AnalysisSummary::from_analysis(&analysis);
    let rendered = render_bracketed(&formatted, &settings().display);
    let conversion = conversion_diagnostics(strategy, answer);

    if json {
        print_json(&AnalyzeReport {
            kana,
            answer,
            strategy,
            rendered,
            summary,
            analysis,
            formatted,
            conversion,
        });
        return;
    }

    println!(
        "{rendered}  ({}/{}, {}%) [{strategy}]",
        summary.correct,
        summary.total,
        summary.score_percent()
    );
    if let Some(d) = &conversion {
        println!("  {}", describe_conversion(d));
    }
    for a in &analysis {
        println!(
            "  #{:<2} {}\ttyped {:<8} accepts {:<16} {}",
            a.position,
            a.character,
            format!("{:?}", a.user_syllable),
            a.correct_syllables.join("/"),
            if a.is_correct { "ok" } else { "WRONG" },
        );
    }
}

// --- segment / lookup ---

#[derive(Debug, Serialize)]
struct UnitView<'a> {
    text: &'a str,
    resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    spellings: &'a [String],
}

impl<'a> UnitView<'a> {
    fn from_segment(seg: &'a Segment<'_>) -> Self {
        Self {
            text: seg.text(),
            resolved: seg.is_resolved(),
            category: match seg {
                Segment::Resolved(entry) => Some(entry.category),
                Segment::Unresolved(_) => None,
            },
            spellings: seg.spellings(),
        }
    }
}

fn describe(entry: &KanaEntry) -> String {
    format!(
        "{}\t{:<6}\t{}",
        entry.text,
        category_name(entry.category),
        entry.spellings.join(", ")
    )
}

pub fn segment_cmd(kana: &str, json: bool) {
    let segments = segment(kana);
    if json {
        let views: Vec<UnitView> = segments.iter().map(UnitView::from_segment).collect();
        print_json(&views);
        return;
    }
    for (i, seg) in segments.iter().enumerate() {
        match seg {
            Segment::Resolved(entry) => println!("{i:>3}  {}", describe(entry)),
            Segment::Unresolved(text) => {
                let reason = if text.chars().all(is_kana) {
                    "kana not in table"
                } else {
                    "not kana"
                };
                println!("{i:>3}  {text}\t({reason})");
            }
        }
    }
    println!("{} units", segments.len());
}

pub fn lookup_cmd(kana: &str, json: bool) {
    let Some(entry) = lookup(kana) else {
        eprintln!("Not in table: {kana}");
        process::exit(1);
    };
    if json {
        print_json(entry);
    } else {
        println!("{}", describe(entry));
    }
}

// --- check ---

#[derive(Debug, Deserialize)]
pub struct Corpus {
    pub cases: Vec<CorpusCase>,
}

#[derive(Debug, Deserialize)]
pub struct CorpusCase {
    pub kana: String,
    pub answer: String,
    /// Bracketed rendering, e.g. `[ka]tana`.
    pub expected: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CaseResult {
    pub kana: String,
    pub answer: String,
    pub expected: String,
    pub actual: String,
    pub pass: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub strategy: AnalysisStrategy,
    pub results: Vec<CaseResult>,
    pub summary: CheckSummary,
}

pub fn load_corpus(path: &Path) -> Result<Corpus, CliError> {
    Ok(toml::from_str(&read_file(path)?)?)
}

/// Analyze every case and compare its bracketed rendering with the expected one.
pub fn run_check(
    corpus: &Corpus,
    strategy: AnalysisStrategy,
    display: &DisplaySettings,
) -> CheckReport {
    let results: Vec<CaseResult> = corpus
        .cases
        .iter()
        .map(|case| {
            let analysis = analyze_with(strategy, &case.kana, &case.answer);
            let actual = render_bracketed(&format(&analysis), display);
            let pass = actual == case.expected;
            if !pass {
                tracing::debug!(kana = %case.kana, answer = %case.answer, %actual, "case failed");
            }
            CaseResult {
                kana: case.kana.clone(),
                answer: case.answer.clone(),
                expected: case.expected.clone(),
                actual,
                pass,
                note: case.note.clone(),
            }
        })
        .collect();

    let pass = results.iter().filter(|r| r.pass).count();
    CheckReport {
        strategy,
        summary: CheckSummary {
            total: results.len(),
            pass,
            fail: results.len() - pass,
        },
        results,
    }
}

pub fn check_cmd(file: &str, strategy: Option<AnalysisStrategy>, show_passing: bool, json: bool) {
    let corpus = die!(load_corpus(Path::new(file)), "Error: {}");
    let report = run_check(&corpus, resolve_strategy(strategy), &settings().display);

    if json {
        print_json(&report);
    } else {
        for r in &report.results {
            if r.pass && !show_passing {
                continue;
            }
            let mark = if r.pass { "PASS" } else { "FAIL" };
            print!("{mark}  {} {:?}: expected {}, got {}", r.kana, r.answer, r.expected, r.actual);
            match &r.note {
                Some(note) => println!("  ({note})"),
                None => println!(),
            }
        }
        let s = &report.summary;
        println!(
            "\n{} cases, {} passed, {} failed [{}]",
            s.total, s.pass, s.fail, report.strategy
        );
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
