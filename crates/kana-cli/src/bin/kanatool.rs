use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::{analyze_ops, config_ops};
use kana_core::analysis::AnalysisStrategy;

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana answer analysis diagnostics")]
struct Cli {
    /// Custom kana table TOML (replaces the embedded table)
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log analyzer decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a typed answer against a kana question
    Analyze {
        /// Kana question (hiragana, katakana or mixed)
        kana: String,
        /// Romaji answer as typed
        answer: String,
        /// Override the configured strategy (syllable_matching, conversion)
        #[arg(long)]
        strategy: Option<AnalysisStrategy>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show how a kana string is split into units
    Segment {
        /// Kana text
        kana: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Look up one kana unit in the table
    Lookup {
        /// Kana unit, e.g. し or キャ
        kana: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run a TOML corpus of answers with expected bracketed renderings
    Check {
        /// Path to the corpus TOML file
        corpus_file: String,
        /// Override the configured strategy
        #[arg(long)]
        strategy: Option<AnalysisStrategy>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Show passing cases too
        #[arg(long)]
        all: bool,
    },
    /// Export the default kana table as TOML
    TableExport,
    /// Validate a custom kana table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    kana_cli::trace_init::init_tracing(cli.verbose);

    if let Err(e) = config_ops::install_custom(cli.table.as_deref(), cli.settings.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    match cli.command {
        Command::Analyze {
            kana,
            answer,
            strategy,
            json,
        } => analyze_ops::analyze_cmd(&kana, &answer, strategy, json),
        Command::Segment { kana, json } => analyze_ops::segment_cmd(&kana, json),
        Command::Lookup { kana, json } => analyze_ops::lookup_cmd(&kana, json),
        Command::Check {
            corpus_file,
            strategy,
            json,
            all,
        } => analyze_ops::check_cmd(&corpus_file, strategy, all, json),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
