use std::path::PathBuf;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod analyze_ops;
pub mod config_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid corpus: {0}")]
    Corpus(#[from] toml::de::Error),
    #[error(transparent)]
    Table(#[from] kana_core::kana::KanaTableError),
    #[error(transparent)]
    Settings(#[from] kana_core::settings::SettingsError),
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
