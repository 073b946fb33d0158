use std::path::Path;

use kana_core::kana::{parse_kana_toml, KanaTable};
use kana_core::settings::{parse_settings_toml, Settings};

use super::{read_file, CliError};

/// Install custom table and settings files before anything touches the
/// global singletons.
pub fn install_custom(table: Option<&Path>, settings: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = table {
        KanaTable::init_custom(read_file(path)?)?;
        tracing::debug!(path = %path.display(), "custom kana table installed");
    }
    if let Some(path) = settings {
        kana_core::settings::init_custom(read_file(path)?)?;
        tracing::debug!(path = %path.display(), "custom settings installed");
    }
    Ok(())
}

/// Number of hiragana units defined by a table file.
pub fn validate_table_file(path: &Path) -> Result<usize, CliError> {
    Ok(parse_kana_toml(&read_file(path)?)?.len())
}

pub fn validate_settings_file(path: &Path) -> Result<Settings, CliError> {
    Ok(parse_settings_toml(&read_file(path)?)?)
}

pub fn table_export() {
    print!("{}", kana_core::kana::default_toml());
}

pub fn table_validate(file: &str) {
    let units = die!(validate_table_file(Path::new(file)), "Error: {}");
    println!("OK: {units} hiragana units ({} with katakana)", units * 2);
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(validate_settings_file(Path::new(file)), "Error: {}");
    println!(
        "OK: analysis.strategy={}, display.wrong_open={:?}, display.wrong_close={:?}",
        s.analysis.strategy, s.display.wrong_open, s.display.wrong_close
    );
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use kana_core::analysis::AnalysisStrategy;
    use tempfile::NamedTempFile;

    use super::*;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_table_validates() {
        let file = temp_file(kana_core::kana::default_toml());
        assert_eq!(validate_table_file(file.path()).unwrap(), 104);
    }

    #[test]
    fn custom_table_validates() {
        let file = temp_file("[plain]\n\"か\" = [\"ka\"]\n\"ゐ\" = [\"wi\"]\n");
        assert_eq!(validate_table_file(file.path()).unwrap(), 2);
    }

    #[test]
    fn bad_table_is_rejected() {
        let file = temp_file("[plain]\n\"a\" = [\"ka\"]\n");
        let err = validate_table_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Table(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = validate_table_file(Path::new("/nonexistent/kana.toml")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/kana.toml"));
    }

    #[test]
    fn default_settings_validate() {
        let file = temp_file(kana_core::settings::default_toml());
        let s = validate_settings_file(file.path()).unwrap();
        assert_eq!(s.analysis.strategy, AnalysisStrategy::SyllableMatching);
    }

    #[test]
    fn empty_marker_is_rejected() {
        let file = temp_file(
            "[analysis]\nstrategy = \"conversion\"\n\n[display]\nwrong_open = \"\"\nwrong_close = \"]\"\n",
        );
        let err = validate_settings_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }
}
