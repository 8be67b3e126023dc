use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::DEFAULT_OUTPUT_FILE;
use crate::records::{DEFAULT_AVERAGES_FILE, DEFAULT_SINGLES_FILE};
use crate::scoring::BaselineMode;

/// Run configuration.
///
/// Every field is optional in the file; missing ones take their defaults.
///
/// Example YAML:
/// ```yaml
/// exports_dir: ~/wca/exports
/// mode: absolute
/// output: ./kinch.csv
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the unzipped WCA ranks exports
    pub exports_dir: PathBuf,

    /// File name of the averages export inside `exports_dir`
    pub averages_file: String,

    /// File name of the singles export inside `exports_dir`
    pub singles_file: String,

    pub mode: BaselineMode,

    /// Where the ranked CSV is written
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exports_dir: PathBuf::from("exports"),
            averages_file: DEFAULT_AVERAGES_FILE.to_string(),
            singles_file: DEFAULT_SINGLES_FILE.to_string(),
            mode: BaselineMode::Relative,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    pub fn averages_path(&self) -> PathBuf {
        self.exports_dir.join(&self.averages_file)
    }

    pub fn singles_path(&self) -> PathBuf {
        self.exports_dir.join(&self.singles_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, BaselineMode::Relative);
        assert_eq!(
            config.averages_path(),
            PathBuf::from("exports").join("WCA_export_RanksAverage.tsv")
        );
        assert_eq!(
            config.singles_path(),
            PathBuf::from("exports").join("WCA_export_RanksSingle.tsv")
        );
        assert_eq!(config.output, PathBuf::from("kinch.csv"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
exports_dir: /data/wca
mode: absolute
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.exports_dir, PathBuf::from("/data/wca"));
        assert_eq!(config.mode, BaselineMode::Absolute);
        assert_eq!(config.averages_file, DEFAULT_AVERAGES_FILE);
        assert_eq!(config.output, PathBuf::from("kinch.csv"));
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "exports: /data\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
