use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What every competitor is measured against.
///
/// Example YAML:
/// ```yaml
/// mode: absolute
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BaselineMode {
    /// Best result among the competitors being ranked
    #[default]
    Relative,
    /// Current world record
    Absolute,
}

impl fmt::Display for BaselineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaselineMode::Relative => f.write_str("relative"),
            BaselineMode::Absolute => f.write_str("absolute"),
        }
    }
}

impl FromStr for BaselineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relative" => Ok(BaselineMode::Relative),
            "absolute" => Ok(BaselineMode::Absolute),
            other => Err(format!("expected 'relative' or 'absolute', got '{}'", other)),
        }
    }
}
