//! Wizard configuration loaded from TOML.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "wizard.log"
//! log_stdout = true
//! default_entity_type = "BEN"
//! current_date = "2026-10-16"
//! ```

use std::{fmt, fs, path::Path, path::PathBuf};

use chrono::NaiveDate;
use incorp_core::EntityType;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Bare level or full `EnvFilter` directive.
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub log_stdout: bool,
    /// Entity type applied to drafts that have none.
    pub default_entity_type: Option<EntityType>,
    /// Overrides today's date, mainly for reproducible runs.
    pub current_date: Option<NaiveDate>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            log_stdout: true,
            default_entity_type: None,
            current_date: None,
        }
    }
}

impl WizardConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// The configured date, or the local date when none is set.
    pub fn today(&self) -> NaiveDate {
        self.current_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl fmt::Display for WizardConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Log level:      {}", self.log_level)?;
        writeln!(
            f,
            "Log file:       {}",
            self.log_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "—".to_string())
        )?;
        writeln!(f, "Log to stdout:  {}", self.log_stdout)?;
        write!(
            f,
            "Default entity: {}",
            self.default_entity_type
                .map(|e| e.as_str())
                .unwrap_or("—")
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(WizardConfig::from_toml("").unwrap(), WizardConfig::default());
    }

    #[test]
    fn config_reads_every_field() {
        let config = WizardConfig::from_toml(
            r#"
log_level = "debug"
log_file = "wizard.log"
log_stdout = false
default_entity_type = "CP"
current_date = "2026-10-16"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("wizard.log")));
        assert!(!config.log_stdout);
        assert_eq!(config.default_entity_type, Some(EntityType::Cooperative));
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn unknown_entity_type_is_rejected() {
        assert!(WizardConfig::from_toml("default_entity_type = \"LLC\"").is_err());
    }
}
