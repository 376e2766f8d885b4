//! Configuration management and validation.
//!
//! Provides configuration structures for timetable sources, the export
//! format contract, persisted state location and display preferences.
//! Values are layered: defaults, then an optional TOML file, then
//! environment variables, then command-line overrides.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILENAME, DEFAULT_DOCUMENTS, DEFAULT_HTTP_TIMEOUT_SECS,
    HEADER_ROW_MARKER, STATE_FILENAME, columns,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding `sources.data_root`
pub const ENV_DATA_ROOT: &str = "VALDI_DATA_ROOT";

/// Environment variable overriding `storage.state_file`
pub const ENV_STATE_FILE: &str = "VALDI_STATE_FILE";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub format: FormatConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

/// Where timetable documents come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Base directory for relative document paths
    pub data_root: PathBuf,

    /// Ordered document locations: paths, glob patterns or http(s) URLs.
    /// The order fixes the module and schedule ordering after aggregation.
    pub documents: Vec<String>,

    /// Timeout for HTTP sources
    pub http_timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            documents: DEFAULT_DOCUMENTS.iter().map(|s| s.to_string()).collect(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// How lecturer names are derived from the staff column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffNameStyle {
    /// "LAST, FIRST[, LAST, FIRST...]" pairs rendered as "First Last, ..."
    #[default]
    Pairwise,
    /// Column value passed through trimmed
    Raw,
    /// Lecturer never populated
    Omit,
}

/// Column names expected in the header row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub description: String,
    pub module_code: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub rooms: String,
    pub event_type: String,
    pub staff: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            description: columns::DESCRIPTION.to_string(),
            module_code: columns::MODULE_CODE.to_string(),
            start_date: columns::START_DATE.to_string(),
            start_time: columns::START_TIME.to_string(),
            end_date: columns::END_DATE.to_string(),
            end_time: columns::END_TIME.to_string(),
            rooms: columns::ROOMS.to_string(),
            event_type: columns::TYPE.to_string(),
            staff: columns::STAFF.to_string(),
        }
    }
}

/// Timetable export format contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Substring that identifies the header row
    pub header_marker: String,

    pub columns: ColumnNames,

    pub staff_names: StaffNameStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            header_marker: HEADER_ROW_MARKER.to_string(),
            columns: ColumnNames::default(),
            staff_names: StaffNameStyle::default(),
        }
    }
}

/// Persisted key-value state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the session and selections
    pub state_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let state_file = dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(STATE_FILENAME))
            .unwrap_or_else(|| PathBuf::from(STATE_FILENAME));

        Self { state_file }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub output_format: OutputFormat,

    /// Colorize status badges and headings
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            color: true,
        }
    }
}

impl Config {
    /// Default configuration file location (`<config_dir>/valdi/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
            .ok_or_else(|| Error::configuration("Could not determine config directory"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Load configuration using the layered approach (file -> env)
    ///
    /// An explicit `config_file` must exist; otherwise the default location
    /// is used when present and defaults apply when it is not.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_env_overrides();
        debug!("Layered configuration: {:?}", config);

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(data_root) = std::env::var(ENV_DATA_ROOT) {
            if !data_root.trim().is_empty() {
                self.sources.data_root = PathBuf::from(data_root);
            }
        }

        if let Ok(state_file) = std::env::var(ENV_STATE_FILE) {
            if !state_file.trim().is_empty() {
                self.storage.state_file = PathBuf::from(state_file);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sources.documents.is_empty() {
            return Err(Error::configuration(
                "At least one timetable document must be configured",
            ));
        }

        if let Some(blank) = self.sources.documents.iter().find(|d| d.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "Blank timetable document entry: '{}'",
                blank
            )));
        }

        if self.format.header_marker.trim().is_empty() {
            return Err(Error::configuration("Header marker must not be empty"));
        }

        if self.sources.http_timeout_secs == 0 {
            return Err(Error::configuration(
                "HTTP timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sources.documents.len(), 3);
        assert_eq!(config.format.header_marker, HEADER_ROW_MARKER);
        assert_eq!(config.format.staff_names, StaffNameStyle::Pairwise);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[sources]
documents = ["level4.csv"]

[format]
staff_names = "raw"

[format.columns]
rooms = "Location"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.sources.documents, vec!["level4.csv".to_string()]);
        assert_eq!(config.sources.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
        assert_eq!(config.format.staff_names, StaffNameStyle::Raw);
        assert_eq!(config.format.columns.rooms, "Location");
        assert_eq!(config.format.columns.description, "Description");
        assert_eq!(config.display.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[sources\ndocuments = 3").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load_layered(Some(Path::new("/nonexistent/valdi.toml")));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.sources.documents.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sources.documents.push("   ".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.format.header_marker = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.sources.http_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
