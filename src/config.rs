//! Engine configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_SIZE};
use crate::error::ConfigError;
use crate::search::ProgressLogger;

/// Search and board settings shared by the command-line tool and the GUI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: i32,
    /// Side length of the board
    pub board_size: usize,
    /// Nodes between progress log lines, 0 disables them
    pub progress_interval: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: 4,
            board_size: STANDARD_SIZE,
            progress_interval: ProgressLogger::DEFAULT_INTERVAL,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth < 0 {
            return Err(ConfigError::Validation("depth must be >= 0".into()));
        }
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [{MIN_BOARD_SIZE}, {MAX_BOARD_SIZE}]"
            )));
        }
        if self.board_size % 2 != 0 {
            return Err(ConfigError::Validation("board_size must be even".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        // Three plain scalar fields always serialize
        toml::to_string_pretty(&EngineConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.depth, 4);
        assert_eq!(config.board_size, 8);
        assert_eq!(config.progress_interval, 1_000_000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("depth = 6").unwrap();
        assert_eq!(config.depth, 6);
        assert_eq!(config.board_size, 8);
        assert_eq!(config.progress_interval, 1_000_000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_negative_depth() {
        let config = EngineConfig {
            depth: -2,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_sizes() {
        for size in [2, 7, 18] {
            let config = EngineConfig {
                board_size: size,
                ..EngineConfig::default()
            };
            assert!(config.validate().is_err(), "size {size}");
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_othello.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "board_size = 6\nprogress_interval = 0").unwrap();

        let config = EngineConfig::load(&path).unwrap();

        assert_eq!(config.board_size, 6);
        assert_eq!(config.progress_interval, 0);
        assert_eq!(config.depth, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.toml");
        std::fs::write(&path, "board_size = 5\n").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "depth = \"deep\"\n").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "depth = 2\n").unwrap();

        let config = EngineConfig::load_or_default(&path).unwrap();
        assert_eq!(config.depth, 2);
        assert_eq!(config.board_size, 8);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = EngineConfig::load(Path::new("/nonexistent/dir/othello.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default_toml();
        assert!(toml_str.contains("depth = 4"));
        let config: EngineConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
