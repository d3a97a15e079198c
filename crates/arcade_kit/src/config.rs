//! Configuration system

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Formats are dispatched on the file extension: `.toml` and `.ron` are
/// supported.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        name: String,
        count: u32,
    }

    impl Config for Sample {}

    #[test]
    fn test_toml_roundtrip() {
        let path = std::env::temp_dir().join("arcade_kit_config_test.toml");
        let sample = Sample {
            name: "roundtrip".to_string(),
            count: 7,
        };
        sample.save_to_file(&path).unwrap();
        let loaded = Sample::load_from_file(&path).unwrap();
        assert_eq!(loaded, sample);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let path = std::env::temp_dir().join("arcade_kit_config_test.ini");
        std::fs::write(&path, "name = \"x\"\ncount = 1\n").unwrap();
        let result = Sample::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Sample::load_from_file("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
