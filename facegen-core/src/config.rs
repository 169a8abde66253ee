//! Generator configuration
//!
//! Defaults follow the conventional `src/` + `dist/` front-end layout.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Directory holding the converted `.woff2` files.
    #[serde(default = "default_fonts_dir")]
    pub fonts_dir: PathBuf,
    /// Generated stylesheet partial.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// Raw outline fonts copied into `fonts_dir`.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
}

fn default_fonts_dir() -> PathBuf {
    PathBuf::from("dist/css/fonts")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("src/scss/_fonts.scss")
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src/scss/fonts")
}

fn default_source_extensions() -> Vec<String> {
    vec!["ttf".to_string(), "otf".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fonts_dir: default_fonts_dir(),
            output_file: default_output_file(),
            source_dir: default_source_dir(),
            source_extensions: default_source_extensions(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fonts_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("fontsDir cannot be empty".into()));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("outputFile cannot be empty".into()));
        }
        if self.source_extensions.iter().any(|e| e.is_empty() || e.starts_with('.')) {
            return Err(ConfigError::Invalid(
                "sourceExtensions must be bare extensions like \"ttf\"".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = GeneratorConfig::from_json(r#"{"fontsDir": "public/fonts"}"#).unwrap();
        assert_eq!(config.fonts_dir, PathBuf::from("public/fonts"));
        assert_eq!(config.output_file, PathBuf::from("src/scss/_fonts.scss"));
        assert_eq!(config.source_extensions, ["ttf", "otf"]);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(GeneratorConfig::from_json("{}").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_load_rejects_dotted_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facegen.json");
        fs::write(&path, r#"{"sourceExtensions": [".ttf"]}"#).unwrap();
        assert!(matches!(GeneratorConfig::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facegen.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(GeneratorConfig::load(&path), Err(ConfigError::Parse { .. })));
    }
}
