// Tue Jan 13 2026 - Alex

use crate::extract::ScanMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub structs_file: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub scan_mode: ScanMode,
    pub source_extension: String,
    pub reserved_marker: String,
    pub header_extension: String,
    pub aggregator_name: String,
    pub exclusion_markers: Vec<String>,
    pub clean_output: bool,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            structs_file: None,
            source_root: None,
            output_dir: PathBuf::from("SDK"),
            scan_mode: ScanMode::Compat,
            source_extension: "cs".to_string(),
            reserved_marker: "AssemblyInfo".to_string(),
            header_extension: "h".to_string(),
            aggregator_name: "includes.h".to_string(),
            exclusion_markers: vec!["___c__DisplayClass".to_string(), "_d__".to_string()],
            clean_output: true,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => serde_json::from_str(&contents)
                .map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn with_structs_file(mut self, path: PathBuf) -> Self {
        self.structs_file = Some(path);
        self
    }

    pub fn with_source_root(mut self, path: PathBuf) -> Self {
        self.source_root = Some(path);
        self
    }

    pub fn with_output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = path;
        self
    }

    pub fn with_scan_mode(mut self, mode: ScanMode) -> Self {
        self.scan_mode = mode;
        self
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.structs_file.is_none() {
            return Err(ConfigError::Validation("structs_file must be set".to_string()));
        }
        if self.source_root.is_none() {
            return Err(ConfigError::Validation("source_root must be set".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output_dir must not be empty".to_string()));
        }
        if self.source_extension.is_empty() || self.header_extension.is_empty() {
            return Err(ConfigError::Validation("file extensions must not be empty".to_string()));
        }
        if self.exclusion_markers.iter().any(|m| m.is_empty()) {
            // An empty marker would exclude every struct.
            return Err(ConfigError::Validation("exclusion markers must not be empty".to_string()));
        }
        if self.aggregator_name.is_empty() {
            return Err(ConfigError::Validation("aggregator_name must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_needs_inputs() {
        let config = Config::default();
        assert!(config.validate().is_err());

        let config = config
            .with_structs_file(PathBuf::from("il2cpp.h"))
            .with_source_root(PathBuf::from("dump"));
        assert!(config.validate().is_ok());
        assert_eq!(config.output_dir, PathBuf::from("SDK"));
    }

    #[test]
    fn test_rejects_empty_exclusion_marker() {
        let mut config = Config::new()
            .with_structs_file(PathBuf::from("il2cpp.h"))
            .with_source_root(PathBuf::from("dump"));
        config.exclusion_markers.push(String::new());

        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "output_dir": "out", "scan_mode": "balanced" }"#).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.scan_mode, ScanMode::Balanced);
        assert_eq!(config.reserved_marker, "AssemblyInfo");
        assert_eq!(config.exclusion_markers.len(), 2);
    }

    #[test]
    fn test_clean_output_toggle() {
        assert!(Config::default().clean_output);

        let config: Config = serde_json::from_str(r#"{ "clean_output": false }"#).unwrap();
        assert!(!config.clean_output);
        assert_eq!(config.output_dir, PathBuf::from("SDK"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
