//! TOML configuration types for Census.

use census_core::{Error, Result, ScanOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Census configuration loaded from `.census.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CensusConfig {
    /// Scan behavior.
    #[serde(default)]
    pub scan: ScanConfig,

    /// File discovery behavior.
    #[serde(default)]
    pub files: FilesConfig,
}

/// Scan behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Fold `+` concatenations of string literals into a single specifier.
    ///
    /// Off by default: only a bare literal counts as statically known.
    #[serde(default)]
    pub fold_concatenations: bool,

    /// Maximum file size in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            fold_concatenations: false,
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

/// File discovery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// File extensions to scan (with the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Additional ignore patterns beyond the built-in defaults.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Respect .gitignore files during discovery.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: Vec::new(),
            respect_gitignore: true,
        }
    }
}

impl CensusConfig {
    /// Loads configuration from the given TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CensusConfig = toml::from_str(&content).map_err(|e| Error::TomlError {
            file: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `.census.toml` from the given directory, or defaults if absent.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(".census.toml");
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Converts the scan section into extractor options.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            fold_concatenations: self.scan.fold_concatenations,
            max_file_size: Some(self.scan.max_file_size_bytes),
        }
    }

    /// Validates configuration values at load time (fail-fast).
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_file_size_bytes == 0 {
            return Err(Error::InvalidConfig {
                message: "scan.max_file_size_bytes must be > 0".to_string(),
            });
        }
        if self.scan.max_file_size_bytes > 1024 * 1024 * 1024 {
            return Err(Error::InvalidConfig {
                message: "scan.max_file_size_bytes unreasonably large (>1GiB)".to_string(),
            });
        }

        if self.files.extensions.is_empty() {
            return Err(Error::InvalidConfig {
                message: "files.extensions must not be empty".to_string(),
            });
        }
        for extension in &self.files.extensions {
            if !extension.starts_with('.') {
                return Err(Error::InvalidConfig {
                    message: format!("files.extensions entry {extension:?} must start with '.'"),
                });
            }
        }

        Ok(())
    }
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

fn default_extensions() -> Vec<String> {
    vec![
        ".js".to_string(),
        ".jsx".to_string(),
        ".ts".to_string(),
        ".tsx".to_string(),
        ".mjs".to_string(),
        ".cjs".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [scan]
            fold_concatenations = true
        "#;

        let config: CensusConfig = toml::from_str(toml).unwrap();
        assert!(config.scan.fold_concatenations);
        assert_eq!(config.scan.max_file_size_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [scan]
            fold_concatenations = false
            max_file_size_bytes = 1048576

            [files]
            extensions = [".js", ".ts"]
            ignore = ["**/*.test.js", "**/vendor/**"]
            respect_gitignore = false
        "#;

        let config: CensusConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.scan.max_file_size_bytes, 1048576);
        assert_eq!(config.files.extensions, vec![".js", ".ts"]);
        assert_eq!(config.files.ignore.len(), 2);
        assert!(!config.files.respect_gitignore);
    }

    #[test]
    fn test_default_values() {
        let config: CensusConfig = toml::from_str("").unwrap();

        assert!(!config.scan.fold_concatenations);
        assert!(config.files.respect_gitignore);
        assert!(config.files.extensions.contains(&".tsx".to_string()));
    }

    #[test]
    fn test_validate_zero_file_size() {
        let config = CensusConfig {
            scan: ScanConfig {
                max_file_size_bytes: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_huge_file_size() {
        let config = CensusConfig {
            scan: ScanConfig {
                max_file_size_bytes: 2 * 1024 * 1024 * 1024,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_extension_without_dot() {
        let config = CensusConfig {
            files: FilesConfig {
                extensions: vec!["js".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_defaults_pass() {
        assert!(CensusConfig::default().validate().is_ok());
    }

    #[test]
    fn test_scan_options_conversion() {
        let config = CensusConfig {
            scan: ScanConfig {
                fold_concatenations: true,
                max_file_size_bytes: 2048,
            },
            ..Default::default()
        };

        let options = config.scan_options();
        assert!(options.fold_concatenations);
        assert_eq!(options.max_file_size, Some(2048));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CensusConfig::load_or_default(dir.path()).unwrap();
        assert!(!config.scan.fold_concatenations);
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".census.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[scan").unwrap();

        let result = CensusConfig::load(&path);
        assert!(matches!(result.unwrap_err(), Error::TomlError { .. }));
    }
}
