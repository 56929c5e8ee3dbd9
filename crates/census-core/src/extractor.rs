//! Reference extractor trait and registry.

use crate::error::{Error, Result};
use crate::types::{ScanOptions, ScanResult};
use std::fmt;
use std::path::Path;

/// Trait for language-specific reference extractors.
///
/// Extractors are responsible for:
/// - Parsing one file's source text (or delegating to a parser)
/// - Producing [`crate::ModuleReference`] records in source order
/// - Degrading unresolvable dynamic specifiers to data, never to errors
///
/// # Thread Safety
///
/// Implementations must be Send + Sync and hold no cross-call state, so a
/// caller may dispatch one concurrent extraction per file.
///
/// # Examples
///
/// ```no_run
/// use census_core::{ReferenceExtractor, ScanOptions};
/// use std::path::Path;
///
/// fn scan_with(extractor: &dyn ReferenceExtractor, path: &Path) {
///     match extractor.extract_file(path, &ScanOptions::default()) {
///         Ok(result) => println!("{} references", result.references.len()),
///         Err(e) => eprintln!("Scan failed: {}", e),
///     }
/// }
/// ```
pub trait ReferenceExtractor: Send + Sync + fmt::Debug {
    /// Returns the extractor name (e.g., "JavaScript").
    fn name(&self) -> &str;

    /// Returns the file extensions this extractor handles.
    ///
    /// Extensions should include the dot (e.g., ".js", ".ts").
    fn supported_extensions(&self) -> &[&str];

    /// Reads and scans one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, over the size
    /// limit, or fails to parse. An unresolvable dynamic specifier is not
    /// an error; it surfaces as an `Unresolved` record.
    fn extract_file(&self, path: &Path, options: &ScanOptions) -> Result<ScanResult>;

    /// Scans already-loaded source text. Performs no I/O.
    ///
    /// `path` identifies the file in records and diagnostics and selects
    /// the source dialect; it is never read.
    fn extract_source(&self, path: &Path, source: &str, options: &ScanOptions)
        -> Result<ScanResult>;

    /// Validates that this extractor can scan the given file.
    ///
    /// This is called before `extract_file()` to provide early feedback.
    fn validate(&self, path: &Path) -> Result<()> {
        // Default implementation: check the extension is supported
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        if !self.supported_extensions().contains(&extension.as_str()) {
            return Err(Error::UnsupportedExtension { extension });
        }
        Ok(())
    }
}

/// Registry for reference extractors.
///
/// Allows dynamic extractor discovery and selection.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn ReferenceExtractor>>,
}

impl ExtractorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extractor.
    pub fn register(&mut self, extractor: Box<dyn ReferenceExtractor>) {
        self.extractors.push(extractor);
    }

    /// Finds an extractor that supports the given file extension.
    ///
    /// Returns the first matching extractor, or None if no extractor
    /// supports the extension.
    pub fn find_by_extension(&self, extension: &str) -> Option<&dyn ReferenceExtractor> {
        self.extractors.iter().find_map(|extractor| {
            if extractor.supported_extensions().contains(&extension) {
                Some(extractor.as_ref())
            } else {
                None
            }
        })
    }

    /// Finds an extractor by name.
    pub fn find_by_name(&self, name: &str) -> Option<&dyn ReferenceExtractor> {
        self.extractors.iter().find_map(|extractor| {
            if extractor.name().eq_ignore_ascii_case(name) {
                Some(extractor.as_ref())
            } else {
                None
            }
        })
    }

    /// Finds the extractor responsible for the given path, by extension.
    pub fn find_for_path(&self, path: &Path) -> Result<&dyn ReferenceExtractor> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        self.find_by_extension(&extension)
            .ok_or(Error::UnsupportedExtension { extension })
    }

    /// Returns all registered extractors.
    pub fn all(&self) -> &[Box<dyn ReferenceExtractor>] {
        &self.extractors
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &self.extractors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanStats;
    use std::path::PathBuf;

    // Mock extractor for testing
    #[derive(Debug)]
    struct MockExtractor {
        name: String,
        extensions: Vec<&'static str>,
    }

    impl ReferenceExtractor for MockExtractor {
        fn name(&self) -> &str {
            &self.name
        }

        fn supported_extensions(&self) -> &[&str] {
            &self.extensions
        }

        fn extract_file(&self, path: &Path, options: &ScanOptions) -> Result<ScanResult> {
            self.extract_source(path, "", options)
        }

        fn extract_source(
            &self,
            path: &Path,
            _source: &str,
            _options: &ScanOptions,
        ) -> Result<ScanResult> {
            Ok(ScanResult {
                file: path.to_path_buf(),
                references: vec![],
                diagnostics: vec![],
                stats: ScanStats::default(),
            })
        }
    }

    #[test]
    fn test_registry_find_by_extension() {
        let mut registry = ExtractorRegistry::new();

        registry.register(Box::new(MockExtractor {
            name: "JavaScript".to_string(),
            extensions: vec![".js", ".ts"],
        }));

        registry.register(Box::new(MockExtractor {
            name: "Python".to_string(),
            extensions: vec![".py"],
        }));

        assert!(registry.find_by_extension(".js").is_some());
        assert!(registry.find_by_extension(".ts").is_some());
        assert!(registry.find_by_extension(".py").is_some());
        assert!(registry.find_by_extension(".rs").is_none());
    }

    #[test]
    fn test_registry_find_by_name() {
        let mut registry = ExtractorRegistry::new();

        registry.register(Box::new(MockExtractor {
            name: "JavaScript".to_string(),
            extensions: vec![".js"],
        }));

        assert!(registry.find_by_name("JavaScript").is_some());
        assert!(registry.find_by_name("javascript").is_some()); // Case insensitive
        assert!(registry.find_by_name("Python").is_none());
    }

    #[test]
    fn test_registry_find_for_path() {
        let mut registry = ExtractorRegistry::new();

        registry.register(Box::new(MockExtractor {
            name: "JavaScript".to_string(),
            extensions: vec![".js", ".mjs"],
        }));

        assert!(registry.find_for_path(Path::new("src/index.mjs")).is_ok());

        let err = registry
            .find_for_path(Path::new("src/lib.rs"))
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension { .. }));
    }

    #[test]
    fn test_validate_unsupported_extension() {
        let extractor = MockExtractor {
            name: "Test".to_string(),
            extensions: vec![".js"],
        };

        assert!(extractor.validate(Path::new("a.js")).is_ok());

        let result = extractor.validate(&PathBuf::from("a.py"));
        assert!(matches!(
            result.unwrap_err(),
            Error::UnsupportedExtension { .. }
        ));
    }
}
