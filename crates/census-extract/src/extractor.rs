//! Oxc parse driver for the JavaScript/TypeScript extractor.

use census_core::{
    Error, ReferenceExtractor, Result, ScanDiagnostic, ScanOptions, ScanResult, ScanStats,
    Severity,
};
use oxc_allocator::Allocator;
use oxc_ast_visit::Visit;
use oxc_parser::Parser;
use oxc_span::SourceType;
use std::path::Path;
use std::time::Instant;

use crate::visitor::ReferencePass;

/// JavaScript/TypeScript reference extractor backed by the oxc parser.
///
/// The extractor holds no cross-call state: one instance may serve any
/// number of concurrent per-file scans.
///
/// # Examples
///
/// ```
/// use census_core::{ReferenceExtractor, ScanOptions};
/// use census_extract::JsExtractor;
/// use std::path::Path;
///
/// let extractor = JsExtractor::new();
/// let result = extractor.extract_source(
///     Path::new("app.js"),
///     "const pkg = require('pkg');",
///     &ScanOptions::default(),
/// )?;
/// assert_eq!(result.references[0].specifier_text(), Some("pkg"));
/// # Ok::<(), census_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct JsExtractor;

impl JsExtractor {
    /// Creates a new JavaScript extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceExtractor for JsExtractor {
    fn name(&self) -> &str {
        "JavaScript"
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs"]
    }

    fn extract_file(&self, path: &Path, options: &ScanOptions) -> Result<ScanResult> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        if let Some(max_allowed) = options.max_file_size {
            if metadata.len() > max_allowed {
                return Err(Error::FileTooLarge {
                    path: path.to_path_buf(),
                    size: metadata.len(),
                    max_allowed,
                });
            }
        }

        let source = std::fs::read_to_string(path)?;
        self.extract_source(path, &source, options)
    }

    fn extract_source(
        &self,
        path: &Path,
        source: &str,
        options: &ScanOptions,
    ) -> Result<ScanResult> {
        let start = Instant::now();

        // Unknown extensions still scan as module JS so that source handed
        // in directly (stdin, tests) does not need a real file on disk.
        let source_type = SourceType::from_path(path)
            .unwrap_or_else(|_| SourceType::default().with_module(true));

        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type).parse();

        if ret.panicked {
            let message = if ret.errors.is_empty() {
                "parser gave up without diagnostics".to_string()
            } else {
                ret.errors
                    .iter()
                    .map(|error| error.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            return Err(Error::Parse {
                file: path.to_path_buf(),
                message,
            });
        }

        // The parser recovered from these; the scan runs on what it built
        // and the problems ride along as diagnostics.
        let diagnostics: Vec<ScanDiagnostic> = ret
            .errors
            .iter()
            .map(|error| ScanDiagnostic {
                file: path.to_path_buf(),
                message: error.to_string(),
                severity: Severity::Error,
            })
            .collect();

        let mut pass = ReferencePass::new(path, options.fold_concatenations);
        pass.visit_program(&ret.program);
        let references = pass.into_references();

        let mut stats = ScanStats::from_references(&references);
        stats.duration_ms = start.elapsed().as_millis() as u64;

        Ok(ScanResult {
            file: path.to_path_buf(),
            references,
            diagnostics,
            stats,
        })
    }
}
