//! Core data types for Census extraction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a module reference was written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "binding", rename_all = "snake_case")]
pub enum ReferenceKind {
    /// A declarative `import ... from '...'` statement.
    Static(BindingForm),

    /// A runtime `import(...)` expression.
    Dynamic,

    /// A CommonJS `require(...)` call.
    Require,
}

impl ReferenceKind {
    /// Returns the lowercase name used in CLI output and filters.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceKind::Static(_) => "static import",
            ReferenceKind::Dynamic => "dynamic import",
            ReferenceKind::Require => "require",
        }
    }
}

/// Binding form of a static import declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingForm {
    /// `import x from '...'`
    Default,

    /// `import * as x from '...'`
    Namespace,

    /// `import { x } from '...'`
    Named,

    /// `import '...'` (no bindings, imported for effect only)
    SideEffectOnly,
}

impl BindingForm {
    /// Returns the display name used in human-readable output.
    pub fn display_name(&self) -> &'static str {
        match self {
            BindingForm::Default => "default",
            BindingForm::Namespace => "namespace",
            BindingForm::Named => "named",
            BindingForm::SideEffectOnly => "side-effect",
        }
    }
}

/// The module specifier of a reference.
///
/// `Unresolved` is a defined, expected outcome: the argument to an
/// `import()`/`require()` call could not be determined without executing
/// the program. It is data, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specifier {
    /// Specifier known at parse time (e.g. "react", "./utils").
    Literal(String),

    /// Specifier is dynamically computed and cannot be determined statically.
    Unresolved,
}

impl Specifier {
    /// Returns the literal text, if the specifier is statically known.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Specifier::Literal(text) => Some(text),
            Specifier::Unresolved => None,
        }
    }
}

/// Byte range of a syntax node in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Start byte offset.
    pub start: u32,

    /// End byte offset.
    pub end: u32,
}

/// One module reference found in a source file.
///
/// Records are produced in source order during a single scan pass and are
/// immutable thereafter. Duplicate specifiers are preserved as separate
/// records; deduplication, if wanted, belongs to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReference {
    /// How the reference was written.
    #[serde(flatten)]
    pub kind: ReferenceKind,

    /// The referenced module, or `Unresolved` for dynamic specifiers.
    pub specifier: Specifier,

    /// Location of the originating expression.
    pub span: SourceSpan,

    /// Order of appearance in the file, 0-based.
    pub sequence: usize,
}

impl ModuleReference {
    /// Whether the referenced module is known without executing the program.
    pub fn is_static(&self) -> bool {
        matches!(self.specifier, Specifier::Literal(_))
    }

    /// Binding form, for static import declarations only.
    pub fn binding_form(&self) -> Option<BindingForm> {
        match self.kind {
            ReferenceKind::Static(form) => Some(form),
            _ => None,
        }
    }

    /// The specifier text, if statically known.
    pub fn specifier_text(&self) -> Option<&str> {
        self.specifier.as_literal()
    }
}

/// Result of scanning one source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// The scanned file.
    pub file: PathBuf,

    /// All references, in source order.
    pub references: Vec<ModuleReference>,

    /// Non-fatal problems encountered while scanning (recovered parse
    /// errors). A fatal parse failure is an `Error`, not a diagnostic.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<ScanDiagnostic>,

    /// Summary statistics for this file.
    pub stats: ScanStats,
}

/// Summary statistics for a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of references found.
    pub total_references: usize,

    /// Number of static import declarations.
    pub static_imports: usize,

    /// Number of dynamic `import()` expressions.
    pub dynamic_imports: usize,

    /// Number of `require()` calls.
    pub require_calls: usize,

    /// Number of references whose specifier could not be determined.
    pub unresolved: usize,

    /// Scan duration in milliseconds.
    pub duration_ms: u64,
}

impl ScanStats {
    /// Computes statistics from a slice of references.
    ///
    /// `duration_ms` is left at zero; the caller stamps it.
    pub fn from_references(references: &[ModuleReference]) -> Self {
        let mut stats = ScanStats {
            total_references: references.len(),
            ..Default::default()
        };

        for reference in references {
            match reference.kind {
                ReferenceKind::Static(_) => stats.static_imports += 1,
                ReferenceKind::Dynamic => stats.dynamic_imports += 1,
                ReferenceKind::Require => stats.require_calls += 1,
            }
            if !reference.is_static() {
                stats.unresolved += 1;
            }
        }

        stats
    }

    /// Accumulates another file's statistics into this one.
    pub fn merge(&mut self, other: &ScanStats) {
        self.total_references += other.total_references;
        self.static_imports += other.static_imports;
        self.dynamic_imports += other.dynamic_imports;
        self.require_calls += other.require_calls;
        self.unresolved += other.unresolved;
        self.duration_ms += other.duration_ms;
    }
}

/// A non-fatal problem encountered while scanning a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDiagnostic {
    /// File where the problem occurred.
    pub file: PathBuf,

    /// Human-readable message.
    pub message: String,

    /// Diagnostic severity.
    pub severity: Severity,
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning: scan continues, result is complete.
    Warning,

    /// Error: the parser recovered, result may be incomplete.
    Error,
}

/// Options for a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Fold `+` concatenations of string literals into a single specifier.
    ///
    /// Off by default: `import('a' + 'b')` is reported as unresolved unless
    /// this is set, matching the strict policy that only a bare literal is
    /// statically known.
    pub fold_concatenations: bool,

    /// Maximum file size in bytes for `extract_file` (None = unlimited).
    pub max_file_size: Option<u64>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            fold_concatenations: false,
            max_file_size: Some(10 * 1024 * 1024),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(kind: ReferenceKind, specifier: Specifier, sequence: usize) -> ModuleReference {
        ModuleReference {
            kind,
            specifier,
            span: SourceSpan { start: 0, end: 0 },
            sequence,
        }
    }

    #[test]
    fn test_reference_serialization() {
        let reference = ModuleReference {
            kind: ReferenceKind::Static(BindingForm::Default),
            specifier: Specifier::Literal("react".to_string()),
            span: SourceSpan { start: 0, end: 26 },
            sequence: 0,
        };

        let json = serde_json::to_string(&reference).unwrap();
        let deserialized: ModuleReference = serde_json::from_str(&json).unwrap();
        assert_eq!(reference, deserialized);
    }

    #[test]
    fn test_unresolved_reference_serialization() {
        let reference = ModuleReference {
            kind: ReferenceKind::Dynamic,
            specifier: Specifier::Unresolved,
            span: SourceSpan { start: 10, end: 32 },
            sequence: 3,
        };

        let json = serde_json::to_string(&reference).unwrap();
        let deserialized: ModuleReference = serde_json::from_str(&json).unwrap();
        assert_eq!(reference, deserialized);
        assert!(!deserialized.is_static());
    }

    #[test]
    fn test_binding_form_only_for_static_imports() {
        let static_import = reference(
            ReferenceKind::Static(BindingForm::Namespace),
            Specifier::Literal("fs".to_string()),
            0,
        );
        assert_eq!(static_import.binding_form(), Some(BindingForm::Namespace));

        let dynamic = reference(ReferenceKind::Dynamic, Specifier::Unresolved, 1);
        assert_eq!(dynamic.binding_form(), None);

        let require = reference(
            ReferenceKind::Require,
            Specifier::Literal("path".to_string()),
            2,
        );
        assert_eq!(require.binding_form(), None);
    }

    #[test]
    fn test_specifier_text() {
        let known = reference(
            ReferenceKind::Require,
            Specifier::Literal("lodash".to_string()),
            0,
        );
        assert_eq!(known.specifier_text(), Some("lodash"));

        let unknown = reference(ReferenceKind::Require, Specifier::Unresolved, 1);
        assert_eq!(unknown.specifier_text(), None);
    }

    #[test]
    fn test_stats_from_references() {
        let references = vec![
            reference(
                ReferenceKind::Static(BindingForm::Default),
                Specifier::Literal("a".to_string()),
                0,
            ),
            reference(
                ReferenceKind::Static(BindingForm::Named),
                Specifier::Literal("b".to_string()),
                1,
            ),
            reference(
                ReferenceKind::Dynamic,
                Specifier::Literal("c".to_string()),
                2,
            ),
            reference(ReferenceKind::Dynamic, Specifier::Unresolved, 3),
            reference(ReferenceKind::Require, Specifier::Unresolved, 4),
        ];

        let stats = ScanStats::from_references(&references);
        assert_eq!(stats.total_references, 5);
        assert_eq!(stats.static_imports, 2);
        assert_eq!(stats.dynamic_imports, 2);
        assert_eq!(stats.require_calls, 1);
        assert_eq!(stats.unresolved, 2);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = ScanStats {
            total_references: 3,
            static_imports: 2,
            dynamic_imports: 1,
            require_calls: 0,
            unresolved: 1,
            duration_ms: 5,
        };

        total.merge(&ScanStats {
            total_references: 2,
            static_imports: 0,
            dynamic_imports: 0,
            require_calls: 2,
            unresolved: 1,
            duration_ms: 3,
        });

        assert_eq!(total.total_references, 5);
        assert_eq!(total.static_imports, 2);
        assert_eq!(total.require_calls, 2);
        assert_eq!(total.unresolved, 2);
        assert_eq!(total.duration_ms, 8);
    }

    #[test]
    fn test_scan_result_serialization() {
        let result = ScanResult {
            file: PathBuf::from("src/app.ts"),
            references: vec![reference(
                ReferenceKind::Static(BindingForm::SideEffectOnly),
                Specifier::Literal("./polyfills".to_string()),
                0,
            )],
            diagnostics: vec![],
            stats: ScanStats::default(),
        };

        let json = serde_json::to_string_pretty(&result).unwrap();
        // Empty diagnostics are skipped entirely
        assert!(!json.contains("diagnostics"));

        let deserialized: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.references.len(), 1);
        assert!(deserialized.diagnostics.is_empty());
    }

    #[test]
    fn test_scan_options_defaults() {
        let options = ScanOptions::default();
        assert!(!options.fold_concatenations);
        assert_eq!(options.max_file_size, Some(10 * 1024 * 1024));
    }

    #[test]
    fn test_duplicates_are_distinct_records() {
        let first = reference(
            ReferenceKind::Static(BindingForm::Default),
            Specifier::Literal("duplicate".to_string()),
            0,
        );
        let second = reference(
            ReferenceKind::Static(BindingForm::Default),
            Specifier::Literal("duplicate".to_string()),
            1,
        );

        // Same specifier, distinct records by sequence
        assert_ne!(first, second);
        assert_eq!(first.specifier, second.specifier);
    }
}
