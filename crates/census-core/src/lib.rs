//! Census Core - Extractor abstraction and core types.
//!
//! This crate provides the foundational types and traits for Census's
//! language-agnostic module-reference extraction. It defines:
//!
//! - [`ReferenceExtractor`]: Trait for implementing language-specific extractors
//! - [`ExtractorRegistry`]: Registry for discovering and selecting extractors
//! - [`ModuleReference`]: Common representation of a module reference
//! - [`ScanOptions`] and [`ScanResult`]: Core scan types
//!
//! # Architecture
//!
//! Census uses an extractor-based architecture where language-specific
//! functionality is delegated to extractor implementations:
//!
//! ```text
//! ┌─────────────────┐
//! │   census-cli    │  (User interface)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  census-core    │  (This crate - extractor abstraction)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ census-extract  │  (Oxc-based JavaScript/TypeScript)
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use census_core::{ExtractorRegistry, ReferenceExtractor, ScanOptions};
//! use std::path::Path;
//!
//! let mut registry = ExtractorRegistry::new();
//! // Register extractors here
//!
//! let extractor = registry
//!     .find_by_extension(".ts")
//!     .expect("No TypeScript extractor");
//!
//! let result = extractor.extract_file(Path::new("src/index.ts"), &ScanOptions::default())?;
//! println!("Found {} references", result.references.len());
//! # Ok::<(), census_core::Error>(())
//! ```

pub mod error;
pub mod extractor;
pub mod types;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use extractor::{ExtractorRegistry, ReferenceExtractor};
pub use types::{
    BindingForm, ModuleReference, ReferenceKind, ScanDiagnostic, ScanOptions, ScanResult,
    ScanStats, Severity, SourceSpan, Specifier,
};
