//! JavaScript/TypeScript reference extraction using oxc.
//!
//! This crate provides a [`ReferenceExtractor`](census_core::ReferenceExtractor)
//! implementation that parses one source file with the oxc parser and walks
//! the AST in a single pass, recording every module reference in source order.
//!
//! # Example
//!
//! ```
//! use census_core::{ReferenceExtractor, ScanOptions};
//! use census_extract::JsExtractor;
//! use std::path::Path;
//!
//! let extractor = JsExtractor::new();
//!
//! let result = extractor.extract_source(
//!     Path::new("app.js"),
//!     "import x from 'pkg'; import('./lazy');",
//!     &ScanOptions::default(),
//! )?;
//!
//! assert_eq!(result.references.len(), 2);
//! # Ok::<(), census_core::Error>(())
//! ```

pub mod extractor;
pub mod folding;
pub mod toml_config;
mod visitor;

pub use extractor::JsExtractor;
pub use toml_config::CensusConfig;
