//! Census CLI library components.
//!
//! This crate provides the command-line interface for Census's reference
//! extraction. The main binary is in `main.rs`.

// Module declarations
pub mod commands;
pub mod discovery;
pub mod formatters;
pub mod ignore;
pub mod scan;

// Re-export core types for convenience
pub use census_core::{ModuleReference, ScanOptions, ScanResult};
