//! Source file discovery.
//!
//! Expands the paths given on the command line into the concrete list of
//! files to scan. Explicitly named files are taken as-is (even when an
//! ignore pattern matches them); directories are walked with `.gitignore`
//! support and filtered by extension and ignore patterns.

use anyhow::{bail, Context, Result};
use globset::GlobSet;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Configuration for file discovery.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// File extensions to consider as source files (with the dot).
    pub extensions: Vec<String>,

    /// Respect .gitignore files during directory walks.
    pub respect_gitignore: bool,

    /// Maximum directory depth.
    pub max_depth: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                ".js".to_string(),
                ".jsx".to_string(),
                ".ts".to_string(),
                ".tsx".to_string(),
                ".mjs".to_string(),
                ".cjs".to_string(),
            ],
            respect_gitignore: true,
            max_depth: 100,
        }
    }
}

impl DiscoveryConfig {
    fn matches_extension(&self, path: &Path) -> bool {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        self.extensions.iter().any(|e| e == &extension)
    }
}

/// Expands CLI paths into the ordered list of files to scan.
///
/// Order is deterministic: files appear in the order their path argument
/// was given; within a walked directory they are sorted. A file reached
/// through two arguments is scanned once.
pub fn discover_files(
    paths: &[PathBuf],
    config: &DiscoveryConfig,
    ignore_set: &GlobSet,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for path in paths {
        if !path.exists() {
            bail!("Path does not exist: {}", path.display());
        }

        if path.is_file() {
            // Explicit files bypass ignore patterns but not the extension
            // filter; scanning a .rs file would only produce a parse error.
            if !config.matches_extension(path) {
                bail!(
                    "Unsupported file type: {} (expected one of {})",
                    path.display(),
                    config.extensions.join(", ")
                );
            }
            if seen.insert(path.clone()) {
                files.push(path.clone());
            }
            continue;
        }

        for file in walk_directory(path, config, ignore_set)? {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    Ok(files)
}

fn walk_directory(
    dir: &Path,
    config: &DiscoveryConfig,
    ignore_set: &GlobSet,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(dir)
        .git_ignore(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .git_global(false)
        .follow_links(false)
        .max_depth(Some(config.max_depth))
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.path();
        if !config.matches_extension(path) {
            continue;
        }
        if crate::ignore::should_ignore(path, ignore_set) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    // The walker's order is filesystem-dependent; sort for stable output
    files.sort();
    Ok(files)
}
