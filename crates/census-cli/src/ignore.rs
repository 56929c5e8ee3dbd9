//! File ignore pattern handling for Census.

use anyhow::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Default patterns that Census ignores.
///
/// These match directories that hold generated or third-party code rather
/// than the project's own modules:
/// - Dependencies (node_modules/)
/// - Build outputs (dist/, build/, out/, .next/)
/// - Version control (.git/)
/// - Cache and coverage directories
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/node_modules/**",
    "**/.git/**",
    "**/.next/**",
    "**/dist/**",
    "**/build/**",
    "**/out/**",
    "**/.cache/**",
    "**/coverage/**",
    "**/.turbo/**",
];

/// Builder for creating ignore pattern sets.
pub struct IgnorePatternBuilder {
    patterns: Vec<String>,
    use_defaults: bool,
}

impl IgnorePatternBuilder {
    /// Create a new ignore pattern builder with defaults enabled.
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            use_defaults: true,
        }
    }

    /// Disable default ignore patterns.
    pub fn no_defaults(mut self) -> Self {
        self.use_defaults = false;
        self
    }

    /// Add multiple custom ignore patterns.
    pub fn add_patterns<I>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for pattern in patterns {
            // Validate pattern
            Glob::new(pattern.as_ref())?;
            self.patterns.push(pattern.as_ref().to_string());
        }
        Ok(self)
    }

    /// Build the final GlobSet.
    pub fn build(self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        if self.use_defaults {
            for pattern in DEFAULT_IGNORE_PATTERNS {
                builder.add(Glob::new(pattern)?);
            }
        }

        for pattern in &self.patterns {
            builder.add(Glob::new(pattern)?);
        }

        Ok(builder.build()?)
    }
}

impl Default for IgnorePatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a path should be ignored based on the given GlobSet.
pub fn should_ignore(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}
