//! Batch scan orchestration.
//!
//! Each file's extraction is independent, so the batch dispatches one
//! blocking task per file on a multi-thread tokio runtime and reassembles
//! the results in discovery order. A file that fails to parse becomes an
//! error entry in the report; it never aborts the rest of the batch.

use anyhow::{Context, Result};
use census_core::{
    ExtractorRegistry, ScanDiagnostic, ScanOptions, ScanResult, ScanStats, Severity,
};
use census_extract::{CensusConfig, JsExtractor};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::discovery::{discover_files, DiscoveryConfig};
use crate::ignore::IgnorePatternBuilder;

/// Options for running a batch scan.
pub struct ScanRunOptions {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub fold_concat: bool,
    pub no_ignore: bool,
    pub no_gitignore: bool,
    pub ignore_patterns: Vec<String>,
}

/// Aggregated outcome of scanning a set of files.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Per-file results, in discovery order.
    pub files: Vec<ScanResult>,

    /// Files that could not be scanned at all (I/O or fatal parse errors).
    pub errors: Vec<ScanDiagnostic>,

    /// Statistics summed over all scanned files.
    pub summary: ScanStats,
}

impl BatchReport {
    /// Whether any file failed to scan.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Runs a batch scan over the given paths.
pub fn run_scan(options: &ScanRunOptions) -> Result<BatchReport> {
    // Configuration: explicit --config wins, otherwise .census.toml from
    // the working directory, otherwise defaults.
    let config = match &options.config {
        Some(path) => CensusConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CensusConfig::load_or_default(Path::new("."))?,
    };

    let mut scan_options = config.scan_options();
    if options.fold_concat {
        scan_options.fold_concatenations = true;
    }

    let ignore_set = if options.no_ignore {
        IgnorePatternBuilder::new().no_defaults().build()
    } else {
        IgnorePatternBuilder::new()
            .add_patterns(&config.files.ignore)
            .context("Invalid ignore pattern in config")?
            .add_patterns(&options.ignore_patterns)
            .context("Invalid ignore pattern")?
            .build()
    }
    .context("Failed to build ignore patterns")?;

    let discovery = DiscoveryConfig {
        extensions: config.files.extensions.clone(),
        respect_gitignore: config.files.respect_gitignore
            && !options.no_gitignore
            && !options.no_ignore,
        ..Default::default()
    };

    let files = discover_files(&options.paths, &discovery, &ignore_set)?;

    let mut registry = ExtractorRegistry::new();
    registry.register(Box::new(JsExtractor::new()));

    scan_files(files, Arc::new(registry), Arc::new(scan_options))
}

/// Scans the given files concurrently, one blocking task per file.
fn scan_files(
    files: Vec<PathBuf>,
    registry: Arc<ExtractorRegistry>,
    scan_options: Arc<ScanOptions>,
) -> Result<BatchReport> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;

    let count = files.len();
    let outcomes = runtime.block_on(async {
        let mut join_set = tokio::task::JoinSet::new();

        for (index, file) in files.into_iter().enumerate() {
            let registry = Arc::clone(&registry);
            let scan_options = Arc::clone(&scan_options);
            join_set.spawn_blocking(move || {
                let outcome = registry
                    .find_for_path(&file)
                    .and_then(|extractor| extractor.extract_file(&file, &scan_options));
                (index, file, outcome)
            });
        }

        // Tasks finish in any order; slot them back by index so the report
        // stays in discovery order.
        let mut outcomes: Vec<Option<(PathBuf, census_core::Result<ScanResult>)>> =
            (0..count).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            let (index, file, outcome) = joined.context("Scan task panicked")?;
            outcomes[index] = Some((file, outcome));
        }
        anyhow::Ok(outcomes)
    })?;

    let mut report = BatchReport {
        files: Vec::new(),
        errors: Vec::new(),
        summary: ScanStats::default(),
    };

    for slot in outcomes {
        let (file, outcome) = slot.expect("every scan task reports back");
        match outcome {
            Ok(result) => {
                report.summary.merge(&result.stats);
                report.files.push(result);
            }
            Err(error) => {
                tracing::error!(file = %file.display(), "{error}");
                report.errors.push(ScanDiagnostic {
                    file,
                    message: error.to_string(),
                    severity: Severity::Error,
                });
            }
        }
    }

    Ok(report)
}
