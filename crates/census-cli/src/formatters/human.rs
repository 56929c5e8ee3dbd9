//! Human-readable formatter for scan reports.

use crate::scan::BatchReport;
use census_core::{ModuleReference, ReferenceKind, Specifier};
use colored::Colorize;

pub struct HumanFormatter;

pub fn print_report(report: &BatchReport) {
    for result in &report.files {
        if result.references.is_empty() && result.diagnostics.is_empty() {
            continue;
        }

        println!(
            "\n{} ({} references):",
            result.file.display().to_string().bold(),
            result.references.len()
        );

        for reference in &result.references {
            println!("  {}", format_reference(reference));
        }

        for diagnostic in &result.diagnostics {
            println!("  {} {}", "recovered parse error:".red(), diagnostic.message);
        }
    }

    if !report.errors.is_empty() {
        println!("\n{}:", "Errors".red().bold());
        for error in &report.errors {
            println!("  {}: {}", error.file.display(), error.message);
        }
    }

    println!("\nSummary:");
    println!("  Files scanned: {}", report.files.len());
    println!("  Total references: {}", report.summary.total_references);
    println!("  Static imports: {}", report.summary.static_imports);
    println!("  Dynamic imports: {}", report.summary.dynamic_imports);
    println!("  Require calls: {}", report.summary.require_calls);
    println!("  Unresolved: {}", report.summary.unresolved);
    println!("  Duration: {}ms", report.summary.duration_ms);
}

fn format_reference(reference: &ModuleReference) -> String {
    let label = match reference.kind {
        ReferenceKind::Static(form) => format!("import [{}]", form.display_name()),
        ReferenceKind::Dynamic => "import()".to_string(),
        ReferenceKind::Require => "require()".to_string(),
    };

    match &reference.specifier {
        Specifier::Literal(text) => format!("{:>4}  {:<22} {}", reference.sequence, label, text),
        Specifier::Unresolved => format!(
            "{:>4}  {:<22} {}",
            reference.sequence,
            label,
            "<unresolved>".yellow()
        ),
    }
}
