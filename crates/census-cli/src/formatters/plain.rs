//! Plain formatter: bare specifier list, one per line.
//!
//! Unresolved references have no text to print; they are omitted here and
//! surface through the human/JSON formats and the warning log instead.

use crate::scan::BatchReport;
use std::collections::HashSet;

pub struct PlainFormatter {
    /// Print each specifier once.
    pub unique: bool,
}

pub fn print_specifiers(report: &BatchReport, unique: bool) {
    for line in specifier_lines(report, unique) {
        println!("{}", line);
    }
}

fn specifier_lines(report: &BatchReport, unique: bool) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut lines = Vec::new();

    for result in &report.files {
        for reference in &result.references {
            if let Some(text) = reference.specifier_text() {
                if unique && !seen.insert(text) {
                    continue;
                }
                lines.push(text.to_string());
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_core::{
        BindingForm, ModuleReference, ReferenceKind, ScanResult, ScanStats, SourceSpan, Specifier,
    };
    use std::path::PathBuf;

    fn report_with(specifiers: &[Option<&str>]) -> BatchReport {
        let references = specifiers
            .iter()
            .enumerate()
            .map(|(sequence, specifier)| ModuleReference {
                kind: ReferenceKind::Static(BindingForm::Default),
                specifier: match specifier {
                    Some(text) => Specifier::Literal(text.to_string()),
                    None => Specifier::Unresolved,
                },
                span: SourceSpan { start: 0, end: 0 },
                sequence,
            })
            .collect::<Vec<_>>();

        let stats = ScanStats::from_references(&references);
        BatchReport {
            files: vec![ScanResult {
                file: PathBuf::from("test.js"),
                references,
                diagnostics: vec![],
                stats: stats.clone(),
            }],
            errors: vec![],
            summary: stats,
        }
    }

    #[test]
    fn test_plain_output_preserves_duplicates() {
        let report = report_with(&[Some("duplicate"), Some("duplicate"), Some("other")]);
        let lines = specifier_lines(&report, false);
        assert_eq!(lines, vec!["duplicate", "duplicate", "other"]);
    }

    #[test]
    fn test_unique_collapses_duplicates() {
        let report = report_with(&[Some("duplicate"), Some("duplicate"), Some("other")]);
        let lines = specifier_lines(&report, true);
        assert_eq!(lines, vec!["duplicate", "other"]);
    }

    #[test]
    fn test_unresolved_specifiers_are_omitted() {
        let report = report_with(&[Some("known"), None]);
        let lines = specifier_lines(&report, false);
        assert_eq!(lines, vec!["known"]);
    }
}
