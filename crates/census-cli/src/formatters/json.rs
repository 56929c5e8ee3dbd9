//! JSON formatter for scan reports.

use crate::scan::BatchReport;

pub struct JsonFormatter;

pub fn print_json(report: &BatchReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}
