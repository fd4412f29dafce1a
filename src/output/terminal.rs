//! Fixed-width table rendering for terminals.

use colored::Colorize;

use crate::result::ExperimentReport;

const TITLES: &str = "| Algorithm     | CPU    | Input  |    Mean(s)  |  StdDev(s)  |";
const SEPARATOR: &str = "|---------------|--------|--------|-------------|-------------|";

/// Column titles followed by the dashed separator, without a trailing newline.
///
/// Titles are bold when the output stream supports color.
pub fn format_header() -> String {
    format!("{}\n{}", TITLES.bold(), SEPARATOR)
}

/// One table row for `report`, without a trailing newline.
///
/// Mean and standard deviation are printed with 6 decimals.
pub fn format_row(report: &ExperimentReport) -> String {
    format!(
        "| {:<13} | {:<6} | {:>6} | {:>11.6} | {:>11.6} |",
        report.algorithm, report.cpu, report.input_size, report.mean, report.stddev
    )
}

/// Render a full table: header plus one row per report.
pub fn format_table(reports: &[ExperimentReport]) -> String {
    let mut output = format_header();
    output.push('\n');
    for report in reports {
        output.push_str(&format_row(report));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> ExperimentReport {
        ExperimentReport {
            algorithm: "Bubble Sort".to_string(),
            cpu: "Mid".to_string(),
            input_size: 500,
            runs: 5,
            mean: 0.00545,
            stddev: 0.0001234567,
        }
    }

    #[test]
    fn test_row_layout() {
        let row = format_row(&make_report());
        assert_eq!(
            row,
            "| Bubble Sort   | Mid    |    500 |    0.005450 |    0.000123 |"
        );
    }

    #[test]
    fn test_row_width_matches_separator() {
        let row = format_row(&make_report());
        assert_eq!(row.len(), SEPARATOR.len());
        assert_eq!(TITLES.len(), SEPARATOR.len());
    }

    #[test]
    fn test_longest_name_fits_column() {
        let mut report = make_report();
        report.algorithm = "Linear Search".to_string();
        let row = format_row(&report);
        assert_eq!(row.len(), SEPARATOR.len());
        assert!(row.starts_with("| Linear Search | Mid    |"));
    }

    #[test]
    fn test_header_has_two_lines() {
        let header = format_header();
        let lines: Vec<_> = header.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Algorithm"));
        assert!(lines[0].contains("StdDev(s)"));
        assert_eq!(lines[1], SEPARATOR);
    }

    #[test]
    fn test_table_rows() {
        let table = format_table(&[make_report(), make_report()]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.ends_with('\n'));
    }
}
