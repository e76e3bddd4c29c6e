use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::CheckResult;

/// Print each file's path followed by one indented line per violation. A
/// clean file prints just its path.
pub fn print_report<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    debug!("Printing report for {} files", result.files_checked);

    for report in &result.reports {
        writeln!(writer, "{}", report.file.blue())?;
        for violation in &report.violations {
            writeln!(writer, "\t {}", violation)?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileReport, Violation, ViolationKind};

    fn render(result: &CheckResult) -> String {
        let mut out = Vec::new();
        print_report(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_clean_file_prints_only_its_path() {
        let result = CheckResult {
            reports: vec![FileReport { file: "clean.py".to_string(), violations: vec![] }],
            files_checked: 1,
        };
        let out = render(&result);
        assert!(out.contains("clean.py"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_violations_are_indented_under_the_path() {
        let result = CheckResult {
            reports: vec![FileReport {
                file: "messy.py".to_string(),
                violations: vec![
                    Violation {
                        statement: "import bar".to_string(),
                        kind: ViolationKind::OutOfPlace,
                    },
                    Violation {
                        statement: "import d, c".to_string(),
                        kind: ViolationKind::UnsortedNames,
                    },
                ],
            }],
            files_checked: 1,
        };
        let out = render(&result);
        assert!(out.contains("messy.py"));
        assert!(out.contains("\t import bar is out of place\n"));
        assert!(out.contains("\t import d, c is sorted badly\n"));
    }
}
