use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::fs;

use crate::{
    cluster::clusters,
    config::Config,
    types::{CheckResult, FileReport, ImportStatement, Violation, ViolationKind},
};

/// Check one cluster, left to right. Each statement's own name list must be
/// sorted, and each statement must not sort before its predecessor. Both
/// checks run independently, so one statement can trip both.
pub(crate) fn check_cluster(cluster: &[ImportStatement]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (idx, stmt) in cluster.iter().enumerate() {
        if !stmt.names_sorted() {
            trace!("Unsorted names in '{}'", stmt);
            violations.push(Violation {
                statement: stmt.to_string(),
                kind: ViolationKind::UnsortedNames,
            });
        }
        if idx > 0 && cluster[idx - 1] > *stmt {
            trace!("'{}' sorts before its predecessor", stmt);
            violations.push(Violation {
                statement: stmt.to_string(),
                kind: ViolationKind::OutOfPlace,
            });
        }
    }

    violations
}

/// Check a whole source text: violations from every cluster, in scan order.
/// A malformed import statement is a hard error that ends the check.
pub fn check_source(src: &str) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();
    for cluster in clusters(src.lines()) {
        violations.extend(check_cluster(&cluster?));
    }
    Ok(violations)
}

/// Check every configured file, sequentially, and collect per-file reports.
pub fn run_import_order_check(cfg: Config) -> Result<CheckResult> {
    info!("Starting import order check on {} files", cfg.files.len());

    let mut reports = Vec::new();
    for file in &cfg.files {
        debug!("Checking {}", file.display());
        let src = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let violations = check_source(&src)
            .with_context(|| format!("Failed to check {}", file.display()))?;
        debug!("Found {} violations in {}", violations.len(), file.display());
        reports.push(FileReport { file: file.display().to_string(), violations });
    }

    let files_checked = reports.len();
    let total: usize = reports.iter().map(|r| r.violations.len()).sum();
    info!("Import order check complete. Found {} violations in {} files", total, files_checked);

    Ok(CheckResult { reports, files_checked })
}
