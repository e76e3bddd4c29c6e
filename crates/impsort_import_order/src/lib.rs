//! Import order checking for Python-style source files.
//!
//! This crate scans source files for runs of adjacent import statements
//! ("clusters") and verifies two conventions: every statement's imported
//! names are alphabetically sorted, and statements within a cluster are in
//! sorted order, with `from` imports ahead of plain imports.
//!
//! # Examples
//!
//! ## Checking source text
//!
//! ```
//! use impsort_import_order::check_source;
//!
//! # fn main() -> anyhow::Result<()> {
//! let violations = check_source("import foo\nimport bar")?;
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].to_string(), "import bar is out of place");
//! # Ok(())
//! # }
//! ```
//!
//! ## Checking files
//!
//! ```no_run
//! use impsort_import_order::{Config, run_import_order_check};
//! use std::io::BufWriter;
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { files: vec![std::path::PathBuf::from("module.py")] };
//!
//! let result = run_import_order_check(cfg)?;
//!
//! // Use buffered output to reduce syscalls.
//! let mut stdout = BufWriter::new(std::io::stdout());
//! impsort_import_order::print_report(&mut stdout, &result)?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod cluster;
mod config;
mod normalize;
mod parse;
mod reporter;
mod types;

// Re-export public API
pub use checker::{check_source, run_import_order_check};
pub use cluster::{Cluster, Clusters, clusters};
pub use config::Config;
pub use reporter::print_report;
pub use types::{CheckResult, FileReport, ImportStatement, Violation, ViolationKind};
