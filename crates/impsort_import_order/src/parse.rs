use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use log::trace;
use regex::Regex;

use crate::normalize::normalize;
use crate::types::ImportStatement;

static PLAIN_IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^import\s+(.+)$").unwrap());

static FROM_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^from\s+(\S+)\s+import\s+(.*)$").unwrap());

static NAME_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

/// Parse `import a, b, c`. The input may still carry continuation markers or
/// a parenthesized list; it is normalized first. Anything not matching the
/// statement shape is a hard error.
pub(crate) fn parse_plain_import(stmt: &str) -> Result<ImportStatement> {
    let stmt = normalize(stmt)?;
    let caps = PLAIN_IMPORT
        .captures(&stmt)
        .ok_or_else(|| anyhow!("not an import statement: {stmt:?}"))?;

    let names = split_names(&caps[1]);
    trace!("Parsed plain import with {} names", names.len());
    Ok(ImportStatement::Plain { names })
}

/// Parse `from m import a, b, c`. Same normalization and failure behavior as
/// [`parse_plain_import`]; the module token must be whitespace-free.
pub(crate) fn parse_from_import(stmt: &str) -> Result<ImportStatement> {
    let stmt = normalize(stmt)?;
    let caps = FROM_IMPORT
        .captures(&stmt)
        .ok_or_else(|| anyhow!("not a from-import statement: {stmt:?}"))?;

    let module = caps[1].to_string();
    let names = split_names(&caps[2]);
    trace!("Parsed from-import of {} names from '{}'", names.len(), module);
    Ok(ImportStatement::From { module, names })
}

fn split_names(list: &str) -> Vec<String> {
    NAME_SEPARATOR.split(list).map(str::to_string).collect()
}
