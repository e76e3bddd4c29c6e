use anyhow::Result;
use log::trace;

use crate::parse::{parse_from_import, parse_plain_import};
use crate::types::ImportStatement;

/// A maximal run of consecutive import-statement lines, parsed.
pub type Cluster = Vec<ImportStatement>;

/// Iterate over the import clusters of `lines`.
///
/// Clusters come out lazily, in source order, each a non-empty group of
/// adjacent import statements. Any non-import line (blank lines included)
/// closes the open cluster. The sequence is single-pass; callers needing
/// multiple passes must collect it.
pub fn clusters<'a, I>(lines: I) -> Clusters<I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    Clusters { lines: lines.into_iter(), done: false }
}

pub struct Clusters<I> {
    lines: I,
    done: bool,
}

impl<'a, I: Iterator<Item = &'a str>> Clusters<I> {
    /// Consume continuation lines until the statement is complete: it keeps
    /// growing while it ends with a backslash or has an unclosed paren.
    /// Lines are rejoined with a newline so the normalizer sees the same
    /// text a raw multi-line statement would carry.
    fn assemble_statement(&mut self, first: &str) -> String {
        let mut stmt = first.to_string();
        while needs_continuation(&stmt) {
            match self.lines.next() {
                Some(line) => {
                    stmt.push('\n');
                    stmt.push_str(line);
                }
                // Out of input mid-statement; let the parser reject it.
                None => break,
            }
        }
        stmt
    }
}

fn needs_continuation(stmt: &str) -> bool {
    stmt.ends_with('\\') || stmt.matches('(').count() > stmt.matches(')').count()
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for Clusters<I> {
    type Item = Result<Cluster>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut cluster = Cluster::new();
        while let Some(line) = self.lines.next() {
            let line = line.trim();
            let is_from = line.starts_with("from ");

            if is_from || line.starts_with("import ") {
                let stmt = self.assemble_statement(line);
                let parsed =
                    if is_from { parse_from_import(&stmt) } else { parse_plain_import(&stmt) };
                match parsed {
                    Ok(entity) => cluster.push(entity),
                    Err(err) => {
                        self.done = true;
                        return Some(Err(err));
                    }
                }
            } else if !cluster.is_empty() {
                trace!("Cluster closed with {} statements", cluster.len());
                return Some(Ok(cluster));
            }
        }

        self.done = true;
        if cluster.is_empty() { None } else { Some(Ok(cluster)) }
    }
}
