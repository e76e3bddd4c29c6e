use anyhow::{Result, anyhow};

/// Collapse a raw, possibly multi-line statement into one canonical line.
///
/// Handles the two supported continuation forms: a trailing backslash before
/// a newline, and a single flat parenthesized name list. Parentheses and
/// continuation markers are removed, whitespace runs collapse to single
/// spaces, and the result is trimmed.
pub(crate) fn normalize(stmt: &str) -> Result<String> {
    let opens = stmt.matches('(').count();
    let closes = stmt.matches(')').count();
    if opens != closes {
        return Err(anyhow!("mismatched parens in statement: {stmt:?}"));
    }
    if opens > 1 {
        return Err(anyhow!("too many parens in statement: {stmt:?}"));
    }

    let stripped: String = stmt.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let joined = stripped.replace("\\\n", "");
    Ok(joined.split_whitespace().collect::<Vec<_>>().join(" "))
}
