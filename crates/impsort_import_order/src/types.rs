use std::cmp::Ordering;
use std::fmt;

/// One parsed import statement.
///
/// `Plain` is `import a, b, c`; `From` is `from m import a, b, c`. Names are
/// kept in source order and not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatement {
    Plain { names: Vec<String> },
    From { module: String, names: Vec<String> },
}

impl ImportStatement {
    pub fn names(&self) -> &[String] {
        match self {
            ImportStatement::Plain { names } => names,
            ImportStatement::From { names, .. } => names,
        }
    }

    /// Whether the statement's own name list is non-decreasing. Zero or one
    /// name counts as sorted.
    pub fn names_sorted(&self) -> bool {
        self.names().windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl Ord for ImportStatement {
    /// Total order over statements within a cluster: from-imports sort
    /// before plain imports; plain imports compare by their name list;
    /// from-imports compare by module name, then by their name list.
    fn cmp(&self, other: &Self) -> Ordering {
        use ImportStatement::{From, Plain};
        match (self, other) {
            (Plain { names: a }, Plain { names: b }) => a.cmp(b),
            (From { module: a_mod, names: a }, From { module: b_mod, names: b }) => {
                a_mod.cmp(b_mod).then_with(|| a.cmp(b))
            }
            (From { .. }, Plain { .. }) => Ordering::Less,
            (Plain { .. }, From { .. }) => Ordering::Greater,
        }
    }
}

impl PartialOrd for ImportStatement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportStatement::Plain { names } => write!(f, "import {}", names.join(", ")),
            ImportStatement::From { module, names } => {
                write!(f, "from {} import {}", module, names.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The statement's own name list is not sorted.
    UnsortedNames,
    /// The statement sorts before its predecessor in the cluster.
    OutOfPlace,
}

/// A single sort-order violation, carrying the rendered statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub statement: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::UnsortedNames => write!(f, "{} is sorted badly", self.statement),
            ViolationKind::OutOfPlace => write!(f, "{} is out of place", self.statement),
        }
    }
}

/// Violations found in one checked file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub reports: Vec<FileReport>,
    pub files_checked: usize,
}
