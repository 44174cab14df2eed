use std::fmt::Display;
use std::fmt::Formatter;

use crate::generate::Assignment;

/// Write `items` as a bracketed, single-quoted list: `['a', 'b']`.
pub fn write_list<I, S>(f: &mut Formatter<'_>, items: I) -> std::fmt::Result
where
    I: IntoIterator<Item = S>,
    S: Display,
{
    write!(f, "[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "'{item}'")?;
    }
    write!(f, "]")
}

/// The generated combination. Always starts with an empty placeholder entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    entries: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
        }
    }

    pub fn push(&mut self, assignment: &Assignment) {
        self.entries.push(assignment.to_string());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Everything after the placeholder.
    pub fn assignments(&self) -> &[String] {
        &self.entries[1..]
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_list(f, self.entries())
    }
}
