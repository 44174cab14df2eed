use std::fmt::Display;
use std::fmt::Formatter;

use crate::output::write_list;

/// The flags a generated combination is drawn from, in order.
pub const TEMPLATES: [&str; 13] = [
    "--description=string",
    "--enabled=bool",
    "--mode=string",
    "--new-name=string",
    "--organization-token=string",
    "--team-token=string",
    "--user-token=string",
    "--config=string",
    "--log=string",
    "--log-file-path=string",
    "--organization=string",
    "--profile=string",
    "--verbosity=string",
];

/// A flag template such as `--enabled=bool`, split on its first `=`.
///
/// The type tag is only there for whoever reads the template; nothing
/// consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    pub name: &'a str,
    pub type_tag: Option<&'a str>,
}

impl<'a> Template<'a> {
    pub fn parse(template: &'a str) -> Self {
        match template.split_once('=') {
            Some((name, type_tag)) => Self {
                name,
                type_tag: Some(type_tag),
            },
            None => Self {
                name: template,
                type_tag: None,
            },
        }
    }

    /// The split fragments, for the diagnostic trace.
    pub fn fragments(&self) -> Fragments<'_> {
        Fragments(self)
    }
}

pub struct Fragments<'a>(&'a Template<'a>);

impl Display for Fragments<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Template { name, type_tag } = self.0;
        write_list(f, std::iter::once(*name).chain(*type_tag))
    }
}
