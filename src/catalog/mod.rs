mod lamp;
mod mariadb;
mod observability;

use crate::{
    instance::{port_token, variable_token},
    placeholder::{self, Placeholder},
};

/// A configurable value substituted as `{{NAME}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    pub name: &'static str,
    pub description: &'static str,
    pub default: &'static str,
}

/// A configurable host port substituted as `{{PORT_<SERVICE>}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port {
    pub service: &'static str,
    pub description: &'static str,
    pub default: &'static str,
    /// Container side of the mapping, never prompted for.
    pub internal: &'static str,
}

/// Static description of one generatable stack.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    /// Display name used in the summary, e.g. `MariaDB`.
    pub name: &'static str,
    pub description: &'static str,
    /// Short description printed by `autostack list`.
    pub summary: &'static str,
    pub root_dir: &'static str,
    pub dirs: &'static [&'static str],
    /// Relative path and raw template text, in declaration order.
    pub files: &'static [(&'static str, &'static str)],
    pub variables: &'static [Variable],
    pub ports: &'static [Port],
    /// Ports shown in the summary that are not configurable.
    pub fixed_ports: &'static [(&'static str, &'static str)],
}

impl CatalogEntry {
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.key == name || self.aliases.contains(&name)
    }

    /// Returns every placeholder in the entry's templates that has no
    /// declared variable or port behind it.
    #[must_use]
    pub fn undeclared_placeholders(&self) -> Vec<(&'static str, Placeholder<'static>)> {
        let declared = self
            .variables
            .iter()
            .map(|v| variable_token(v.name))
            .chain(self.ports.iter().map(|p| port_token(p.service)))
            .collect::<Vec<_>>();

        self.files
            .iter()
            .flat_map(|&(path, text)| {
                placeholder::scan(text)
                    .into_iter()
                    .map(move |found| (path, found))
            })
            .filter(|(_, found)| !declared.iter().any(|d| *d == found.token()))
            .collect()
    }
}

pub static CATALOG: [CatalogEntry; 3] = [lamp::ENTRY, observability::ENTRY, mariadb::ENTRY];
