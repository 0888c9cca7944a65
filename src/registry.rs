use crate::{
    catalog::{CatalogEntry, CATALOG},
    error::{Error, Result},
};

/// One line of `autostack list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub name: &'static str,
    pub alias: Option<&'static str>,
    pub description: &'static str,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.alias {
            Some(alias) => write!(f, "{} ({alias}) - {}", self.name, self.description),
            None => write!(f, "{} - {}", self.name, self.description),
        }
    }
}

/// Looks up a stack by its name or one of its aliases.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedStack`] carrying `name` if nothing matches.
pub fn resolve(name: &str) -> Result<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.matches(name))
        .ok_or_else(|| Error::UnrecognizedStack(name.to_owned()))
}

/// All stacks in catalog order.
pub fn list() -> impl Iterator<Item = Listing> {
    CATALOG.iter().map(|entry| Listing {
        name: entry.key,
        alias: entry.aliases.first().copied(),
        description: entry.summary,
    })
}
