//! Same-day holiday name handling.
//!
//! Several holidays falling on one date share a single stored string, joined by
//! [`SEPARATOR`].

pub const SEPARATOR: &str = ", ";

/// Merges `new` into the names already stored for a date.
///
/// Returns `None` when the stored value already covers `new` (or `new` covers the
/// stored value), so the entry stays untouched. Otherwise `new` is appended.
pub fn merge(existing: &str, new: &str) -> Option<String> {
    if existing.contains(new) || new.contains(existing) {
        return None;
    }
    Some(format!("{existing}{SEPARATOR}{new}"))
}

/// Individual names of a stored value, in insertion order.
pub fn split(names: &str) -> impl Iterator<Item = &str> {
    names.split(SEPARATOR).filter(|it| !it.is_empty())
}

/// How [`get_named`](crate::Holidays::get_named) compares a holiday name with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameLookup {
    #[default]
    IContains,
    Contains,
    Exact,
    IExact,
    StartsWith,
    IStartsWith,
}

impl NameLookup {
    pub fn matches(self, candidate: &str, query: &str) -> bool {
        match self {
            NameLookup::Contains => candidate.contains(query),
            NameLookup::Exact => candidate == query,
            NameLookup::StartsWith => candidate.starts_with(query),
            NameLookup::IContains => candidate.to_lowercase().contains(&query.to_lowercase()),
            NameLookup::IExact => candidate.to_lowercase() == query.to_lowercase(),
            NameLookup::IStartsWith => candidate
                .to_lowercase()
                .starts_with(&query.to_lowercase()),
        }
    }
}
