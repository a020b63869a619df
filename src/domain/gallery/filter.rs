// SPDX-License-Identifier: MPL-2.0
//! Gallery category filtering.
//!
//! Categories come straight from markup (`data-category` on items,
//! `data-filter` on buttons), so they are open-ended strings rather than a
//! closed enum. A filter naming a category no item carries is legal and
//! simply hides everything.

use std::fmt;

/// Token used by filter buttons to select every category.
pub const ALL_TOKEN: &str = "all";

/// A gallery category, e.g. `mains` or `desserts`.
///
/// Surrounding whitespace is trimmed; comparison is otherwise exact,
/// matching attribute equality in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The active gallery filter. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Show every item.
    #[default]
    All,
    /// Show only items of one category.
    Category(Category),
}

impl Filter {
    /// Parses a `data-filter` token; `"all"` is the wildcard.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token == ALL_TOKEN {
            Self::All
        } else {
            Self::Category(Category::new(token))
        }
    }

    /// Returns the `data-filter` token for this filter.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_TOKEN,
            Self::Category(category) => category.as_str(),
        }
    }

    /// Returns `true` if an item of the given category passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }

    /// Returns `true` if this filter restricts anything (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
