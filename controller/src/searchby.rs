// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt::{self, Display};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchBy {
    Id(String),
    Name(String),
    Partial(String),
}

impl SearchBy {
    pub fn id(id: &str) -> Self {
        Self::Id(id.into())
    }

    pub fn name(name: &str) -> Self {
        Self::Name(name.into())
    }

    pub fn partial(part: &str) -> Self {
        Self::Partial(part.into())
    }

    /// Whether an entity with this id and name matches, `Partial` ignores case
    pub fn matches(&self, id: &str, name: &str) -> bool {
        match self {
            SearchBy::Id(wanted) => wanted.trim() == id,
            SearchBy::Name(wanted) => wanted == name,
            SearchBy::Partial(part) => name.to_lowercase().contains(&part.to_lowercase()),
        }
    }
}

impl Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBy::Id(id) => write!(f, "id({})", id),
            SearchBy::Name(name) => write!(f, "name({})", name),
            SearchBy::Partial(part) => write!(f, "partial({})", part),
        }
    }
}
