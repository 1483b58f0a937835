// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::fmt::{self, Display};

/// Genre flag columns, in file order
pub const GENRES: [&str; 19] = [
    "unknown",
    "Action",
    "Adventure",
    "Animation",
    "Children's",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Fantasy",
    "Film-Noir",
    "Horror",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
    "Western",
];

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Genres(u32);

impl Genres {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn from_flags(flags: &[bool]) -> Self {
        let mut genres = Self::empty();
        for (idx, _) in flags.iter().enumerate().filter(|(_, flag)| **flag) {
            genres.insert(idx);
        }

        genres
    }

    /// Out of range indices are ignored
    pub fn insert(&mut self, idx: usize) {
        if idx < GENRES.len() {
            self.0 |= 1 << idx;
        }
    }

    pub fn contains(&self, idx: usize) -> bool {
        idx < GENRES.len() && self.0 & (1 << idx) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        GENRES
            .iter()
            .enumerate()
            .filter(move |(idx, _)| self.contains(*idx))
            .map(|(_, name)| *name)
    }
}

impl Display for Genres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.names().collect();
        write!(f, "{}", names.join(", "))
    }
}
