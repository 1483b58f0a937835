// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::genres::Genres;
use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, table, Table};
use std::collections::BTreeMap;

pub trait Entity {
    type Id;

    fn get_id(&self) -> Self::Id;
    fn get_data(&self) -> BTreeMap<String, String> {
        Default::default()
    }
}

/// Entities that can be picked from a catalog by their display name
pub trait Titled {
    fn title(&self) -> &str;
    fn genres(&self) -> Genres {
        Genres::empty()
    }
}

pub trait ToTable {
    fn to_table(&self) -> Table;
}

impl<I: ToString, E: Entity<Id = I>> ToTable for E {
    fn to_table(&self) -> Table {
        let mut table = table![["id", self.get_id()]];

        for (key, val) in self.get_data() {
            table.add_row(row![key, val]);
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}
