// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::error::ErrorKind;
use anyhow::Error;
use controller::{Genres, ItemId, RatedItem, UserId};
use std::collections::{hash_map, BTreeMap, HashMap, HashSet};

/// Ratings of a single movie, ordered by user
pub type Column = BTreeMap<UserId, f64>;

/// Sparse user by movie matrix, stored as one column per movie
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingMatrix {
    columns: HashMap<ItemId, Column>,
    users: usize,
}

impl RatingMatrix {
    pub fn column(&self, item_id: &ItemId) -> Option<&Column> {
        self.columns.get(item_id)
    }

    pub fn columns(&self) -> hash_map::Iter<'_, ItemId, Column> {
        self.columns.iter()
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.columns.contains_key(item_id)
    }

    pub fn get(&self, user_id: &UserId, item_id: &ItemId) -> Option<f64> {
        self.columns.get(item_id)?.get(user_id).copied()
    }

    pub fn n_items(&self) -> usize {
        self.columns.len()
    }

    pub fn n_users(&self) -> usize {
        self.users
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub title: String,
    pub genres: Genres,
    pub count: usize,
    pub mean: f64,
}

/// Ratings count and mean for every column of the matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsSummary {
    entries: HashMap<ItemId, Summary>,
}

impl RatingsSummary {
    pub fn get(&self, item_id: &ItemId) -> Option<&Summary> {
        self.entries.get(item_id)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, ItemId, Summary> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pivots the joined rows into the matrix and its summary.
///
/// Repeated ratings of a movie by the same user collapse into their mean
/// inside the matrix, while the summary counts every row.
pub fn build(rows: &[RatedItem]) -> Result<(RatingMatrix, RatingsSummary), Error> {
    if rows.is_empty() {
        return Err(ErrorKind::EmptyDataset.into());
    }

    let mut cells: HashMap<ItemId, BTreeMap<UserId, (f64, usize)>> = HashMap::new();
    let mut entries: HashMap<ItemId, Summary> = HashMap::new();
    let mut users = HashSet::new();

    for row in rows {
        let (sum, n) = cells
            .entry(row.item_id)
            .or_default()
            .entry(row.user_id)
            .or_insert((0.0, 0));
        *sum += row.score;
        *n += 1;

        // Mean holds the running sum until every row is seen
        let summary = entries.entry(row.item_id).or_insert_with(|| Summary {
            title: row.title.clone(),
            genres: row.genres,
            count: 0,
            mean: 0.0,
        });
        summary.count += 1;
        summary.mean += row.score;

        users.insert(row.user_id);
    }

    let columns: HashMap<_, Column> = cells
        .into_iter()
        .map(|(item_id, cells)| {
            let column = cells
                .into_iter()
                .map(|(user_id, (sum, n))| (user_id, sum / n as f64))
                .collect();

            (item_id, column)
        })
        .collect();

    for summary in entries.values_mut() {
        summary.mean /= summary.count as f64;
    }

    let matrix = RatingMatrix {
        columns,
        users: users.len(),
    };

    log::info!(
        "Built rating matrix with {} users and {} movies from {} ratings",
        matrix.n_users(),
        matrix.n_items(),
        rows.len()
    );

    Ok((matrix, RatingsSummary { entries }))
}
