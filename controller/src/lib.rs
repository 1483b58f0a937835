// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod genres;
pub mod searchby;

use anyhow::Error;
use std::collections::HashMap;

pub use entity::{Entity, Titled, ToTable};
pub use genres::{Genres, GENRES};
pub use searchby::SearchBy;

pub type Result<T> = std::result::Result<T, Error>;
pub type UserId = u32;
pub type ItemId = u32;

/// A raw rating record
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub score: f64,
    pub timestamp: i64,
}

/// A rating joined with the item it refers to
#[derive(Debug, Clone, PartialEq)]
pub struct RatedItem {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub score: f64,
    pub timestamp: i64,
    pub title: String,
    pub genres: Genres,
}

pub trait Controller {
    type Item: Entity<Id = ItemId> + Titled + Clone;

    /// Get the whole item catalog
    fn items(&self) -> Result<Vec<Self::Item>>;

    /// Get every rating record
    fn ratings(&self) -> Result<Vec<Rating>>;

    /// Inner join of ratings with items, ratings on unknown items are dropped
    fn rated_items(&self) -> Result<Vec<RatedItem>> {
        let items: HashMap<ItemId, Self::Item> = self
            .items()?
            .into_iter()
            .map(|item| (item.get_id(), item))
            .collect();

        let ratings = self.ratings()?;
        let total = ratings.len();

        let rated: Vec<_> = ratings
            .into_iter()
            .filter_map(|rating| {
                let item = items.get(&rating.item_id)?;

                Some(RatedItem {
                    user_id: rating.user_id,
                    item_id: rating.item_id,
                    score: rating.score,
                    timestamp: rating.timestamp,
                    title: item.title().to_owned(),
                    genres: item.genres(),
                })
            })
            .collect();

        if rated.len() < total {
            log::debug!(
                "Dropped {} ratings referencing unknown items",
                total - rated.len()
            );
        }

        Ok(rated)
    }
}
