// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::Dataset;
use anyhow::Error;
use controller::{Controller, Entity, ItemId, Rating, Titled, UserId};

#[derive(Debug, Clone)]
pub struct Film {
    pub id: ItemId,
    pub title: String,
}

impl Entity for Film {
    type Id = ItemId;

    fn get_id(&self) -> Self::Id {
        self.id
    }
}

impl Titled for Film {
    fn title(&self) -> &str {
        &self.title
    }
}

/// In-memory controller for engine tests
#[derive(Debug, Clone, Default)]
pub struct MemoryController {
    pub films: Vec<Film>,
    pub ratings: Vec<Rating>,
}

impl MemoryController {
    pub fn film(mut self, id: ItemId, title: &str) -> Self {
        self.films.push(Film {
            id,
            title: title.into(),
        });
        self
    }

    pub fn rate(mut self, user_id: UserId, item_id: ItemId, score: f64) -> Self {
        self.ratings.push(Rating {
            user_id,
            item_id,
            score,
            timestamp: 0,
        });
        self
    }
}

impl Controller for MemoryController {
    type Item = Film;

    fn items(&self) -> Result<Vec<Self::Item>, Error> {
        Ok(self.films.clone())
    }

    fn ratings(&self) -> Result<Vec<Rating>, Error> {
        Ok(self.ratings.clone())
    }
}

/// Users 1..=3 rate A as [5, 3, 1] and B as [4, 2, 1]
pub fn sample_controller() -> MemoryController {
    MemoryController::default()
        .film(1, "A")
        .film(2, "B")
        .film(3, "C")
        .film(4, "Lonely")
        .film(5, "Unrated")
        .rate(1, 1, 5.)
        .rate(2, 1, 3.)
        .rate(3, 1, 1.)
        .rate(1, 2, 4.)
        .rate(2, 2, 2.)
        .rate(3, 2, 1.)
        .rate(1, 3, 2.)
        .rate(2, 3, 4.)
        .rate(3, 3, 5.)
        .rate(4, 3, 3.)
        .rate(9, 4, 4.)
}

pub fn sample_dataset() -> Result<Dataset, Error> {
    Dataset::with_controller(&sample_controller())
}
