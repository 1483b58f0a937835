// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use common_macros::b_tree_map;
use controller::{Entity, Genres, ItemId, Titled};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: ItemId,
    pub title: String,
    pub release_date: String,
    pub video_release_date: String,
    pub imdb_url: String,
    pub genres: Genres,
}

impl Entity for Movie {
    type Id = ItemId;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> BTreeMap<String, String> {
        b_tree_map! {
            "title".into() => self.title.clone(),
            "release_date".into() => self.release_date.clone(),
            "video_release_date".into() => self.video_release_date.clone(),
            "imdb_url".into() => self.imdb_url.clone(),
            "genres".into() => self.genres.to_string(),
        }
    }
}

impl Titled for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn genres(&self) -> Genres {
        self.genres
    }
}
