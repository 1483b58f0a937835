// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod cache;
pub mod distances;
pub mod error;
pub mod matrix;
pub mod ranker;
pub mod similarity;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::DEFAULT_MIN_RATINGS;
pub use ranker::Recommendation;

use crate::{
    cache::{DatasetKey, Fingerprint},
    error::ErrorKind,
    matrix::{RatingMatrix, RatingsSummary},
};
use anyhow::Error;
use config::DatasetConfig;
use controller::{
    error::ErrorKind as StoreError, Controller, Entity, Genres, ItemId, SearchBy, Titled,
};
use movie_lens::MovieLensController;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::Arc,
};

/// A catalog movie, rated or not
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    pub genres: Genres,
}

/// Rating matrix, ratings summary and movie catalog of one dataset load
#[derive(Debug, Clone)]
pub struct Dataset {
    matrix: RatingMatrix,
    summary: RatingsSummary,
    listings: BTreeMap<ItemId, Listing>,
    catalog: Vec<String>,
    titles: HashMap<String, BTreeSet<ItemId>>,
    fingerprint: Fingerprint,
}

impl Dataset {
    pub fn with_controller<C: Controller>(controller: &C) -> Result<Self, Error> {
        let rows = controller.rated_items()?;
        let (matrix, summary) = matrix::build(&rows)?;

        // A repeated id keeps its last row, as the join does
        let listings: BTreeMap<_, _> = controller
            .items()?
            .into_iter()
            .map(|item| {
                let listing = Listing {
                    title: item.title().to_owned(),
                    genres: item.genres(),
                };

                (item.get_id(), listing)
            })
            .collect();

        let mut titles: HashMap<String, BTreeSet<ItemId>> = HashMap::new();
        for (id, listing) in &listings {
            titles.entry(listing.title.clone()).or_default().insert(*id);
        }

        let mut catalog: Vec<_> = titles.keys().cloned().collect();
        catalog.sort();

        Ok(Self {
            matrix,
            summary,
            listings,
            catalog,
            titles,
            fingerprint: Fingerprint::default(),
        })
    }

    pub fn matrix(&self) -> &RatingMatrix {
        &self.matrix
    }

    pub fn summary(&self) -> &RatingsSummary {
        &self.summary
    }

    /// Every catalog title, sorted and without duplicates
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn listing(&self, id: ItemId) -> Option<&Listing> {
        self.listings.get(&id)
    }

    /// Catalog ids matching `by`, in id order
    pub fn find(&self, by: &SearchBy) -> Result<Vec<ItemId>, Error> {
        let ids: Vec<_> = self
            .listings
            .iter()
            .filter(|(id, listing)| by.matches(&id.to_string(), &listing.title))
            .map(|(id, _)| *id)
            .collect();

        if ids.is_empty() {
            let kind = match by {
                SearchBy::Id(id) => StoreError::NotFoundById(id.clone()),
                SearchBy::Name(name) | SearchBy::Partial(name) => {
                    StoreError::NotFoundByName(name.clone())
                }
            };

            return Err(kind.into());
        }

        Ok(ids)
    }

    /// One catalog movie for `by`, a title prefers the rated movie `resolve` picks
    pub fn lookup(&self, by: &SearchBy) -> Result<ItemId, Error> {
        if let SearchBy::Name(title) = by {
            if let Ok(id) = self.resolve(title) {
                return Ok(id);
            }
        }

        let ids = self.find(by)?;
        Ok(ids[0])
    }

    /// Finds the rated movie behind a title, the most rated one if several share it
    pub fn resolve(&self, title: &str) -> Result<ItemId, Error> {
        let candidates: Vec<_> = self
            .titles
            .get(title)
            .into_iter()
            .flatten()
            .filter_map(|id| Some((*id, self.summary.get(id)?.count)))
            .collect();

        if candidates.len() > 1 {
            log::warn!(
                "Title '{}' is shared by {} movies, using the most rated one",
                title,
                candidates.len()
            );
        }

        candidates
            .into_iter()
            .max_by(|(a_id, a_count), (b_id, b_count)| {
                a_count.cmp(b_count).then_with(|| b_id.cmp(a_id))
            })
            .map(|(id, _)| id)
            .ok_or_else(|| ErrorKind::UnknownMovie(title.into()).into())
    }

    pub fn recommend(&self, title: &str, min_ratings: usize) -> Result<Vec<Recommendation>, Error> {
        let item_id = self.resolve(title)?;
        self.recommend_by_id(item_id, min_ratings)
    }

    pub fn recommend_by_id(
        &self,
        item_id: ItemId,
        min_ratings: usize,
    ) -> Result<Vec<Recommendation>, Error> {
        let correlations = similarity::correlate(&self.matrix, item_id)?;
        Ok(ranker::rank(&correlations, &self.summary, min_ratings))
    }
}

fn load(key: &DatasetKey) -> Result<Dataset, Error> {
    let fingerprint = key.fingerprint();
    let controller = MovieLensController::open(&key.ratings, &key.items)?;

    let mut dataset = Dataset::with_controller(&controller)?;
    dataset.fingerprint = fingerprint;

    Ok(dataset)
}

/// Loads and builds the dataset behind `config`, once per process.
///
/// The cached dataset is rebuilt when its files were modified since.
pub fn load_and_build(config: &DatasetConfig) -> Result<Arc<Dataset>, Error> {
    let key = DatasetKey::from(config);
    let dataset = cache::get_or_load(&key, || load(&key))?;

    if dataset.fingerprint != key.fingerprint() {
        log::warn!("Dataset files {} changed, rebuilding", key);
        cache::invalidate(&key);
        return cache::get_or_load(&key, || load(&key));
    }

    Ok(dataset)
}

/// Drops the cached dataset behind `config` and builds it again
pub fn reload(config: &DatasetConfig) -> Result<Arc<Dataset>, Error> {
    cache::invalidate(&DatasetKey::from(config));
    load_and_build(config)
}

/// Movies similar to `title`, best first, among those with more than `min_ratings` ratings
pub fn recommend(
    dataset: &Dataset,
    title: &str,
    min_ratings: usize,
) -> Result<Vec<Recommendation>, Error> {
    dataset.recommend(title, min_ratings)
}
