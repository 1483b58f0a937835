// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{matrix::RatingsSummary, similarity::Correlations};
use controller::ItemId;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub item_id: ItemId,
    pub title: String,
    pub correlation: f64,
    pub count: usize,
}

impl Recommendation {
    /// Correlation descending, then title and id ascending
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        other
            .correlation
            .partial_cmp(&self.correlation)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.item_id.cmp(&other.item_id))
    }
}

/// Keeps defined correlations of movies with more than `min_ratings` ratings, best first
pub fn rank(
    correlations: &Correlations,
    summary: &RatingsSummary,
    min_ratings: usize,
) -> Vec<Recommendation> {
    let mut ranked: Vec<_> = correlations
        .iter()
        .filter_map(|(item_id, correlation)| {
            let correlation = (*correlation)?;
            let summary = summary.get(item_id)?;

            if summary.count <= min_ratings {
                return None;
            }

            Some(Recommendation {
                item_id: *item_id,
                title: summary.title.clone(),
                correlation,
                count: summary.count,
            })
        })
        .collect();

    ranked.sort_by(Recommendation::ranking_order);
    ranked
}
