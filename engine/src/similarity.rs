// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{distances::pearson_correlation, error::ErrorKind, matrix::RatingMatrix};
use anyhow::Error;
use controller::ItemId;
use std::collections::HashMap;

/// Correlation of every movie with a target, `None` when undefined
pub type Correlations = HashMap<ItemId, Option<f64>>;

/// Correlates the target column with every column of the matrix, itself included
pub fn correlate(matrix: &RatingMatrix, target: ItemId) -> Result<Correlations, Error> {
    let target_column = matrix
        .column(&target)
        .ok_or(ErrorKind::UnknownMovieId(target))?;

    let correlations: Correlations = matrix
        .columns()
        .map(|(item_id, column)| {
            let correlation = if *item_id == target {
                pearson_correlation(target_column, target_column).map(|_| 1.0)
            } else {
                pearson_correlation(target_column, column)
            };

            (*item_id, correlation)
        })
        .collect();

    log::debug!(
        "Correlated movie id({}) with {} movies, {} defined",
        target,
        correlations.len(),
        correlations.values().filter(|c| c.is_some()).count()
    );

    Ok(correlations)
}
