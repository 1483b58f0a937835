// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod models;
pub mod reader;

use crate::models::movies::Movie;
use anyhow::{Context, Error};
use controller::{Controller, Rating};
use std::{fs::File, io::BufReader, io::Read, path::Path};

/// Lowest and highest MovieLens rating
pub const SCORE_RANGE: (f64, f64) = (1.0, 5.0);

/// MovieLens 100k, backed by the `u.data` and `u.item` flat files
#[derive(Debug, Clone)]
pub struct MovieLensController {
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
}

fn open_file(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path).with_context(|| format!("Couldn't open {}", path.display()))?;
    Ok(BufReader::new(file))
}

impl MovieLensController {
    pub fn open(ratings: impl AsRef<Path>, items: impl AsRef<Path>) -> Result<Self, Error> {
        let ratings = ratings.as_ref();
        let items = items.as_ref();

        let ratings = reader::read_ratings(
            open_file(ratings)?,
            &ratings.display().to_string(),
            SCORE_RANGE,
        )?;
        let movies = reader::read_movies(open_file(items)?, &items.display().to_string())?;

        log::info!(
            "Loaded {} ratings and {} movies",
            ratings.len(),
            movies.len()
        );

        Ok(Self { movies, ratings })
    }

    pub fn from_readers(ratings: impl Read, items: impl Read) -> Result<Self, Error> {
        let ratings = reader::read_ratings(ratings, "ratings", SCORE_RANGE)?;
        let movies = reader::read_movies(items, "items")?;

        Ok(Self { movies, ratings })
    }
}

impl Controller for MovieLensController {
    type Item = Movie;

    fn items(&self) -> Result<Vec<Self::Item>, Error> {
        Ok(self.movies.clone())
    }

    fn ratings(&self) -> Result<Vec<Rating>, Error> {
        Ok(self.ratings.clone())
    }
}
