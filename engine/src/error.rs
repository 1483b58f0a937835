// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use controller::ItemId;
use thiserror::Error as DError;

#[derive(Debug, Clone, PartialEq, DError)]
pub enum ErrorKind {
    #[error("No ratings left after joining ratings with movies")]
    EmptyDataset,

    #[error("Couldn't found movie with title({0}) in the rating matrix")]
    UnknownMovie(String),

    #[error("Couldn't found movie with id({0}) in the rating matrix")]
    UnknownMovieId(ItemId),
}
