// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, PartialEq, DError)]
pub enum ErrorKind {
    #[error("Malformed input in {file} (line {line}): {reason}")]
    MalformedInput {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("Couldn't found entity with id({0})")]
    NotFoundById(String),

    #[error("Couldn't found entity with name({0})")]
    NotFoundByName(String),
}

impl ErrorKind {
    pub fn malformed(file: &str, line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            file: file.into(),
            line,
            reason: reason.into(),
        }
    }
}
