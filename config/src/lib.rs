// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::Error;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MIN_RATINGS: usize = 100;
pub const DEFAULT_TOP: usize = 6;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub ratings: PathBuf,
    pub items: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            ratings: PathBuf::from("ml-100k/u.data"),
            items: PathBuf::from("ml-100k/u.item"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommendConfig {
    /// Candidates need strictly more ratings than this
    pub min_ratings: usize,

    /// Rows shown by the shell, the self-match included
    pub top: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_ratings: DEFAULT_MIN_RATINGS,
            top: DEFAULT_TOP,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub recommend: RecommendConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let parsed: Self = toml::from_str(&contents)?;
        Ok(parsed)
    }
}
