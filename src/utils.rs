// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use common_macros::b_tree_map;
use controller::{Entity, Genres, ItemId};
use engine::Recommendation;
use prettytable::{cell, format::consts::FORMAT_NO_LINESEP_WITH_TITLE, row, Table};
use std::collections::BTreeMap;

/// What the shell knows about a catalog movie
#[derive(Debug, Clone)]
pub(crate) struct MovieInfo {
    pub id: ItemId,
    pub title: String,
    pub genres: Genres,
    pub count: usize,
    pub mean: Option<f64>,
}

impl Entity for MovieInfo {
    type Id = ItemId;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> BTreeMap<String, String> {
        b_tree_map! {
            "title".into() => self.title.clone(),
            "genres".into() => self.genres.to_string(),
            "ratings".into() => self.count.to_string(),
            "mean".into() => self.mean.map_or_else(|| "-".into(), |mean| format!("{:.2}", mean)),
        }
    }
}

pub(crate) fn recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["#", "title", "correlation", "ratings"]);

    for (rank, rec) in recommendations.iter().enumerate() {
        table.add_row(row![
            rank + 1,
            rec.title,
            format!("{:.4}", rec.correlation),
            rec.count
        ]);
    }

    table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_recommendation() {
        let recommendations = vec![
            Recommendation {
                item_id: 50,
                title: "Star Wars (1977)".into(),
                correlation: 1.0,
                count: 583,
            },
            Recommendation {
                item_id: 172,
                title: "Empire Strikes Back, The (1980)".into(),
                correlation: 0.747_98,
                count: 367,
            },
        ];

        let table = recommendations_table(&recommendations);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Empire Strikes Back, The (1980)"));
        assert!(rendered.contains("0.7480"));
    }

    #[test]
    fn unrated_movie_info_has_no_mean() {
        let info = MovieInfo {
            id: 1682,
            title: "Scream of Stone (Schrei aus Stein) (1991)".into(),
            genres: Genres::empty(),
            count: 0,
            mean: None,
        };

        let data = info.get_data();
        assert_eq!(data["ratings"], "0");
        assert_eq!(data["mean"], "-");
    }
}
