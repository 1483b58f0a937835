// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::models::movies::Movie;
use anyhow::Error;
use controller::{error::ErrorKind, Genres, Rating, GENRES};
use csv::ByteRecord;
use std::{fmt::Display, io::Read, str::FromStr};

/// user_id, movie_id, rating, timestamp
pub const RATING_FIELDS: usize = 4;

/// movie_id, title, release_date, video_release_date, IMDb_URL and 19 genre flags
pub const ITEM_FIELDS: usize = 24;

fn csv_reader<R: Read>(rdr: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .quoting(false)
        .from_reader(rdr)
}

fn line_of(record: &ByteRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

// Every byte is its own code point, so decoding never fails
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

struct Fields<'a> {
    file: &'a str,
    line: u64,
    record: &'a ByteRecord,
}

impl<'a> Fields<'a> {
    fn new(file: &'a str, record: &'a ByteRecord, expected: usize) -> Result<Self, ErrorKind> {
        let line = line_of(record);
        if record.len() != expected {
            return Err(ErrorKind::malformed(
                file,
                line,
                format!("expected {} fields, found {}", expected, record.len()),
            ));
        }

        Ok(Self { file, line, record })
    }

    fn raw(&self, idx: usize) -> &'a [u8] {
        self.record.get(idx).unwrap_or_default()
    }

    fn text(&self, idx: usize) -> String {
        latin1(self.raw(idx))
    }

    fn number<T>(&self, idx: usize, name: &str) -> Result<T, ErrorKind>
    where
        T: FromStr,
        T::Err: Display,
    {
        let text = self.text(idx);
        text.trim().parse().map_err(|e: T::Err| {
            ErrorKind::malformed(
                self.file,
                self.line,
                format!("invalid {} '{}': {}", name, text, e),
            )
        })
    }

    fn flag(&self, idx: usize, name: &str) -> Result<bool, ErrorKind> {
        match self.raw(idx) {
            b"0" => Ok(false),
            b"1" => Ok(true),
            other => Err(ErrorKind::malformed(
                self.file,
                self.line,
                format!("invalid {} flag '{}'", name, latin1(other)),
            )),
        }
    }
}

/// Parses tab separated rating rows, scores must fall in `range`
pub fn read_ratings<R: Read>(rdr: R, file: &str, range: (f64, f64)) -> Result<Vec<Rating>, Error> {
    let mut csv = csv_reader(rdr, b'\t');
    let mut ratings = Vec::new();
    let mut record = ByteRecord::new();

    while csv.read_byte_record(&mut record)? {
        let fields = Fields::new(file, &record, RATING_FIELDS)?;

        let user_id = fields.number(0, "user_id")?;
        let item_id = fields.number(1, "movie_id")?;
        let score = f64::from(fields.number::<u8>(2, "rating")?);
        let timestamp = fields.number(3, "timestamp")?;

        let (min, max) = range;
        if score < min || score > max {
            return Err(ErrorKind::malformed(
                file,
                fields.line,
                format!("rating {} outside of [{}, {}]", score, min, max),
            )
            .into());
        }

        ratings.push(Rating {
            user_id,
            item_id,
            score,
            timestamp,
        });
    }

    Ok(ratings)
}

/// Parses pipe separated item rows, text columns are read as Latin-1
pub fn read_movies<R: Read>(rdr: R, file: &str) -> Result<Vec<Movie>, Error> {
    let mut csv = csv_reader(rdr, b'|');
    let mut movies = Vec::new();
    let mut record = ByteRecord::new();

    while csv.read_byte_record(&mut record)? {
        let fields = Fields::new(file, &record, ITEM_FIELDS)?;
        let id = fields.number(0, "movie_id")?;

        let mut genres = Genres::empty();
        for (idx, name) in GENRES.iter().enumerate() {
            if fields.flag(5 + idx, name)? {
                genres.insert(idx);
            }
        }

        movies.push(Movie {
            id,
            title: fields.text(1),
            release_date: fields.text(2),
            video_release_date: fields.text(3),
            imdb_url: fields.text(4),
            genres,
        });
    }

    Ok(movies)
}
