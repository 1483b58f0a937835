// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use controller::{Genres, RatedItem};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{distances::pearson_correlation, matrix, similarity::correlate};
use rand::{thread_rng, Rng};
use std::collections::BTreeMap;

fn generate_columns(size: u32) -> (BTreeMap<u32, f64>, BTreeMap<u32, f64>) {
    let mut rng = thread_rng();

    let mut a = BTreeMap::new();
    let mut b = BTreeMap::new();

    for i in 0..size {
        a.insert(i, f64::from(rng.gen_range(1, 6)));

        // Only part of the users rated both
        if i > (0.3 * f64::from(size)) as u32 {
            b.insert(i, f64::from(rng.gen_range(1, 6)));
        }
    }

    (a, b)
}

fn generate_rows(users: u32, movies: u32, density: f64) -> Vec<RatedItem> {
    let mut rng = thread_rng();
    let mut rows = Vec::new();

    for user_id in 0..users {
        for item_id in 0..movies {
            if rng.gen_bool(density) {
                rows.push(RatedItem {
                    user_id,
                    item_id,
                    score: f64::from(rng.gen_range(1, 6)),
                    timestamp: 0,
                    title: format!("Movie {}", item_id),
                    genres: Genres::empty(),
                });
            }
        }
    }

    rows
}

fn pearson_1000(c: &mut Criterion) {
    let (a, b) = generate_columns(1000);

    c.bench_function("pearson 1000", |bench| {
        bench.iter(|| pearson_correlation(black_box(&a), black_box(&b)))
    });
}

fn pearson_10_000(c: &mut Criterion) {
    let (a, b) = generate_columns(10_000);

    c.bench_function("pearson 10000", |bench| {
        bench.iter(|| pearson_correlation(black_box(&a), black_box(&b)))
    });
}

// Roughly the shape of MovieLens 100k
fn correlate_movie_lens_shape(c: &mut Criterion) {
    let rows = generate_rows(943, 1682, 0.063);
    let (matrix, _) = matrix::build(&rows).expect("generated rows are not empty");

    c.bench_function("correlate 943x1682", |bench| {
        bench.iter(|| correlate(black_box(&matrix), black_box(0)))
    });
}

criterion_group!(
    benches,
    pearson_1000,
    pearson_10_000,
    correlate_movie_lens_shape
);
criterion_main!(benches);
