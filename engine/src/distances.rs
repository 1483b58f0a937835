use crate::utils::common_keys_iter;
use num_traits::float::Float;
use std::{collections::BTreeMap, ops::AddAssign};

/// Pearson correlation of `a` and `b` over the keys both of them hold.
///
/// `None` stands for an undefined coefficient: less than two common keys,
/// or no variance on one of the sides. Defined values are kept in `[-1, 1]`.
pub fn pearson_correlation<K, V>(a: &BTreeMap<K, V>, b: &BTreeMap<K, V>) -> Option<V>
where
    K: Ord,
    V: Float + AddAssign,
{
    let mut sum_x = V::zero();
    let mut sum_y = V::zero();
    let mut n = 0usize;

    for (_, (x, y)) in common_keys_iter(a, b) {
        sum_x += *x;
        sum_y += *y;
        n += 1;
    }

    if n < 2 {
        return None;
    }

    let n = V::from(n)?;
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut cov = V::zero();
    let mut var_x = V::zero();
    let mut var_y = V::zero();

    for (_, (x, y)) in common_keys_iter(a, b) {
        let dx = *x - mean_x;
        let dy = *y - mean_y;

        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x.is_zero() || var_y.is_zero() {
        return None;
    }

    let pearson = cov / (var_x * var_y).sqrt();
    if pearson.is_nan() || pearson.is_infinite() {
        None
    } else {
        Some(pearson.max(-V::one()).min(V::one()))
    }
}
