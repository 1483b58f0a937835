// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommendation-system.
//
// recommendation-system is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommendation-system is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommendation-system.  If not, see <http://www.gnu.org/licenses/>.

use std::cmp::Ordering;
use std::collections::{btree_map::Iter as MapIter, BTreeMap};
use std::iter::Peekable;

// Both maps are walked in key order at the same time, a sorted merge join.
// Whichever side has the smaller key advances, so the iteration ends as
// soon as one of them runs out and pairs always come out in key order.
pub fn common_keys_iter<'a, K, V>(
    a: &'a BTreeMap<K, V>,
    b: &'a BTreeMap<K, V>,
) -> CommonKeyIterator<'a, K, V>
where
    K: Ord,
{
    CommonKeyIterator {
        a: a.iter().peekable(),
        b: b.iter().peekable(),
    }
}

#[derive(Debug)]
pub struct CommonKeyIterator<'a, K, V>
where
    K: Ord,
{
    a: Peekable<MapIter<'a, K, V>>,
    b: Peekable<MapIter<'a, K, V>>,
}

impl<'a, K, V> Iterator for CommonKeyIterator<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, (&'a V, &'a V));

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (a_key, _) = *self.a.peek()?;
            let (b_key, _) = *self.b.peek()?;

            match a_key.cmp(b_key) {
                Ordering::Less => {
                    self.a.next();
                }

                Ordering::Greater => {
                    self.b.next();
                }

                Ordering::Equal => {
                    let (key, a_val) = self.a.next()?;
                    let (_, b_val) = self.b.next()?;

                    break Some((key, (a_val, b_val)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_macros::b_tree_map;

    #[test]
    fn common_key_iterator() {
        let a = b_tree_map! {
            0 => 0.,
            2 => 0.,
            3 => 0.,
            5 => 0.,
        };

        let b = b_tree_map! {
            0 => 2.,
            1 => 1.,
            2 => 2.,
            5 => 2.,
        };

        let keys: Vec<_> = common_keys_iter(&a, &b).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![0, 2, 5]);
    }

    #[test]
    fn common_key_iterator_pairs_values() {
        let a = b_tree_map! { 1 => 10., 4 => 40. };
        let b = b_tree_map! { 4 => 4., 9 => 9. };

        let pairs: Vec<_> = common_keys_iter(&a, &b).map(|(_, (x, y))| (*x, *y)).collect();
        assert_eq!(pairs, vec![(40., 4.)]);
    }

    #[test]
    fn empty_side_ends_early() {
        let a: BTreeMap<u32, f64> = BTreeMap::new();
        let b = b_tree_map! { 1 => 1. };

        assert_eq!(common_keys_iter(&a, &b).count(), 0);
        assert_eq!(common_keys_iter(&b, &a).count(), 0);
    }
}
