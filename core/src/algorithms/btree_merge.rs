// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::{Ord, Ordering};
use std::collections::BTreeMap;

/// Merges two sorted maps in one pass. Keys present on only one side are
/// copied over. For shared keys `merge_func` decides: `Ok(Some(v))`
/// keeps `v`, `Ok(None)` drops the key, and `Err` aborts the whole merge.
pub(crate) fn btree_merge<K, V, E, F>(
    left: &BTreeMap<K, V>,
    right: &BTreeMap<K, V>,
    merge_func: F,
) -> Result<BTreeMap<K, V>, E>
where
    K: Ord + Clone,
    V: Clone,
    F: Fn(&V, &V) -> Result<Option<V>, E>,
{
    let mut res = BTreeMap::new();
    let mut a = left.iter().peekable();
    let mut b = right.iter().peekable();
    loop {
        match (a.peek().cloned(), b.peek().cloned()) {
            (Some((akey, aval)), Some((bkey, bval))) => match akey.cmp(bkey) {
                Ordering::Equal => {
                    if let Some(v) = merge_func(aval, bval)? {
                        res.insert(akey.clone(), v);
                    }
                    a.next();
                    b.next();
                }
                Ordering::Greater => {
                    res.insert(bkey.clone(), bval.clone());
                    b.next();
                }
                Ordering::Less => {
                    res.insert(akey.clone(), aval.clone());
                    a.next();
                }
            },
            (None, Some((bkey, bval))) => {
                res.insert(bkey.clone(), bval.clone());
                b.next();
            }
            (Some((akey, aval)), None) => {
                res.insert(akey.clone(), aval.clone());
                a.next();
            }
            (None, None) => break,
        }
    }
    Ok(res)
}
