//! Merging of index → value maps under a caller-supplied operator.
//!
//! [`merged`] produces the union of two maps, combining values on keys present
//! in both; [`intersected`] keeps only the shared keys. Both fold the smaller
//! map into (or look it up against) the larger one, but the operator always
//! receives `(left, right)` in argument order, so non-commutative operators
//! behave the same whichever side happens to be larger.
//!
//! Nothing here depends on the iteration order of the underlying map.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Associative-array operations needed by the merge routines.
pub trait MergeMap: Sized {
    type Key;
    type Value;

    /// Number of stored entries.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;
    fn insert(&mut self, key: Self::Key, value: Self::Value);
    /// Insert `value`, or replace an existing value `old` with `f(old, value)`.
    fn upsert<F>(&mut self, key: Self::Key, value: Self::Value, f: F)
    where
        F: FnOnce(Self::Value, Self::Value) -> Self::Value;
    fn iter_pairs(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
    fn into_pairs(self) -> impl Iterator<Item = (Self::Key, Self::Value)>;
}

impl<K: Ord, V> MergeMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }
    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }
    fn upsert<F: FnOnce(V, V) -> V>(&mut self, key: K, value: V, f: F) {
        let value = match BTreeMap::remove(self, &key) {
            Some(old) => f(old, value),
            None => value,
        };
        BTreeMap::insert(self, key, value);
    }
    fn iter_pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        BTreeMap::iter(self)
    }
    fn into_pairs(self) -> impl Iterator<Item = (K, V)> {
        BTreeMap::into_iter(self)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> MergeMap for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }
    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }
    fn upsert<F: FnOnce(V, V) -> V>(&mut self, key: K, value: V, f: F) {
        let value = match HashMap::remove(self, &key) {
            Some(old) => f(old, value),
            None => value,
        };
        HashMap::insert(self, key, value);
    }
    fn iter_pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        HashMap::iter(self)
    }
    fn into_pairs(self) -> impl Iterator<Item = (K, V)> {
        HashMap::into_iter(self)
    }
}

/// Fold `addendum` into `base` in place.
///
/// Keys only in `addendum` are copied over; keys in both become
/// `f(base_value, addendum_value)`.
pub fn merge_into<M, F>(base: &mut M, addendum: M, mut f: F)
where
    M: MergeMap,
    F: FnMut(M::Value, M::Value) -> M::Value,
{
    for (key, value) in addendum.into_pairs() {
        base.upsert(key, value, &mut f);
    }
}

/// Union of `left` and `right`, with `f(left_value, right_value)` on shared keys.
pub fn merged<M, F>(left: M, right: M, mut f: F) -> M
where
    M: MergeMap,
    F: FnMut(M::Value, M::Value) -> M::Value,
{
    if left.len() >= right.len() {
        let mut base = left;
        merge_into(&mut base, right, f);
        base
    } else {
        let mut base = right;
        merge_into(&mut base, left, |r, l| f(l, r));
        base
    }
}

/// Shared keys of `left` and `right`, each mapped to `f(left_value, right_value)`.
pub fn intersected<M, F>(left: &M, right: &M, mut f: F) -> M
where
    M: MergeMap + Default,
    M::Key: Clone,
    F: FnMut(&M::Value, &M::Value) -> M::Value,
{
    let mut out = M::default();
    if left.len() <= right.len() {
        for (key, l) in left.iter_pairs() {
            if let Some(r) = right.get(key) {
                out.insert(key.clone(), f(l, r));
            }
        }
    } else {
        for (key, r) in right.iter_pairs() {
            if let Some(l) = left.get(key) {
                out.insert(key.clone(), f(l, r));
            }
        }
    }
    out
}
