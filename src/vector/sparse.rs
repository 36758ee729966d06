//! Sparse vectors: an ordered index → value map plus a logical length.
//!
//! Absent indices are implicit zeros. Construction from dense data stores
//! only the non-zero entries; the map handed to [`SparseVector::from_map`] is
//! taken as-is. Zero writes through [`SparseVector::set`] follow the vector's
//! [`ZeroWritePolicy`]: under the default `Purge` the entry is removed, under
//! `Store` the explicit zero is kept until [`SparseVector::prune`] runs.
//!
//! Results of addition are not compacted, so `v + (-v)` may hold explicit
//! zeros. Equality compares the represented values, not the stored maps.
//!
//! Scaling only touches stored entries. With a non-finite scalar (NaN or ±inf)
//! absent positions stay zero, whereas the dense product has NaN there
//! (`inf * 0`, `NaN * 0`).

use std::collections::BTreeMap;
use std::fmt;

use num_traits::NumCast;

use crate::config::options::{SparseOptions, ZeroWritePolicy};
use crate::core::ops::impl_vector_ops;
use crate::core::traits::{InnerProductSpace, Scalar, VectorSpace};
use crate::error::{Result, check_index, check_lengths};
use crate::utils::merge::{intersected, merged};
use crate::vector::dense::DenseVector;
use crate::vector::fmt_elements;

#[derive(Clone, Debug)]
pub struct SparseVector<T> {
    entries: BTreeMap<usize, T>,
    count: usize,
    zero_writes: ZeroWritePolicy,
}

impl<T: Scalar> SparseVector<T> {
    /// Take `entries` as the stored values of a vector of length `count`.
    ///
    /// Zero values are kept; filtering is the caller's job. Fails if a key
    /// lies outside `[0, count)`.
    pub fn from_map<I>(entries: I, count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let entries: BTreeMap<usize, T> = entries.into_iter().collect();
        if let Some((&index, _)) = entries.last_key_value() {
            check_index(index, count)?;
        }
        Ok(Self::from_parts(entries, count, ZeroWritePolicy::default()))
    }

    /// Keep every non-zero entry of `elements`; length is `elements.len()`.
    pub fn from_elements(elements: &[T]) -> Self {
        let entries = elements
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != T::zero())
            .map(|(i, &v)| (i, v))
            .collect();
        Self::from_parts(entries, elements.len(), ZeroWritePolicy::default())
    }

    /// Like [`from_elements`](Self::from_elements), also dropping entries with
    /// |v| <= `opts.drop_tol`, and adopting `opts.zero_writes`. Zeros are never
    /// stored, even for a negative or NaN tolerance.
    pub fn from_elements_with(elements: &[T], opts: &SparseOptions) -> Self {
        let tol = <T as NumCast>::from(opts.drop_tol).unwrap_or_else(T::zero);
        let entries = elements
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != T::zero() && !(v.abs() <= tol))
            .map(|(i, &v)| (i, v))
            .collect();
        Self::from_parts(entries, elements.len(), opts.zero_writes)
    }

    pub fn from_dense(v: &DenseVector<T>) -> Self {
        Self::from_elements(v.as_slice())
    }

    /// The all-zero vector of length `count`, storing nothing.
    pub fn zeros(count: usize) -> Self {
        Self::from_parts(BTreeMap::new(), count, ZeroWritePolicy::default())
    }

    fn from_parts(entries: BTreeMap<usize, T>, count: usize, zero_writes: ZeroWritePolicy) -> Self {
        Self { entries, count, zero_writes }
    }

    /// Same vector with a different zero-write policy.
    pub fn with_zero_writes(mut self, zero_writes: ZeroWritePolicy) -> Self {
        self.zero_writes = zero_writes;
        self
    }

    pub fn zero_writes(&self) -> ZeroWritePolicy {
        self.zero_writes
    }

    /// Logical length.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// The stored index → value map.
    pub fn entries(&self) -> &BTreeMap<usize, T> {
        &self.entries
    }

    pub fn into_map(self) -> BTreeMap<usize, T> {
        self.entries
    }

    /// Stored `(index, value)` pairs in ascending index order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }

    /// Stored value at `index`, or zero if nothing is stored there.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.count)?;
        Ok(self.value_at(index))
    }

    /// Write `value` at `index`. A zero is purged or stored according to
    /// [`zero_writes`](Self::zero_writes).
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.count)?;
        if value == T::zero() && self.zero_writes == ZeroWritePolicy::Purge {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
        Ok(())
    }

    /// Drop explicitly stored zeros.
    pub fn prune(&mut self) {
        self.entries.retain(|_, v| *v != T::zero());
    }

    /// Zero-filled dense copy of the vector. Allocates on every call.
    pub fn elements(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.count];
        for (&i, &v) in &self.entries {
            out[i] = v;
        }
        out
    }

    /// Every position in `[0, count)` in order, absent entries as zero.
    pub fn iter(&self) -> SparseIter<'_, T> {
        SparseIter { vector: self, index: 0 }
    }

    fn value_at(&self, index: usize) -> T {
        self.entries.get(&index).copied().unwrap_or_else(T::zero)
    }

    fn map_values(&self, f: impl Fn(T) -> T) -> Self {
        let entries = self.entries.iter().map(|(&i, &v)| (i, f(v))).collect();
        Self::from_parts(entries, self.count, self.zero_writes)
    }
}

impl<T: Scalar> VectorSpace for SparseVector<T> {
    type Field = T;

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        check_lengths(self.count, rhs.count)?;
        let entries = merged(self.entries.clone(), rhs.entries.clone(), |x, y| x + y);
        Ok(Self::from_parts(entries, self.count, self.zero_writes))
    }

    fn negate(&self) -> Self {
        self.map_values(|v| -v)
    }

    fn scale(&self, s: T) -> Self {
        if s == T::zero() {
            return Self::from_parts(BTreeMap::new(), self.count, self.zero_writes);
        }
        self.map_values(|v| s * v)
    }
}

impl<T: Scalar> InnerProductSpace for SparseVector<T> {
    /// Only indices stored on both sides contribute: anywhere else one
    /// factor is an implicit zero.
    fn try_dot(&self, rhs: &Self) -> Result<T> {
        check_lengths(self.count, rhs.count)?;
        let products = intersected(&self.entries, &rhs.entries, |&x, &y| x * y);
        Ok(products.values().fold(T::zero(), |acc, &v| acc + v))
    }
}

impl_vector_ops!(SparseVector; f32, f64);

impl<T: Scalar> PartialEq for SparseVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
            && self.entries.iter().all(|(&i, &v)| other.value_at(i) == v)
            && other.entries.iter().all(|(&i, &v)| self.value_at(i) == v)
    }
}

impl<T: Scalar> From<&DenseVector<T>> for SparseVector<T> {
    fn from(v: &DenseVector<T>) -> Self {
        Self::from_dense(v)
    }
}

impl<T: Scalar> From<Vec<T>> for SparseVector<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(&elements)
    }
}

impl<T: Scalar> FromIterator<T> for SparseVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from_elements(&elements)
    }
}

impl<'a, T: Scalar> IntoIterator for &'a SparseVector<T> {
    type Item = T;
    type IntoIter = SparseIter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> fmt::Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

/// Iterator over every position of a [`SparseVector`], zeros included.
#[derive(Clone, Debug)]
pub struct SparseIter<'a, T> {
    vector: &'a SparseVector<T>,
    index: usize,
}

impl<T: Scalar> Iterator for SparseIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index < self.vector.count {
            let value = self.vector.value_at(self.index);
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Scalar> ExactSizeIterator for SparseIter<'_, T> {}
