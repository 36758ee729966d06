//! Dense vectors on top of a contiguous `Vec<T>`.
//!
//! Length is fixed at construction; elements can be overwritten in place.
//! `Index`/`IndexMut` panic outside `[0, len)` like slices do, while
//! [`DenseVector::get`] and [`DenseVector::set`] report `IndexOutOfBounds`.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::core::ops::impl_vector_ops;
use crate::core::traits::{InnerProductSpace, Scalar, VectorSpace};
use crate::error::{Result, check_index, check_lengths};
use crate::vector::fmt_elements;
use crate::vector::sparse::SparseVector;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T> DenseVector<T> {
    /// Wrap `data` without copying.
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Scalar> DenseVector<T> {
    pub fn from_slice(data: &[T]) -> Self {
        Self::new(data.to_vec())
    }

    /// The all-zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![T::zero(); len])
    }

    /// Expand a sparse vector into its full zero-filled form.
    pub fn from_sparse(v: &SparseVector<T>) -> Self {
        Self::new(v.elements())
    }

    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        Ok(self.data[index])
    }

    /// Overwrite the element at `index`; the length never changes.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len())?;
        self.data[index] = value;
        Ok(())
    }

    /// Elements in index order. Each call starts a fresh pass.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.data.iter().copied()
    }
}

impl<T: Scalar> VectorSpace for DenseVector<T> {
    type Field = T;

    fn try_add(&self, rhs: &Self) -> Result<Self> {
        check_lengths(self.len(), rhs.len())?;
        Ok(Self::new(zip_with(&self.data, &rhs.data, |x, y| x + y)))
    }

    fn negate(&self) -> Self {
        self.data.iter().map(|&x| -x).collect()
    }

    fn scale(&self, s: T) -> Self {
        self.data.iter().map(|&x| s * x).collect()
    }
}

impl<T: Scalar> InnerProductSpace for DenseVector<T> {
    fn try_dot(&self, rhs: &Self) -> Result<T> {
        check_lengths(self.len(), rhs.len())?;
        Ok(dot_slices(&self.data, &rhs.data))
    }
}

impl_vector_ops!(DenseVector; f32, f64);

/// Element-wise `f(x[i], y[i])`; uses rayon when the feature is on.
fn zip_with<T, F>(x: &[T], y: &[T], f: F) -> Vec<T>
where
    T: Scalar,
    F: Fn(T, T) -> T + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .zip(y.par_iter())
            .map(|(&xi, &yi)| f(xi, yi))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter().zip(y.iter()).map(|(&xi, &yi)| f(xi, yi)).collect()
    }
}

/// Computes x^T y; uses rayon when the feature is on.
fn dot_slices<T: Scalar>(x: &[T], y: &[T]) -> T {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        x.par_iter()
            .zip(y.par_iter())
            .map(|(xi, yi)| *xi * *yi)
            .reduce(|| T::zero(), |acc, v| acc + v)
    }
    #[cfg(not(feature = "rayon"))]
    {
        x.iter()
            .zip(y.iter())
            .map(|(xi, yi)| *xi * *yi)
            .fold(T::zero(), |acc, v| acc + v)
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> From<DenseVector<T>> for Vec<T> {
    fn from(v: DenseVector<T>) -> Self {
        v.data
    }
}

impl<T: Scalar> From<&SparseVector<T>> for DenseVector<T> {
    fn from(v: &SparseVector<T>) -> Self {
        Self::from_sparse(v)
    }
}

impl<T> FromIterator<T> for DenseVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a DenseVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for DenseVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for DenseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.data.iter())
    }
}
