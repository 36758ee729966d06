//! Vector module: dense and sparse vector types.

use std::fmt;

pub mod dense;
pub use dense::DenseVector;
pub mod sparse;
pub use sparse::{SparseIter, SparseVector};

/// Build a [`DenseVector`] from a list of scalars.
///
/// ```
/// use smartvector::dvec;
/// let v = dvec![1.0, 2.0, 3.0];
/// assert_eq!(v.len(), 3);
/// ```
#[macro_export]
macro_rules! dvec {
    ($($x:expr),* $(,)?) => {
        $crate::vector::DenseVector::new(::std::vec![$($x),*])
    };
}

/// Build a [`SparseVector`] from a list of scalars, dropping the zeros.
///
/// ```
/// use smartvector::svec;
/// let v = svec![0.0, 5.0, 0.0, 3.0];
/// assert_eq!((v.count(), v.nnz()), (4, 2));
/// ```
#[macro_export]
macro_rules! svec {
    ($($x:expr),* $(,)?) => {
        $crate::vector::SparseVector::from_elements(&[$($x),*])
    };
}

/// Renders `<e0, e1, ..., en>`.
pub(crate) fn fmt_elements<I>(f: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(f, "<")?;
    for (i, x) in elements.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{x}")?;
    }
    write!(f, ">")
}
