//! smartvector: dense and sparse vectors over floating-point scalars
//!
//! Both representations implement the same [`VectorSpace`] and
//! [`InnerProductSpace`] traits, so `+`, unary `-`, scalar multiplication and
//! the dot product obey the same laws whichever storage is used. Binary
//! operations on vectors of different lengths return
//! [`VError::LengthMismatch`] instead of truncating or padding.
//!
//! ```
//! use smartvector::{dvec, svec};
//!
//! let a = dvec![1.0, 2.0, 3.0];
//! let b = dvec![4.0, 5.0, 6.0];
//! assert_eq!((&a + &b).unwrap(), dvec![5.0, 7.0, 9.0]);
//! assert_eq!((&a * &b).unwrap(), 32.0);
//!
//! let s = (svec![1.0, 0.0, 3.0] + svec![0.0, 2.0, 0.0]).unwrap();
//! assert_eq!(s, svec![1.0, 2.0, 3.0]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::config::{SparseOptions, ZeroWritePolicy};
pub use crate::core::{InnerProductSpace, Scalar, VectorSpace};
pub use crate::error::{Result, VError};
pub use crate::utils::merge::{MergeMap, intersected, merge_into, merged};
pub use crate::vector::{DenseVector, SparseIter, SparseVector};
