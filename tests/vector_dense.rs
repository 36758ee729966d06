//! Tests for dense vector operations: element-wise addition, subtraction, negation,
//! scalar multiplication, dot product, element access, and rendering.
//!
//! These tests exercise `DenseVector` through the std operators generated for it as
//! well as through the `VectorSpace` and `InnerProductSpace` trait methods.

use approx::assert_abs_diff_eq;
use smartvector::{DenseVector, InnerProductSpace, SparseVector, VError, VectorSpace, dvec};

/// Element-wise sum and dot product of two small fixed vectors.
#[test]
fn fixed_sum_and_dot() {
    let a = dvec![1.0, 2.0, 3.0];
    let b = dvec![4.0, 5.0, 6.0];
    assert_eq!((&a + &b).unwrap(), dvec![5.0, 7.0, 9.0]);
    assert_abs_diff_eq!((&a * &b).unwrap(), 32.0, epsilon = 1e-12);
    assert_abs_diff_eq!((&b * &a).unwrap(), 32.0, epsilon = 1e-12);
}

/// Adding or dotting a length-3 vector with a length-4 vector is an error,
/// never a truncated or zero-padded result.
#[test]
fn length_mismatch() {
    let a = dvec![1.0, 2.0, 3.0];
    let b = dvec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(&a + &b, Err(VError::LengthMismatch { left: 3, right: 4 }));
    assert_eq!(&b + &a, Err(VError::LengthMismatch { left: 4, right: 3 }));
    assert_eq!(&a * &b, Err(VError::LengthMismatch { left: 3, right: 4 }));
    assert_eq!(&a - &b, Err(VError::LengthMismatch { left: 3, right: 4 }));
}

/// Subtraction goes through addition of the negated right-hand side.
#[test]
fn subtraction_matches_add_negated() {
    let a = dvec![0.5, -1.0, 8.0];
    let b = dvec![2.0, 2.0, -2.0];
    let via_sub = (&a - &b).unwrap();
    let via_add = a.try_add(&b.negate()).unwrap();
    assert_eq!(via_sub, via_add);
    assert_eq!(via_sub, dvec![-1.5, -3.0, 10.0]);
}

/// Scalar multiplication from the left and from the right give the same vector.
#[test]
fn scalar_multiplication_both_sides() {
    let v = dvec![1.0f64, -2.0, 0.0];
    let left = 3.0 * &v;
    let right = v.clone() * 3.0;
    assert_eq!(left, right);
    assert_eq!(left, dvec![3.0, -6.0, 0.0]);
    assert_eq!(v.scale_right(3.0), left);
}

/// Element writes replace values in place and never change the length.
#[test]
fn element_writes_keep_length() {
    let mut v = DenseVector::<f64>::zeros(3);
    v.set(2, 4.0).unwrap();
    v[0] = -1.0;
    assert_eq!(v.len(), 3);
    assert_eq!(v.as_slice(), &[-1.0, 0.0, 4.0]);
    assert_eq!(v.get(3), Err(VError::IndexOutOfBounds { index: 3, len: 3 }));
}

/// Iteration is in index order and can be repeated.
#[test]
fn iteration_order() {
    let v = dvec![3.0, 1.0, 2.0];
    assert_eq!(v.iter().collect::<Vec<_>>(), vec![3.0, 1.0, 2.0]);
    assert_eq!((&v).into_iter().copied().sum::<f64>(), 6.0);
    assert_eq!(v.iter().count(), 3);
}

/// Dense vectors materialized from sparse ones carry the zero fill.
#[test]
fn from_sparse_expands_zeros() {
    let s = SparseVector::from_map([(1, 2.0), (3, -1.0)], 5).unwrap();
    let d = DenseVector::from(&s);
    assert_eq!(d, dvec![0.0, 2.0, 0.0, -1.0, 0.0]);
}

/// Euclidean norm through the inner product.
#[test]
fn norm() {
    let v = dvec![1.0, 2.0, 2.0];
    assert_abs_diff_eq!(v.norm(), 3.0, epsilon = 1e-12);
}

/// Rendering uses angle brackets and comma-space separators.
#[test]
fn display() {
    assert_eq!(dvec![1.0, 2.5].to_string(), "<1, 2.5>");
    assert_eq!(DenseVector::<f32>::new(vec![]).to_string(), "<>");
}
