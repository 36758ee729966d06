//! Core linear-algebra traits for smartvector.

use std::fmt::{Debug, Display};

use num_traits::Float;

use crate::error::Result;

/// Floating-point scalar the vectors are built over.
///
/// Blanket-implemented for every `Float` that is thread-safe and printable,
/// which covers `f32` and `f64`.
pub trait Scalar: Float + Send + Sync + Debug + Display {}

impl<T: Float + Send + Sync + Debug + Display> Scalar for T {}

/// Addition, negation & scalar multiplication.
///
/// Implementors supply the three primitives; subtraction and
/// scalar-on-the-right multiplication are derived from them.
pub trait VectorSpace: Sized {
    /// Scalar field the space is defined over.
    type Field: Scalar;

    /// Compute self + rhs. Fails when the lengths differ.
    fn try_add(&self, rhs: &Self) -> Result<Self>;

    /// Compute -self.
    fn negate(&self) -> Self;

    /// Compute s · self.
    fn scale(&self, s: Self::Field) -> Self;

    /// Compute self - rhs as self + (-rhs).
    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.try_add(&rhs.negate())
    }

    /// Compute self · s, derived from the scalar-on-the-left form.
    fn scale_right(&self, s: Self::Field) -> Self {
        self.scale(s)
    }
}

/// Inner products & norms.
pub trait InnerProductSpace: VectorSpace {
    /// Compute dot(self, rhs). Fails when the lengths differ.
    fn try_dot(&self, rhs: &Self) -> Result<Self::Field>;

    /// Compute ‖self‖₂.
    fn norm(&self) -> Self::Field {
        match self.try_dot(self) {
            Ok(d) => d.sqrt(),
            // a vector always has the same length as itself
            Err(_) => unreachable!("self dot product cannot have mismatched lengths"),
        }
    }
}
