//! Core algebraic traits and the operator glue shared by every vector type.

pub mod ops;
pub mod traits;

pub use traits::{InnerProductSpace, Scalar, VectorSpace};
