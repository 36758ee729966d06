//! Construction and mutation options for sparse vectors.

pub mod options;

pub use options::{SparseOptions, ZeroWritePolicy};
