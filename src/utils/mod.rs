//! Map algebra shared by the sparse representation.

pub mod merge;

pub use merge::{MergeMap, intersected, merge_into, merged};
