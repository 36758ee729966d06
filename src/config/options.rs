//! Options controlling how sparse vectors treat zeros.
//!
//! This module provides the `SparseOptions` struct, which is passed to
//! `SparseVector::from_elements_with` to choose how small entries are dropped
//! on construction and what happens when a zero is written into an existing
//! vector.

/// What `SparseVector::set` does when the written value is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroWritePolicy {
    /// Remove the entry so only non-zero values stay stored.
    #[default]
    Purge,
    /// Store the explicit zero. `SparseVector::prune` can remove it later.
    Store,
}

/// Sparse construction & mutation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseOptions {
    /// Policy for writes of the scalar zero.
    pub zero_writes: ZeroWritePolicy,

    /// Drop tolerance: dense entries with |v| <= drop_tol are not stored.
    pub drop_tol: f64,
}

impl Default for SparseOptions {
    fn default() -> Self {
        Self {
            zero_writes: ZeroWritePolicy::Purge,
            drop_tol: 0.0,
        }
    }
}

impl SparseOptions {
    pub fn with_zero_writes(mut self, zero_writes: ZeroWritePolicy) -> Self {
        self.zero_writes = zero_writes;
        self
    }

    pub fn with_drop_tol(mut self, drop_tol: f64) -> Self {
        self.drop_tol = drop_tol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_purge_with_exact_zero_filter() {
        let opts = SparseOptions::default();
        assert_eq!(opts.zero_writes, ZeroWritePolicy::Purge);
        assert_eq!(opts.drop_tol, 0.0);
    }

    #[test]
    fn builders_override_fields() {
        let opts = SparseOptions::default()
            .with_zero_writes(ZeroWritePolicy::Store)
            .with_drop_tol(1e-8);
        assert_eq!(opts.zero_writes, ZeroWritePolicy::Store);
        assert_eq!(opts.drop_tol, 1e-8);
    }
}
