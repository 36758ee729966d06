use thiserror::Error;

// Unified error type for smartvector

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VError {
    #[error("length mismatch: left operand has length {left}, right operand has length {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, VError>;

/// Fails with `LengthMismatch` unless both lengths agree.
pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(VError::LengthMismatch { left, right })
    }
}

/// Fails with `IndexOutOfBounds` unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(VError::IndexOutOfBounds { index, len })
    }
}
