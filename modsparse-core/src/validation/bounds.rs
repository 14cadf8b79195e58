//! Coordinate bounds validation
//!
//! The kernel operations treat out-of-range coordinates as a precondition
//! violation; these checks back the `try_*` entry points and the parsers.

use crate::MatrixError;

/// Validate that logical `(row, col)` lies inside a `dimension x dimension` matrix
pub const fn validate_index(row: usize, col: usize, dimension: usize) -> Result<(), MatrixError> {
    if row >= dimension || col >= dimension {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            dimension,
        });
    }
    Ok(())
}

/// Validate that `count` distinct positions fit in a `dimension x dimension` matrix
///
/// Returns the number of available positions, computed with overflow
/// protection. An overflowing square is treated as unbounded.
pub const fn validate_dimension_fits(dimension: usize, count: usize) -> Result<usize, usize> {
    let capacity = match dimension.checked_mul(dimension) {
        Some(capacity) => capacity,
        None => usize::MAX,
    };

    if count > capacity {
        return Err(capacity);
    }

    Ok(capacity)
}
