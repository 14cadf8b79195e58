//! Sparse matrix contract shared by every storage backend
//!
//! Backends only decide where nonzero entries live and how `multiply`
//! finds matching rows. Construction, `add`, `scale`, bounds-checked
//! access and equality are provided here on top of the required methods.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::entry::Entry;
use crate::entry::Triplet;
use crate::error::{MatrixError, Result};
use crate::layout::Orientation;
use crate::ring::{canonicalize, mul_mod};
use crate::validation::validate_index;

/// Square sparse matrix over Z/MOD with a lazy transpose flag
///
/// Invariants every implementation upholds:
/// - no stored entry has value 0 (absence means 0)
/// - every stored value lies in `[0, MOD)`
/// - at most one entry per physical key
pub trait SparseMatrix: Sized {
    /// Create an empty `dimension x dimension` matrix
    fn with_dimension(dimension: usize) -> Self;

    /// Number of rows (and columns)
    fn dimension(&self) -> usize;

    /// Number of stored nonzero entries
    fn nnz(&self) -> usize;

    /// Current transpose state
    fn orientation(&self) -> Orientation;

    /// Value at logical `(i, j)`, or 0 when absent
    ///
    /// `i` and `j` must be below [`dimension`](Self::dimension).
    fn get(&self, i: usize, j: usize) -> i64;

    /// Store `value` at logical `(i, j)`
    ///
    /// The value is canonicalized first; a canonical 0 removes the entry.
    fn set(&mut self, i: usize, j: usize, value: i64);

    /// Add `delta` to the value at logical `(i, j)`
    ///
    /// The entry is removed when the canonical sum is 0.
    fn add_value(&mut self, i: usize, j: usize, delta: i64);

    /// Flip the transpose flag without moving any data
    fn toggle_transpose(&mut self);

    /// Independent copy whose physical keys equal logical coordinates
    fn materialize(&self) -> Self;

    /// Visit every nonzero entry as `(i, j, value)` in logical coordinates
    fn for_each_nonzero<F: FnMut(usize, usize, i64)>(&self, f: F);

    /// Matrix product over Z/MOD
    fn multiply(&self, other: &Self) -> Result<Self>;

    /// Build a matrix by applying `set` to each triplet in order
    ///
    /// Later triplets at the same position overwrite earlier ones.
    fn from_triplets(dimension: usize, triplets: &[Triplet]) -> Self {
        let mut matrix = Self::with_dimension(dimension);
        for &(i, j, value) in triplets {
            matrix.set(i, j, value);
        }
        matrix
    }

    fn is_transposed(&self) -> bool {
        self.orientation().is_transposed()
    }

    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Bounds-checked [`get`](Self::get)
    fn try_get(&self, i: usize, j: usize) -> Result<i64> {
        validate_index(i, j, self.dimension())?;
        Ok(self.get(i, j))
    }

    /// Bounds-checked [`set`](Self::set)
    fn try_set(&mut self, i: usize, j: usize, value: i64) -> Result<()> {
        validate_index(i, j, self.dimension())?;
        self.set(i, j, value);
        Ok(())
    }

    /// Bounds-checked [`add_value`](Self::add_value)
    fn try_add_value(&mut self, i: usize, j: usize, delta: i64) -> Result<()> {
        validate_index(i, j, self.dimension())?;
        self.add_value(i, j, delta);
        Ok(())
    }

    /// Elementwise sum over Z/MOD
    ///
    /// Both operands are folded into a fresh result; neither is modified.
    fn add(&self, other: &Self) -> Result<Self> {
        check_dimensions(self.dimension(), other.dimension())?;

        let mut sum = Self::with_dimension(self.dimension());
        self.for_each_nonzero(|i, j, value| sum.add_value(i, j, value));
        other.for_each_nonzero(|i, j, value| sum.add_value(i, j, value));
        Ok(sum)
    }

    /// Multiply every entry by `alpha` over Z/MOD
    fn scale(&self, alpha: i64) -> Self {
        let mut scaled = Self::with_dimension(self.dimension());
        let alpha = canonicalize(alpha);
        if alpha == 0 {
            return scaled;
        }

        self.for_each_nonzero(|i, j, value| scaled.set(i, j, mul_mod(value, alpha)));
        scaled
    }

    /// All nonzero entries in logical coordinates, sorted by `(row, col)`
    #[cfg(feature = "alloc")]
    fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::with_capacity(self.nnz());
        self.for_each_nonzero(|row, col, value| entries.push(Entry::new(row, col, value)));
        entries.sort_unstable();
        entries
    }

    /// Entrywise equality with a matrix of any backend
    #[cfg(feature = "alloc")]
    fn same_entries<M: SparseMatrix>(&self, other: &M) -> bool {
        self.dimension() == other.dimension() && self.entries() == other.entries()
    }
}

/// Extension trait for row/column enumeration (requires alloc feature)
///
/// The default implementations scan every nonzero entry; backends with
/// ordered storage override them with range queries.
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Nonzero `(col, value)` pairs of logical row `row`, in column order
    fn get_row(&self, row: usize) -> Vec<(usize, i64)> {
        let mut values = Vec::new();
        self.for_each_nonzero(|i, j, value| {
            if i == row {
                values.push((j, value));
            }
        });
        values.sort_unstable();
        values
    }

    /// Nonzero `(row, value)` pairs of logical column `col`, in row order
    fn get_col(&self, col: usize) -> Vec<(usize, i64)> {
        let mut values = Vec::new();
        self.for_each_nonzero(|i, j, value| {
            if j == col {
                values.push((i, value));
            }
        });
        values.sort_unstable();
        values
    }
}

/// Fail with [`MatrixError::DimensionMismatch`] unless both dimensions agree
pub const fn check_dimensions(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MatrixError::DimensionMismatch { left, right });
    }
    Ok(())
}
