//! Linear entry-list backend
//!
//! Reference baseline: entries sit in an unordered `Vec` and every
//! operation scans it. Point access is O(k) and multiplication is
//! O(k_A * k_B), which is the cost the other backends are measured against.

use log::trace;
use modsparse_core::{
    add_mod, canonicalize, check_dimensions, map_index, mul_mod, Entry, MatrixOperations,
    Orientation, Result, SparseMatrix,
};

/// Sparse matrix backed by a flat list of physical entries
#[derive(Debug, Clone, Default)]
pub struct LinearMatrix {
    dimension: usize,
    orientation: Orientation,
    entries: Vec<Entry>,
}

impl LinearMatrix {
    #[inline]
    fn key(&self, i: usize, j: usize) -> (usize, usize) {
        debug_assert!(
            i < self.dimension && j < self.dimension,
            "index ({i}, {j}) out of bounds for dimension {}",
            self.dimension
        );
        map_index(self.orientation, i, j)
    }

    fn position(&self, key: (usize, usize)) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }
}

impl SparseMatrix for LinearMatrix {
    fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            orientation: Orientation::Normal,
            entries: Vec::new(),
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn get(&self, i: usize, j: usize) -> i64 {
        let key = self.key(i, j);
        self.position(key)
            .map(|index| self.entries[index].value)
            .unwrap_or(0)
    }

    fn set(&mut self, i: usize, j: usize, value: i64) {
        let (row, col) = self.key(i, j);
        let value = canonicalize(value);
        match self.position((row, col)) {
            Some(index) if value == 0 => {
                self.entries.swap_remove(index);
            }
            Some(index) => self.entries[index].value = value,
            None if value != 0 => self.entries.push(Entry::new(row, col, value)),
            None => {}
        }
    }

    fn add_value(&mut self, i: usize, j: usize, delta: i64) {
        let (row, col) = self.key(i, j);
        match self.position((row, col)) {
            Some(index) => {
                let sum = add_mod(self.entries[index].value, delta);
                if sum == 0 {
                    self.entries.swap_remove(index);
                } else {
                    self.entries[index].value = sum;
                }
            }
            None => {
                let value = canonicalize(delta);
                if value != 0 {
                    self.entries.push(Entry::new(row, col, value));
                }
            }
        }
    }

    fn toggle_transpose(&mut self) {
        self.orientation = self.orientation.toggle();
    }

    fn materialize(&self) -> Self {
        if !self.orientation.is_transposed() {
            return self.clone();
        }

        Self {
            dimension: self.dimension,
            orientation: Orientation::Normal,
            entries: self
                .entries
                .iter()
                .map(|entry| Entry::new(entry.col, entry.row, entry.value))
                .collect(),
        }
    }

    fn for_each_nonzero<F: FnMut(usize, usize, i64)>(&self, mut f: F) {
        for entry in &self.entries {
            let (i, j) = map_index(self.orientation, entry.row, entry.col);
            f(i, j, entry.value);
        }
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        check_dimensions(self.dimension, other.dimension)?;

        let mut product = Self::with_dimension(self.dimension);

        // Full scan of the right operand for every left entry
        self.for_each_nonzero(|i, k, a| {
            other.for_each_nonzero(|row, j, b| {
                if row == k {
                    product.add_value(i, j, mul_mod(a, b));
                }
            });
        });

        trace!(
            "linear multiply: {} x {} nonzeros -> {}",
            self.nnz(),
            other.nnz(),
            product.nnz()
        );
        Ok(product)
    }
}

impl MatrixOperations for LinearMatrix {}
