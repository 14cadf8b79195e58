//! Order-indexed storage backend
//!
//! Entries live in a `BTreeMap` sorted lexicographically by physical
//! `(row, col)`. Point access is O(log k), and every entry of one row is a
//! contiguous key range, so multiplication slices the matching rows of the
//! right operand with range queries instead of building row lists.
//!
//! The map sits behind an [`Arc`]. Copies share it until one side writes;
//! every mutation goes through [`Arc::make_mut`], which clones the map on
//! divergence.

use std::collections::btree_map::Entry as Slot;
use std::collections::BTreeMap;
use std::sync::Arc;

use log::trace;
use modsparse_core::{
    add_mod, canonicalize, check_dimensions, map_index, mul_mod, MatrixOperations, Orientation,
    Result, SparseMatrix,
};

/// Sparse matrix backed by an ordered map with copy-on-write sharing
#[derive(Debug, Clone, Default)]
pub struct OrderedMatrix {
    dimension: usize,
    orientation: Orientation,
    data: Arc<BTreeMap<(usize, usize), i64>>,
}

impl OrderedMatrix {
    #[inline]
    fn key(&self, i: usize, j: usize) -> (usize, usize) {
        debug_assert!(
            i < self.dimension && j < self.dimension,
            "index ({i}, {j}) out of bounds for dimension {}",
            self.dimension
        );
        map_index(self.orientation, i, j)
    }

    /// Stored `(col, value)` pairs of physical row `row`, in column order
    fn physical_row(&self, row: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.data
            .range((row, 0)..=(row, usize::MAX))
            .map(|(&(_, col), &value)| (col, value))
    }

    /// Stored `(row, value)` pairs of physical column `col`, in row order
    fn physical_col(&self, col: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.data
            .iter()
            .filter(move |(key, _)| key.1 == col)
            .map(|(&(row, _), &value)| (row, value))
    }

    /// Whether both matrices currently share one storage map
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl SparseMatrix for OrderedMatrix {
    fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            orientation: Orientation::Normal,
            data: Arc::new(BTreeMap::new()),
        }
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn get(&self, i: usize, j: usize) -> i64 {
        self.data.get(&self.key(i, j)).copied().unwrap_or(0)
    }

    fn set(&mut self, i: usize, j: usize, value: i64) {
        let key = self.key(i, j);
        let value = canonicalize(value);
        if value == 0 {
            // Removing an absent key must not force a private copy
            if self.data.contains_key(&key) {
                Arc::make_mut(&mut self.data).remove(&key);
            }
        } else if self.data.get(&key) != Some(&value) {
            Arc::make_mut(&mut self.data).insert(key, value);
        }
    }

    fn add_value(&mut self, i: usize, j: usize, delta: i64) {
        if canonicalize(delta) == 0 {
            return;
        }

        let key = self.key(i, j);
        match Arc::make_mut(&mut self.data).entry(key) {
            Slot::Occupied(mut slot) => {
                let sum = add_mod(*slot.get(), delta);
                if sum == 0 {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
            Slot::Vacant(slot) => {
                slot.insert(canonicalize(delta));
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
            data: Arc::new(
                self.data
                    .iter()
                    .map(|(&(row, col), &value)| ((col, row), value))
                    .collect(),
            ),
        }
    }

    fn for_each_nonzero<F: FnMut(usize, usize, i64)>(&self, mut f: F) {
        for (&(row, col), &value) in self.data.iter() {
            let (i, j) = map_index(self.orientation, row, col);
            f(i, j, value);
        }
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        check_dimensions(self.dimension, other.dimension)?;

        let left = self.materialize();
        let right = other.materialize();
        let mut product = Self::with_dimension(self.dimension);

        let mut matches = 0usize;
        for (&(i, k), &a) in left.data.iter() {
            for (j, b) in right.physical_row(k) {
                product.add_value(i, j, mul_mod(a, b));
                matches += 1;
            }
        }

        trace!(
            "ordered multiply: {} x {} nonzeros -> {} ({matches} partial products)",
            left.nnz(),
            right.nnz(),
            product.nnz()
        );
        Ok(product)
    }
}

impl MatrixOperations for OrderedMatrix {
    fn get_row(&self, row: usize) -> Vec<(usize, i64)> {
        match self.orientation {
            Orientation::Normal => self.physical_row(row).collect(),
            Orientation::Transposed => self.physical_col(row).collect(),
        }
    }

    fn get_col(&self, col: usize) -> Vec<(usize, i64)> {
        match self.orientation {
            Orientation::Normal => self.physical_col(col).collect(),
            Orientation::Transposed => self.physical_row(col).collect(),
        }
    }
}
