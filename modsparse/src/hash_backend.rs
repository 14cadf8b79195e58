//! Hash-indexed storage backend
//!
//! Entries live in a `hashbrown` map keyed by physical `(row, col)`, giving
//! expected O(1) point access. Multiplication first groups the right
//! operand's entries into per-row lists so each left entry finds its
//! partners with one lookup.

use hashbrown::hash_map::Entry as Slot;
use hashbrown::HashMap;
use log::trace;
use modsparse_core::{
    add_mod, canonicalize, check_dimensions, map_index, mul_mod, MatrixOperations, Orientation,
    Result, SparseMatrix,
};

/// Sparse matrix backed by a hash map
#[derive(Debug, Clone, Default)]
pub struct HashMatrix {
    dimension: usize,
    orientation: Orientation,
    data: HashMap<(usize, usize), i64>,
}

impl HashMatrix {
    #[inline]
    fn key(&self, i: usize, j: usize) -> (usize, usize) {
        debug_assert!(
            i < self.dimension && j < self.dimension,
            "index ({i}, {j}) out of bounds for dimension {}",
            self.dimension
        );
        map_index(self.orientation, i, j)
    }

    /// Logical entries grouped by row: `row -> [(col, value)]`
    pub fn rows(&self) -> HashMap<usize, Vec<(usize, i64)>> {
        let mut rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        self.for_each_nonzero(|i, j, value| rows.entry(i).or_default().push((j, value)));
        rows
    }
}

impl SparseMatrix for HashMatrix {
    fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            orientation: Orientation::Normal,
            data: HashMap::new(),
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
            self.data.remove(&key);
        } else {
            self.data.insert(key, value);
        }
    }

    fn add_value(&mut self, i: usize, j: usize, delta: i64) {
        let key = self.key(i, j);
        match self.data.entry(key) {
            Slot::Occupied(mut slot) => {
                let sum = add_mod(*slot.get(), delta);
                if sum == 0 {
                    slot.remove();
                } else {
                    *slot.get_mut() = sum;
                }
            }
            Slot::Vacant(slot) => {
                let value = canonicalize(delta);
                if value != 0 {
                    slot.insert(value);
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
            data: self
                .data
                .iter()
                .map(|(&(row, col), &value)| ((col, row), value))
                .collect(),
        }
    }

    fn for_each_nonzero<F: FnMut(usize, usize, i64)>(&self, mut f: F) {
        for (&(row, col), &value) in &self.data {
            let (i, j) = map_index(self.orientation, row, col);
            f(i, j, value);
        }
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        check_dimensions(self.dimension, other.dimension)?;

        let rows = other.rows();
        let mut product = Self::with_dimension(self.dimension);

        self.for_each_nonzero(|i, k, a| {
            if let Some(row) = rows.get(&k) {
                for &(j, b) in row {
                    product.add_value(i, j, mul_mod(a, b));
                }
            }
        });

        trace!(
            "hash multiply: {} x {} nonzeros -> {} ({} grouped rows)",
            self.nnz(),
            other.nnz(),
            product.nnz(),
            rows.len()
        );
        Ok(product)
    }
}

impl MatrixOperations for HashMatrix {}
