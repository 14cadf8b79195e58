//! Runtime backend selection
//!
//! [`DynamicMatrix`] wraps the three concrete backends so a workload can be
//! executed on a storage strategy chosen at runtime (CLI flag, config file).

use std::str::FromStr;

use modsparse_core::{Entry, MatrixBlock, MatrixError, SparseMatrix, Triplet};

use crate::error::Error;
use crate::hash_backend::HashMatrix;
use crate::linear_backend::LinearMatrix;
use crate::ordered_backend::OrderedMatrix;

/// Storage strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Backend {
    /// Hash map, expected O(1) access
    Hash,
    /// Ordered map with range queries and copy-on-write sharing
    Ordered,
    /// Unordered entry list, reference baseline
    Linear,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Hash, Backend::Ordered, Backend::Linear];

    pub const fn name(self) -> &'static str {
        match self {
            Backend::Hash => "hash",
            Backend::Ordered => "ordered",
            Backend::Linear => "linear",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Backend::ALL
            .into_iter()
            .find(|backend| backend.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownBackend(s.to_string()))
    }
}

/// Matrix whose backend is chosen at runtime
#[derive(Debug, Clone)]
pub enum DynamicMatrix {
    Hash(HashMatrix),
    Ordered(OrderedMatrix),
    Linear(LinearMatrix),
}

impl DynamicMatrix {
    /// Empty `dimension x dimension` matrix
    pub fn new(backend: Backend, dimension: usize) -> Self {
        match backend {
            Backend::Hash => DynamicMatrix::Hash(HashMatrix::with_dimension(dimension)),
            Backend::Ordered => DynamicMatrix::Ordered(OrderedMatrix::with_dimension(dimension)),
            Backend::Linear => DynamicMatrix::Linear(LinearMatrix::with_dimension(dimension)),
        }
    }

    pub fn from_triplets(backend: Backend, dimension: usize, triplets: &[Triplet]) -> Self {
        match backend {
            Backend::Hash => DynamicMatrix::Hash(HashMatrix::from_triplets(dimension, triplets)),
            Backend::Ordered => {
                DynamicMatrix::Ordered(OrderedMatrix::from_triplets(dimension, triplets))
            }
            Backend::Linear => {
                DynamicMatrix::Linear(LinearMatrix::from_triplets(dimension, triplets))
            }
        }
    }

    /// Build from a parsed matrix block
    pub fn from_block(backend: Backend, block: &MatrixBlock) -> Self {
        Self::from_triplets(backend, block.dimension, &block.triplets)
    }

    pub fn backend(&self) -> Backend {
        match self {
            DynamicMatrix::Hash(_) => Backend::Hash,
            DynamicMatrix::Ordered(_) => Backend::Ordered,
            DynamicMatrix::Linear(_) => Backend::Linear,
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            DynamicMatrix::Hash(m) => m.dimension(),
            DynamicMatrix::Ordered(m) => m.dimension(),
            DynamicMatrix::Linear(m) => m.dimension(),
        }
    }

    pub fn nnz(&self) -> usize {
        match self {
            DynamicMatrix::Hash(m) => m.nnz(),
            DynamicMatrix::Ordered(m) => m.nnz(),
            DynamicMatrix::Linear(m) => m.nnz(),
        }
    }

    pub fn is_transposed(&self) -> bool {
        match self {
            DynamicMatrix::Hash(m) => m.is_transposed(),
            DynamicMatrix::Ordered(m) => m.is_transposed(),
            DynamicMatrix::Linear(m) => m.is_transposed(),
        }
    }

    /// Value at logical `(i, j)`; indices must be in range
    pub fn get(&self, i: usize, j: usize) -> i64 {
        match self {
            DynamicMatrix::Hash(m) => m.get(i, j),
            DynamicMatrix::Ordered(m) => m.get(i, j),
            DynamicMatrix::Linear(m) => m.get(i, j),
        }
    }

    pub fn set(&mut self, i: usize, j: usize, value: i64) {
        match self {
            DynamicMatrix::Hash(m) => m.set(i, j, value),
            DynamicMatrix::Ordered(m) => m.set(i, j, value),
            DynamicMatrix::Linear(m) => m.set(i, j, value),
        }
    }

    pub fn add_value(&mut self, i: usize, j: usize, delta: i64) {
        match self {
            DynamicMatrix::Hash(m) => m.add_value(i, j, delta),
            DynamicMatrix::Ordered(m) => m.add_value(i, j, delta),
            DynamicMatrix::Linear(m) => m.add_value(i, j, delta),
        }
    }

    pub fn try_get(&self, i: usize, j: usize) -> Result<i64, MatrixError> {
        match self {
            DynamicMatrix::Hash(m) => m.try_get(i, j),
            DynamicMatrix::Ordered(m) => m.try_get(i, j),
            DynamicMatrix::Linear(m) => m.try_get(i, j),
        }
    }

    pub fn try_set(&mut self, i: usize, j: usize, value: i64) -> Result<(), MatrixError> {
        match self {
            DynamicMatrix::Hash(m) => m.try_set(i, j, value),
            DynamicMatrix::Ordered(m) => m.try_set(i, j, value),
            DynamicMatrix::Linear(m) => m.try_set(i, j, value),
        }
    }

    pub fn try_add_value(&mut self, i: usize, j: usize, delta: i64) -> Result<(), MatrixError> {
        match self {
            DynamicMatrix::Hash(m) => m.try_add_value(i, j, delta),
            DynamicMatrix::Ordered(m) => m.try_add_value(i, j, delta),
            DynamicMatrix::Linear(m) => m.try_add_value(i, j, delta),
        }
    }

    pub fn toggle_transpose(&mut self) {
        match self {
            DynamicMatrix::Hash(m) => m.toggle_transpose(),
            DynamicMatrix::Ordered(m) => m.toggle_transpose(),
            DynamicMatrix::Linear(m) => m.toggle_transpose(),
        }
    }

    pub fn materialize(&self) -> Self {
        match self {
            DynamicMatrix::Hash(m) => DynamicMatrix::Hash(m.materialize()),
            DynamicMatrix::Ordered(m) => DynamicMatrix::Ordered(m.materialize()),
            DynamicMatrix::Linear(m) => DynamicMatrix::Linear(m.materialize()),
        }
    }

    /// Elementwise sum; both operands must use the same backend
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        match (self, other) {
            (DynamicMatrix::Hash(a), DynamicMatrix::Hash(b)) => a.add(b).map(DynamicMatrix::Hash),
            (DynamicMatrix::Ordered(a), DynamicMatrix::Ordered(b)) => {
                a.add(b).map(DynamicMatrix::Ordered)
            }
            (DynamicMatrix::Linear(a), DynamicMatrix::Linear(b)) => {
                a.add(b).map(DynamicMatrix::Linear)
            }
            _ => Err(MatrixError::BackendMismatch),
        }
    }

    pub fn scale(&self, alpha: i64) -> Self {
        match self {
            DynamicMatrix::Hash(m) => DynamicMatrix::Hash(m.scale(alpha)),
            DynamicMatrix::Ordered(m) => DynamicMatrix::Ordered(m.scale(alpha)),
            DynamicMatrix::Linear(m) => DynamicMatrix::Linear(m.scale(alpha)),
        }
    }

    /// Matrix product; both operands must use the same backend
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        match (self, other) {
            (DynamicMatrix::Hash(a), DynamicMatrix::Hash(b)) => {
                a.multiply(b).map(DynamicMatrix::Hash)
            }
            (DynamicMatrix::Ordered(a), DynamicMatrix::Ordered(b)) => {
                a.multiply(b).map(DynamicMatrix::Ordered)
            }
            (DynamicMatrix::Linear(a), DynamicMatrix::Linear(b)) => {
                a.multiply(b).map(DynamicMatrix::Linear)
            }
            _ => Err(MatrixError::BackendMismatch),
        }
    }

    /// Nonzero entries in logical coordinates, sorted
    pub fn entries(&self) -> Vec<Entry> {
        match self {
            DynamicMatrix::Hash(m) => m.entries(),
            DynamicMatrix::Ordered(m) => m.entries(),
            DynamicMatrix::Linear(m) => m.entries(),
        }
    }
}
