//! Abstract interfaces for sparse matrix backends
//!
//! Traits here are the contract; concrete storage lives in the `modsparse` crate.

pub mod matrix;

pub use matrix::{check_dimensions, SparseMatrix};
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
