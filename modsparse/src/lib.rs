//! modsparse - Sparse matrix algebra over Z/1000000
//!
//! Three interchangeable storage backends implement the
//! [`SparseMatrix`] contract from `modsparse-core`, together with the
//! tooling to load workloads, generate fixtures and benchmark suites, and
//! time the backends against each other.
//!
//! ## Architecture
//!
//! - **modsparse-core**: ring arithmetic, the backend contract and the text
//!   format (no I/O, `no_std`)
//! - **modsparse**: backends, runtime dispatch, workload execution, file I/O
//!   and the benchmark harness
//!
//! ## Quick Start
//!
//! ```rust
//! use modsparse::{HashMatrix, SparseMatrix};
//!
//! let mut a = HashMatrix::from_triplets(2, &[(0, 1, 999_999)]);
//! a.toggle_transpose();
//! assert_eq!(a.get(1, 0), 999_999);
//!
//! let doubled = a.scale(2);
//! assert_eq!(doubled.get(1, 0), 999_998);
//! ```
//!
//! ## Backends
//!
//! - [`HashMatrix`]: hash map, expected O(1) point access
//! - [`OrderedMatrix`]: ordered map with range-query multiplication and
//!   copy-on-write sharing
//! - [`LinearMatrix`]: flat entry list, the reference baseline

// Re-export core abstractions and format definitions
pub use modsparse_core::{
    // Contract
    check_dimensions, MatrixOperations, SparseMatrix,
    // Values and coordinates
    add_mod, canonicalize, mul_mod, Entry, Orientation, Triplet, MOD,
    // Text format
    MatrixBlock, Opcode, Operation, Target, Workload,
    // Kernel errors
    MatrixError,
};

pub mod backend;
pub mod bench;
pub mod error;
pub mod fixture;
pub mod hash_backend;
pub mod io;
pub mod linear_backend;
pub mod logging;
pub mod ordered_backend;
pub mod session;
pub mod suite;

#[cfg(test)]
mod contract_tests;

pub use backend::{Backend, DynamicMatrix};
pub use bench::{run_benchmarks, BenchConfig, BenchRecord};
pub use error::{Error, Result};
pub use fixture::{write_fixture, FixtureGenerator};
pub use hash_backend::HashMatrix;
pub use io::{load_workload, save_workload};
pub use linear_backend::LinearMatrix;
pub use ordered_backend::OrderedMatrix;
pub use session::{run_workload, Outcome, RunSummary, Session};
pub use suite::{plan_pairs, write_suite, write_suites, SuiteConfig, SuiteKind};
