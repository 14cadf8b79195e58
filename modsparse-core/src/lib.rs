#![no_std]

//! modsparse-core - Sparse matrix contract over the ring Z/1000000
//!
//! This crate provides the ring arithmetic, the lazy-transpose coordinate
//! mapping, the contract every storage backend implements, and the text
//! format used to describe matrices and operation streams. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entry;
pub mod error;
pub mod format;
pub mod layout;
pub mod ring;
pub mod traits;
pub mod validation;

pub use entry::{Entry, Triplet};
pub use error::*;
pub use layout::{map_index, Orientation};
pub use ring::{add_mod, canonicalize, mul_mod, MOD};
pub use traits::*;
pub use validation::{validate_index, Tokens};

#[cfg(feature = "alloc")]
pub use format::{MatrixBlock, Workload};
pub use format::{Opcode, Operation, Target};
