//! Input validation utilities
//!
//! Pure functions for coordinate bounds and integer tokenizing, with no
//! I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_dimension_fits, validate_index};
pub use parsing::{parse_i64, parse_usize, Tokens};
