//! Text format for matrices and operation streams
//!
//! A workload is two matrix blocks followed by an operation stream:
//!
//! ```text
//! k N            block header: entry count, then dimension
//! row col value  repeated k times
//! ...            second block
//! Q              number of operations
//! op ...         one operation per line, opcode first
//! ```

pub mod constants;
pub mod operation;

#[cfg(feature = "alloc")]
pub mod block;
#[cfg(feature = "alloc")]
pub mod workload;

pub use operation::{Opcode, Operation, Target};

#[cfg(feature = "alloc")]
pub use block::MatrixBlock;
#[cfg(feature = "alloc")]
pub use workload::Workload;
