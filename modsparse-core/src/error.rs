//! Error types for sparse matrix operations

/// Errors that can occur while building, combining or parsing matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Binary operation on matrices of different dimension
    DimensionMismatch { left: usize, right: usize },
    /// Logical coordinate outside `[0, dimension)`
    IndexOutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },
    /// Input ended before all expected fields were read
    MalformedInput,
    /// Token is not a valid integer
    InvalidNumber,
    /// Operation code outside 1..=6
    UnknownOpcode(i64),
    /// Matrix selector other than 1 (A) or 2 (B)
    InvalidTarget(i64),
    /// Binary operation between matrices held by different backends
    BackendMismatch,
}

impl MatrixError {
    /// Whether the error comes from malformed text input rather than from an operation
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            MatrixError::MalformedInput
                | MatrixError::InvalidNumber
                | MatrixError::UnknownOpcode(_)
                | MatrixError::InvalidTarget(_)
        )
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { left, right } => {
                write!(f, "Dimension mismatch: {left} vs {right}")
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                dimension,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for dimension {dimension}"
            ),
            MatrixError::MalformedInput => write!(f, "Input ended unexpectedly"),
            MatrixError::InvalidNumber => write!(f, "Invalid integer token"),
            MatrixError::UnknownOpcode(code) => write!(f, "Unknown operation code {code}"),
            MatrixError::InvalidTarget(code) => write!(f, "Invalid matrix selector {code}"),
            MatrixError::BackendMismatch => write!(f, "Operands use different backends"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
