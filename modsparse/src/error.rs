//! Errors for file, report and runtime-dispatch operations
//!
//! Kernel failures stay [`MatrixError`]; this type wraps them together with
//! the I/O and serialization failures of the surrounding tooling.

use modsparse_core::MatrixError;

#[derive(Debug)]
pub enum Error {
    /// Kernel or input-format failure
    Matrix(MatrixError),
    /// File system failure
    Io(std::io::Error),
    /// Workload file is not valid UTF-8
    Utf8(std::str::Utf8Error),
    /// Backend name not recognised
    UnknownBackend(String),
    /// Worker pool could not be created
    ThreadPool(rayon::ThreadPoolBuildError),
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    #[cfg(feature = "serde")]
    Csv(csv::Error),
}

impl Error {
    /// Whether the failure lies in the workload text rather than in running it
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::Matrix(e) => e.is_input_error(),
            Error::Utf8(_) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Matrix(e) => write!(f, "{e}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Utf8(e) => write!(f, "Workload is not valid UTF-8: {e}"),
            Error::UnknownBackend(name) => {
                write!(f, "Unknown backend '{name}' (expected hash, ordered or linear)")
            }
            Error::ThreadPool(e) => write!(f, "Failed to build worker pool: {e}"),
            #[cfg(feature = "serde")]
            Error::Json(e) => write!(f, "JSON error: {e}"),
            #[cfg(feature = "serde")]
            Error::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Matrix(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Utf8(e) => Some(e),
            Error::UnknownBackend(_) => None,
            Error::ThreadPool(e) => Some(e),
            #[cfg(feature = "serde")]
            Error::Json(e) => Some(e),
            #[cfg(feature = "serde")]
            Error::Csv(e) => Some(e),
        }
    }
}

impl From<MatrixError> for Error {
    fn from(e: MatrixError) -> Self {
        Error::Matrix(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Utf8(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(e)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

#[cfg(feature = "serde")]
impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

/// Result type for tooling operations
pub type Result<T> = std::result::Result<T, Error>;
