//! Error handling for the datakit library.
//!
//! Expected negative outcomes (a duplicate insert, a lookup that finds
//! nothing, popping an empty queue) are reported through `bool` and `Option`
//! return values, never through this error type. `DatakitError` covers the
//! conditions a caller may legitimately have to handle: allocation failure,
//! invalid configuration, and failed structural diagnostics. Violations of a
//! documented precondition panic instead.

use thiserror::Error;

/// Main error type for the datakit library
#[derive(Error, Debug)]
pub enum DatakitError {
    /// Memory allocation failures
    #[error("memory allocation failed: requested {size} bytes")]
    OutOfMemory {
        /// Number of bytes requested
        size: usize,
    },

    /// Index out of bounds access
    #[error("out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Configuration or parameter errors
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// A structural diagnostic found a broken invariant
    #[error("invalid structure: {message}")]
    InvalidStructure {
        /// Description of the violated invariant
        message: String,
    },
}

impl DatakitError {
    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid structure error
    pub fn invalid_structure<S: Into<String>>(message: S) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfMemory { .. } => "memory",
            Self::OutOfBounds { .. } => "bounds",
            Self::Configuration { .. } => "config",
            Self::InvalidStructure { .. } => "structure",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DatakitError>;
