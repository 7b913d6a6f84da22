//! Error types for erdos888 computations

use thiserror::Error;

/// Main error type for erdos888 operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Erdos888Error {
    /// Zero was supplied where a positive integer is required
    #[error("Zero is not a valid {0}")]
    ZeroElement(&'static str),

    /// An intermediate product did not fit in its integer type
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// The requested bound is beyond what the sieve will allocate
    #[error("Bound {bound} exceeds the supported maximum of {max}")]
    BoundTooLarge {
        /// Requested bound
        bound: u64,
        /// Largest supported bound
        max: u64,
    },

    /// A kernel quadruple did not have exactly four distinct members
    #[error("Expected {expected} distinct kernels, got {got}")]
    KernelCount {
        /// Required number of kernels
        expected: usize,
        /// Number of distinct kernels supplied
        got: usize,
    },

    /// A scaling search would try more vectors than allowed
    #[error("Scaling search over {vectors} vectors exceeds the limit of {max}")]
    SearchSpaceTooLarge {
        /// Number of scale vectors the search would try
        vectors: u128,
        /// Largest supported number of vectors
        max: u128,
    },

    /// The search was interrupted through its context
    #[error("Search interrupted")]
    Interrupted,
}

/// Result type alias for erdos888 operations
pub type Result<T> = std::result::Result<T, Erdos888Error>;
