//! Error types for the ElGamal proof toolkit.
//!
//! Verifiers never surface these: a rejected proof is `false`. Errors are reserved for
//! malformed inputs at construction time (groups, keys, ciphertexts, configuration) and
//! for the precondition checks of the double discrete log prover.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid group parameters were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A group element is invalid or not in the correct subgroup.
    #[error("Invalid group element: {0}")]
    InvalidGroupElement(String),

    /// A group configuration could not be decoded.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using the library's error type.
pub type Result<T> = core::result::Result<T, Error>;
