//! Error types for the training engine
//!
//! All fallible public operations in this crate return [`NetworkError`].
//! Failures are local and immediate: an operation either fully succeeds or
//! leaves its operands untouched.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors produced by layer, network, loss, and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A matrix operand's dimensions are incompatible with the declared
    /// contract (e.g. a forward input whose row count disagrees with the
    /// layer's input size).
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A construction argument is invalid: a non-positive layer size, or an
    /// unrecognized activation/initializer tag at the string boundary.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `backward` was called on a layer with no cached forward pass. Each
    /// forward call arms exactly one backward call.
    #[error("backward called before forward on this layer")]
    BackwardBeforeForward,

    /// A configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed as JSON.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file parsed but holds an invalid value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
