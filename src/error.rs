//! Error types for the baseline harness.

/// Top-level error type for the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Configuration or command-line argument error.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to launch the target binary.
    #[error("spawn error: {0}")]
    Spawn(String),

    /// Artifact serialization error.
    #[error("artifact error: {0}")]
    Artifact(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, HarnessError>;
