//! Unified error type for the conversion pathway.
//!
//! Classification and recommendation are total and never error; everything
//! here belongs to the external conversion runner and the application layer.
//! No variant is fatal to the process — each failure is scoped to a single
//! conversion attempt.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while orchestrating a conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external converter binary cannot be located or executed.
    #[error("converter unavailable: {message} (install FFmpeg from https://ffmpeg.org/download.html and make sure it is on your PATH)")]
    ConverterUnavailable { message: String },

    /// The converter ran but exited non-zero, or orchestration I/O failed.
    #[error("conversion failed: {message}")]
    ConversionFailed { message: String },

    /// The caller cancelled the job; the child process has been terminated.
    #[error("conversion cancelled")]
    Cancelled,

    /// An I/O error occurred outside the converter itself.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a converter unavailable error.
    pub fn converter_unavailable(message: impl Into<String>) -> Self {
        Self::ConverterUnavailable {
            message: message.into(),
        }
    }

    /// Create a conversion failed error.
    pub fn conversion_failed(message: impl Into<String>) -> Self {
        Self::ConversionFailed {
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
