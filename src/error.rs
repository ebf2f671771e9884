//! Error types for the face match application.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// `OpenCV` operation failed
    #[error("OpenCV error: {0}")]
    OpenCV(#[from] opencv::Error),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cascade classifier could not be loaded
    #[error("Model error: {0}")]
    ModelError(String),

    /// Camera or video file could not be opened
    #[error("Camera error: {0}")]
    Camera(String),

    /// Reference image missing or unreadable
    #[error("Reference image not found: {0}")]
    ReferenceNotFound(String),

    /// Background face check worker failed or is gone
    #[error("Worker error: {0}")]
    Worker(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
