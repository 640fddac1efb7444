//! Error types for isoptera_io.

use isoptera_core::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image and animation encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Compression errors
    #[error("Compression error: {0}")]
    Compression(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// A loaded table or snapshot the engine refuses
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn compression<S: Into<String>>(msg: S) -> Self {
        Self::Compression(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IoError::serialization("test error");
        assert_eq!(err.to_string(), "Serialization error: test error");
    }

    #[test]
    fn test_error_context() {
        let err = IoError::validation("empty table").with_context("loading spiral.json");
        assert!(err.to_string().contains("loading spiral.json"));
        assert!(err.to_string().contains("empty table"));
    }

    #[test]
    fn test_from_image_error() {
        let err: IoError = image::ImageError::IoError(std::io::Error::other("disk full")).into();
        assert!(matches!(err, IoError::Image(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_from_engine_error() {
        let err: IoError = EngineError::invalid("no states").into();
        assert!(matches!(err, IoError::Engine(_)));
    }
}
