use std::path::PathBuf;

/// Convenience result type used across seqlottie.
pub type SeqResult<T> = Result<T, SeqError>;

/// Error taxonomy for encoding and inspecting image-sequence descriptors.
///
/// Every variant is terminal for the operation that produced it; nothing is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum SeqError {
    /// Missing or out-of-range configuration (fps, canvas size, paths).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The image directory does not exist or cannot be listed.
    #[error("image directory '{}' not found or not listable: {source}", .path.display())]
    DirectoryNotFound {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The directory holds no file with an accepted image extension.
    #[error("no image files (webp, png, jpg, jpeg) found in '{}'", .path.display())]
    EmptySequence {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// An existing descriptor could not be opened or read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The destination (or its parent directory) could not be created or written.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// Image header could not be read while probing canvas dimensions.
    #[error("cannot read image dimensions of '{}': {source}", .path.display())]
    Probe {
        /// Image that failed to probe.
        path: PathBuf,
        /// Decoder failure.
        source: image::ImageError,
    },

    /// A descriptor violates the structural invariants of an image sequence.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing descriptors.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl SeqError {
    /// Build a [`SeqError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`SeqError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeqError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SeqError::Write`] value for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
