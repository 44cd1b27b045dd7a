//! Error types for password generation and image export

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced to the user while generating a password
#[derive(Error, Debug)]
pub enum GridError {
    /// Password requested with nothing selected
    #[error("Please select at least one point.")]
    EmptySelection,

    /// The password image could not be written
    #[error("Failed to save password image to '{}': {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
