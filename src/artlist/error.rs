use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtlistError {
    /// A required positional argument was missing or empty.
    #[error("{argument} of the \"{action}\" action is not provided")]
    Validation {
        action: &'static str,
        argument: &'static str,
    },

    #[error("{id} ({name}) has already been added")]
    Duplicate { id: String, name: String },

    #[error("No match found for \"{0}\", nothing removed")]
    NotFound(String),

    #[error("Storage error at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("The action type \"{0}\" is not found")]
    UnknownAction(String),
}

impl ArtlistError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtlistError>;
