use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when switching tools
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// A drag is in progress and the tool cannot change until it ends
    #[error("Tool busy: cannot switch from {active} while drawing")]
    ToolBusy { active: &'static str },
}

/// Errors surfaced to the user from file operations
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Failed to load background image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to export canvas to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Canvas has no area to export")]
    EmptyCanvas,
}

pub type SketchResult<T> = Result<T, SketchError>;
