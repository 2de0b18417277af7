//! Errors raised while generating the image stylesheet.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// What the generator was doing when an I/O call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    ListDirectory,
    ReadImage,
    WriteStylesheet,
}

impl std::fmt::Display for IoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoAction::ListDirectory => write!(f, "list directory"),
            IoAction::ReadImage => write!(f, "read image"),
            IoAction::WriteStylesheet => write!(f, "write stylesheet"),
        }
    }
}

/// Error returned when a generation run fails.
///
/// Every variant aborts the run; nothing is retried and no output is written.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing the input directory, reading an image, or writing the output failed.
    #[error("failed to {action} '{}'", .path.display())]
    Io {
        action: IoAction,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input directory holds a different number of light and dark images.
    #[error("mismatching number of files ({light} light, {dark} dark)")]
    PairingMismatch { light: usize, dark: usize },

    /// The stylesheet template failed to render.
    #[error("failed to render stylesheet")]
    Template(#[from] minijinja::Error),
}

impl Error {
    pub(crate) fn io(action: IoAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
