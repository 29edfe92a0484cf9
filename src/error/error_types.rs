//! Defines the types of errors that may occur while loading or saving a tree.

use thiserror::Error;

use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be read at all.
    #[error("could not read {}: {source}", describe_path(.path))]
    Io {
        /// `None` when reading from standard input.
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
    /// The input was read but is not a well formed tree.
    #[error("malformed tree: {0}")]
    Json(#[from] serde_json::Error),
    /// The tree holds something its JSON form cannot express.
    #[error("could not encode tree: {0}")]
    Encode(#[source] serde_json::Error),
}

impl LoadError {
    /// Where the input came from, for messages.
    pub fn origin(&self) -> String {
        match self {
            LoadError::Io { path: Some(path), .. } => path.display().to_string(),
            LoadError::Io { path: None, .. } => "<stdin>".to_string(),
            LoadError::Json(_) => "<input>".to_string(),
            LoadError::Encode(_) => "<output>".to_string(),
        }
    }
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref().map_or_else(|| "standard input".to_string(), |path| path.display().to_string())
}
