/// Error type for configuration and catalog loading
///
/// The picker itself cannot fail; only the layers that read files do.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog or config file is not valid JSON for its schema
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog with no entries cannot be picked from
    #[error("Catalog has no entries")]
    EmptyCatalog,

    /// The platform reports no user configuration directory
    #[error("Could not determine user config directory")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
