//! Error types for the utility core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the utility core
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("Invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("Invalid map key: {0}")]
    InvalidKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not a directory")]
    NotADirectory(PathBuf),

    #[error("{0} already exists")]
    AlreadyExists(PathBuf),

    #[error("file: [{path}], error: [{source}]")]
    File {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl UtilError {
    /// Attach a path to an I/O error
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UtilError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap an error raised while handling `path`; `source` should not repeat the path
    pub(crate) fn in_file(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        UtilError::File {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether this is a filesystem failure rather than bad input
    pub fn is_io(&self) -> bool {
        match self {
            UtilError::Io { .. } | UtilError::NotADirectory(_) | UtilError::AlreadyExists(_) => {
                true
            }
            UtilError::File { source, .. } => source.is::<std::io::Error>(),
            _ => false,
        }
    }
}

#[cfg(feature = "python")]
impl From<UtilError> for pyo3::PyErr {
    fn from(err: UtilError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyOSError, PyValueError};

        if err.is_io() {
            PyOSError::new_err(err.to_string())
        } else {
            PyValueError::new_err(err.to_string())
        }
    }
}

/// Result type alias for the utility core
pub type Result<T> = std::result::Result<T, UtilError>;
