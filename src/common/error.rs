//! Error types for the analysis pipeline.
//!
//! Extraction itself never fails; these errors cover the surrounding I/O,
//! configuration and rendering steps.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while loading results or producing reports.
#[derive(Debug)]
pub enum AnalysisError {
    /// The results root passed on the command line does not exist.
    MissingResultsDir(PathBuf),

    /// The results root exists but is not a directory.
    NotADirectory(PathBuf),

    /// A file or directory could not be read or written.
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The TOML analysis configuration could not be parsed.
    Config(String),

    /// Writing the comparison CSV failed.
    Csv(csv::Error),

    /// Serializing the JSON summary failed.
    Json(serde_json::Error),

    /// The chart backend reported an error.
    Chart(String),
}

impl AnalysisError {
    /// Wraps an I/O error together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnalysisError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingResultsDir(path) => {
                write!(f, "Results directory not found: {}", path.display())
            }
            AnalysisError::NotADirectory(path) => {
                write!(f, "Results path is not a directory: {}", path.display())
            }
            AnalysisError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            AnalysisError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            AnalysisError::Csv(e) => write!(f, "CSV error: {}", e),
            AnalysisError::Json(e) => write!(f, "JSON error: {}", e),
            AnalysisError::Chart(msg) => write!(f, "Chart error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Io { source, .. } => Some(source),
            AnalysisError::Csv(e) => Some(e),
            AnalysisError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(e: csv::Error) -> Self {
        AnalysisError::Csv(e)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::Json(e)
    }
}

impl From<toml::de::Error> for AnalysisError {
    fn from(e: toml::de::Error) -> Self {
        AnalysisError::Config(e.to_string())
    }
}
