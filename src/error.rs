use std::io;

use thiserror::Error;

/// Errors terminal to a benchmark run. All of them propagate to the
/// dispatcher, which prints a single diagnostic line and exits with code 1.
#[derive(Debug, Error)]
pub enum Error {
    /// the instance file violates the DIMACS structure
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// strategy name outside the accepted set
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// a numeric parameter failed to parse or lies outside its accepted range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// a strategy returned a coloring whose length differs from the vertex count
    #[error("algorithm returned {got} colors for {expected} vertices")]
    ResultSizeMismatch {
        /// number of vertices in the instance
        expected: usize,
        /// length of the returned coloring
        got: usize,
    },

    /// opening or writing an output, results or snapshot file failed
    #[error("i/o failure on {path}: {source}")]
    IOFailure {
        /// the file involved
        path: String,
        /// underlying error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// wraps an [`io::Error`] together with the path it occurred on
    pub fn io(path: &str, source: io::Error) -> Self {
        Self::IOFailure { path: path.to_string(), source }
    }
}

/// crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;
