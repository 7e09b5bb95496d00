use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which log a segment came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Client,
    Server,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Client => f.write_str("client"),
            Side::Server => f.write_str("server"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Format error: {side} trial segment #{index} does not match the expected layout")]
    Format { side: Side, index: usize },

    #[error("client and server trial counts must be equal (client={client}, server={server})")]
    SizeMismatch { client: usize, server: usize },

    #[error("trial mismatch at position {position}: client trial {client:?}, server trial {server:?}")]
    TrialMismatch {
        position: usize,
        client: String,
        server: String,
    },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, BenchError>;
