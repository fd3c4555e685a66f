use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading a network or answering routing queries
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("container is empty")]
    EmptyContainer,

    #[error("no stations to search")]
    EmptyDomain,

    #[error("station `{0}` is not part of the network")]
    VertexNotFound(String),

    #[error("point ({x}, {y}) is not a finite position")]
    InvalidPoint { x: f64, y: f64 },

    #[error("station `{0}` has no known position")]
    PositionNotFound(String),

    #[error("no path from `{from}` to `{to}`")]
    PathNotFound { from: String, to: String },

    #[error("line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RoutingError>;
