//! Error types for sp-io.

use thiserror::Error;

use sp_network::NetworkError;

/// Errors that can occur while reading inputs or writing results.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate node id {0}")]
    DuplicateNode(i64),

    #[error("edge {edge_id} references unknown node {node}")]
    UnknownNode { edge_id: i64, node: i64 },

    #[error("edge {edge_id}: {source}")]
    InvalidEdge {
        edge_id: i64,
        #[source]
        source: NetworkError,
    },

    #[error("could not resolve place {0:?}")]
    UnresolvedPlace(String),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
