//! Network-subsystem error type.

use thiserror::Error;

use sp_core::{EdgeId, NodeId};

/// Errors produced by `sp-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("edge {0} not found in network")]
    EdgeNotFound(EdgeId),

    #[error("invalid edge attributes: {0}")]
    InvalidEdge(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
