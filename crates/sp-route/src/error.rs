//! Routing error type.
//!
//! "No path" and "fewer than K routes" are ordinary outcomes, reported as
//! `None` / a short `Vec`, never as errors.

use thiserror::Error;

use sp_core::NodeId;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("route count must be at least 1, got {0}")]
    InvalidK(usize),
}

pub type RouteResult<T> = Result<T, RouteError>;
