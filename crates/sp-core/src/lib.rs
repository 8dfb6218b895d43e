//! `sp-core`: foundational types for the `safepath` route advisor.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and only small external ones (`serde`, `thiserror`, `toml`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`                                |
//! | [`geo`]    | `GeoPoint`, `"lat,lon"` parsing                   |
//! | [`config`] | `CostWeights`, `AdvisorConfig` (TOML-loadable)    |
//! | [`error`]  | `CoreError`, `CoreResult`                         |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AdvisorConfig, CostWeights};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
