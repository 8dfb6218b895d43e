//! `sp-network`: road graph, live conditions, and edge cost.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`network`]   | `RoadNetwork` (CSR + R-tree + overlay), `RoadNetworkBuilder` |
//! | [`condition`] | `LiveCondition`, `ConditionOverlay`                        |
//! | [`cost`]      | `EdgeAttrs`, `EdgeCost`, `edge_cost`                       |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                         |

pub mod condition;
pub mod cost;
pub mod error;
pub mod network;


pub use condition::{ConditionOverlay, LiveCondition};
pub use cost::{BLOCK_COST, EdgeAttrs, EdgeCost, IMPASSABLE_THRESHOLD, edge_cost};
pub use error::{NetworkError, NetworkResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
