//! `sp-route`: route search and route comparison.
//!
//! # Crate layout
//!
//! | Module             | Contents                                              |
//! |--------------------|-------------------------------------------------------|
//! | [`path`]           | `Path`, `PathInfo`                                    |
//! | [`solver`]         | `Solver` trait, `DijkstraSolver`, `dijkstra`, `SearchTree` |
//! | [`alternatives`]   | `k_shortest_paths` (edge-deviation search)            |
//! | [`explain`]        | `Reason`, `Explanation`, `explain`                    |
//! | [`advisor`]        | `RouteAdvisor`, `Advisory`, `RankedRoute`             |
//! | [`error`]          | `RouteError`, `RouteResult<T>`                        |
//!
//! Everything here is synchronous and single-threaded.  The alternative
//! search needs `&mut RoadNetwork` because it temporarily overrides live
//! conditions; the borrow checker therefore serialises route requests
//! against one network instance.

pub mod advisor;
pub mod alternatives;
pub mod error;
pub mod explain;
pub mod path;
pub mod solver;


pub use advisor::{Advisory, RankedRoute, RouteAdvisor};
pub use alternatives::k_shortest_paths;
pub use error::{RouteError, RouteResult};
pub use explain::{Explanation, Reason, explain};
pub use path::{Path, PathInfo};
pub use solver::{DijkstraSolver, SearchTree, Solver, dijkstra};
