//! `sp-io`: everything that touches files or text for the route advisor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`loader`]   | `nodes.csv` / `edges.csv` → `RoadNetwork`                 |
//! | [`updates`]  | `updates.json` live-condition feed: read, write, apply    |
//! | [`resolver`] | place name or `"lat,lon"` → `NodeId`                      |
//! | [`writer`]   | `path.json` document and the terminal report              |
//! | [`perturb`]  | random live-update generator for demos                    |
//! | [`error`]    | `IoError`, `IoResult<T>`                                  |

pub mod error;
pub mod loader;
pub mod perturb;
pub mod resolver;
pub mod updates;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{IoError, IoResult};
pub use loader::{LoadOptions, load_network_csv, load_network_reader};
pub use perturb::perturb_updates;
pub use resolver::resolve_place;
pub use updates::{
    EdgeUpdate, Updates, apply_updates, load_updates_json, load_updates_reader, save_updates_json,
};
pub use writer::{PathDocument, PointRecord, RouteRecord, render_report, write_path_json};
