//! The `updates.json` live-condition feed.
//!
//! A JSON object keyed by edge id (as a string), one object per edge:
//!
//! ```json
//! {
//!   "100": { "traffic_multiplier": 2.4, "rain_mm_hr": 6.5, "blocked": false, "road_quality_adjust": -1.2 },
//!   "101": { "blocked": true }
//! }
//! ```
//!
//! Every field is optional and defaults to "no effect".  The map is a
//! `BTreeMap` so that files round-trip in a stable key order.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sp_network::{LiveCondition, RoadNetwork};

use crate::{IoError, IoResult};

/// One entry of `updates.json`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeUpdate {
    pub traffic_multiplier:  f64,
    pub rain_mm_hr:          f64,
    pub blocked:             bool,
    pub road_quality_adjust: f64,
}

impl Default for EdgeUpdate {
    fn default() -> Self {
        let c = LiveCondition::DEFAULT;
        Self {
            traffic_multiplier:  c.traffic_multiplier,
            rain_mm_hr:          c.rainfall_mm_per_hour,
            blocked:             c.blocked,
            road_quality_adjust: c.road_quality_adjust,
        }
    }
}

impl From<EdgeUpdate> for LiveCondition {
    fn from(u: EdgeUpdate) -> Self {
        LiveCondition {
            traffic_multiplier:   u.traffic_multiplier,
            rainfall_mm_per_hour: u.rain_mm_hr,
            road_quality_adjust:  u.road_quality_adjust,
            blocked:              u.blocked,
        }
    }
}

/// Edge id string → update.
pub type Updates = BTreeMap<String, EdgeUpdate>;

pub fn load_updates_json(path: &Path) -> IoResult<Updates> {
    load_updates_reader(BufReader::new(File::open(path)?))
}

pub fn load_updates_reader<R: Read>(reader: R) -> IoResult<Updates> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write `updates` as pretty-printed JSON, replacing the file.
pub fn save_updates_json(path: &Path, updates: &Updates) -> IoResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, updates)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Set the live condition of every edge named in `updates`.
///
/// An entry applies to all directed edges sharing its id.  Entries whose key
/// is not an integer or names no edge are skipped with a warning.  Edges not
/// mentioned keep their current condition.  Returns the number of directed
/// edges updated.
pub fn apply_updates(network: &mut RoadNetwork, updates: &Updates) -> IoResult<usize> {
    let mut applied = 0;
    for (key, update) in updates {
        let Ok(external) = key.trim().parse::<i64>() else {
            warn!(key = %key, "ignoring update with non-numeric edge id");
            continue;
        };
        let edges = network.edges_by_external_id(external).to_vec();
        if edges.is_empty() {
            warn!(edge_id = external, "ignoring update for unknown edge");
            continue;
        }
        for edge in edges {
            network
                .set_condition(edge, (*update).into())
                .map_err(|source| IoError::InvalidEdge { edge_id: external, source })?;
            applied += 1;
        }
    }
    debug!(entries = updates.len(), applied, "live updates applied");
    Ok(applied)
}
