//! Result output: the `path.json` document read by the map viewer, and a
//! plain-text report for the terminal.
//!
//! ```json
//! {
//!   "routes": [
//!     {
//!       "id": 0, "rank": 1, "cost": 8120.0, "distance_m": 7900.0,
//!       "duration_min": 10, "hops": 3,
//!       "points": [ { "name": "Majestic", "lat": 12.9767, "lon": 77.5713 } ]
//!     }
//!   ]
//! }
//! ```
//!
//! `explanation` is present on every route except the best one.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use sp_core::AdvisorConfig;
use sp_network::RoadNetwork;
use sp_route::{Advisory, PathInfo};

use crate::IoResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub lat:  f64,
    pub lon:  f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// 0-based position in `routes`.
    pub id:           usize,
    pub rank:         usize,
    pub cost:         f64,
    pub distance_m:   f64,
    pub duration_min: u64,
    pub hops:         usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation:  Option<String>,
    pub points:       Vec<PointRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDocument {
    pub routes: Vec<RouteRecord>,
}

impl PathDocument {
    pub fn from_advisory(network: &RoadNetwork, advisory: &Advisory, config: &AdvisorConfig) -> Self {
        let routes = advisory
            .routes
            .iter()
            .enumerate()
            .map(|(id, r)| RouteRecord {
                id,
                rank:         r.rank,
                cost:         r.info.total_cost,
                distance_m:   r.info.total_distance_m,
                duration_min: duration_min(network, &r.info, config),
                hops:         r.info.path.hops(),
                explanation:  r.explanation.as_ref().map(ToString::to_string),
                points: r
                    .info
                    .path
                    .nodes()
                    .iter()
                    .map(|&n| {
                        let pos = network.node_pos[n.index()];
                        PointRecord { name: network.node_name(n).to_owned(), lat: pos.lat, lon: pos.lon }
                    })
                    .collect(),
            })
            .collect();
        Self { routes }
    }
}

/// Whole minutes from the edges' free-flow times, or from the configured
/// assumed speed when the data carries no times.
fn duration_min(network: &RoadNetwork, info: &PathInfo, config: &AdvisorConfig) -> u64 {
    let secs: f64 = info
        .edges
        .iter()
        .map(|e| network.edge_attrs[e.index()].freeflow_time_s)
        .sum();
    if secs > 0.0 {
        (secs / 60.0).round() as u64
    } else {
        config.estimate_minutes(info.total_distance_m)
    }
}

/// Write `doc` as pretty-printed JSON, replacing the file.
pub fn write_path_json(path: &Path, doc: &PathDocument) -> IoResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, doc)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Human-readable summary of an advisory.
///
/// ```text
/// Top 2 routes from Majestic -> Whitefield:
/// 1) Distance: 18.40 km | Hops: 4 | Path: Majestic -> ... -> Whitefield
///    Chosen as BEST route.
/// 2) Distance: 21.10 km | Hops: 5 | Path: ...
///    Why not preferred: Longer than best by 2.70 km. More hops (5 edges vs 4)
/// ```
pub fn render_report(network: &RoadNetwork, advisory: &Advisory) -> String {
    let from = network.node_name(advisory.source);
    let to = network.node_name(advisory.target);
    let mut s = String::new();

    if advisory.is_empty() {
        let _ = writeln!(s, "No path found from {from} to {to}");
        return s;
    }

    let _ = writeln!(s, "Top {} routes from {from} -> {to}:", advisory.routes.len());
    for r in &advisory.routes {
        let names: Vec<&str> = r.info.path.nodes().iter().map(|&n| network.node_name(n)).collect();
        let _ = writeln!(
            s,
            "{}) Distance: {:.2} km | Hops: {} | Path: {}",
            r.rank,
            r.info.total_distance_m / 1000.0,
            r.info.path.hops(),
            names.join(" -> "),
        );
        match &r.explanation {
            None => s.push_str("   Chosen as BEST route.\n"),
            Some(why) => {
                let _ = writeln!(s, "   Why not preferred: {why}");
            }
        }
    }
    s
}
