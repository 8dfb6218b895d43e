//! CSV network loader.
//!
//! # CSV format
//!
//! Two files.  Nodes:
//!
//! ```csv
//! id,name,lat,lon
//! 0,Majestic,12.9767,77.5713
//! 1,"Shivajinagar, Bus Stand",12.9857,77.6057
//! ```
//!
//! Edges, one directed edge per row:
//!
//! ```csv
//! u,v,distance_m,freeflow_time_s,road_quality,safety_index,edge_id
//! 0,1,4200,540,7.5,8,100
//! ```
//!
//! `u` and `v` refer to node `id`s, which need not be dense.  `edge_id` is the
//! key used by `updates.json`.  With [`LoadOptions::bidirectional`] each row
//! also adds the reverse edge under the same `edge_id`, so one update covers
//! both directions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::info;

use sp_core::{GeoPoint, NodeId};
use sp_network::{EdgeAttrs, RoadNetwork, RoadNetworkBuilder};

use crate::{IoError, IoResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id:   i64,
    name: String,
    lat:  f64,
    lon:  f64,
}

#[derive(Deserialize)]
struct EdgeRecord {
    u:               i64,
    v:               i64,
    distance_m:      f64,
    freeflow_time_s: f64,
    road_quality:    f64,
    safety_index:    f64,
    edge_id:         i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default)]
pub struct LoadOptions {
    /// Add the reverse of every edge row as well.
    pub bidirectional: bool,
}

/// Load a network from a node file and an edge file.
pub fn load_network_csv(nodes: &Path, edges: &Path, opts: LoadOptions) -> IoResult<RoadNetwork> {
    let nodes = File::open(nodes)?;
    let edges = File::open(edges)?;
    load_network_reader(nodes, edges, opts)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
pub fn load_network_reader<N: Read, E: Read>(
    nodes: N,
    edges: E,
    opts: LoadOptions,
) -> IoResult<RoadNetwork> {
    let mut builder = RoadNetworkBuilder::new();
    let mut by_external: FxHashMap<i64, NodeId> = FxHashMap::default();

    for result in csv::Reader::from_reader(nodes).deserialize::<NodeRecord>() {
        let row = result?;
        if by_external.contains_key(&row.id) {
            return Err(IoError::DuplicateNode(row.id));
        }
        let id = builder.add_node_with_id(row.id, row.name, GeoPoint::new(row.lat, row.lon));
        by_external.insert(row.id, id);
    }

    let lookup = |edge_id: i64, node: i64| {
        by_external
            .get(&node)
            .copied()
            .ok_or(IoError::UnknownNode { edge_id, node })
    };

    let mut rows = 0usize;
    for result in csv::Reader::from_reader(edges).deserialize::<EdgeRecord>() {
        let row = result?;
        let from = lookup(row.edge_id, row.u)?;
        let to = lookup(row.edge_id, row.v)?;
        let attrs = EdgeAttrs {
            distance_m:      row.distance_m,
            freeflow_time_s: row.freeflow_time_s,
            road_quality:    row.road_quality,
            safety_index:    row.safety_index,
        };

        let invalid = |source| IoError::InvalidEdge { edge_id: row.edge_id, source };
        builder.try_add_directed_edge(row.edge_id, from, to, attrs).map_err(invalid)?;
        if opts.bidirectional {
            builder.try_add_directed_edge(row.edge_id, to, from, attrs).map_err(invalid)?;
        }
        rows += 1;
    }

    let network = builder.build();
    info!(
        nodes = network.node_count(),
        edge_rows = rows,
        directed_edges = network.edge_count(),
        bidirectional = opts.bidirectional,
        "network loaded"
    );
    Ok(network)
}
