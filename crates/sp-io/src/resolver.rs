//! Turn a user-supplied place into a network node.
//!
//! Tried in order:
//!
//! 1. exact node name (surrounding whitespace ignored);
//! 2. case-insensitive substring of a node name, lowest `NodeId` first;
//! 3. a `"lat,lon"` pair, snapped to the nearest node.

use tracing::debug;

use sp_core::{GeoPoint, NodeId};
use sp_network::RoadNetwork;

use crate::{IoError, IoResult};

pub fn resolve_place(network: &RoadNetwork, query: &str) -> IoResult<NodeId> {
    let q = query.trim();
    if q.is_empty() {
        return Err(IoError::UnresolvedPlace(query.to_owned()));
    }

    if let Some((id, _)) = network.nodes().find(|(_, name)| *name == q) {
        return Ok(id);
    }

    let needle = q.to_lowercase();
    if let Some((id, name)) = network
        .nodes()
        .find(|(_, name)| name.to_lowercase().contains(&needle))
    {
        debug!(query = q, matched = name, "resolved by partial name");
        return Ok(id);
    }

    if let Some(pos) = GeoPoint::parse_pair(q) {
        if let Some(id) = network.snap_to_node(pos) {
            debug!(query = q, matched = network.node_name(id), "resolved by coordinates");
            return Ok(id);
        }
    }

    Err(IoError::UnresolvedPlace(query.to_owned()))
}
