//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`.  The
//! sort is stable, so a node's outgoing edges keep the order in which they
//! were added and neighbour iteration is deterministic.
//!
//! Topology and static attributes are immutable after [`RoadNetworkBuilder::build`].
//! The only mutable state is the [`ConditionOverlay`].
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to resolve free-form coordinate queries to graph nodes.

use std::fmt;
use std::ops::Deref;

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use sp_core::{CostWeights, EdgeId, GeoPoint, NodeId};

use crate::{ConditionOverlay, EdgeAttrs, EdgeCost, LiveCondition, NetworkError, NetworkResult, edge_cost};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough for picking
    /// the nearest node within a city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format with a live-condition overlay.
///
/// Parallel edges between the same ordered pair of nodes are allowed.  An
/// undirected road is two directed edges with swapped endpoints.
///
/// Do not construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    pub node_name: Vec<String>,
    pub node_pos: Vec<GeoPoint>,
    /// Id used by input files.
    pub node_external: Vec<i64>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    pub edge_from: Vec<NodeId>,
    pub edge_to: Vec<NodeId>,
    pub edge_attrs: Vec<EdgeAttrs>,
    /// Id used by live-update feeds.  Several directed edges may share one.
    pub edge_external: Vec<i64>,

    node_by_external: FxHashMap<i64, NodeId>,
    edges_by_external: FxHashMap<i64, Vec<EdgeId>>,
    conditions: ConditionOverlay,
    spatial_idx: RTree<NodeEntry>,
}

impl fmt::Debug for RoadNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .field("conditions", &self.conditions.len())
            .finish()
    }
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    #[inline]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edge_count()
    }

    pub fn check_node(&self, node: NodeId) -> NetworkResult<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(NetworkError::NodeNotFound(node))
        }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range; no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Every directed edge from `a` to `b`, parallel edges included.
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> Vec<EdgeId> {
        self.out_edges(a)
            .filter(|e| self.edge_to[e.index()] == b)
            .collect()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    pub fn node_by_external_id(&self, external: i64) -> Option<NodeId> {
        self.node_by_external.get(&external).copied()
    }

    /// All directed edges built from the input edge `external`.
    pub fn edges_by_external_id(&self, external: i64) -> &[EdgeId] {
        self.edges_by_external
            .get(&external)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `(NodeId, name)` pairs in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.node_name
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId(i as u32), name.as_str()))
    }

    // ── Live conditions ───────────────────────────────────────────────────

    /// Condition in effect for `edge` (defaults when none was set).
    #[inline]
    pub fn condition(&self, edge: EdgeId) -> LiveCondition {
        self.conditions.get(edge)
    }

    pub fn conditions(&self) -> &ConditionOverlay {
        &self.conditions
    }

    pub fn set_condition(&mut self, edge: EdgeId, condition: LiveCondition) -> NetworkResult<()> {
        if !self.contains_edge(edge) {
            return Err(NetworkError::EdgeNotFound(edge));
        }
        self.conditions.insert(edge, condition);
        Ok(())
    }

    pub fn clear_condition(&mut self, edge: EdgeId) -> Option<LiveCondition> {
        self.conditions.remove(edge)
    }

    /// Current cost of `edge` under its live condition.
    #[inline]
    pub fn edge_cost(&self, edge: EdgeId, weights: &CostWeights) -> EdgeCost {
        edge_cost(&self.edge_attrs[edge.index()], &self.conditions.get(edge), weights)
    }

    /// Apply `overrides`, run `probe` against the modified network, then put
    /// every touched entry back exactly as it was (including "no entry").
    ///
    /// Restoration runs from a drop guard, so it also happens if `probe`
    /// panics.
    pub fn with_overrides<I, F, R>(&mut self, overrides: I, probe: F) -> R
    where
        I: IntoIterator<Item = (EdgeId, LiveCondition)>,
        F: FnOnce(&RoadNetwork) -> R,
    {
        let mut guard = OverrideGuard { network: self, saved: Vec::new() };
        for (edge, condition) in overrides {
            debug_assert!(guard.network.contains_edge(edge), "override on unknown {edge}");
            let prior = guard.network.conditions.insert(edge, condition);
            guard.saved.push((edge, prior));
        }
        probe(&*guard)
    }

    /// [`with_overrides`](Self::with_overrides) marking each of `edges`
    /// blocked while keeping the rest of its condition.
    pub fn with_blocked<F, R>(&mut self, edges: &[EdgeId], probe: F) -> R
    where
        F: FnOnce(&RoadNetwork) -> R,
    {
        let overrides: Vec<(EdgeId, LiveCondition)> = edges
            .iter()
            .map(|&e| (e, self.condition(e).blocked()))
            .collect();
        self.with_overrides(overrides, probe)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest road node to `pos`; `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }
}

// ── OverrideGuard ─────────────────────────────────────────────────────────────

/// Holds the prior raw entries of overridden edges and restores them on drop.
struct OverrideGuard<'a> {
    network: &'a mut RoadNetwork,
    saved: Vec<(EdgeId, Option<LiveCondition>)>,
}

impl Deref for OverrideGuard<'_> {
    type Target = RoadNetwork;
    fn deref(&self) -> &RoadNetwork {
        self.network
    }
}

impl Drop for OverrideGuard<'_> {
    fn drop(&mut self) {
        // Reverse order so an edge overridden twice ends at its first prior.
        for (edge, prior) in self.saved.drain(..).rev() {
            self.network.conditions.restore(edge, prior);
        }
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use sp_core::GeoPoint;
/// use sp_network::{EdgeAttrs, RoadNetworkBuilder};
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node("Koramangala", GeoPoint::new(12.9352, 77.6245));
/// let c = b.add_node("Indiranagar", GeoPoint::new(12.9719, 77.6412));
/// b.add_road(a, c, EdgeAttrs::neutral(5_000.0));
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    nodes: Vec<RawNode>,
    raw_edges: Vec<RawEdge>,
    next_edge_external: i64,
}

struct RawNode {
    external: i64,
    name: String,
    pos: GeoPoint,
}

struct RawEdge {
    external: i64,
    from: NodeId,
    to: NodeId,
    attrs: EdgeAttrs,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new(), next_edge_external: 0 }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
            next_edge_external: 0,
        }
    }

    /// Add a node whose external id equals its `NodeId` index.
    pub fn add_node(&mut self, name: impl Into<String>, pos: GeoPoint) -> NodeId {
        let external = self.nodes.len() as i64;
        self.add_node_with_id(external, name, pos)
    }

    /// Add a node carrying the id it has in the input data.
    pub fn add_node_with_id(&mut self, external: i64, name: impl Into<String>, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(RawNode { external, name: name.into(), pos });
        id
    }

    /// Add a directed edge with an automatically assigned external id.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, attrs: EdgeAttrs) -> i64 {
        let external = self.next_edge_external;
        self.add_directed_edge_with_id(external, from, to, attrs);
        external
    }

    /// Add a directed edge carrying the id it has in the input data.
    ///
    /// Reusing an external id is allowed; a live update for that id then
    /// applies to every edge carrying it.
    pub fn add_directed_edge_with_id(&mut self, external: i64, from: NodeId, to: NodeId, attrs: EdgeAttrs) {
        self.next_edge_external = self.next_edge_external.max(external + 1);
        self.raw_edges.push(RawEdge { external, from, to, attrs });
    }

    /// Checked variant of [`add_directed_edge_with_id`](Self::add_directed_edge_with_id).
    pub fn try_add_directed_edge(
        &mut self,
        external: i64,
        from: NodeId,
        to: NodeId,
        attrs: EdgeAttrs,
    ) -> NetworkResult<()> {
        for n in [from, to] {
            if n.index() >= self.nodes.len() {
                return Err(NetworkError::NodeNotFound(n));
            }
        }
        attrs.validate()?;
        self.add_directed_edge_with_id(external, from, to, attrs);
        Ok(())
    }

    /// Convenience: two directed edges with independent external ids.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, attrs: EdgeAttrs) -> (i64, i64) {
        let ab = self.add_directed_edge(a, b, attrs);
        let ba = self.add_directed_edge(b, a, attrs);
        (ab, ba)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`] with an empty
    /// condition overlay.
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:     Vec<NodeId>    = raw.iter().map(|e| e.from).collect();
        let edge_to:       Vec<NodeId>    = raw.iter().map(|e| e.to).collect();
        let edge_attrs:    Vec<EdgeAttrs> = raw.iter().map(|e| e.attrs).collect();
        let edge_external: Vec<i64>       = raw.iter().map(|e| e.external).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let mut edges_by_external: FxHashMap<i64, Vec<EdgeId>> = FxHashMap::default();
        for (i, &ext) in edge_external.iter().enumerate() {
            edges_by_external.entry(ext).or_default().push(EdgeId(i as u32));
        }

        let mut node_by_external = FxHashMap::default();
        let mut node_name = Vec::with_capacity(node_count);
        let mut node_pos = Vec::with_capacity(node_count);
        let mut node_external = Vec::with_capacity(node_count);
        for (i, n) in self.nodes.into_iter().enumerate() {
            node_by_external.insert(n.external, NodeId(i as u32));
            node_name.push(n.name);
            node_pos.push(n.pos);
            node_external.push(n.external);
        }

        let entries: Vec<NodeEntry> = node_pos
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry { point: [pos.lat, pos.lon], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadNetwork {
            node_name,
            node_pos,
            node_external,
            node_out_start,
            edge_from,
            edge_to,
            edge_attrs,
            edge_external,
            node_by_external,
            edges_by_external,
            conditions: ConditionOverlay::new(),
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
