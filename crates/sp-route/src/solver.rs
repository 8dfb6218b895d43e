//! Single-pair shortest path over the composite edge cost.
//!
//! # Pluggability
//!
//! The alternative search calls routing through the [`Solver`] trait, so a
//! different algorithm (A*, bidirectional search) can be dropped in without
//! touching it.  [`DijkstraSolver`] is the one the advisor uses.
//!
//! # Ties
//!
//! Equal-cost paths are resolved by heap order, which is deterministic for a
//! fixed network but otherwise unspecified.  Callers must accept any
//! minimum-cost path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sp_core::{CostWeights, EdgeId, NodeId};
use sp_network::{EdgeCost, RoadNetwork};

use crate::{Path, PathInfo, RouteError, RouteResult};

// ── Solver trait ──────────────────────────────────────────────────────────────

pub trait Solver {
    /// Minimum-cost path from `source` to `target` under the network's
    /// current live conditions.
    ///
    /// `Ok(None)` means no passable path exists.  `source == target` yields a
    /// single-node path of cost 0.
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        source: NodeId,
        target: NodeId,
    ) -> RouteResult<Option<PathInfo>>;
}

// ── DijkstraSolver ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with the composite cost under fixed weights.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub weights: CostWeights,
}

impl DijkstraSolver {
    pub fn new(weights: CostWeights) -> Self {
        Self { weights }
    }
}

impl Solver for DijkstraSolver {
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        source: NodeId,
        target: NodeId,
    ) -> RouteResult<Option<PathInfo>> {
        for n in [source, target] {
            if !network.contains_node(n) {
                return Err(RouteError::NodeNotFound(n));
            }
        }
        Ok(dijkstra(network, &self.weights, source, target).map(|tree| tree.reconstruct(network)))
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Predecessor tree produced by [`dijkstra`] for one `(source, target)` pair.
#[derive(Clone, Debug)]
pub struct SearchTree {
    source: NodeId,
    target: NodeId,
    total_cost: f64,
    /// `prev_edge[v]` = edge that last improved `v`; `EdgeId::INVALID` if none.
    prev_edge: Vec<EdgeId>,
}

impl SearchTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Edge through which `node` was reached, if it was reached.
    pub fn predecessor(&self, node: NodeId) -> Option<EdgeId> {
        self.prev_edge
            .get(node.index())
            .copied()
            .filter(|e| *e != EdgeId::INVALID)
    }

    /// Walk predecessors back from the target and reverse.
    pub fn reconstruct(&self, network: &RoadNetwork) -> PathInfo {
        let mut edges = Vec::new();
        let mut nodes = vec![self.target];
        let mut cur = self.target;
        while cur != self.source {
            let Some(e) = self.predecessor(cur) else {
                break;
            };
            edges.push(e);
            cur = network.edge_from[e.index()];
            nodes.push(cur);
        }
        debug_assert_eq!(cur, self.source, "predecessor chain does not reach the source");
        edges.reverse();
        nodes.reverse();

        let total_distance_m = edges
            .iter()
            .map(|e| network.edge_attrs[e.index()].distance_m)
            .sum();

        PathInfo {
            path: Path::new(nodes),
            edges,
            total_cost: self.total_cost,
            total_distance_m,
        }
    }
}

/// Dijkstra from `source`, stopping once `target` is settled.
///
/// Impassable edges are never relaxed.  Returns `None` when `target` is not
/// reachable.
///
/// # Panics
///
/// Panics if `source` or `target` is not a node of `network`.
/// [`DijkstraSolver`] checks both before calling this.
pub fn dijkstra(
    network: &RoadNetwork,
    weights: &CostWeights,
    source: NodeId,
    target: NodeId,
) -> Option<SearchTree> {
    let n = network.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[source.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node: source });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        if node == target {
            break;
        }

        for edge in network.out_edges(node) {
            let EdgeCost::Finite(edge_cost) = network.edge_cost(edge, weights) else {
                continue;
            };
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + edge_cost;

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(State { cost: new_cost, node: neighbor });
            }
        }
    }

    let total_cost = dist[target.index()];
    total_cost.is_finite().then(|| SearchTree {
        source,
        target,
        total_cost,
        prev_edge,
    })
}
