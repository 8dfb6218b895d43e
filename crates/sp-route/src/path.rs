//! Paths and their derived summary.

use std::fmt;

use serde::Serialize;

use sp_core::{EdgeId, NodeId};

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered node sequence from source to target, never empty.
///
/// Equality and hashing are by the full node sequence, which is how
/// alternative routes are deduplicated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Path(Vec<NodeId>);

impl Path {
    /// # Panics
    /// Panics if `nodes` is empty.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        assert!(!nodes.is_empty(), "a path has at least one node");
        Path(nodes)
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges traversed.
    #[inline]
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    pub fn source(&self) -> NodeId {
        self.0[0]
    }

    pub fn target(&self) -> NodeId {
        self.0[self.0.len() - 1]
    }

    /// Consecutive `(from, to)` node pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", n.0)?;
        }
        Ok(())
    }
}

// ── PathInfo ──────────────────────────────────────────────────────────────────

/// A path together with the edges it uses and its totals.
///
/// Computed once, when the path is found, under the live conditions in effect
/// at that moment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathInfo {
    pub path: Path,
    /// `edges[i]` joins `path.nodes()[i]` to `path.nodes()[i + 1]`.
    pub edges: Vec<EdgeId>,
    pub total_cost: f64,
    pub total_distance_m: f64,
}
