//! One route-advisory request end to end: validate, search, explain.

use serde::Serialize;
use tracing::info;

use sp_core::{CostWeights, NodeId};
use sp_network::RoadNetwork;

use crate::{DijkstraSolver, Explanation, PathInfo, RouteError, RouteResult, explain, k_shortest_paths};

/// One entry of an [`Advisory`].
#[derive(Clone, Debug, Serialize)]
pub struct RankedRoute {
    /// 1-based; rank 1 is the best route.
    pub rank: usize,
    pub info: PathInfo,
    /// Why this route lost to rank 1.  `None` for rank 1 itself.
    pub explanation: Option<Explanation>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Advisory {
    pub source: NodeId,
    pub target: NodeId,
    /// Best first.  Empty when the target is unreachable; may hold fewer
    /// routes than requested.
    pub routes: Vec<RankedRoute>,
}

impl Advisory {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn best(&self) -> Option<&RankedRoute> {
        self.routes.first()
    }
}

/// Drives Dijkstra through the alternative search and annotates the result.
pub struct RouteAdvisor {
    solver: DijkstraSolver,
}

impl RouteAdvisor {
    pub fn new(weights: CostWeights) -> Self {
        Self { solver: DijkstraSolver::new(weights) }
    }

    /// Up to `k` ranked routes from `source` to `target`.
    ///
    /// Unknown nodes and `k == 0` are rejected before any search.  The
    /// network's live conditions are identical before and after the call.
    pub fn advise(
        &self,
        network: &mut RoadNetwork,
        source: NodeId,
        target: NodeId,
        k: usize,
    ) -> RouteResult<Advisory> {
        for n in [source, target] {
            if !network.contains_node(n) {
                return Err(RouteError::NodeNotFound(n));
            }
        }
        if k == 0 {
            return Err(RouteError::InvalidK(k));
        }

        let paths = k_shortest_paths(&self.solver, network, source, target, k)?;

        let routes: Vec<RankedRoute> = match paths.split_first() {
            None => Vec::new(),
            Some((best, _)) => paths
                .iter()
                .enumerate()
                .map(|(i, info)| RankedRoute {
                    rank: i + 1,
                    info: info.clone(),
                    explanation: (i > 0).then(|| explain(network, best, info)),
                })
                .collect(),
        };

        info!(
            source = network.node_name(source),
            target = network.node_name(target),
            requested = k,
            found = routes.len(),
            "route advisory complete"
        );

        Ok(Advisory { source, target, routes })
    }
}
