//! Approximate k-shortest paths by edge deviation.
//!
//! Starting from the best path, each round takes the most recently accepted
//! path and, for every consecutive node pair `(a, b)` on it, blocks all
//! `a → b` edges, re-solves, and keeps the result as a candidate.  The
//! cheapest candidate becomes the next accepted path.
//!
//! This is deliberately *not* Yen's algorithm: there is no root/spur
//! bookkeeping and only the latest accepted path is deviated from, so a true
//! next-shortest path that branches off an earlier alternative can be missed,
//! and the same deviation may be probed more than once.  Fewer than `k`
//! results is a normal outcome.
//!
//! Every probe runs inside [`RoadNetwork::with_blocked`], which restores the
//! overlay exactly when the probe returns or fails.

use rustc_hash::FxHashSet;
use tracing::debug;

use sp_core::NodeId;
use sp_network::RoadNetwork;

use crate::{Path, PathInfo, RouteError, RouteResult, Solver};

/// Up to `k` distinct paths from `source` to `target`, cheapest first.
///
/// Returns an empty `Vec` when `target` is unreachable.  The result is sorted
/// by `total_cost` (stable, so the best path stays first among ties) and no
/// two entries share a node sequence.
pub fn k_shortest_paths<S: Solver>(
    solver: &S,
    network: &mut RoadNetwork,
    source: NodeId,
    target: NodeId,
    k: usize,
) -> RouteResult<Vec<PathInfo>> {
    if k == 0 {
        return Err(RouteError::InvalidK(k));
    }

    let Some(best) = solver.shortest_path(network, source, target)? else {
        debug!(%source, %target, "no path");
        return Ok(Vec::new());
    };

    let mut accepted: FxHashSet<Path> = FxHashSet::default();
    accepted.insert(best.path.clone());
    let mut results = vec![best];

    let mut candidates: Vec<PathInfo> = Vec::new();
    let mut candidate_paths: FxHashSet<Path> = FxHashSet::default();

    while results.len() < k {
        let base = results[results.len() - 1].path.clone();

        for (a, b) in base.pairs() {
            let blocked = network.edges_between(a, b);
            let found = network.with_blocked(&blocked, |view| {
                solver.shortest_path(view, source, target)
            })?;

            let Some(info) = found else {
                debug!(from = %a, to = %b, "deviation probe found no path");
                continue;
            };
            if accepted.contains(&info.path) || candidate_paths.contains(&info.path) {
                continue;
            }
            debug!(from = %a, to = %b, cost = info.total_cost, "new candidate");
            candidate_paths.insert(info.path.clone());
            candidates.push(info);
        }

        // Cheapest candidate; the earliest inserted wins a tie.
        let Some(next) = candidates
            .iter()
            .enumerate()
            .min_by(|(_, x), (_, y)| x.total_cost.total_cmp(&y.total_cost))
            .map(|(i, _)| i)
        else {
            debug!(found = results.len(), wanted = k, "candidates exhausted");
            break;
        };

        let info = candidates.remove(next);
        candidate_paths.remove(&info.path);
        accepted.insert(info.path.clone());
        debug!(rank = results.len() + 1, cost = info.total_cost, "accepted alternative");
        results.push(info);
    }

    results.sort_by(|x, y| x.total_cost.total_cmp(&y.total_cost));
    Ok(results)
}
