//! Plain-language reasons why an alternative route lost to the best one.
//!
//! The rules are a fixed heuristic over the already computed [`PathInfo`]s
//! and static edge lengths; edge costs are not re-evaluated.  Rules are
//! checked in this order and each may fire independently:
//!
//! 1. **Distance**: more than 1 m longer than the best route.
//! 2. **Hops**: more edges than the best route.
//! 3. **Detours**: nodes the best route does not visit (first 6 listed).
//! 4. **Heavy segments**: edges of 6 km or more.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::Serialize;

use sp_network::RoadNetwork;

use crate::PathInfo;

const DISTANCE_TOLERANCE_M: f64 = 1.0;
const MAX_LISTED_DETOURS: usize = 6;
const HEAVY_SEGMENT_M: f64 = 6_000.0;

/// Shown when no rule fires.
pub const FALLBACK: &str = "Very similar to best; slight differences make it less optimal.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Reason {
    Longer { excess_m: f64 },
    MoreHops { candidate: usize, best: usize },
    /// Names of detour nodes in path order; `truncated` if more were omitted.
    Detours { names: Vec<String>, truncated: bool },
    HeavySegments { count: usize },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Longer { excess_m } => {
                write!(f, "Longer than best by {:.2} km", excess_m / 1000.0)
            }
            Reason::MoreHops { candidate, best } => {
                write!(f, "More hops ({candidate} edges vs {best})")
            }
            Reason::Detours { names, truncated } => {
                write!(f, "Detours via {}", names.join(", "))?;
                if *truncated {
                    f.write_str(", ...")?;
                }
                Ok(())
            }
            Reason::HeavySegments { count } => {
                write!(f, "Contains {count} long segment(s) >= 6 km")
            }
        }
    }
}

/// Ordered reasons; renders as the reasons joined by `". "`, or [`FALLBACK`]
/// when there are none.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Explanation {
    pub reasons: Vec<Reason>,
}

impl Explanation {
    pub fn is_fallback(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            return f.write_str(FALLBACK);
        }
        for (i, r) in self.reasons.iter().enumerate() {
            if i > 0 {
                f.write_str(". ")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

/// Explain why `candidate` ranks below `best`.
///
/// `network` supplies node names and edge lengths; it must be the network
/// both paths were computed on.
pub fn explain(network: &RoadNetwork, best: &PathInfo, candidate: &PathInfo) -> Explanation {
    let mut reasons = Vec::new();

    let excess_m = candidate.total_distance_m - best.total_distance_m;
    if excess_m > DISTANCE_TOLERANCE_M {
        reasons.push(Reason::Longer { excess_m });
    }

    if candidate.path.len() > best.path.len() {
        reasons.push(Reason::MoreHops {
            candidate: candidate.path.hops(),
            best:      best.path.hops(),
        });
    }

    let on_best: FxHashSet<_> = best.path.nodes().iter().copied().collect();
    let detours: Vec<_> = candidate
        .path
        .nodes()
        .iter()
        .copied()
        .filter(|n| !on_best.contains(n))
        .collect();
    if !detours.is_empty() {
        reasons.push(Reason::Detours {
            names: detours
                .iter()
                .take(MAX_LISTED_DETOURS)
                .map(|&n| network.node_name(n).to_owned())
                .collect(),
            truncated: detours.len() > MAX_LISTED_DETOURS,
        });
    }

    let heavy = candidate
        .edges
        .iter()
        .filter(|e| network.edge_attrs[e.index()].distance_m >= HEAVY_SEGMENT_M)
        .count();
    if heavy > 0 {
        reasons.push(Reason::HeavySegments { count: heavy });
    }

    Explanation { reasons }
}
