//! Composite edge cost.
//!
//! One scalar per edge, in metre-equivalents:
//!
//! ```text
//! cost = distance_m
//!      + W_TIME      * freeflow_time_s
//!      + W_TRAFFIC   * (traffic_multiplier - 1)
//!      + W_WEATHER   * rainfall_mm_per_hour
//!      + W_ROAD_QUAL * (10 - road_quality - road_quality_adjust) / 10
//!      + W_SAFETY    * (10 - safety_index) / 10
//! ```
//!
//! Blocked edges, and edges whose cost reaches [`IMPASSABLE_THRESHOLD`], are
//! reported as [`EdgeCost::Impassable`] instead of a large number.

use serde::{Deserialize, Serialize};

use sp_core::CostWeights;

use crate::{LiveCondition, NetworkError, NetworkResult};

/// Numeric stand-in for [`EdgeCost::Impassable`] when a plain number is
/// needed for display.
pub const BLOCK_COST: f64 = 1e7;

/// Any finite cost at or above this value is treated as impassable.
pub const IMPASSABLE_THRESHOLD: f64 = 1e6;

// ── EdgeAttrs ─────────────────────────────────────────────────────────────────

/// Static attributes of a directed edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    pub distance_m: f64,
    pub freeflow_time_s: f64,
    /// 0 (unusable) ..= 10 (perfect).
    pub road_quality: f64,
    /// 0 (dangerous) ..= 10 (safe).
    pub safety_index: f64,
}

impl EdgeAttrs {
    /// An edge whose cost is exactly its length: zero travel time, perfect
    /// quality and safety.
    pub fn neutral(distance_m: f64) -> Self {
        Self {
            distance_m,
            freeflow_time_s: 0.0,
            road_quality: 10.0,
            safety_index: 10.0,
        }
    }

    /// Reject negative lengths/times and scores outside `0..=10`.
    pub fn validate(&self) -> NetworkResult<()> {
        if !(self.distance_m.is_finite() && self.distance_m >= 0.0) {
            return Err(NetworkError::InvalidEdge(format!(
                "distance_m must be finite and >= 0, got {}",
                self.distance_m
            )));
        }
        if !(self.freeflow_time_s.is_finite() && self.freeflow_time_s >= 0.0) {
            return Err(NetworkError::InvalidEdge(format!(
                "freeflow_time_s must be finite and >= 0, got {}",
                self.freeflow_time_s
            )));
        }
        if !(0.0..=10.0).contains(&self.road_quality) {
            return Err(NetworkError::InvalidEdge(format!(
                "road_quality must be in [0, 10], got {}",
                self.road_quality
            )));
        }
        if !(0.0..=10.0).contains(&self.safety_index) {
            return Err(NetworkError::InvalidEdge(format!(
                "safety_index must be in [0, 10], got {}",
                self.safety_index
            )));
        }
        Ok(())
    }
}

// ── EdgeCost ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeCost {
    Finite(f64),
    Impassable,
}

impl EdgeCost {
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, EdgeCost::Finite(_))
    }

    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            EdgeCost::Finite(c) => Some(c),
            EdgeCost::Impassable => None,
        }
    }

    /// Plain number for display; `Impassable` maps to [`BLOCK_COST`].
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.finite().unwrap_or(BLOCK_COST)
    }
}

// ── Evaluator ─────────────────────────────────────────────────────────────────

/// Cost of traversing an edge with attributes `attrs` under `condition`.
///
/// Pure: depends only on its arguments.  Inputs are assumed validated by
/// [`EdgeAttrs::validate`].  The road-quality term and the total are both
/// floored at zero.
pub fn edge_cost(attrs: &EdgeAttrs, condition: &LiveCondition, weights: &CostWeights) -> EdgeCost {
    if condition.blocked {
        return EdgeCost::Impassable;
    }

    let traffic = weights.traffic * (condition.traffic_multiplier - 1.0);
    let weather = weights.weather * condition.rainfall_mm_per_hour;
    let quality = weights.road_quality
        * ((10.0 - attrs.road_quality - condition.road_quality_adjust) / 10.0).max(0.0);
    let safety = weights.safety * (10.0 - attrs.safety_index) / 10.0;
    let time = weights.time * attrs.freeflow_time_s;

    // A traffic multiplier below 1.0 on a very short edge could otherwise go
    // negative, which Dijkstra cannot handle.
    let cost = (attrs.distance_m + traffic + weather + quality + safety + time).max(0.0);

    if cost >= IMPASSABLE_THRESHOLD {
        EdgeCost::Impassable
    } else {
        EdgeCost::Finite(cost)
    }
}
