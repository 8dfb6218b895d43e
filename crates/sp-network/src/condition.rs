//! Live conditions: the mutable overlay on top of static edge attributes.
//!
//! The overlay is sparse.  An edge with no entry behaves exactly like an edge
//! carrying [`LiveCondition::default()`], but the two states are kept
//! distinct so that temporary overrides can be undone bit-for-bit (see
//! [`RoadNetwork::with_overrides`](crate::RoadNetwork::with_overrides)).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use sp_core::EdgeId;

// ── LiveCondition ─────────────────────────────────────────────────────────────

/// Time-varying state of one directed edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCondition {
    /// 1.0 = free flow; 2.0 = twice as congested.
    pub traffic_multiplier: f64,
    pub rainfall_mm_per_hour: f64,
    /// Added to the edge's static road quality (negative = degraded).
    pub road_quality_adjust: f64,
    pub blocked: bool,
}

impl LiveCondition {
    pub const DEFAULT: LiveCondition = LiveCondition {
        traffic_multiplier:   1.0,
        rainfall_mm_per_hour: 0.0,
        road_quality_adjust:  0.0,
        blocked:              false,
    };

    /// A copy of `self` with `blocked` set.
    #[inline]
    pub fn blocked(self) -> Self {
        Self { blocked: true, ..self }
    }
}

impl Default for LiveCondition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── ConditionOverlay ──────────────────────────────────────────────────────────

/// Sparse `EdgeId → LiveCondition` map with O(1) get/set/restore.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionOverlay {
    entries: FxHashMap<EdgeId, LiveCondition>,
}

impl ConditionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Condition in effect for `edge`, defaulted when absent.
    #[inline]
    pub fn get(&self, edge: EdgeId) -> LiveCondition {
        self.entries.get(&edge).copied().unwrap_or_default()
    }

    /// The raw entry, `None` when the edge has never been given a condition.
    #[inline]
    pub fn entry(&self, edge: EdgeId) -> Option<&LiveCondition> {
        self.entries.get(&edge)
    }

    /// Set the condition for `edge`, returning the previous raw entry.
    #[inline]
    pub fn insert(&mut self, edge: EdgeId, condition: LiveCondition) -> Option<LiveCondition> {
        self.entries.insert(edge, condition)
    }

    #[inline]
    pub fn remove(&mut self, edge: EdgeId) -> Option<LiveCondition> {
        self.entries.remove(&edge)
    }

    /// Put back a raw entry previously returned by `insert`/`remove`.
    #[inline]
    pub(crate) fn restore(&mut self, edge: EdgeId, prior: Option<LiveCondition>) {
        match prior {
            Some(c) => {
                self.entries.insert(edge, c);
            }
            None => {
                self.entries.remove(&edge);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
