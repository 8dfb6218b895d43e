//! Tunable cost weights and advisor configuration.
//!
//! Typically loaded from a TOML file by the CLI:
//!
//! ```toml
//! k = 3
//! assumed_speed_kmh = 50.0
//!
//! [weights]
//! time = 1.0
//! traffic = 300.0
//! weather = 250.0
//! road_quality = 200.0
//! safety = 180.0
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── CostWeights ───────────────────────────────────────────────────────────────

/// Weights of the composite edge cost.
///
/// All penalties are scaled into "metre-equivalents" so they add directly to
/// the edge's physical length.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    /// Multiplier on free-flow travel time (seconds).
    pub time: f64,
    /// Penalty per unit of traffic multiplier above 1.0.
    pub traffic: f64,
    /// Penalty per mm/h of rainfall.
    pub weather: f64,
    /// Penalty for a road of quality 0 (scaled linearly up to quality 10).
    pub road_quality: f64,
    /// Penalty for a road of safety index 0 (scaled linearly up to 10).
    pub safety: f64,
}

impl CostWeights {
    pub const DEFAULT: CostWeights = CostWeights {
        time:         1.0,
        traffic:      300.0,
        weather:      250.0,
        road_quality: 200.0,
        safety:       180.0,
    };

    fn validate(&self) -> CoreResult<()> {
        let named = [
            ("time", self.time),
            ("traffic", self.traffic),
            ("weather", self.weather),
            ("road_quality", self.road_quality),
            ("safety", self.safety),
        ];
        for (name, w) in named {
            if !w.is_finite() || w < 0.0 {
                return Err(CoreError::Config(format!(
                    "weight {name} must be a finite non-negative number, got {w}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── AdvisorConfig ─────────────────────────────────────────────────────────────

/// Top-level configuration for a route-advisory run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub weights: CostWeights,

    /// Maximum number of routes to return (best plus alternatives).
    pub k: usize,

    /// Average speed used only to turn route length into a displayed
    /// duration.  Routing never uses it.
    pub assumed_speed_kmh: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            weights:           CostWeights::DEFAULT,
            k:                 3,
            assumed_speed_kmh: 50.0,
        }
    }
}

impl AdvisorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: AdvisorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.k == 0 {
            return Err(CoreError::Config("k must be at least 1".into()));
        }
        if !self.assumed_speed_kmh.is_finite() || self.assumed_speed_kmh <= 0.0 {
            return Err(CoreError::Config(format!(
                "assumed_speed_kmh must be positive, got {}",
                self.assumed_speed_kmh
            )));
        }
        self.weights.validate()
    }

    /// Presentation-only duration estimate for a route of `distance_m` metres,
    /// rounded to whole minutes.
    pub fn estimate_minutes(&self, distance_m: f64) -> u64 {
        let metres_per_min = self.assumed_speed_kmh * 1000.0 / 60.0;
        (distance_m / metres_per_min).round().max(0.0) as u64
    }
}
