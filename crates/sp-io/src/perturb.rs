//! Random live-update generator, used to exercise the advisor against a
//! changing feed.

use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::debug;

use crate::Updates;

/// Probability that a perturbed edge is marked blocked.
const BLOCK_PROBABILITY: f64 = 0.05;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Overwrite `edges_per_tick` randomly chosen entries (with replacement) of
/// `updates` with fresh random conditions.
///
/// Keys are never added or removed.  Returns the keys touched, in draw order.
pub fn perturb_updates<R: Rng + ?Sized>(
    updates: &mut Updates,
    edges_per_tick: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut touched = Vec::with_capacity(edges_per_tick);
    if updates.is_empty() {
        return touched;
    }

    for _ in 0..edges_per_tick {
        let Some((key, entry)) = updates.iter_mut().choose(rng) else {
            break;
        };
        entry.traffic_multiplier = round2(rng.gen_range(1.0..=3.0));
        entry.road_quality_adjust = round2(rng.gen_range(-2.0..=1.0));
        entry.blocked = rng.gen_bool(BLOCK_PROBABILITY);
        entry.rain_mm_hr = round2(rng.gen_range(0.0..=12.0));
        debug!(edge = %key, ?entry, "perturbed");
        touched.push(key.clone());
    }
    touched
}
