//! Stochastic search for aesthetically nice start points.
//!
//! Pure random search: sample candidate start points uniformly from the
//! bounds, generate and score each trajectory, keep the best. Attempts are
//! independent, so the search is embarrassingly parallel in principle; this
//! implementation keeps the original single-threaded evaluation order, which
//! is part of the determinism contract (ties favor the later candidate).

use crate::field::PlanetField;
use crate::params::param_usize;
use crate::prng::{SplitMix64, StreamRole};
use crate::rect::Rect;
use crate::score::score;
use crate::trajectory::{TrajectoryGenerator, TrajectoryParams};
use glam::DVec2;
use serde::Serialize;
use serde_json::Value;

/// Default number of candidate start points.
const DEFAULT_ATTEMPTS: usize = 1000;

/// Search tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Number of candidate start points to sample and score.
    pub attempts: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

impl SearchParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            attempts: param_usize(params, "attempts", DEFAULT_ATTEMPTS),
        }
    }
}

/// The winning candidate: start point, its score, and the orbit choice its
/// trajectory was generated with.
///
/// The orbit choice is recorded so a caller can replay the exact scored
/// trajectory via [`crate::trajectory::generate_oriented`]; regenerating
/// with different parameters silently diverges from what was scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredStart {
    /// Winning start point.
    pub start: DVec2,
    /// The winner's score at search time.
    pub score: f64,
    /// Orbit choice drawn for the winning trajectory.
    pub ccw: bool,
}

/// Runs the nice-path search and returns the best-scoring start point.
///
/// Candidates are drawn from the `SearchSampling` role stream and their
/// orbit choices from the `OrbitChoice` stream, both derived from `seed`;
/// the whole search is deterministic in `(field, bounds, params, seed)`.
///
/// The running best starts at negative infinity, so the first candidate is
/// always accepted; later candidates win ties (`>=`). Returns `None` only
/// when `params.attempts` is zero.
pub fn find_best(
    field: &PlanetField,
    bounds: &Rect,
    traj_params: &TrajectoryParams,
    search_params: &SearchParams,
    seed: u64,
) -> Option<ScoredStart> {
    let mut sampler = SplitMix64::for_role(seed, StreamRole::SearchSampling);
    let mut generator = TrajectoryGenerator::new(field, *traj_params, seed);

    let mut best: Option<ScoredStart> = None;
    let mut best_score = f64::NEG_INFINITY;

    for _ in 0..search_params.attempts {
        let start = bounds.sample(&mut sampler);
        let trajectory = generator.generate(start);
        let candidate_score = score(field, bounds, &trajectory.points).total();
        if candidate_score >= best_score {
            best_score = candidate_score;
            best = Some(ScoredStart {
                start,
                score: candidate_score,
                ccw: trajectory.ccw,
            });
        }
    }

    best
}
