//! Path desirability scoring.
//!
//! The scorer walks a trajectory tracking which planet the glider currently
//! orbits (the nearest one, with hysteresis) and rewards clean
//! planet-to-planet transitions while penalizing leaving the bounds or
//! skimming the orbited planet. Raw path length is tracked for reporting but
//! deliberately carries no weight in the total.

use crate::field::PlanetField;
use crate::rect::Rect;
use glam::DVec2;
use serde::Serialize;

/// Score awarded per committed planet switch.
pub const SWITCH_BONUS: f64 = 100.0;
/// Penalty per out-of-bounds point.
pub const OUT_OF_BOUNDS_PENALTY: f64 = 3.0;
/// Penalty for a point inside the crash radius of the orbited planet.
pub const CRASH_PENALTY: f64 = 500.0;
/// Squared crash radius around the currently orbited planet.
pub const CRASH_SQ_RADIUS: f64 = 100.0;
/// A switch commits only when the new nearest planet is closer than this
/// fraction of the current orbit distance. Suppresses flicker switching on
/// the Voronoi boundary between two planets.
pub const SWITCH_MARGIN: f64 = 0.8;

/// Per-path scoring result.
///
/// Scores have no normalization; they are only meaningfully compared within
/// one field/bounds configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Committed nearest-planet transitions.
    pub switches: usize,
    /// Accumulated out-of-bounds and crash penalties.
    pub penalty: f64,
    /// In-bounds path length. Reported only; not part of the total.
    pub path_length: f64,
}

impl ScoreBreakdown {
    /// The scalar score: `switches * SWITCH_BONUS - penalty`. Higher is
    /// better.
    pub fn total(&self) -> f64 {
        self.switches as f64 * SWITCH_BONUS - self.penalty
    }
}

/// Scores a trajectory against a field and bounds rectangle.
///
/// Out-of-bounds points contribute a fixed penalty each and are excluded
/// from length accumulation and nearest-planet tracking for that step.
pub fn score(field: &PlanetField, bounds: &Rect, path: &[DVec2]) -> ScoreBreakdown {
    let mut switches = 0usize;
    let mut penalty = 0.0;
    let mut path_length = 0.0;
    let mut orbited: Option<usize> = None;

    for (i, &p) in path.iter().enumerate() {
        if !bounds.contains(p) {
            penalty += OUT_OF_BOUNDS_PENALTY;
            continue;
        }

        if i > 0 {
            path_length += p.distance(path[i - 1]);
        }

        let Some((nearest, nearest_sq)) = field.nearest_planet(p) else {
            continue;
        };

        match orbited {
            None => orbited = Some(nearest),
            Some(current) if current != nearest => {
                let current_sq = p.distance_squared(field.planets()[current].position);
                if nearest_sq < SWITCH_MARGIN * SWITCH_MARGIN * current_sq {
                    switches += 1;
                    orbited = Some(nearest);
                }
            }
            _ => {}
        }

        if let Some(current) = orbited {
            let sq = p.distance_squared(field.planets()[current].position);
            if sq < CRASH_SQ_RADIUS {
                penalty += CRASH_PENALTY;
            }
        }
    }

    ScoreBreakdown {
        switches,
        penalty,
        path_length,
    }
}
