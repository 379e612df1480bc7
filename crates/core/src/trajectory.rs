//! Glider trajectory generation.
//!
//! A glider is a massless test particle: instead of integrating momentum
//! under force, each step moves perpendicular to the local blended gradient
//! (approximately tracing an equipotential contour) and then corrects the
//! position back toward a tracked target potential. With a non-zero spiral
//! factor the target itself drifts with the net angular progress around the
//! system, so the contour opens into a spiral.

use crate::field::PlanetField;
use crate::integrator::{self, Scheme};
use crate::params::{param_f64, param_str, param_usize};
use crate::prng::{SplitMix64, StreamRole};
use glam::DVec2;
use serde_json::Value;

/// Squared per-step displacement below which the glider counts as stalled.
pub const STALL_SQ_LIMIT: f64 = 0.005;
/// Squared per-step displacement above which the step counts as a blow-up.
pub const BLOWUP_SQ_LIMIT: f64 = 400.0;

/// Default weight of the angular field in the step direction and drift.
const DEFAULT_SPIRAL_FACTOR: f64 = 0.0;
/// Default step-count bound.
const DEFAULT_MAX_STEPS: usize = 3000;
/// Default integration step size.
const DEFAULT_STEP_SIZE: f64 = 6.0;

/// Tunables for one trajectory run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryParams {
    /// Weight blending the angular (vortex) field into the step direction
    /// and driving the target-potential drift. Zero traces closed contours.
    pub spiral_factor: f64,
    /// Upper bound on integration steps; the trajectory holds at most
    /// `max_steps + 1` points including the start.
    pub max_steps: usize,
    /// Fixed integration step size.
    pub step_size: f64,
    /// Integration scheme for the contour step.
    pub scheme: Scheme,
}

impl Default for TrajectoryParams {
    fn default() -> Self {
        Self {
            spiral_factor: DEFAULT_SPIRAL_FACTOR,
            max_steps: DEFAULT_MAX_STEPS,
            step_size: DEFAULT_STEP_SIZE,
            scheme: Scheme::Midpoint,
        }
    }
}

impl TrajectoryParams {
    /// Extracts parameters from a JSON object, falling back to defaults for
    /// missing, mistyped, or unrecognized values.
    pub fn from_json(params: &Value) -> Self {
        let scheme = Scheme::from_name(&param_str(params, "scheme", "midpoint"))
            .unwrap_or(Scheme::Midpoint);
        Self {
            spiral_factor: param_f64(params, "spiral_factor", DEFAULT_SPIRAL_FACTOR),
            max_steps: param_usize(params, "max_steps", DEFAULT_MAX_STEPS),
            step_size: param_f64(params, "step_size", DEFAULT_STEP_SIZE),
            scheme,
        }
    }
}

/// One generated glider path: the ordered point sequence (start included)
/// and the orbit choice that produced it. Replaying with the same field,
/// params, start, and `ccw` reproduces the points bit for bit.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub points: Vec<DVec2>,
    pub ccw: bool,
}

/// Unit step direction at `q`: the normalized perpendicular of the blended
/// gradient, flipped when `ccw` is set. Returns zero only where the blended
/// gradient itself vanishes.
fn contour_direction(field: &PlanetField, q: DVec2, spiral_factor: f64, ccw: bool) -> DVec2 {
    let gradient = -field.gravity(q) + field.angular_gradient(q) * spiral_factor;
    let d = DVec2::new(gradient.y, -gradient.x).normalize_or_zero();
    if ccw {
        -d
    } else {
        d
    }
}

/// Pulls `raw` back toward the target potential using the linearized
/// relation `offset = delta_phi * g / |g|^2` (gravity is minus the potential
/// gradient, and the correction moves along the steepest slope). Applied in
/// two stages: a half correction, a gravity re-probe there, then the full
/// correction from the re-probed direction.
fn correct_potential(field: &PlanetField, raw: DVec2, target: f64) -> DVec2 {
    let diff = field.potential(raw) - target;
    let g1 = field.gravity(raw);
    let g1_sq = g1.length_squared();
    if g1_sq <= f64::MIN_POSITIVE {
        // No gradient to correct along (symmetry point or empty field).
        return raw;
    }
    let midway = raw + g1 * (diff / g1_sq * 0.5);
    let g2 = field.gravity(midway);
    let g2_sq = g2.length_squared();
    if g2_sq <= f64::MIN_POSITIVE {
        return raw + g1 * (diff / g1_sq);
    }
    raw + g2 * (diff / g2_sq)
}

/// Advances the glider by one corrected step.
fn glider_step(
    field: &PlanetField,
    pos: DVec2,
    target_potential: f64,
    params: &TrajectoryParams,
    ccw: bool,
) -> DVec2 {
    let raw = integrator::step(
        params.scheme,
        pos,
        |q| contour_direction(field, q, params.spiral_factor, ccw),
        params.step_size,
    );
    correct_potential(field, raw, target_potential)
}

/// Generates a trajectory with an explicit orbit choice.
///
/// The returned sequence starts with `start` and holds at most
/// `max_steps + 1` points. Termination is checked after every step, in
/// order: stall (squared displacement below [`STALL_SQ_LIMIT`]), blow-up
/// (above [`BLOWUP_SQ_LIMIT`]), step-count bound. Early termination is
/// normal, not an error.
///
/// An empty field has no gradient to trace; the single-point (stalled)
/// trajectory comes back immediately.
pub fn generate_oriented(
    field: &PlanetField,
    start: DVec2,
    ccw: bool,
    params: &TrajectoryParams,
) -> Vec<DVec2> {
    let mut points = Vec::with_capacity(params.max_steps.min(4096) + 1);
    points.push(start);
    if field.is_empty() {
        return points;
    }

    let mut pos = start;
    let mut target_potential = field.potential(start);

    for _ in 0..params.max_steps {
        let new_pos = glider_step(field, pos, target_potential, params, ccw);
        if params.spiral_factor != 0.0 {
            target_potential += field.weighted_angle_diff(pos, new_pos) * params.spiral_factor;
        }
        let sq_step = (new_pos - pos).length_squared();
        points.push(new_pos);
        pos = new_pos;
        if sq_step < STALL_SQ_LIMIT || sq_step > BLOWUP_SQ_LIMIT {
            break;
        }
    }

    points
}

/// Trajectory generator bound to one field, drawing each trajectory's orbit
/// choice from the `OrbitChoice` role stream.
///
/// The stream is part of the reproducibility contract: a generator built
/// with the same `(field, params, seed)` produces the same sequence of
/// trajectories for the same sequence of start points.
pub struct TrajectoryGenerator<'a> {
    field: &'a PlanetField,
    params: TrajectoryParams,
    orbit_rng: SplitMix64,
}

impl<'a> TrajectoryGenerator<'a> {
    /// Creates a generator whose orbit choices derive from `seed`.
    pub fn new(field: &'a PlanetField, params: TrajectoryParams, seed: u64) -> Self {
        Self {
            field,
            params,
            orbit_rng: SplitMix64::for_role(seed, StreamRole::OrbitChoice),
        }
    }

    /// The parameters this generator runs with.
    pub fn params(&self) -> &TrajectoryParams {
        &self.params
    }

    /// Generates the next trajectory from `start`, drawing one orbit choice
    /// from the stream.
    pub fn generate(&mut self, start: DVec2) -> Trajectory {
        let ccw = self.orbit_rng.next_bool();
        let points = generate_oriented(self.field, start, ccw, &self.params);
        Trajectory { points, ccw }
    }
}
