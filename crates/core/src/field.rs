//! The planet field: stationary point masses and the probes a glider (or a
//! renderer) samples against.
//!
//! A field is generated once per seed and then shared read-only; every probe
//! is a pure `&self` function, so concurrent sampling from multiple readers
//! is safe without coordination.

use crate::prng::{SplitMix64, StreamRole};
use crate::rect::Rect;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Gravitational constant scaling every gravity and potential probe.
pub const G: f64 = 2000.0;

/// Upper bound (exclusive) for generated planet masses.
pub const MAX_MASS: f64 = 1.0;

/// Floor applied to squared distances in every probe. Keeps a probe at a
/// planet's exact position large-but-finite instead of NaN/Inf; exact
/// coincidence is measure-zero but test inputs hit it deliberately.
pub const MIN_SQ_DIST: f64 = 1e-12;

/// A stationary point mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Position inside the field bounds.
    pub position: DVec2,
    /// Mass in (0, MAX_MASS); scales every contribution.
    pub mass: f64,
    /// Orbit sense: counter-clockwise when true. Selects the sign of this
    /// planet's angular-potential contribution.
    pub ccw: bool,
}

impl Planet {
    /// +1 for counter-clockwise, -1 for clockwise.
    fn sense(&self) -> f64 {
        if self.ccw {
            1.0
        } else {
            -1.0
        }
    }
}

/// An immutable set of planets inside a bounds rectangle.
///
/// "Field" as in force field: the planets never move, they only shape the
/// gravity, potential, and angular-potential landscape that gliders trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetField {
    bounds: Rect,
    planets: Vec<Planet>,
}

impl PlanetField {
    /// Generates `count` planets deterministically from `seed`.
    ///
    /// Per planet, in index order, the `Planets` role stream supplies:
    /// position (x then y), mass uniform in [0, MAX_MASS), then orbit sense
    /// as a fair coin. Same (count, bounds, seed) yields a bit-identical
    /// planet set.
    pub fn generate(count: usize, bounds: Rect, seed: u64) -> Self {
        let mut rng = SplitMix64::for_role(seed, StreamRole::Planets);
        let planets = (0..count)
            .map(|_| {
                let position = bounds.sample(&mut rng);
                let mass = rng.next_range(0.0, MAX_MASS);
                let ccw = rng.next_bool();
                Planet { position, mass, ccw }
            })
            .collect();
        Self { bounds, planets }
    }

    /// Builds a field from an explicit planet list.
    pub fn from_planets(bounds: Rect, planets: Vec<Planet>) -> Self {
        Self { bounds, planets }
    }

    /// The bounds rectangle the planets were placed in.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The planet list, in generation order.
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// True when the field holds no planets (every probe returns zero).
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Net gravity vector at `p`: the sum over planets of
    /// `-normalize(r) / |r|^2 * mass`, scaled by [`G`], where `r` runs from
    /// the planet to `p`.
    ///
    /// Squared distances are clamped at [`MIN_SQ_DIST`]; a probe exactly at
    /// a planet's position gets a zero contribution from that planet (the
    /// zero offset vector annihilates the clamped magnitude) and stays
    /// finite.
    pub fn gravity(&self, p: DVec2) -> DVec2 {
        let mut out = DVec2::ZERO;
        for planet in &self.planets {
            let r = p - planet.position;
            let sq = r.length_squared().max(MIN_SQ_DIST);
            out -= r * (planet.mass / (sq * sq.sqrt()));
        }
        out * G
    }

    /// Gravitational potential at `p`: `-G * sum(mass / |r|)`.
    ///
    /// The negative gradient of this scalar is [`Self::gravity`]. Clamped
    /// like the other probes, so the value at a planet center is a large
    /// negative number, not -Inf.
    pub fn potential(&self, p: DVec2) -> f64 {
        let mut out = 0.0;
        for planet in &self.planets {
            let sq = (p - planet.position).length_squared().max(MIN_SQ_DIST);
            out -= planet.mass / sq.sqrt();
        }
        out * G
    }

    /// Gradient of the angular ("vortex") potential at `p`: per planet,
    /// `mass * sense / |r|^2 * (r.y, -r.x)` — the radial direction rotated
    /// 90 degrees, sign flipped with the planet's orbit sense.
    pub fn angular_gradient(&self, p: DVec2) -> DVec2 {
        let mut out = DVec2::ZERO;
        for planet in &self.planets {
            let r = p - planet.position;
            let sq = r.length_squared().max(MIN_SQ_DIST);
            out += DVec2::new(r.y, -r.x) * (planet.mass * planet.sense() / sq);
        }
        out
    }

    /// Net signed angular displacement from `a` to `b`, summed over planets
    /// and weighted by `mass * sense`.
    ///
    /// Each planet's term is the atan2 angle difference wrapped into
    /// (-pi, pi], so a step crossing the branch cut counts as the short way
    /// around. Drives the spiral drift of the tracked potential.
    pub fn weighted_angle_diff(&self, a: DVec2, b: DVec2) -> f64 {
        use std::f64::consts::{PI, TAU};
        let mut out = 0.0;
        for planet in &self.planets {
            let ra = a - planet.position;
            let rb = b - planet.position;
            let mut diff = rb.y.atan2(rb.x) - ra.y.atan2(ra.x);
            if diff > PI {
                diff -= TAU;
            } else if diff < -PI {
                diff += TAU;
            }
            out += diff * planet.mass * planet.sense();
        }
        out
    }

    /// Index and squared distance of the planet nearest to `p`, or `None`
    /// for an empty field.
    pub fn nearest_planet(&self, p: DVec2) -> Option<(usize, f64)> {
        self.planets
            .iter()
            .enumerate()
            .map(|(i, planet)| (i, p.distance_squared(planet.position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn bounds() -> Rect {
        Rect::new(DVec2::ZERO, DVec2::new(1080.0, 720.0)).unwrap()
    }

    fn single_planet(mass: f64) -> PlanetField {
        PlanetField::from_planets(
            bounds(),
            vec![Planet {
                position: DVec2::new(100.0, 100.0),
                mass,
                ccw: true,
            }],
        )
    }

    // -- Generation --

    #[test]
    fn generate_is_deterministic_for_fixed_inputs() {
        let a = PlanetField::generate(8, bounds(), 23);
        let b = PlanetField::generate(8, bounds(), 23);
        for (pa, pb) in a.planets().iter().zip(b.planets()) {
            assert_eq!(pa.position.x.to_bits(), pb.position.x.to_bits());
            assert_eq!(pa.position.y.to_bits(), pb.position.y.to_bits());
            assert_eq!(pa.mass.to_bits(), pb.mass.to_bits());
            assert_eq!(pa.ccw, pb.ccw);
        }
    }

    #[test]
    fn generate_differs_across_seeds() {
        let a = PlanetField::generate(4, bounds(), 1);
        let b = PlanetField::generate(4, bounds(), 2);
        assert_ne!(a.planets(), b.planets());
    }

    #[test]
    fn generated_planets_lie_inside_bounds_with_bounded_mass() {
        let field = PlanetField::generate(64, bounds(), 99);
        assert_eq!(field.planets().len(), 64);
        for p in field.planets() {
            assert!(field.bounds().contains(p.position));
            assert!((0.0..MAX_MASS).contains(&p.mass));
        }
    }

    #[test]
    fn generate_zero_count_gives_empty_field() {
        let field = PlanetField::generate(0, bounds(), 5);
        assert!(field.is_empty());
        assert_eq!(field.gravity(DVec2::new(10.0, 10.0)), DVec2::ZERO);
        assert_eq!(field.potential(DVec2::new(10.0, 10.0)), 0.0);
        assert_eq!(field.nearest_planet(DVec2::ZERO), None);
    }

    // -- Gravity / potential consistency --

    #[test]
    fn single_planet_gravity_magnitude_follows_inverse_square() {
        let field = single_planet(0.5);
        for r in [5.0, 10.0, 50.0, 200.0] {
            let p = DVec2::new(100.0 + r, 100.0);
            let expected = G * 0.5 / (r * r);
            let got = field.gravity(p).length();
            assert!(
                (got - expected).abs() < 1e-9 * expected.max(1.0),
                "|g| at r={r}: got {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn single_planet_gravity_points_at_the_planet() {
        let field = single_planet(1.0);
        let p = DVec2::new(130.0, 140.0);
        let toward = (DVec2::new(100.0, 100.0) - p).normalize();
        let g = field.gravity(p).normalize();
        assert!(g.distance(toward) < 1e-12, "gravity {g} vs radial {toward}");
    }

    #[test]
    fn single_planet_potential_follows_inverse_distance() {
        let field = single_planet(0.5);
        for r in [5.0, 10.0, 50.0] {
            let p = DVec2::new(100.0, 100.0 + r);
            let expected = -G * 0.5 / r;
            let got = field.potential(p);
            assert!(
                (got - expected).abs() < 1e-9 * expected.abs(),
                "potential at r={r}: got {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn symmetric_planet_pair_cancels_at_the_midpoint() {
        let field = PlanetField::from_planets(
            bounds(),
            vec![
                Planet { position: DVec2::new(90.0, 100.0), mass: 0.7, ccw: true },
                Planet { position: DVec2::new(110.0, 100.0), mass: 0.7, ccw: false },
            ],
        );
        let g = field.gravity(DVec2::new(100.0, 100.0));
        assert!(g.length() < 1e-12, "expected cancellation, got {g}");
    }

    // -- Singularity clamping --

    #[test]
    fn probes_at_a_planet_center_stay_finite() {
        let field = single_planet(1.0);
        let center = DVec2::new(100.0, 100.0);
        let g = field.gravity(center);
        let phi = field.potential(center);
        let a = field.angular_gradient(center);
        assert!(g.is_finite(), "gravity {g}");
        assert!(phi.is_finite(), "potential {phi}");
        assert!(a.is_finite(), "angular gradient {a}");
        // Clamped potential is deep but bounded: -G * mass / sqrt(MIN_SQ_DIST).
        assert!((phi - (-G / MIN_SQ_DIST.sqrt())).abs() < 1.0, "got {phi}");
    }

    // -- Angular probes --

    #[test]
    fn angular_gradient_is_tangential_and_sense_signed() {
        let planet = Planet { position: DVec2::ZERO, mass: 0.5, ccw: true };
        let field = PlanetField::from_planets(bounds(), vec![planet]);
        // At (10, 0): r = (10, 0), contribution = mass/sq * (0, -10) = (0, -0.05).
        let a = field.angular_gradient(DVec2::new(10.0, 0.0));
        assert!((a.x - 0.0).abs() < 1e-12 && (a.y + 0.05).abs() < 1e-12, "got {a}");

        let cw = PlanetField::from_planets(bounds(), vec![Planet { ccw: false, ..planet }]);
        let b = cw.angular_gradient(DVec2::new(10.0, 0.0));
        assert!((a + b).length() < 1e-12, "cw must negate ccw: {a} vs {b}");
    }

    #[test]
    fn weighted_angle_diff_quarter_turn() {
        let field = PlanetField::from_planets(
            bounds(),
            vec![Planet { position: DVec2::ZERO, mass: 1.0, ccw: true }],
        );
        let d = field.weighted_angle_diff(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0));
        assert!((d - FRAC_PI_2).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn weighted_angle_diff_wraps_across_the_branch_cut() {
        let field = PlanetField::from_planets(
            bounds(),
            vec![Planet { position: DVec2::ZERO, mass: 1.0, ccw: true }],
        );
        // Step from just below the negative x axis to just above it: the raw
        // atan2 difference is close to 2*pi; the wrapped result must be the
        // small crossing angle, negative (clockwise through the cut).
        let a = DVec2::new(-10.0, -1.0);
        let b = DVec2::new(-10.0, 1.0);
        let d = field.weighted_angle_diff(a, b);
        let expected = -2.0 * (1.0_f64 / 10.0).atan();
        assert!((d - expected).abs() < 1e-12, "got {d}, expected {expected}");
    }

    #[test]
    fn weighted_angle_diff_scales_with_mass_and_sense() {
        let mk = |mass, ccw| {
            PlanetField::from_planets(
                bounds(),
                vec![Planet { position: DVec2::ZERO, mass, ccw }],
            )
        };
        let a = DVec2::new(10.0, 0.0);
        let b = DVec2::new(10.0, 1.0);
        let base = mk(1.0, true).weighted_angle_diff(a, b);
        assert!((mk(0.5, true).weighted_angle_diff(a, b) - base * 0.5).abs() < 1e-12);
        assert!((mk(1.0, false).weighted_angle_diff(a, b) + base).abs() < 1e-12);
    }

    // -- Nearest planet --

    #[test]
    fn nearest_planet_picks_the_closest() {
        let field = PlanetField::from_planets(
            bounds(),
            vec![
                Planet { position: DVec2::new(0.0, 0.0), mass: 0.1, ccw: true },
                Planet { position: DVec2::new(100.0, 0.0), mass: 0.9, ccw: true },
            ],
        );
        let (idx, sq) = field.nearest_planet(DVec2::new(70.0, 0.0)).unwrap();
        assert_eq!(idx, 1);
        assert!((sq - 900.0).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn probes_are_finite_everywhere(
                seed: u64,
                px in -2000.0_f64..2000.0,
                py in -2000.0_f64..2000.0,
            ) {
                let field = PlanetField::generate(6, bounds(), seed);
                let p = DVec2::new(px, py);
                prop_assert!(field.gravity(p).is_finite());
                prop_assert!(field.potential(p).is_finite());
                prop_assert!(field.angular_gradient(p).is_finite());
                prop_assert!(field.weighted_angle_diff(p, p + DVec2::ONE).is_finite());
            }
        }
    }
}
