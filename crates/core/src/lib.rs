#![deny(unsafe_code)]
//! Core simulation for the glider engine.
//!
//! Gliders are massless particles traced through a 2D field of stationary
//! point masses. The crate provides the planet field and its probes
//! ([`PlanetField`]), generic fixed-step integrators ([`integrator`]),
//! trajectory generation with potential correction ([`trajectory`]), path
//! scoring ([`score`]), and the stochastic nice-path search ([`search`]) —
//! everything a front-end needs to pick a seed and draw something pretty.

pub mod error;
pub mod field;
pub mod integrator;
pub mod params;
pub mod prng;
pub mod rect;
pub mod scene;
pub mod score;
pub mod search;
pub mod trajectory;

pub use error::GliderError;
pub use field::{Planet, PlanetField};
pub use integrator::Scheme;
pub use prng::{SplitMix64, StreamRole};
pub use rect::Rect;
pub use scene::Scene;
pub use score::{score, ScoreBreakdown};
pub use search::{find_best, ScoredStart, SearchParams};
pub use trajectory::{Trajectory, TrajectoryGenerator, TrajectoryParams};
