//! Generic fixed-step steppers over an arbitrary vector space.
//!
//! The stepper only needs addition and scalar multiplication on the state
//! type plus a velocity function, so the same code advances glider positions
//! (`DVec2`) and the plain scalar/vector fields the tests integrate. No
//! adaptive step-size control; the step size is a fixed tunable per run.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Integration scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// First-order explicit Euler.
    Euler,
    /// Second-order midpoint.
    Midpoint,
    /// Classic fourth-order Runge-Kutta.
    RungeKutta4,
}

impl Scheme {
    /// Parses a scheme from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "euler" => Some(Scheme::Euler),
            "midpoint" => Some(Scheme::Midpoint),
            "rk4" | "runge-kutta4" => Some(Scheme::RungeKutta4),
            _ => None,
        }
    }

    /// The canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Euler => "euler",
            Scheme::Midpoint => "midpoint",
            Scheme::RungeKutta4 => "rk4",
        }
    }
}

/// Advances `start` by one step of size `h` along the velocity function `f`.
///
/// Stateless and deterministic: the result depends only on the arguments.
pub fn step<V, F>(scheme: Scheme, start: V, f: F, h: f64) -> V
where
    V: Copy + Add<Output = V> + Mul<f64, Output = V>,
    F: Fn(V) -> V,
{
    match scheme {
        Scheme::Euler => {
            let k1 = f(start) * h;
            start + k1
        }
        Scheme::Midpoint => {
            let k1 = f(start) * h;
            let k2 = f(start + k1 * 0.5) * h;
            start + k2
        }
        Scheme::RungeKutta4 => {
            let k1 = f(start) * h;
            let k2 = f(start + k1 * 0.5) * h;
            let k3 = f(start + k2 * 0.5) * h;
            let k4 = f(start + k3) * h;
            start + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0)
        }
    }
}
