//! Axis-aligned bounds rectangle.
//!
//! A [`Rect`] is the sampling and scoring region for a scene. Construction
//! fails fast on degenerate bounds; sampling from a degenerate rectangle is
//! undefined and we never reach it.

use crate::error::GliderError;
use crate::prng::SplitMix64;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    min: DVec2,
    max: DVec2,
}

impl Rect {
    /// Creates a rectangle from its corners.
    ///
    /// Returns `GliderError::DegenerateBounds` unless `min` is strictly
    /// below `max` on both axes.
    pub fn new(min: DVec2, max: DVec2) -> Result<Self, GliderError> {
        if !(min.x < max.x && min.y < max.y) {
            return Err(GliderError::DegenerateBounds {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Min corner.
    pub fn min(&self) -> DVec2 {
        self.min
    }

    /// Max corner.
    pub fn max(&self) -> DVec2 {
        self.max
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Closed containment test (boundary points are inside).
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Draws a uniform point inside the rectangle.
    ///
    /// Consumes exactly two values from `rng`, x first then y. The draw
    /// order is part of the reproducibility contract: reordering it changes
    /// every generated scene.
    pub fn sample(&self, rng: &mut SplitMix64) -> DVec2 {
        let x = rng.next_range(self.min.x, self.max.x);
        let y = rng.next_range(self.min.y, self.max.y);
        DVec2::new(x, y)
    }
}
