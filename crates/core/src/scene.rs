//! Reproducible specification for a glider scene.
//!
//! A [`Scene`] captures everything needed to recreate a run: seed, planet
//! count, bounds dimensions, and parameter overrides. Two equal scenes
//! produce bit-identical planet fields.

use crate::error::GliderError;
use crate::field::PlanetField;
use crate::rect::Rect;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Reproducible specification for a glider scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    /// Top-level seed every role stream derives from.
    pub seed: u64,
    /// Number of planets to generate.
    pub planet_count: usize,
    /// Bounds width; the rectangle spans (0, 0) to (width, height).
    pub width: f64,
    /// Bounds height.
    pub height: f64,
    /// Trajectory/search parameter overrides as a JSON object.
    pub params: serde_json::Value,
}

impl Scene {
    /// Creates a scene with default (empty) parameter overrides.
    pub fn new(seed: u64, planet_count: usize, width: f64, height: f64) -> Self {
        Self {
            seed,
            planet_count,
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates the scene dimensions.
    pub fn validate(&self) -> Result<(), GliderError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(GliderError::InvalidDimensions);
        }
        Ok(())
    }

    /// The bounds rectangle, anchored at the origin.
    pub fn bounds(&self) -> Result<Rect, GliderError> {
        self.validate()?;
        Rect::new(DVec2::ZERO, DVec2::new(self.width, self.height))
    }

    /// Builds the planet field this scene describes.
    pub fn field(&self) -> Result<PlanetField, GliderError> {
        Ok(PlanetField::generate(
            self.planet_count,
            self.bounds()?,
            self.seed,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_scene_with_empty_params() {
        let s = Scene::new(23, 6, 1080.0, 720.0);
        assert_eq!(s.seed, 23);
        assert_eq!(s.planet_count, 6);
        assert_eq!(s.params, serde_json::json!({}));
    }

    #[test]
    fn validate_accepts_proper_dimensions() {
        assert!(Scene::new(1, 4, 1080.0, 720.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_width() {
        assert!(Scene::new(1, 4, 0.0, 720.0).validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_height() {
        assert!(Scene::new(1, 4, 1080.0, -1.0).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_dimensions() {
        assert!(Scene::new(1, 4, f64::NAN, 720.0).validate().is_err());
        assert!(Scene::new(1, 4, 1080.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn equal_scenes_build_identical_fields() {
        let a = Scene::new(42, 8, 1080.0, 720.0).field().unwrap();
        let b = Scene::new(42, 8, 1080.0, 720.0).field().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn json_round_trip_with_custom_params() {
        let mut s = Scene::new(8675309, 5, 1920.0, 1080.0);
        s.params = serde_json::json!({
            "spiral_factor": 0.1,
            "max_steps": 5000,
            "scheme": "rk4"
        });
        let json = serde_json::to_string_pretty(&s).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(s, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let v = serde_json::to_value(Scene::new(1, 2, 3.0, 4.0)).unwrap();
        for key in ["seed", "planet_count", "width", "height", "params"] {
            assert!(v.get(key).is_some(), "missing key {key}");
        }
    }
}
