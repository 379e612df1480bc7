//! Pure helper functions for extracting typed parameters from a
//! `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value has the wrong type, the default is returned. These
//! never fail — they always produce a usable value.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or
/// wrong type. JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing,
/// negative, fractional, or wrong type.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing
/// or wrong type.
pub fn param_str(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"spiral_factor": 0.25});
        assert!((param_f64(&params, "spiral_factor", 0.0) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"step_size": 6});
        assert!((param_f64(&params, "step_size", 0.0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "step_size", 6.0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"step_size": "big"});
        assert!((param_f64(&params, "step_size", 6.0) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!([1, 2, 3]);
        assert!((param_f64(&params, "step_size", 7.0) - 7.0).abs() < f64::EPSILON);
    }

    // -- param_usize --

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"max_steps": 3000});
        assert_eq!(param_usize(&params, "max_steps", 0), 3000);
    }

    #[test]
    fn param_usize_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_usize(&params, "max_steps", 10), 10);
    }

    #[test]
    fn param_usize_returns_default_for_float_value() {
        let params = json!({"max_steps": 2.5});
        assert_eq!(param_usize(&params, "max_steps", 99), 99);
    }

    #[test]
    fn param_usize_returns_default_for_negative_integer() {
        let params = json!({"max_steps": -1});
        assert_eq!(param_usize(&params, "max_steps", 5), 5);
    }

    // -- param_str --

    #[test]
    fn param_str_extracts_existing_string() {
        let params = json!({"scheme": "rk4"});
        assert_eq!(param_str(&params, "scheme", "midpoint"), "rk4");
    }

    #[test]
    fn param_str_returns_default_when_key_missing() {
        assert_eq!(param_str(&json!({}), "scheme", "midpoint"), "midpoint");
    }

    #[test]
    fn param_str_returns_default_for_wrong_type() {
        assert_eq!(param_str(&json!({"scheme": 4}), "scheme", "midpoint"), "midpoint");
    }
}
