//! Input parameters and validation.
//!
//! Mistake-proofing happens in two layers, mirroring the configuration
//! pattern used across the engine:
//! - Schema validation via serde + `validator` derive (types, required
//!   fields, inclusive ranges)
//! - Semantic validation for constraints the derive cannot express
//!   (exclusive lower bounds, non-finite rejection)
//!
//! A parameter set that survives both layers is safe for every downstream
//! formula: all of them are total functions over the validated domain.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{EngineError, EngineResult};

/// Incoming asteroid parameters, one set per request.
///
/// Constructed by [`AsteroidParameters::from_json`], never mutated after
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AsteroidParameters {
    /// Diameter (m). Must be strictly positive.
    pub size: f64,
    /// Impact speed (km/s). Must be strictly positive.
    pub speed: f64,
    /// Impact angle from horizontal (degrees), in (0, 90].
    pub angle: f64,
    /// Impact latitude (degrees).
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Impact longitude (degrees).
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl AsteroidParameters {
    /// Parse and validate parameters from a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the body is not valid JSON, a field is
    /// missing or non-numeric, or any value is outside its allowed range.
    pub fn from_json(body: &str) -> EngineResult<Self> {
        let params: Self = serde_json::from_str(body)
            .map_err(|e| EngineError::validation(format!("invalid request body: {e}")))?;
        params.validated()
    }

    /// Validate a parameter set constructed in code.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any value is outside its allowed range
    /// or non-finite.
    pub fn validated(self) -> EngineResult<Self> {
        self.validate()?;
        self.validate_semantic()?;
        Ok(self)
    }

    /// Constraints beyond what the schema derive can express.
    fn validate_semantic(&self) -> EngineResult<()> {
        // NaN slips through ordered comparisons, so reject non-finite
        // values explicitly before any range logic.
        for (name, value) in [
            ("size", self.size),
            ("speed", self.speed),
            ("angle", self.angle),
            ("latitude", self.latitude),
            ("longitude", self.longitude),
        ] {
            if !value.is_finite() {
                return Err(EngineError::validation(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }

        if self.size <= 0.0 {
            return Err(EngineError::validation(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        if self.speed <= 0.0 {
            return Err(EngineError::validation(format!(
                "speed must be positive, got {}",
                self.speed
            )));
        }
        if self.angle <= 0.0 || self.angle > 90.0 {
            return Err(EngineError::validation(format!(
                "angle must be in (0, 90] degrees, got {}",
                self.angle
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn valid() -> AsteroidParameters {
        AsteroidParameters {
            size: 100.0,
            speed: 20.0,
            angle: 45.0,
            latitude: 40.7128,
            longitude: -74.006,
        }
    }

    #[test]
    fn test_valid_parameters_accepted() {
        assert!(valid().validated().is_ok());
    }

    #[test]
    fn test_vertical_impact_accepted() {
        let params = AsteroidParameters {
            angle: 90.0,
            ..valid()
        };
        assert!(params.validated().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let params = AsteroidParameters { size: 0.0, ..valid() };
        assert!(params.validated().is_err());
    }

    #[test]
    fn test_zero_angle_rejected() {
        let params = AsteroidParameters {
            angle: 0.0,
            ..valid()
        };
        assert!(params.validated().is_err());
    }

    #[test]
    fn test_steep_angle_rejected() {
        let params = AsteroidParameters {
            angle: 95.0,
            ..valid()
        };
        assert!(params.validated().is_err());
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let params = AsteroidParameters {
            latitude: 91.0,
            ..valid()
        };
        assert!(params.validated().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let params = AsteroidParameters {
            speed: f64::NAN,
            ..valid()
        };
        assert!(params.validated().is_err());

        let params = AsteroidParameters {
            latitude: f64::INFINITY,
            ..valid()
        };
        assert!(params.validated().is_err());
    }

    #[test]
    fn test_from_json_round_trip() {
        let body = r#"{"size":100,"speed":20,"angle":45,"latitude":40.7128,"longitude":-74.006}"#;
        let params = AsteroidParameters::from_json(body).unwrap();
        assert_eq!(params, valid());
    }

    #[test]
    fn test_missing_field_rejected() {
        let body = r#"{"size":100,"speed":20,"angle":45,"latitude":40.7128}"#;
        let err = AsteroidParameters::from_json(body).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let body = r#"{"size":"big","speed":20,"angle":45,"latitude":40.7128,"longitude":-74.006}"#;
        let err = AsteroidParameters::from_json(body).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let body = r#"{"size":100,"speed":20,"angle":45,"latitude":0,"longitude":0,"mass":1}"#;
        assert!(AsteroidParameters::from_json(body).is_err());
    }
}
