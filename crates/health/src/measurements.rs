//! Validated body measurements.

use serde::{Deserialize, Serialize};

use crate::bmi::Bmi;
use crate::error::HealthError;

/// A person's weight and height, validated at construction.
///
/// Weight is in kilograms, height in meters. Both must be finite and
/// strictly positive, so the BMI division below can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    weight_kg: f64,
    height_m: f64,
}

impl Measurements {
    /// Creates validated measurements from raw input.
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self, HealthError> {
        if !weight_kg.is_finite() {
            return Err(HealthError::NonFinite { field: "weight" });
        }
        if !height_m.is_finite() {
            return Err(HealthError::NonFinite { field: "height" });
        }
        if weight_kg <= 0.0 {
            return Err(HealthError::NonPositiveWeight(weight_kg));
        }
        if height_m <= 0.0 {
            return Err(HealthError::NonPositiveHeight(height_m));
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }

    /// Returns the weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Returns the height in meters.
    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Computes the Body Mass Index: weight divided by height squared.
    pub fn bmi(&self) -> Bmi {
        Bmi::new(self.weight_kg / (self.height_m * self.height_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiBand;

    #[test]
    fn bmi_reference_value() {
        let m = Measurements::new(70.0, 1.75).unwrap();
        assert!((m.bmi().value() - 22.857).abs() < 0.001);
        assert_eq!(m.bmi().band(), BmiBand::Normal);
    }

    #[test]
    fn bmi_normal_band_low_end() {
        let m = Measurements::new(50.0, 1.60).unwrap();
        assert!((m.bmi().value() - 19.53).abs() < 0.01);
        assert_eq!(m.bmi().band(), BmiBand::Normal);
    }

    #[test]
    fn bmi_obese_band() {
        let m = Measurements::new(100.0, 1.70).unwrap();
        assert!((m.bmi().value() - 34.6).abs() < 0.05);
        assert_eq!(m.bmi().band(), BmiBand::Obese);
    }

    #[test]
    fn zero_height_is_rejected() {
        assert_eq!(
            Measurements::new(70.0, 0.0),
            Err(HealthError::NonPositiveHeight(0.0))
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert_eq!(
            Measurements::new(-5.0, 1.75),
            Err(HealthError::NonPositiveWeight(-5.0))
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            Measurements::new(f64::NAN, 1.75),
            Err(HealthError::NonFinite { field: "weight" })
        );
        assert_eq!(
            Measurements::new(70.0, f64::INFINITY),
            Err(HealthError::NonFinite { field: "height" })
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let m = Measurements::new(70.0, 1.75).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Measurements = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
