//! The BMI scalar and its classification bands.

use serde::{Deserialize, Serialize};

/// Body Mass Index: weight (kg) divided by height (m) squared.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bmi(f64);

impl Bmi {
    /// Wraps a raw BMI value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying scalar.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Classifies the value into the standard BMI bands.
    pub fn band(&self) -> BmiBand {
        BmiBand::classify(self.0)
    }
}

impl std::fmt::Display for Bmi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// The standard BMI classification bands.
///
/// Band boundaries:
/// ```text
/// Underweight ◄─ 18.5 ─► Normal ◄─ 24.9 ─► Overweight ◄─ 29.9 ─► Obese
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiBand {
    /// BMI below 18.5.
    Underweight,

    /// BMI in [18.5, 24.9).
    Normal,

    /// BMI in [24.9, 29.9).
    Overweight,

    /// BMI of 29.9 or above.
    Obese,
}

impl BmiBand {
    /// Upper boundary of this band on the gauge scale.
    pub const fn upper_bound(&self) -> f64 {
        match self {
            BmiBand::Underweight => 18.5,
            BmiBand::Normal => 24.9,
            BmiBand::Overweight => 29.9,
            BmiBand::Obese => 40.0,
        }
    }

    /// All bands in ascending order.
    pub const ALL: [BmiBand; 4] = [
        BmiBand::Underweight,
        BmiBand::Normal,
        BmiBand::Overweight,
        BmiBand::Obese,
    ];

    /// Classifies a raw BMI value.
    pub fn classify(bmi: f64) -> Self {
        if bmi < BmiBand::Underweight.upper_bound() {
            BmiBand::Underweight
        } else if bmi < BmiBand::Normal.upper_bound() {
            BmiBand::Normal
        } else if bmi < BmiBand::Overweight.upper_bound() {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }
}

impl std::fmt::Display for BmiBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal weight",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obesity",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(BmiBand::classify(10.0), BmiBand::Underweight);
        assert_eq!(BmiBand::classify(18.4), BmiBand::Underweight);
        assert_eq!(BmiBand::classify(18.5), BmiBand::Normal);
        assert_eq!(BmiBand::classify(24.8), BmiBand::Normal);
        assert_eq!(BmiBand::classify(24.9), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(29.8), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(29.9), BmiBand::Obese);
        assert_eq!(BmiBand::classify(45.0), BmiBand::Obese);
    }

    #[test]
    fn bands_are_ordered() {
        let bounds: Vec<f64> = BmiBand::ALL.iter().map(|b| b.upper_bound()).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display_one_decimal() {
        assert_eq!(Bmi::new(22.857).to_string(), "22.9");
        assert_eq!(Bmi::new(19.0).to_string(), "19.0");
    }

    #[test]
    fn serialization_is_transparent() {
        let json = serde_json::to_string(&Bmi::new(22.5)).unwrap();
        assert_eq!(json, "22.5");
    }
}
