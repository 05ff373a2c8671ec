//! Domain layer for BMI assessment.
//!
//! This crate provides the core domain types:
//! - `Measurements` for validated weight/height input
//! - `Bmi` for the derived scalar
//! - `BmiBand` for the standard classification bands

pub mod bmi;
pub mod error;
pub mod measurements;

pub use bmi::{Bmi, BmiBand};
pub use error::HealthError;
pub use measurements::Measurements;
