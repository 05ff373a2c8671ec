//! Half-circle gauge rendering for BMI values.
//!
//! The dial maps the BMI domain [10, 40] linearly onto [0, π], splits the
//! ring into the four classification bands, and draws a needle at the
//! input value. Output is an encoded PNG byte stream.

pub mod error;
pub mod font;
pub mod geometry;
pub mod render;

pub use error::GaugeError;
pub use geometry::{HEIGHT, MAX_BMI, MIN_BMI, WIDTH, needle_angle};
pub use render::render;
