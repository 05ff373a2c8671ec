//! BMI assessment endpoint.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use health::Measurements;
use serde::Deserialize;

use crate::error::ApiError;

/// Request body for the assessment endpoint.
///
/// Weight in kilograms, height in meters.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub weight: f64,
    pub height: f64,
}

/// POST /assess_health — compute BMI and stream back the gauge PNG.
#[tracing::instrument]
pub async fn assess(Json(req): Json<AssessmentRequest>) -> Result<impl IntoResponse, ApiError> {
    let measurements = Measurements::new(req.weight, req.height)?;
    let bmi = measurements.bmi();

    metrics::counter!("bmi_assessments_total").increment(1);
    metrics::histogram!("bmi_value").record(bmi.value());

    tracing::info!(bmi = %bmi, band = %bmi.band(), "assessed measurements");

    let png = gauge::render(bmi)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png))
}
