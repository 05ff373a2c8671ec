//! Form page endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::AppState;
use crate::error::ApiError;

/// GET / — returns the form page template verbatim.
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let html = tokio::fs::read_to_string(&state.config.template_path)
        .await
        .map_err(|e| {
            ApiError::Internal(format!(
                "failed to read template {}: {e}",
                state.config.template_path.display()
            ))
        })?;
    Ok(Html(html))
}
