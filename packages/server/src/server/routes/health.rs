use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AxumAppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// True when heuristic scoring is forced by configuration
    pub mock: bool,
}

/// Health check endpoint
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mock: state.deps.settings.force_heuristic,
    })
}
