//! Scoring endpoints.
//!
//! POST /score   - score one page
//! POST /compare - score a before/after pair and report the delta

use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::Deserialize;

use crate::domains::scoring::{compare_pages, score_page, CompareResult, Criteria, ScoreResult};
use crate::server::app::AxumAppState;
use crate::server::ApiError;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Raw HTML of the page
    pub html: String,
    /// Optional URL, given to the model as context
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub criteria: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub before_html: String,
    pub after_html: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub criteria: Option<Vec<String>>,
}

pub async fn score_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(request) = payload?;
    let criteria = Criteria::resolve(request.criteria);

    tracing::debug!(
        html_length = request.html.len(),
        criteria = criteria.len(),
        "Scoring page"
    );

    let result = score_page(&request.html, request.url.as_deref(), &criteria, &state.deps).await;
    Ok(Json(result))
}

pub async fn compare_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<CompareResult>, ApiError> {
    let Json(request) = payload?;
    let criteria = Criteria::resolve(request.criteria);

    tracing::debug!(
        before_length = request.before_html.len(),
        after_length = request.after_html.len(),
        criteria = criteria.len(),
        "Comparing pages"
    );

    let result = compare_pages(
        &request.before_html,
        &request.after_html,
        request.url.as_deref(),
        &criteria,
        &state.deps,
    )
    .await;
    Ok(Json(result))
}
