use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use analysis_engine::{build_plot, summarize, AnalysisError};
use models::{AppraisalInput, PlotSeries, SummaryStats};

use crate::{error::ApiError, repository::AnalysisRepository, Result};

pub type RepositoryState = Arc<dyn AnalysisRepository>;

/// Response for the compute endpoint. Both fields are null when the
/// document holds no sale records: the neutral empty state the frontend
/// renders without an error banner.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub summary: Option<SummaryStats>,
    pub plot: Option<PlotSeries>,
}

/// POST /api/analysis
/// Runs the sensitivity analysis on a parsed appraisal document
pub async fn run_analysis(Json(input): Json<AppraisalInput>) -> Result<impl IntoResponse> {
    validate_records(&input)?;

    let summary = match summarize(&input.comparables) {
        Ok(stats) => Some(stats),
        Err(AnalysisError::NoSaleRecords) => None,
    };
    let plot = build_plot(&input.comparables, input.subject_property.as_ref());

    if summary.is_none() {
        tracing::debug!(
            comparables = input.comparables.len(),
            "no sale records; returning empty analysis"
        );
    }

    Ok(Json(AnalysisResponse { summary, plot }))
}

/// GET /api/analysis
/// Returns the analysis artifact generated by the CLI
pub async fn get_analysis(State(repo): State<RepositoryState>) -> Result<impl IntoResponse> {
    let analysis = repo.fetch_analysis().await?;

    let etag = format!("\"{}\"", analysis.metadata.generated_at);

    let mut headers = HeaderMap::new();
    headers.insert(header::ETAG, etag.parse().unwrap());
    headers.insert(header::CACHE_CONTROL, "public, max-age=60".parse().unwrap());

    Ok((StatusCode::OK, headers, Json(analysis)))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "sensitivity-api"
    }))
}

/// POST /api/cache/invalidate
/// Invalidates the cache and forces reload of the analysis artifact
/// Useful after regenerating analysis.json without restarting the server
pub async fn invalidate_cache(State(repo): State<RepositoryState>) -> impl IntoResponse {
    repo.invalidate_cache().await;

    Json(serde_json::json!({
        "status": "success",
        "message": "Cache invalidated. Fresh data will be loaded on next request."
    }))
}

/// The engine assumes validated input, so malformed records are rejected
/// here at the boundary: every price must be a finite, non-negative
/// number. This is the error-banner path, distinct from the zero-sales
/// empty state.
fn validate_records(input: &AppraisalInput) -> Result<()> {
    for rec in &input.comparables {
        check_price(rec.pre_adjustment_price, "pre-adjustment price", &rec.address)?;
        check_price(
            rec.post_adjustment_price,
            "post-adjustment price",
            &rec.address,
        )?;
        if !rec.total_adjustment_percent.is_finite() {
            return Err(ApiError::MalformedRecord(format!(
                "total adjustment percent for '{}' must be a number",
                rec.address
            )));
        }
    }
    if let Some(subject) = &input.subject_property {
        check_price(
            subject.pre_adjustment_price,
            "pre-adjustment price",
            &subject.address,
        )?;
    }
    Ok(())
}

fn check_price(value: f64, field: &str, address: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::MalformedRecord(format!(
            "{} for '{}' must be a non-negative number",
            field, address
        )));
    }
    Ok(())
}
