//! Axum route handlers for the generation API.
//!
//! The handlers stay thin: extract the form, capture the request origin for
//! artifact URLs, delegate to the pipeline, shape the JSON payload.

use axum::extract::{Host, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::pipeline::{GenerationRequest, PipelineResult};
use crate::state::AppState;

/// GET /
/// Serves the browser form for submitting a tailoring request.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// Response payload for a completed generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: bool,
    /// Addressable locations of the rendered documents. Fully qualified when
    /// the request origin is known, relative storage paths otherwise.
    pub resume_file: String,
    pub cover_letter_file: String,
    /// Sanitized tailored résumé rendered to HTML.
    pub tailored_resume: String,
    /// Sanitized tailored résumé, raw markdown form.
    pub tailored_resume_md_format: String,
    /// Sanitized cover letter, raw markdown form.
    pub cover_letter: String,
}

/// POST /generate
///
/// Runs the full tailoring pipeline for one request.
pub async fn generate_handler(
    State(state): State<AppState>,
    Host(host): Host,
    Form(request): Form<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let origin = format!("http://{host}");
    let result = state.pipeline.run(request, Some(&origin)).await?;
    Ok(Json(shape_response(result)))
}

fn shape_response(result: PipelineResult) -> GenerateResponse {
    let artifacts = result.artifacts;
    GenerateResponse {
        status: true,
        resume_file: artifacts.resume_url.unwrap_or(artifacts.resume_path),
        cover_letter_file: artifacts
            .cover_letter_url
            .unwrap_or(artifacts.cover_letter_path),
        tailored_resume: result.resume_html,
        tailored_resume_md_format: result.resume_markdown,
        cover_letter: result.cover_letter_markdown,
    }
}
