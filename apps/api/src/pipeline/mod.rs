//! Generation pipeline: sequences the document generation for one request.
//!
//! Flow: credential check → validate → resume prompt → generate → sanitize →
//!       (pause) → cover prompt (using the tailored resume) → generate →
//!       sanitize → render both PDFs → store → assemble response payload.
//!
//! The stages are strictly sequential within a request: the cover-letter
//! prompt consumes the sanitized résumé, so the two generation calls are
//! never issued in parallel. A stage failure aborts only this request's
//! pipeline; nothing global is touched and nothing retries.

pub mod prompts;
pub mod sanitize;

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{CompletionBackend, CompletionRequest};
use crate::pipeline::prompts::{cover_letter_prompt, resume_prompt};
use crate::pipeline::sanitize::sanitize;
use crate::render::{markdown_to_html, PdfRenderer, RenderError};
use crate::storage::{ArtifactStore, StoredArtifacts};

/// Output token budget for the résumé call.
const RESUME_MAX_TOKENS: u32 = 2000;
/// Output token budget for the cover-letter call.
const COVER_LETTER_MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

/// Title blocks of the two rendered documents.
const RESUME_TITLE: &str = "Tailored Resume";
const COVER_LETTER_TITLE: &str = "Cover Letter";

/// One tailoring request. `base_resume`, `job_title`, and `job_description`
/// must be non-blank; `company_info` may be empty and `model_name` falls
/// back to the configured default.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub base_resume: String,
    pub job_title: String,
    pub job_description: String,
    #[serde(default)]
    pub company_info: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Pipeline policy, built once at startup from `Config`.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Completion-service credential. `None` makes every run report a
    /// configuration error before any generation or storage work.
    pub credential: Option<String>,
    pub default_model: String,
    /// Pause between the two generation calls, a scheduling concession to
    /// the provider's rate limit. Zero disables it.
    pub pause: Duration,
}

/// Everything a caller needs from a completed run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Sanitized tailored résumé, raw markdown form.
    pub resume_markdown: String,
    /// Sanitized tailored résumé rendered to HTML for the browser payload.
    pub resume_html: String,
    /// Sanitized cover letter, raw markdown form.
    pub cover_letter_markdown: String,
    pub artifacts: StoredArtifacts,
}

/// Coordinates one request's generation, rendering, and storage.
pub struct GenerationPipeline {
    backend: Arc<dyn CompletionBackend>,
    renderer: PdfRenderer,
    store: ArtifactStore,
    options: PipelineOptions,
}

impl GenerationPipeline {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        renderer: PdfRenderer,
        store: ArtifactStore,
        options: PipelineOptions,
    ) -> Self {
        GenerationPipeline {
            backend,
            renderer,
            store,
            options,
        }
    }

    /// Runs the full pipeline. `origin` is the request origin when known,
    /// used to build fully qualified artifact URLs.
    pub async fn run(
        &self,
        request: GenerationRequest,
        origin: Option<&str>,
    ) -> Result<PipelineResult, AppError> {
        // Step 1: credential check, before any generation or storage work.
        let credential = self
            .options
            .credential
            .clone()
            .ok_or_else(|| AppError::Config("No API key configured".to_string()))?;

        validate(&request)?;

        let model = request
            .model_name
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(&self.options.default_model)
            .to_string();

        // Step 2: tailored résumé.
        info!("Generating tailored resume for '{}'", request.job_title);
        let prompt = resume_prompt(
            &request.base_resume,
            &request.job_title,
            &request.job_description,
            &request.company_info,
        );
        let raw = self
            .backend
            .complete(CompletionRequest {
                prompt,
                model: model.clone(),
                credential: credential.clone(),
                max_tokens: RESUME_MAX_TOKENS,
                temperature: TEMPERATURE,
            })
            .await?;
        let resume_markdown = sanitize(&raw);

        // Step 3: pause between the two calls. tokio::time::sleep suspends
        // only this request; concurrent requests keep being serviced.
        if !self.options.pause.is_zero() {
            info!("Pausing {:?} before the cover letter call", self.options.pause);
            tokio::time::sleep(self.options.pause).await;
        }

        // Step 4: cover letter, written against the tailored résumé.
        info!("Generating cover letter for '{}'", request.job_title);
        let prompt = cover_letter_prompt(
            &request.job_title,
            &request.job_description,
            &request.company_info,
            &resume_markdown,
        );
        let raw = self
            .backend
            .complete(CompletionRequest {
                prompt,
                model,
                credential,
                max_tokens: COVER_LETTER_MAX_TOKENS,
                temperature: TEMPERATURE,
            })
            .await?;
        let cover_letter_markdown = sanitize(&raw);

        // Step 5: render both documents off the async runtime.
        let renderer = self.renderer.clone();
        let resume_md = resume_markdown.clone();
        let cover_md = cover_letter_markdown.clone();
        let (resume_pdf, cover_letter_pdf) = tokio::task::spawn_blocking(move || {
            let resume = renderer.render(&resume_md, RESUME_TITLE)?;
            let cover = renderer.render(&cover_md, COVER_LETTER_TITLE)?;
            Ok::<_, RenderError>((resume, cover))
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

        // Step 6: persist both artifacts under one results folder.
        let artifacts = self
            .store
            .store(
                &request.job_title,
                Local::now(),
                &resume_pdf,
                &cover_letter_pdf,
                origin,
            )
            .await?;

        info!(
            "Pipeline complete for '{}': {}",
            request.job_title, artifacts.folder
        );

        Ok(PipelineResult {
            resume_html: markdown_to_html(&resume_markdown),
            resume_markdown,
            cover_letter_markdown,
            artifacts,
        })
    }
}

fn validate(request: &GenerationRequest) -> Result<(), AppError> {
    for (field, value) in [
        ("base_resume", &request.base_resume),
        ("job_title", &request.job_title),
        ("job_description", &request.job_description),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
