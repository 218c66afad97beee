// src/client.rs
//! HTTP client for the bulk resume analysis service

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use crate::types::{CandidateFile, ScreeningResponse};

const UPLOAD_CVS_ENDPOINT: &str = "/api/upload-cvs";

pub struct ScreeningClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScreeningClient {
    /// Create a client for the given service base URL. No request timeout:
    /// a batch of resumes can hold the connection while the service analyzes
    /// every file, and the submission waits for the transport to resolve or
    /// fail.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit the whole batch in a single multipart request: one `files`
    /// part per resume (original bytes and filename) plus one `job_desc`
    /// text part, which may be empty.
    pub async fn submit_batch(
        &self,
        files: &[CandidateFile],
        job_desc: &str,
    ) -> Result<ScreeningResponse> {
        let url = format!("{}{}", self.base_url, UPLOAD_CVS_ENDPOINT);

        let mut form = Form::new();
        for file in files {
            form = form.part(
                "files",
                Part::bytes(file.content.clone())
                    .file_name(file.name.clone())
                    .mime_str(&file.mime_type)
                    .context("Failed to create multipart part")?,
            );
        }
        form = form.text("job_desc", job_desc.to_string());

        info!(
            "Submitting {} resume(s) to screening service: {}",
            files.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to reach the screening service")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Screening service error response: {}", error_text);
            anyhow::bail!("Screening service returned error {}: {}", status, error_text);
        }

        let screening: ScreeningResponse = response
            .json()
            .await
            .context("Failed to parse screening service response")?;

        info!(
            "Received {} result(s) from screening service",
            screening.results.len()
        );

        Ok(screening)
    }
}
