// src/lib.rs
//! Client-side orchestration for bulk candidate-resume screening.
//!
//! Collects a batch of resumes and a job description, validates the batch
//! locally, submits it as one multipart request to the analysis service,
//! ranks the returned scores descending and exposes single-record
//! navigation over the result set. Parsing and scoring live entirely in
//! the external service; this crate is the orchestration around its HTTP
//! contract.

use anyhow::Result;

pub mod cli;
pub mod client;
pub mod config;
pub mod file_validator;
pub mod report;
pub mod session;
pub mod types;

pub use client::ScreeningClient;
pub use config::ScreenerConfig;
pub use file_validator::{
    BatchRejection, FileErrorType, FileValidationError, ResumeValidator, MAX_BATCH_SIZE,
    MAX_FILE_SIZE,
};
pub use session::ScreeningSession;
pub use types::{CandidateAnalysis, CandidateFile, CandidateResult, ScreeningResponse};

/// Convenience wrapper: run one full screening cycle and hand back the
/// ranked results
pub async fn screen_candidates(
    files: Vec<CandidateFile>,
    job_desc: &str,
    service_url: &str,
) -> Result<Vec<CandidateResult>> {
    let client = ScreeningClient::new(service_url.to_string());
    let mut session = ScreeningSession::new();
    session.set_files(files);
    session.set_job_desc(job_desc.to_string());
    session.submit(&client).await?;
    Ok(session.results().to_vec())
}
