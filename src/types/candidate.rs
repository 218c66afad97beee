// src/types/candidate.rs
//! Candidate resume files as selected by the recruiter

use anyhow::{Context, Result};
use std::path::Path;

/// A candidate resume held in memory for the duration of one submission
/// cycle. Replaced wholesale when the recruiter picks a new batch.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub content: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: String, mime_type: String, content: Vec<u8>) -> Self {
        Self {
            size_bytes: content.len() as u64,
            name,
            mime_type,
            content,
        }
    }

    /// Load a resume from disk, deriving the MIME type from the extension
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;

        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mime_type = mime_type_for(&name).to_string();

        Ok(Self::new(name, mime_type, content))
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// Caption shown next to a result card
    pub fn kind_label(&self) -> &'static str {
        if self.mime_type.contains("pdf") {
            "PDF Resume"
        } else {
            "Text Resume"
        }
    }
}

/// Map a file name to the MIME type the analysis service expects. Unknown
/// extensions fall through to `application/octet-stream` so the validation
/// gate rejects them.
pub fn mime_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        "application/pdf"
    } else if lower_name.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}
