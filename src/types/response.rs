// src/types/response.rs
//! Wire types for the bulk screening endpoint

use serde::Deserialize;
use std::collections::HashMap;

/// Per-candidate verdict from the analysis service.
///
/// Failure payloads can be as small as `{"error": "..."}`, so every field
/// except `error` is defaulted rather than required. A missing `score`
/// deserializes as 0 and sorts to the bottom of the ranking.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateAnalysis {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub skills: HashMap<String, String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of the `results` array. `file_index` links back to the
/// submitted batch so file metadata can be shown next to the verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateResult {
    pub file_index: usize,
    pub file_name: String,
    pub analysis: CandidateAnalysis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningResponse {
    pub results: Vec<CandidateResult>,
    #[serde(default)]
    pub total_files: Option<usize>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_payload() {
        let raw = r#"{
            "total_files": 1,
            "job_description": "Senior Rust engineer",
            "results": [
                {
                    "file_index": 0,
                    "file_name": "jane_doe.pdf",
                    "analysis": {
                        "success": true,
                        "score": 87,
                        "skills": {"skill_1": "Rust", "skill_2": "Distributed systems"},
                        "summary": "Strong systems background."
                    }
                }
            ]
        }"#;

        let response: ScreeningResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.total_files, Some(1));
        assert_eq!(response.results.len(), 1);

        let analysis = &response.results[0].analysis;
        assert!(analysis.success);
        assert_eq!(analysis.score, 87);
        assert_eq!(analysis.skills.len(), 2);
        assert!(analysis.error.is_none());
    }

    #[test]
    fn test_failure_payload_defaults_missing_fields() {
        // The service returns bare error objects for unreadable resumes
        let raw = r#"{
            "results": [
                {
                    "file_index": 0,
                    "file_name": "scan.pdf",
                    "analysis": {"error": "Unsupported file type"}
                }
            ]
        }"#;

        let response: ScreeningResponse = serde_json::from_str(raw).unwrap();
        let analysis = &response.results[0].analysis;
        assert!(!analysis.success);
        assert_eq!(analysis.score, 0);
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.summary, "");
        assert_eq!(analysis.error.as_deref(), Some("Unsupported file type"));
    }

    #[test]
    fn test_response_tolerates_missing_echo_fields() {
        let response: ScreeningResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total_files, None);
        assert_eq!(response.job_description, None);
    }
}
