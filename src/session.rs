// src/session.rs
//! Submission lifecycle and result navigation state

use anyhow::Result;
use tracing::info;

use crate::client::ScreeningClient;
use crate::file_validator::ResumeValidator;
use crate::types::{CandidateFile, CandidateResult};

/// All mutable screening state in one place: the selected batch, the job
/// description, the loading flag, the ranked results and the cursor into
/// them. Every transition is a method on this struct; nothing lives in
/// ambient globals.
#[derive(Default)]
pub struct ScreeningSession {
    files: Vec<CandidateFile>,
    job_desc: String,
    results: Vec<CandidateResult>,
    loading: bool,
    active_index: usize,
}

impl ScreeningSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected batch. Does not touch previously stored results;
    /// those only change when a new submission starts.
    pub fn set_files(&mut self, files: Vec<CandidateFile>) {
        self.files = files;
    }

    pub fn set_job_desc(&mut self, job_desc: String) {
        self.job_desc = job_desc;
    }

    pub fn files(&self) -> &[CandidateFile] {
        &self.files
    }

    pub fn job_desc(&self) -> &str {
        &self.job_desc
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The submission trigger must stay disabled while this is false
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.files.is_empty()
    }

    /// Run one full submission cycle: gate the batch, clear previous
    /// results, send the multipart request, rank what comes back.
    ///
    /// Validation and batch-size failures short-circuit before any I/O.
    /// Transport failures leave the result set empty (it is cleared as the
    /// submission starts, before the request is issued). The loading flag is
    /// cleared on every exit path.
    pub async fn submit(&mut self, client: &ScreeningClient) -> Result<()> {
        if self.loading {
            anyhow::bail!("A screening submission is already in flight");
        }
        if self.files.is_empty() {
            anyhow::bail!("No resumes selected for screening");
        }

        ResumeValidator::validate_batch(&self.files)?;

        self.loading = true;
        self.results.clear();
        self.active_index = 0;

        let outcome = client.submit_batch(&self.files, &self.job_desc).await;
        self.loading = false;

        let response = outcome?;
        self.store_results(response.results);

        info!("Stored {} ranked screening result(s)", self.results.len());
        Ok(())
    }

    /// Rank a result set by score, best candidate first, and reset the
    /// cursor. Sorting happens once on receipt; failed analyses carry a
    /// default score of 0 and land at the bottom.
    pub fn store_results(&mut self, mut results: Vec<CandidateResult>) {
        results.sort_by(|a, b| b.analysis.score.cmp(&a.analysis.score));
        self.results = results;
        self.active_index = 0;
    }

    pub fn results(&self) -> &[CandidateResult] {
        &self.results
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_result(&self) -> Option<&CandidateResult> {
        self.results.get(self.active_index)
    }

    /// Metadata of the submitted file a result refers to, for display next
    /// to the verdict
    pub fn source_file(&self, file_index: usize) -> Option<&CandidateFile> {
        self.files.get(file_index)
    }

    /// Advance the cursor; clamps at the last result, never wraps
    pub fn next(&mut self) {
        if self.active_index + 1 < self.results.len() {
            self.active_index += 1;
        }
    }

    /// Move the cursor back; clamps at the first result, never wraps
    pub fn previous(&mut self) {
        self.active_index = self.active_index.saturating_sub(1);
    }

    /// Jump straight to a result; out-of-range indices are ignored
    pub fn jump_to(&mut self, index: usize) {
        if index < self.results.len() {
            self.active_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_validator::BatchRejection;
    use crate::types::CandidateAnalysis;

    fn result(name: &str, score: i64, success: bool) -> CandidateResult {
        CandidateResult {
            file_index: 0,
            file_name: name.to_string(),
            analysis: CandidateAnalysis {
                success,
                score,
                ..Default::default()
            },
        }
    }

    fn resume(name: &str, size: usize) -> CandidateFile {
        CandidateFile::new(
            name.to_string(),
            "application/pdf".to_string(),
            vec![0u8; size],
        )
    }

    #[test]
    fn test_results_are_stored_in_descending_score_order() {
        let mut session = ScreeningSession::new();
        session.store_results(vec![
            result("a.pdf", 55, true),
            result("b.pdf", 91, true),
            result("c.pdf", 70, true),
        ]);

        let scores: Vec<i64> = session.results().iter().map(|r| r.analysis.score).collect();
        assert_eq!(scores, vec![91, 70, 55]);
    }

    #[test]
    fn test_failed_analyses_rank_below_scored_ones() {
        let mut session = ScreeningSession::new();
        session.store_results(vec![
            result("broken.pdf", 0, false),
            result("good.pdf", 42, true),
        ]);

        assert_eq!(session.results()[0].file_name, "good.pdf");
        assert_eq!(session.results()[1].file_name, "broken.pdf");
    }

    #[test]
    fn test_storing_results_resets_the_cursor() {
        let mut session = ScreeningSession::new();
        session.store_results(vec![
            result("a.pdf", 90, true),
            result("b.pdf", 80, true),
            result("c.pdf", 70, true),
        ]);
        session.jump_to(2);
        assert_eq!(session.active_index(), 2);

        session.store_results(vec![result("d.pdf", 50, true)]);
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn test_next_clamps_at_the_last_result() {
        let mut session = ScreeningSession::new();
        session.store_results(vec![result("a.pdf", 90, true), result("b.pdf", 80, true)]);

        session.next();
        assert_eq!(session.active_index(), 1);
        session.next();
        assert_eq!(session.active_index(), 1);
    }

    #[test]
    fn test_previous_clamps_at_zero() {
        let mut session = ScreeningSession::new();
        session.store_results(vec![result("a.pdf", 90, true), result("b.pdf", 80, true)]);

        session.previous();
        assert_eq!(session.active_index(), 0);
        session.next();
        session.previous();
        assert_eq!(session.active_index(), 0);
    }

    #[test]
    fn test_jump_to_ignores_out_of_range_indices() {
        let mut session = ScreeningSession::new();
        session.store_results(vec![result("a.pdf", 90, true), result("b.pdf", 80, true)]);

        session.jump_to(1);
        assert_eq!(session.active_index(), 1);
        session.jump_to(5);
        assert_eq!(session.active_index(), 1);
    }

    #[test]
    fn test_navigation_is_safe_with_no_results() {
        let mut session = ScreeningSession::new();
        session.next();
        session.previous();
        session.jump_to(3);
        assert_eq!(session.active_index(), 0);
        assert!(session.active_result().is_none());
    }

    #[test]
    fn test_can_submit_requires_a_non_empty_batch() {
        let mut session = ScreeningSession::new();
        assert!(!session.can_submit());

        session.set_files(vec![resume("a.pdf", 100)]);
        assert!(session.can_submit());
    }

    #[tokio::test]
    async fn test_submit_refuses_an_empty_file_list() {
        // The guard fires before any connection attempt, so the bogus
        // endpoint is never contacted
        let client = ScreeningClient::new("http://127.0.0.1:9".to_string());
        let mut session = ScreeningSession::new();

        let err = session.submit(&client).await.unwrap_err();
        assert!(err.to_string().contains("No resumes selected"));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_submit_short_circuits_on_validation_failure() {
        let client = ScreeningClient::new("http://127.0.0.1:9".to_string());
        let mut session = ScreeningSession::new();
        session.set_files(vec![resume("empty.pdf", 0)]);

        let err = session.submit(&client).await.unwrap_err();
        assert!(err.downcast_ref::<BatchRejection>().is_some());
        assert!(session.results().is_empty());
        assert!(!session.is_loading());
    }
}
