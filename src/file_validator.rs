// src/file_validator.rs
//! Pre-submission validation gate for resume batches

use crate::types::CandidateFile;
use std::fmt;
use tracing::error;

pub const MAX_BATCH_SIZE: usize = 20;
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct FileValidationError {
    pub file_name: String,
    pub error_type: FileErrorType,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorType {
    UnsupportedFormat,
    TooLarge,
    EmptyFile,
}

impl FileErrorType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat => "RESUME_WRONG_FORMAT",
            Self::TooLarge => "RESUME_TOO_LARGE",
            Self::EmptyFile => "RESUME_EMPTY",
        }
    }
}

impl fmt::Display for FileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.message, self.suggestion)
    }
}

/// Whole-batch rejection. Validation is all-or-nothing: one offending file
/// blocks the entire submission.
#[derive(Debug)]
pub enum BatchRejection {
    TooManyFiles { count: usize, max: usize },
    InvalidFiles(Vec<FileValidationError>),
}

impl fmt::Display for BatchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyFiles { count, max } => {
                write!(
                    f,
                    "{} files selected; at most {} candidate resumes can be processed at once",
                    count, max
                )
            }
            Self::InvalidFiles(failures) => {
                writeln!(f, "{} resume(s) failed validation:", failures.len())?;
                for failure in failures {
                    writeln!(f, "  - {}", failure)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for BatchRejection {}

pub struct ResumeValidator;

impl ResumeValidator {
    /// Gate an entire batch before any network use
    pub fn validate_batch(files: &[CandidateFile]) -> Result<(), BatchRejection> {
        if files.len() > MAX_BATCH_SIZE {
            return Err(BatchRejection::TooManyFiles {
                count: files.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let failures: Vec<FileValidationError> = files
            .iter()
            .filter_map(|file| Self::validate_file(file).err())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            for failure in &failures {
                error!("Resume validation failed: {}", failure.message);
            }
            Err(BatchRejection::InvalidFiles(failures))
        }
    }

    /// Check one resume against the format, size and emptiness predicates.
    /// The first failing predicate determines the reported reason: a format
    /// failure masks size and emptiness for that file.
    pub fn validate_file(file: &CandidateFile) -> Result<(), FileValidationError> {
        if !Self::is_supported_format(file) {
            return Err(FileValidationError {
                file_name: file.name.clone(),
                error_type: FileErrorType::UnsupportedFormat,
                message: format!("Resume \"{}\" is not in a supported format", file.name),
                suggestion: "Request PDF or TXT format from the candidate".to_string(),
            });
        }

        if file.size_bytes > MAX_FILE_SIZE {
            return Err(FileValidationError {
                file_name: file.name.clone(),
                error_type: FileErrorType::TooLarge,
                message: format!(
                    "Resume \"{}\" is too large: {:.1}MB (max 10MB)",
                    file.name,
                    file.size_bytes as f64 / 1024.0 / 1024.0
                ),
                suggestion: "Request a smaller file from the candidate".to_string(),
            });
        }

        if file.size_bytes == 0 {
            return Err(FileValidationError {
                file_name: file.name.clone(),
                error_type: FileErrorType::EmptyFile,
                message: format!("Resume \"{}\" appears to be empty", file.name),
                suggestion: "Ask the candidate to resend the file".to_string(),
            });
        }

        Ok(())
    }

    fn is_supported_format(file: &CandidateFile) -> bool {
        file.mime_type == "application/pdf"
            || file.mime_type == "text/plain"
            || file.name.to_lowercase().ends_with(".txt")
    }
}
