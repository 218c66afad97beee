// src/cli.rs
//! Command shell: batch screening plus a local-only validation check

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::client::ScreeningClient;
use crate::config::ScreenerConfig;
use crate::file_validator::{ResumeValidator, MAX_BATCH_SIZE};
use crate::report;
use crate::session::ScreeningSession;
use crate::types::CandidateFile;

#[derive(Parser)]
#[command(name = "cvsieve")]
#[command(about = "Screen candidate resumes against a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Screening service base URL (overrides SCREENER_SERVICE_URL and config.yaml)
    #[arg(long, global = true)]
    pub service_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a resume batch for analysis and browse the ranked results
    Screen {
        /// Resume files (PDF or TXT), up to 20
        files: Vec<PathBuf>,

        /// Job description text used for candidate matching
        #[arg(long)]
        job_desc: Option<String>,

        /// Read the job description from a file instead
        #[arg(long, conflicts_with = "job_desc")]
        job_desc_file: Option<PathBuf>,

        /// Print the ranked summary and exit without the interactive pager
        #[arg(long)]
        no_pager: bool,
    },
    /// Validate a resume batch locally without contacting the service
    Check {
        /// Resume files to check
        files: Vec<PathBuf>,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Screen {
            files,
            job_desc,
            job_desc_file,
            no_pager,
        } => {
            let config = ScreenerConfig::resolve(cli.service_url)?;
            screen(files, job_desc, job_desc_file, no_pager, config).await
        }
        Command::Check { files } => check(files).await,
    }
}

async fn load_files(paths: Vec<PathBuf>) -> Result<Vec<CandidateFile>> {
    if paths.is_empty() {
        anyhow::bail!("No resume files given");
    }

    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(CandidateFile::from_path(path).await?);
    }
    Ok(files)
}

async fn screen(
    paths: Vec<PathBuf>,
    job_desc: Option<String>,
    job_desc_file: Option<PathBuf>,
    no_pager: bool,
    config: ScreenerConfig,
) -> Result<()> {
    // The job description is optional; an absent one is submitted as an
    // empty string
    let job_desc = match (job_desc, job_desc_file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read job description: {}", path.display()))?,
        (None, None) => String::new(),
    };

    let files = load_files(paths).await?;

    let client = ScreeningClient::new(config.service_url.clone());
    let mut session = ScreeningSession::new();
    session.set_files(files);
    session.set_job_desc(job_desc);

    println!(
        "Screening {} candidate(s) via {} ...",
        session.files().len(),
        config.service_url
    );

    session.submit(&client).await?;

    if session.results().is_empty() {
        println!("The service returned no results for this batch.");
        return Ok(());
    }

    report::print_ranking_summary(session.results());

    if no_pager || session.results().len() == 1 {
        if let Some(result) = session.active_result() {
            report::print_result_card(
                session.active_index() + 1,
                session.results().len(),
                result,
                session.source_file(result.file_index),
            );
        }
        return Ok(());
    }

    run_pager(&mut session)
}

/// Single-record pager over the ranked results: n/p step with clamping,
/// a number jumps straight to that rank, q leaves.
fn run_pager(session: &mut ScreeningSession) -> Result<()> {
    let stdin = std::io::stdin();
    let total = session.results().len();

    loop {
        let Some(result) = session.active_result() else {
            break;
        };

        report::print_result_card(
            session.active_index() + 1,
            total,
            result,
            session.source_file(result.file_index),
        );

        print!("[n]ext  [p]revious  [1-{}] jump  [q]uit > ", total);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" | "n" | "next" => session.next(),
            "p" | "prev" | "previous" => session.previous(),
            "q" | "quit" => break,
            other => match other.parse::<usize>() {
                Ok(rank) if rank >= 1 => session.jump_to(rank - 1),
                _ => println!("Unrecognized command: {}", other),
            },
        }
    }

    Ok(())
}

async fn check(paths: Vec<PathBuf>) -> Result<()> {
    let files = load_files(paths).await?;

    if files.len() > MAX_BATCH_SIZE {
        println!(
            "❌ {} files selected; at most {} candidate resumes can be processed at once",
            files.len(),
            MAX_BATCH_SIZE
        );
        return Ok(());
    }

    let mut failures = 0;
    for file in &files {
        match ResumeValidator::validate_file(file) {
            Ok(()) => println!("✅ {}", file.name),
            Err(e) => {
                failures += 1;
                println!("❌ {} [{}]. {}", e.message, e.error_type.code(), e.suggestion);
            }
        }
    }

    if failures == 0 {
        println!("{} resume(s) ready for screening", files.len());
    } else {
        println!(
            "{} of {} resume(s) would block the batch; screening is all-or-nothing",
            failures,
            files.len()
        );
    }

    Ok(())
}
