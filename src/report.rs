// src/report.rs
//! Score presentation and result card rendering

use crate::types::{CandidateFile, CandidateResult};

/// Four-tier color band for the score gauge. Lower bounds are inclusive:
/// 40, 60 and 80 each map to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
    Poor,
}

impl MatchStrength {
    pub fn for_score(score: i64) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Moderate
        } else if score >= 40 {
            Self::Weak
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Poor => "poor",
        }
    }
}

/// Five-tier verdict label. The banding is independent of the four color
/// tiers; the overlap at 80, 60 and 40 is intentional.
pub fn score_label(score: i64) -> &'static str {
    if score >= 90 {
        "Perfect Match"
    } else if score >= 80 {
        "Excellent Fit"
    } else if score >= 70 {
        "Good Match"
    } else if score >= 60 {
        "Potential Fit"
    } else if score >= 40 {
        "Weak Match"
    } else {
        "Poor Fit"
    }
}

/// Clamp for the visual gauge only. The stored score is never altered and
/// keeps participating in sorting unclamped.
pub fn gauge_score(score: i64) -> i64 {
    score.clamp(1, 100)
}

/// Generic guidance shown whenever a candidate's resume could not be
/// analyzed, in addition to the service's own error text.
pub const TROUBLESHOOTING_HINTS: [&str; 4] = [
    "Resume format may not be readable (try requesting PDF/TXT)",
    "File might be corrupted or password-protected",
    "Resume contains only images/scanned text",
    "Contact candidate for alternative format",
];

/// Candidate display name: the file name without its resume extension
pub fn display_name(file_name: &str) -> &str {
    let lower_name = file_name.to_lowercase();
    for ext in [".pdf", ".txt"] {
        if lower_name.ends_with(ext) {
            return &file_name[..file_name.len() - ext.len()];
        }
    }
    file_name
}

/// One-line-per-candidate overview of the ranked result set
pub fn print_ranking_summary(results: &[CandidateResult]) {
    println!(
        "🎯 Candidate Rankings: {} candidate(s), sorted by job match score",
        results.len()
    );
    for (position, result) in results.iter().enumerate() {
        if result.analysis.success {
            println!(
                "  {:>2}. {:<32} {:>3}  {}",
                position + 1,
                display_name(&result.file_name),
                result.analysis.score,
                score_label(result.analysis.score)
            );
        } else {
            println!(
                "  {:>2}. {:<32}   —  analysis failed",
                position + 1,
                display_name(&result.file_name)
            );
        }
    }
}

/// Full single-candidate card. A failed analysis renders the service's
/// error and the troubleshooting hints; never score, skills or summary.
pub fn print_result_card(
    rank: usize,
    total: usize,
    result: &CandidateResult,
    source: Option<&CandidateFile>,
) {
    println!();
    println!(
        "👤 Candidate {} of {}: {}",
        rank,
        total,
        display_name(&result.file_name)
    );
    if let Some(file) = source {
        println!("   {:.1} KB • {}", file.size_kb(), file.kind_label());
    }

    if result.analysis.success {
        let score = result.analysis.score;
        println!(
            "   Match score: {}/100 ({} match, {})",
            gauge_score(score),
            MatchStrength::for_score(score).label(),
            score_label(score)
        );

        if !result.analysis.skills.is_empty() {
            println!("   Relevant skills:");
            for skill in result.analysis.skills.values() {
                println!("     - {}", skill);
            }
        }

        if !result.analysis.summary.is_empty() {
            println!("   Assessment: {}", result.analysis.summary);
        }
    } else {
        println!("   ❌ Cannot process this candidate's resume");
        if let Some(error) = &result.analysis.error {
            println!("   Error: {}", error);
        }
        for hint in TROUBLESHOOTING_HINTS {
            println!("   • {}", hint);
        }
    }
}
