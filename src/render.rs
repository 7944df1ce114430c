//! Terminal presentation of a [`Report`].

use crate::report::Report;
use crate::scoring::{MAX_DIMENSION_SCORE, MAX_TOTAL_SCORE};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Text progress bar for a score out of `max`.
pub fn progress_bar(score: u8, max: u8) -> String {
    let filled = if max == 0 {
        0
    } else {
        (usize::from(score.min(max)) * BAR_WIDTH) / usize::from(max)
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Scores, total and reputation search links, ready to print.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "E-E-A-T Scores for {}", report.url);
    for (label, score) in report.scores.dimensions() {
        let _ = writeln!(
            out,
            "  {label:<18} {} {score}/{MAX_DIMENSION_SCORE}",
            progress_bar(score, MAX_DIMENSION_SCORE)
        );
    }
    let _ = writeln!(
        out,
        "Total E-E-A-T Score: {}/{MAX_TOTAL_SCORE}",
        report.scores.total
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Domain Authority Estimate: {} ({})",
        report.domain_authority, report.domain
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "SERP Reputation Checks");
    for (label, link) in &report.reputation_links {
        let _ = writeln!(out, "  {label} Search: {link}");
    }

    out
}
