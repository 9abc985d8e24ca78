//! Human-readable console report. Not machine-parsed.

use std::path::Path;

use pnkstr_report::{EngagementSummary, ExportOutcome};
use pnkstr_xapi::QueryStatus;

use crate::run::QueryReport;

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Formats `n` with comma thousands separators, e.g. `12,345`.
pub(crate) fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub(crate) fn print_banner(title: &str) {
    println!("{}\n{title}\n{}", rule(), rule());
}

pub(crate) fn print_searching(query: &str) {
    println!("\nSearching for: '{query}'");
}

pub(crate) fn print_query_status(query: &str, status: &QueryStatus) {
    println!("{}", render_query_status(query, status));
}

pub(crate) fn render_query_status(query: &str, status: &QueryStatus) -> String {
    match status {
        QueryStatus::Found(n) => format!("  Found {n} posts"),
        QueryStatus::Empty => format!("  No posts found for '{query}'"),
        QueryStatus::Failed(reason) => format!("  Error: {reason}"),
    }
}

pub(crate) fn print_summary(summary: Option<&EngagementSummary>) {
    match summary {
        Some(summary) => println!("{}", render_summary(summary)),
        None => println!("\nNo posts to analyze"),
    }
}

pub(crate) fn render_summary(s: &EngagementSummary) -> String {
    let mut out = format!(
        "\n{rule}\nENGAGEMENT METRICS SUMMARY\n{rule}\n\
         \nTotal Posts: {count}\n\
         \nTotal Engagement:\n\
         \x20 Likes:       {likes}\n\
         \x20 Retweets:    {retweets}\n\
         \x20 Replies:     {replies}\n\
         \x20 Quotes:      {quotes}\n\
         \x20 Impressions: {impressions}\n\
         \nAverage per Post:\n\
         \x20 Likes:       {avg_likes:.1}\n\
         \x20 Retweets:    {avg_retweets:.1}\n\
         \x20 Replies:     {avg_replies:.1}\n\
         \nTop {top} Most Engaged Posts:",
        rule = rule(),
        count = s.count,
        likes = format_thousands(s.total_likes),
        retweets = format_thousands(s.total_retweets),
        replies = format_thousands(s.total_replies),
        quotes = format_thousands(s.total_quotes),
        impressions = format_thousands(s.total_impressions),
        avg_likes = s.avg_likes,
        avg_retweets = s.avg_retweets,
        avg_replies = s.avg_replies,
        top = s.top.len(),
    );
    for (rank, post) in s.top.iter().enumerate() {
        out.push_str(&format!(
            "\n\n{}. @{} ({} total engagement)\n   {}...\n   likes {}  retweets {}  replies {}",
            rank + 1,
            post.username,
            format_thousands(post.total_engagement),
            post.text_preview,
            post.likes,
            post.retweets,
            post.replies
        ));
    }
    out
}

pub(crate) fn print_export(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Skipped => println!("\nNo posts to save"),
        ExportOutcome::Written { path, rows } => {
            println!("\nSaved {rows} posts to: {}", path.display());
        }
    }
}

pub(crate) fn print_query_table(queries: &[QueryReport]) {
    println!("{}", render_query_table(queries));
}

/// One line per query: status, record count, and the failure reason if any.
pub(crate) fn render_query_table(queries: &[QueryReport]) -> String {
    let mut out = String::from("\nPer-query status:");
    for q in queries {
        out.push_str(&format!(
            "\n  [{:<6}] {:>3} records  {}",
            q.status.label(),
            q.records,
            q.query
        ));
        if let QueryStatus::Failed(reason) = &q.status {
            out.push_str(&format!("  ({reason})"));
        }
    }
    out
}

pub(crate) fn print_usage(calls: u64, log_path: &Path) {
    println!("\n{}\nAPI USAGE SUMMARY\n{}", rule(), rule());
    println!("\nTotal API Calls: {calls}");
    println!("Log file: {}", log_path.display());
    println!("\nCost Tracking: check console.x.com for PPU charges");
    println!("\n{}", rule());
}
