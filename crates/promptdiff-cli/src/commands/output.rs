//! Shared output formatting for comparison commands

use clap::{Args, ValueEnum};
use promptdiff_core::VersionComparison;

/// Printed in place of the report when both versions render identically
pub const NO_DIFFERENCES: &str = "No differences.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Unified diff only
    Diff,
    /// Change summary only
    Summary,
    /// Full comparison report as JSON
    Json,
    /// Diff, blank line, then summary
    Full,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Full)]
    pub format: OutputFormat,
}

fn summary_or_placeholder(report: &VersionComparison) -> &str {
    if report.is_identical() {
        NO_DIFFERENCES
    } else {
        &report.summary
    }
}

/// Render a comparison report for stdout.
///
/// # Errors
///
/// Fails only if JSON encoding of the report fails.
pub fn render(
    report: &VersionComparison,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let text = match format {
        OutputFormat::Diff => report.diff.join("\n"),
        OutputFormat::Summary => summary_or_placeholder(report).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Full if report.is_identical() => NO_DIFFERENCES.to_string(),
        OutputFormat::Full if report.summary.is_empty() => report.diff.join("\n"),
        OutputFormat::Full => format!("{}\n\n{}", report.diff.join("\n"), report.summary),
    };
    Ok(text)
}
