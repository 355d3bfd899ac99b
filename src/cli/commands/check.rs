//! Check command handler.
//!
//! Runs the content lint and reports issues. Exits nonzero when any issue
//! is found so the check can gate CI.

use crate::cli::args::{CheckArgs, OutputFormat};
use crate::content::validate::check_content;
use crate::error::{BotbookError, ContentError};

/// Run the content integrity checks.
///
/// # Errors
///
/// Returns [`ContentError::IssuesFound`] if any check fails, or a JSON
/// error if the report cannot be serialized.
pub fn run(args: &CheckArgs) -> Result<(), BotbookError> {
    let report = check_content();

    match args.format {
        OutputFormat::Human => {
            for line in report.issue_lines() {
                eprintln!("ERROR: {line}");
            }
            if report.is_clean() {
                eprintln!("content check passed");
            } else {
                eprintln!("\n{} issue(s) found", report.issue_count());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(ContentError::IssuesFound {
            issues: report.issue_count(),
        }
        .into())
    }
}
