//! Content integrity checks.
//!
//! The render path never validates anything — the tables are constants and
//! rendering cannot fail. These checks exist for the `check` command and the
//! test suite: they catch editing mistakes in the tables (duplicate display
//! keys, empty lists, malformed resource URLs) before a page ships.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::content::{ARCHITECTURE_TIPS, LAUNCH_CHECKLIST, RESOURCE_LINKS, STEPS};

/// A resource link whose href failed the absolute-URL check.
#[derive(Debug, Clone, Serialize)]
pub struct LinkIssue {
    /// Title of the offending resource card.
    pub title: String,
    /// The href as declared in the table.
    pub href: String,
    /// Why it was rejected.
    pub reason: String,
}

impl fmt::Display for LinkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid link '{}' ({}): {}", self.href, self.title, self.reason)
    }
}

/// Result of checking the content tables.
#[derive(Debug, Default, Serialize)]
pub struct ContentReport {
    /// Step titles declared more than once.
    pub duplicate_step_titles: Vec<String>,
    /// Architecture tip titles declared more than once.
    pub duplicate_tip_titles: Vec<String>,
    /// Titles of steps or tips with no detail/bullet lines.
    pub empty_lists: Vec<String>,
    /// Resource hrefs that are not well-formed absolute URLs.
    pub invalid_links: Vec<LinkIssue>,
}

impl ContentReport {
    /// Returns `true` if there are no issues.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    /// Total number of issues across all categories.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.duplicate_step_titles.len()
            + self.duplicate_tip_titles.len()
            + self.empty_lists.len()
            + self.invalid_links.len()
    }

    /// One human-readable line per issue, in report order.
    #[must_use]
    pub fn issue_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for title in &self.duplicate_step_titles {
            lines.push(format!("duplicate step title: {title}"));
        }
        for title in &self.duplicate_tip_titles {
            lines.push(format!("duplicate tip title: {title}"));
        }
        for title in &self.empty_lists {
            lines.push(format!("empty detail list: {title}"));
        }
        for issue in &self.invalid_links {
            lines.push(issue.to_string());
        }
        lines
    }
}

/// Check every content table and collect issues.
///
/// The launch checklist has no per-item structure to verify beyond being
/// non-empty, which is reported under `empty_lists`.
#[must_use]
pub fn check_content() -> ContentReport {
    let mut report = ContentReport::default();

    let mut seen = HashSet::new();
    for step in STEPS {
        if !seen.insert(step.title) {
            report.duplicate_step_titles.push(step.title.to_string());
        }
        if step.details.is_empty() {
            report.empty_lists.push(step.title.to_string());
        }
    }

    let mut seen = HashSet::new();
    for tip in ARCHITECTURE_TIPS {
        if !seen.insert(tip.title) {
            report.duplicate_tip_titles.push(tip.title.to_string());
        }
        if tip.bullets.is_empty() {
            report.empty_lists.push(tip.title.to_string());
        }
    }

    if LAUNCH_CHECKLIST.is_empty() {
        report.empty_lists.push("Launch Checklist".to_string());
    }

    for link in RESOURCE_LINKS {
        if let Some(reason) = absolute_url_problem(link.href) {
            report.invalid_links.push(LinkIssue {
                title: link.title.to_string(),
                href: link.href.to_string(),
                reason,
            });
        }
    }

    report
}

/// Returns why `href` is not a well-formed absolute http(s) URL, or `None`
/// if it is fine.
fn absolute_url_problem(href: &str) -> Option<String> {
    match Url::parse(href) {
        Err(e) => Some(e.to_string()),
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                Some(format!("unexpected scheme '{}'", url.scheme()))
            } else if url.host_str().is_none() {
                Some("missing host".to_string())
            } else {
                None
            }
        }
    }
}
