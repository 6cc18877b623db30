//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what was produced, not with filesystem mechanics:
//! each language is an entity with a positional index, and every rendered
//! page is an indented `page → path` line under it. Paths are context, not
//! the headline.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Root → index.html
//! Assets → assets/
//! 001 en
//!     index → en/index.html
//!     about → en/about/index.html
//!     assets → en/assets/
//! 002 fr
//!     index → fr/index.html
//!     about → fr/about/index.html
//!     assets → fr/assets/
//!
//! Generated 4 pages across 2 languages: en, fr
//! ```
//!
//! ## Check
//!
//! ```text
//! Languages
//!     001 en
//!     002 fr
//! Pages
//!     001 about
//!     002 index
//! warning: default language 'de' has no translation file: ...
//!
//! Checked 2 languages, 2 pages, 1 warning
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure, no I/O, no side effects.

use crate::generate::{BuildSummary, CheckReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralize a count: `1 page`, `2 pages`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format build output: root artifacts first, then one block per language.
pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Root \u{2192} index.html".to_string());
    if summary.assets_copied {
        lines.push("Assets \u{2192} assets/".to_string());
    }

    for (i, code) in summary.languages.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), code));
        for page in &summary.pages {
            let target = if page == "index" {
                format!("{code}/index.html")
            } else {
                format!("{code}/{page}/index.html")
            };
            lines.push(format!("    {page} \u{2192} {target}"));
        }
        if summary.assets_copied {
            lines.push(format!("    assets \u{2192} {code}/assets/"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} across {}: {}",
        plural(summary.languages.len() * summary.pages.len(), "page"),
        plural(summary.languages.len(), "language"),
        summary.languages.join(", ")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format check output: inventory sections, then warnings, then totals.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Languages".to_string());
    for (i, code) in report.languages.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), code));
    }

    lines.push("Pages".to_string());
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), page));
    }

    for warning in &report.warnings {
        lines.push(format!("warning: {warning}"));
    }

    lines.push(String::new());
    lines.push(format!(
        "Checked {}, {}, {}",
        plural(report.languages.len(), "language"),
        plural(report.pages.len(), "page"),
        plural(report.warnings.len(), "warning"),
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
