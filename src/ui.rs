//! Terminal output.
//!
//! stdout carries only the usage text or the resulting version so the tool can
//! be used in scripts; everything else goes to stderr.

use console::{style, StyledObject};

use crate::cli::BumpOutcome;
use crate::domain::BumpLevel;

/// Usage line listing every accepted bump level.
pub fn usage_text() -> String {
    let levels: Vec<&str> = BumpLevel::ALL.iter().map(|l| l.as_str()).collect();
    format!("Usage: versioning [{}]", levels.join("|"))
}

pub fn display_usage() {
    println!("{}", usage_text());
}

/// Print the resulting version in canonical form.
pub fn display_version(outcome: &BumpOutcome) {
    println!("{}", outcome.current);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", error_prefix(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", status_prefix(), message);
}

// Both prefixes go to stderr, so colour support is decided by stderr.
fn error_prefix() -> StyledObject<&'static str> {
    style("ERROR:").for_stderr().red()
}

fn status_prefix() -> StyledObject<&'static str> {
    style("→").for_stderr().yellow()
}

/// Describes a bump that was computed but not written.
pub fn dry_run_summary(outcome: &BumpOutcome) -> String {
    format!(
        "Dry run: {} would change from {} to {}",
        outcome.path.display(),
        outcome.previous,
        outcome.current
    )
}
