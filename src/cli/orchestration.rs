//! Check workflow orchestration
//!
//! Keeps pattern resolution and matching out of main.rs so the workflow
//! can be driven without clap.

use anyhow::{Context, Result};

use crate::checker::TitleChecker;
use crate::config::{self, Config};

/// Arguments for the check workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Pull request title to validate
    pub title: String,

    /// Pattern given on the command line, overriding everything else
    pub pattern: Option<String>,

    /// Path to custom config file
    pub config_path: Option<String>,
}

/// Result of one title check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// The title that was checked
    pub title: String,

    /// The pattern it was checked against
    pub pattern: String,

    /// Whether the pattern matched at the start of the title
    pub matched: bool,
}

/// Load config from disk and run the check.
pub fn run_check(args: CheckArgs) -> Result<CheckOutcome> {
    let config = config::load_config(args.config_path.as_deref())
        .context("Failed to load configuration")?;
    run_check_with_config(args, &config)
}

/// Run the check with an already loaded config.
///
/// Fails if the resolved pattern is not a valid regular expression.
pub fn run_check_with_config(args: CheckArgs, config: &Config) -> Result<CheckOutcome> {
    let (pattern, source) = config.resolve_pattern(args.pattern.as_deref());
    tracing::debug!(%pattern, %source, "resolved pattern");

    let checker = TitleChecker::new(&pattern)
        .with_context(|| format!("Pattern from {} does not compile", source))?;
    let matched = checker.matches(&args.title);
    tracing::debug!(title = %args.title, matched, "checked title");

    Ok(CheckOutcome {
        title: args.title,
        pattern,
        matched,
    })
}
