//! Formatting functions for check output.
//!
//! Message text is built by pure functions so it can be tested without
//! capturing stdout; the `display_*` functions add styling and print.

use console::style;

use crate::cli::orchestration::CheckOutcome;

/// Build the result line for a check, without styling.
///
/// # Examples
///
/// ```ignore
/// // PR 'feat: add widget' title matches the required pattern: ^feat: .+
/// // PR 'added widget' title does not match the required pattern: ^feat: .+
/// ```
pub fn format_outcome(outcome: &CheckOutcome) -> String {
    let verdict = if outcome.matched {
        "matches"
    } else {
        "does not match"
    };
    format!(
        "PR '{}' title {} the required pattern: {}",
        outcome.title, verdict, outcome.pattern
    )
}

/// Print the result line to stdout, green on match and red otherwise.
///
/// Colour is only applied on a terminal; piped output is the bare line.
pub fn display_outcome(outcome: &CheckOutcome) {
    let line = format_outcome(outcome);
    if outcome.matched {
        println!("{}", style(line).green());
    } else {
        println!("{}", style(line).red());
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}
