//! Title checking against a conventional-commit style pattern.

use regex::Regex;

use crate::error::Result;

/// Built-in pattern: `type(scope)!: description` with the standard type list.
pub const DEFAULT_PATTERN: &str = r"^(build|chore|ci|docs|feat|fix|perf|refactor|revert|style|test){1}(\([\w\-\.]+\))?(!)?: ([\w ])+([\s\S]*)";

/// A compiled pattern that accepts titles it matches at offset 0.
#[derive(Debug, Clone)]
pub struct TitleChecker {
    regex: Regex,
}

impl TitleChecker {
    /// Compiles `pattern`, failing if it is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(TitleChecker { regex })
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the pattern matches at the start of `title`.
    ///
    /// The leftmost match starts at 0 whenever any match does, so a pattern
    /// without a leading `^` still gets prefix semantics here.
    pub fn matches(&self, title: &str) -> bool {
        self.regex
            .find(title)
            .is_some_and(|found| found.start() == 0)
    }
}

/// Checks a single title against `pattern`.
///
/// # Arguments
/// * `title` - The pull request title
/// * `pattern` - Regular expression the title must match at its start
///
/// # Returns
/// * `Ok(true)` - If the pattern matches at the start of the title
/// * `Ok(false)` - Otherwise
/// * `Err` - If `pattern` does not compile
pub fn check_pr_title(title: &str, pattern: &str) -> Result<bool> {
    Ok(TitleChecker::new(pattern)?.matches(title))
}
