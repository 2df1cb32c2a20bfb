//! User interface module - result and error output.
//!
//! - `formatter` - Message formatting and printing

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, display_outcome, format_outcome};
