pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use checker::{check_pr_title, TitleChecker, DEFAULT_PATTERN};
pub use error::{Result, TitleCheckError};
