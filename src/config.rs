use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::checker::DEFAULT_PATTERN;
use crate::error::{Result, TitleCheckError};

/// Optional settings for pr-title-check.
///
/// Every field is optional; an empty file is equivalent to the defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Pattern used when none is given on the command line.
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Where the effective pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource {
    CommandLine,
    ConfigFile,
    BuiltIn,
}

impl fmt::Display for PatternSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSource::CommandLine => write!(f, "command line"),
            PatternSource::ConfigFile => write!(f, "config file"),
            PatternSource::BuiltIn => write!(f, "built-in default"),
        }
    }
}

impl Config {
    /// Picks the pattern to check against.
    ///
    /// A pattern from the command line wins over the config file, which
    /// wins over [`DEFAULT_PATTERN`].
    pub fn resolve_pattern(&self, cli_pattern: Option<&str>) -> (String, PatternSource) {
        if let Some(pattern) = cli_pattern {
            (pattern.to_string(), PatternSource::CommandLine)
        } else if let Some(pattern) = &self.pattern {
            (pattern.clone(), PatternSource::ConfigFile)
        } else {
            (DEFAULT_PATTERN.to_string(), PatternSource::BuiltIn)
        }
    }
}

/// Loads configuration from an explicitly given file, or returns defaults.
///
/// No file is read unless `config_path` is given, so a plain run always
/// checks against [`DEFAULT_PATTERN`] or the command line pattern.
///
/// # Arguments
/// * `config_path` - Optional path to a custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the given file cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match config_path {
        Some(path) => {
            tracing::debug!(path, "loading config file");
            load_config_from(Path::new(path))
        }
        None => {
            tracing::debug!("no config file given, using defaults");
            Ok(Config::default())
        }
    }
}

fn load_config_from(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path)?;
    toml::from_str(&config_str)
        .map_err(|e| TitleCheckError::config(format!("{}: {}", path.display(), e)))
}
