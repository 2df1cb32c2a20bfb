// tests/config_test.rs
use pr_title_check::config::{load_config, Config};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config_has_no_pattern() {
    let config = Config::default();
    assert_eq!(config.pattern, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
pattern = "^(feat|fix)(\\(\\w+\\))?: .+"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.pattern.as_deref(), Some(r"^(feat|fix)(\(\w+\))?: .+"));
}

#[test]
fn test_load_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"pattern = [1, 2").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_config_in_working_directory_ignored_without_explicit_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prtitle.toml"), "pattern = \"^release\"\n").unwrap();

    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap(), Config::default());
}

#[test]
#[serial]
fn test_malformed_file_in_working_directory_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prtitle.toml"), "[tool]\nname = 1\n").unwrap();

    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().pattern, None);
}
