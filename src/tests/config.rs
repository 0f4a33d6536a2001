use super::Config;
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_toml_gives_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = Config::from_toml("wrap_width = 72\nembed_videos = false").unwrap();
    assert_eq!(config.wrap_width, 72);
    assert!(!config.embed_videos);
    assert_eq!(config.file_extensions, ["md", "txt"]);
    assert!(config.pretty_json);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "file_extensions = [\"content\"]").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.file_extensions, ["content"]);
    assert_eq!(config.wrap_width, 100);
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = Config::from_toml("wrap_width = \"wide\"").unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}
