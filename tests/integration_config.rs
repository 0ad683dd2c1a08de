//! Integration tests for loading scorer configuration from disk.

use plate_similarity::core::scorer::{ScoreWeights, ScorerConfig};
use plate_similarity::error::ConfigError;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("scorer.json");
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loads_weights_and_threshold() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{ "weights": { "sequence": 0.5, "edit": 0.5 }, "match_threshold": 0.8 }"#,
    );

    let config = ScorerConfig::from_json_file(&path).unwrap();
    assert_eq!(config.weights, ScoreWeights::new(0.5, 0.5));

    let scorer = config.build().unwrap();
    assert_eq!(scorer.match_threshold(), 0.8);
}

#[test]
fn empty_object_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{}");

    let config = ScorerConfig::from_json_file(&path).unwrap();
    assert_eq!(config, ScorerConfig::default());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = ScorerConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ weights: ");

    let err = ScorerConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed { .. }));
}

#[test]
fn invalid_values_fail_at_build() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "weights": { "sequence": 0.0, "edit": 0.0 } }"#);

    let config = ScorerConfig::from_json_file(&path).unwrap();
    assert!(matches!(config.build().unwrap_err(), ConfigError::ZeroWeights));
}
