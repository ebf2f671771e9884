//! Configuration file tests

use face_match::{
    config::{Config, EXAMPLE_CONFIG},
    Error,
};
use std::io::Write;

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("face-match.yaml");

    let mut config = Config::default();
    config.matching.check_interval = 3;
    config.camera.index = 2;
    config.display.window_title = "Test".to_string();
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.matching.check_interval, 3);
    assert_eq!(loaded.camera.index, 2);
    assert_eq!(loaded.display.window_title, "Test");
    assert_eq!(loaded.eye_detection.scale_factor, config.eye_detection.scale_factor);
}

#[test]
fn test_missing_config_file() {
    match Config::from_file("no/such/config.yaml") {
        Err(Error::IoError(_)) => {}
        other => panic!("Expected IoError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_invalid_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "matching: [not, a, map").unwrap();

    match Config::from_file(file.path()) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("parse")),
        other => panic!("Expected ConfigError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_validate_reports_missing_cascade() {
    let mut config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
    config.cascades.face = "no/such/face.xml".into();

    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Face cascade")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_validate_ignores_missing_reference() {
    let dir = tempfile::tempdir().unwrap();
    let face = dir.path().join("face.xml");
    let eye = dir.path().join("eye.xml");
    std::fs::write(&face, "<opencv_storage/>").unwrap();
    std::fs::write(&eye, "<opencv_storage/>").unwrap();

    let mut config = Config::default();
    config.cascades.face = face;
    config.cascades.eye = eye;
    config.reference.path = dir.path().join("missing.jpg");

    assert!(config.validate().is_ok());
}
