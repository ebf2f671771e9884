//! Integration tests against the installed Haar cascades


use face_match::{
    checker::FaceCheckWorker,
    config::Config,
    detection::{CascadeFaceDetector, FaceEyeDetector},
    matcher::MatchFlag,
    reference::ReferenceFaces,
};
use test_helpers::create_test_image;

#[test]
#[ignore = "Requires OpenCV Haar cascade files"]
fn test_blank_frame_has_no_faces() {
    let config = Config::default();
    let mut detector = FaceEyeDetector::new(
        &config.cascades.face,
        config.face_detection.params(),
        &config.cascades.eye,
        config.eye_detection.params(),
    )
    .expect("Failed to load cascades");

    let frame = create_test_image(480, 640).unwrap();
    assert!(detector.detect(&frame).unwrap().is_empty());
}

#[test]
#[ignore = "Requires OpenCV Haar cascade files"]
fn test_blank_reference_never_matches() {
    let config = Config::default();
    let mut detector = CascadeFaceDetector::new(&config.cascades.face, config.face_detection.params())
        .expect("Failed to load face cascade");

    let blank = create_test_image(480, 640).unwrap();
    let reference = ReferenceFaces::from_image("blank", &blank, &mut detector).unwrap();
    assert!(reference.is_empty());

    let flag = MatchFlag::new();
    flag.set(true);
    let worker = FaceCheckWorker::spawn(Box::new(detector), reference.len(), flag.clone()).unwrap();
    worker.submit(&blank).unwrap();
    worker.shutdown();

    assert!(!flag.get());
}
