//! Match flag properties observed through the background worker


use face_match::{
    checker::FaceCheckWorker,
    detection::FaceDetector,
    matcher::{MatchFlag, MatchStatus},
    Result,
};
use opencv::core::{Mat, Rect};
use std::sync::mpsc;
use std::time::Duration;
use test_helpers::{create_test_image, FailingDetector, FixedFaces};

/// Run one check and return the resulting flag value
fn check_once(detector: Box<dyn FaceDetector>, reference_faces: usize, initial: bool) -> bool {
    let flag = MatchFlag::new();
    flag.set(initial);

    let worker = FaceCheckWorker::spawn(detector, reference_faces, flag.clone()).unwrap();
    let frame = create_test_image(48, 64).unwrap();
    assert!(worker.submit(&frame).unwrap());
    worker.shutdown();

    flag.get()
}

#[test]
fn test_faces_on_both_sides_match() {
    assert!(check_once(Box::new(FixedFaces::count(1)), 1, false));
    assert!(check_once(Box::new(FixedFaces::count(3)), 2, false));
}

#[test]
fn test_no_reference_faces_never_match() {
    for frame_faces in 0..4 {
        assert!(!check_once(Box::new(FixedFaces::count(frame_faces)), 0, true));
    }
}

#[test]
fn test_no_frame_faces_never_match() {
    for reference_faces in 0..4 {
        assert!(!check_once(Box::new(FixedFaces::count(0)), reference_faces, true));
    }
}

#[test]
fn test_detection_error_forces_no_match() {
    assert!(!check_once(Box::new(FailingDetector), 1, true));
}

#[test]
fn test_overlay_status_follows_flag_and_reference() {
    for flag in [false, true] {
        for reference_faces in 0..3 {
            let status = MatchStatus::from_flag(flag, reference_faces);
            let expected = if flag && reference_faces > 0 { "Match!" } else { "No Match" };
            assert_eq!(status.label(), expected);
        }
    }
}

/// Detector that reports when a check starts and blocks until released
struct GatedDetector {
    started: mpsc::Sender<()>,
    release: mpsc::Receiver<()>,
}

impl FaceDetector for GatedDetector {
    fn detect_faces(&mut self, _frame: &Mat) -> Result<Vec<Rect>> {
        let _ = self.started.send(());
        let _ = self.release.recv();
        Ok(vec![Rect::new(0, 0, 4, 4)])
    }
}

#[test]
fn test_pending_check_drops_frames() {
    let (started_tx, started_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let detector = GatedDetector {
        started: started_tx,
        release: release_rx,
    };

    let flag = MatchFlag::new();
    let worker = FaceCheckWorker::spawn(Box::new(detector), 1, flag.clone()).unwrap();
    let frame = create_test_image(48, 64).unwrap();

    // First frame is being checked, second waits in the queue, the rest are dropped
    assert!(worker.submit(&frame).unwrap());
    started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(worker.submit(&frame).unwrap());
    assert!(!worker.submit(&frame).unwrap());
    assert!(!worker.submit(&frame).unwrap());

    release_tx.send(()).unwrap();
    release_tx.send(()).unwrap();
    worker.shutdown();

    assert!(flag.get());
    // Exactly two checks ran
    assert_eq!(started_rx.try_iter().count(), 1);
}

#[test]
fn test_worker_joined_on_drop() {
    let flag = MatchFlag::new();
    {
        let worker = FaceCheckWorker::spawn(Box::new(FixedFaces::count(2)), 1, flag.clone()).unwrap();
        let frame = create_test_image(16, 16).unwrap();
        worker.submit(&frame).unwrap();
    }
    assert!(flag.get());
}
