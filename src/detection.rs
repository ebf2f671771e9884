//! Haar cascade face and eye detection.

use crate::utils::clip_rect;
use crate::{Error, Result};
use log::debug;
use opencv::{
    core::{Mat, Rect, Size, Vector},
    imgproc,
    objdetect::CascadeClassifier,
    prelude::*,
};
use std::path::Path;

/// Parameters for a multi-scale cascade pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    /// Image pyramid scale step
    pub scale_factor: f64,
    /// Neighbouring detections needed to keep a candidate
    pub min_neighbors: i32,
    /// Smallest object side in pixels (0 for no limit)
    pub min_size: i32,
}

/// A detected face and the eyes found inside it, in frame coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRegion {
    /// Face bounding box
    pub face: Rect,
    /// Eye bounding boxes
    pub eyes: Vec<Rect>,
}

/// Anything that can count faces in a frame.
///
/// The reference loader and the background checker only need face boxes, so
/// they work against this trait rather than a concrete cascade.
pub trait FaceDetector: Send {
    /// Detect faces in a BGR or grayscale frame
    fn detect_faces(&mut self, frame: &Mat) -> Result<Vec<Rect>>;
}

/// Convert a BGR frame to grayscale; grayscale input is copied as is
pub fn to_grayscale(frame: &Mat) -> Result<Mat> {
    match frame.channels() {
        1 => Ok(frame.try_clone()?),
        3 => {
            let mut gray = Mat::default();
            imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
            Ok(gray)
        }
        4 => {
            let mut gray = Mat::default();
            imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGRA2GRAY, 0)?;
            Ok(gray)
        }
        n => Err(Error::InvalidInput(format!("Unsupported channel count: {n}"))),
    }
}

/// Translate an eye box found in a face ROI back to frame coordinates
///
/// The result is clipped to the face and to the frame; `None` if nothing is left.
#[must_use]
pub fn eye_to_frame(face: Rect, eye: Rect, frame_width: i32, frame_height: i32) -> Option<Rect> {
    let local = clip_rect(eye, face.width, face.height)?;
    let shifted = Rect::new(face.x + local.x, face.y + local.y, local.width, local.height);
    clip_rect(shifted, frame_width, frame_height)
}

/// A loaded cascade classifier with its detection parameters
pub struct Cascade {
    classifier: CascadeClassifier,
    params: DetectionParams,
}

impl Cascade {
    /// Load a cascade classifier from an `OpenCV` XML file
    pub fn load<P: AsRef<Path>>(path: P, params: DetectionParams) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ModelError(format!("Cascade file not found: {}", path.display())));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| Error::ModelError(format!("Cascade path is not valid UTF-8: {}", path.display())))?;
        let classifier = CascadeClassifier::new(path_str)?;
        if classifier.empty()? {
            return Err(Error::ModelError(format!("Failed to load cascade: {}", path.display())));
        }

        debug!("Loaded cascade {}", path.display());
        Ok(Self { classifier, params })
    }

    /// Run the cascade over a grayscale image
    pub fn detect(&mut self, gray: &Mat) -> Result<Vec<Rect>> {
        let mut objects = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            gray,
            &mut objects,
            self.params.scale_factor,
            self.params.min_neighbors,
            0,
            Size::new(self.params.min_size, self.params.min_size),
            Size::default(),
        )?;
        Ok(objects.to_vec())
    }
}

/// Face-only detector used for the reference image and background checks
pub struct CascadeFaceDetector {
    face: Cascade,
}

impl CascadeFaceDetector {
    /// Load the face cascade
    pub fn new<P: AsRef<Path>>(face_cascade: P, params: DetectionParams) -> Result<Self> {
        Ok(Self {
            face: Cascade::load(face_cascade, params)?,
        })
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect_faces(&mut self, frame: &Mat) -> Result<Vec<Rect>> {
        let gray = to_grayscale(frame)?;
        self.face.detect(&gray)
    }
}

/// Face detector with a second pass for eyes inside every face
pub struct FaceEyeDetector {
    face: Cascade,
    eyes: Cascade,
}

impl FaceEyeDetector {
    /// Load both cascades
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        face_cascade: P,
        face_params: DetectionParams,
        eye_cascade: Q,
        eye_params: DetectionParams,
    ) -> Result<Self> {
        Ok(Self {
            face: Cascade::load(face_cascade, face_params)?,
            eyes: Cascade::load(eye_cascade, eye_params)?,
        })
    }

    /// Detect faces and the eyes inside each of them
    pub fn detect(&mut self, frame: &Mat) -> Result<Vec<FaceRegion>> {
        let gray = to_grayscale(frame)?;
        let faces = self.face.detect(&gray)?;

        let mut regions = Vec::with_capacity(faces.len());
        for face in faces {
            let Some(face) = clip_rect(face, gray.cols(), gray.rows()) else {
                continue;
            };

            let face_gray = Mat::roi(&gray, face)?.try_clone()?;
            let eyes = self
                .eyes
                .detect(&face_gray)?
                .into_iter()
                .filter_map(|eye| eye_to_frame(face, eye, gray.cols(), gray.rows()))
                .collect();

            regions.push(FaceRegion { face, eyes });
        }

        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rect_within;
    use opencv::core::{CV_8UC1, CV_8UC3};

    #[test]
    fn test_to_grayscale_converts_bgr() {
        let frame = Mat::zeros(48, 64, CV_8UC3).unwrap().to_mat().unwrap();
        let gray = to_grayscale(&frame).unwrap();

        assert_eq!(gray.channels(), 1);
        assert_eq!(gray.rows(), 48);
        assert_eq!(gray.cols(), 64);
    }

    #[test]
    fn test_to_grayscale_keeps_gray() {
        let frame = Mat::zeros(10, 20, CV_8UC1).unwrap().to_mat().unwrap();
        let gray = to_grayscale(&frame).unwrap();

        assert_eq!(gray.channels(), 1);
        assert_eq!(gray.cols(), 20);
    }

    #[test]
    fn test_eye_to_frame_shifts_by_face_origin() {
        let face = Rect::new(100, 50, 80, 80);
        let eye = eye_to_frame(face, Rect::new(5, 5, 20, 10), 640, 480).unwrap();

        assert_eq!(eye, Rect::new(105, 55, 20, 10));
        assert!(rect_within(eye, 640, 480));
        assert!(eye.x >= face.x && eye.y >= face.y);
        assert!(eye.x + eye.width <= face.x + face.width);
        assert!(eye.y + eye.height <= face.y + face.height);
    }

    #[test]
    fn test_eye_to_frame_clips_to_face_and_frame() {
        let face = Rect::new(600, 440, 40, 40);

        let eye = eye_to_frame(face, Rect::new(30, 30, 20, 20), 640, 480).unwrap();
        assert_eq!(eye, Rect::new(630, 470, 10, 10));
        assert!(rect_within(eye, 640, 480));

        assert_eq!(eye_to_frame(face, Rect::new(50, 0, 10, 10), 640, 480), None);
    }

    #[test]
    fn test_missing_cascade_is_model_error() {
        let params = DetectionParams {
            scale_factor: 1.3,
            min_neighbors: 5,
            min_size: 0,
        };

        match Cascade::load("does/not/exist.xml", params) {
            Err(Error::ModelError(msg)) => assert!(msg.contains("not found")),
            Err(e) => panic!("Expected ModelError, got {e}"),
            Ok(_) => panic!("Expected ModelError"),
        }
    }
}
