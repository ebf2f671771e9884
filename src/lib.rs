//! Webcam face and eye highlighting with a reference-face presence check.
//!
//! This library wraps a small `OpenCV` pipeline:
//! - Haar cascade detection of faces, and of eyes inside each face
//! - A reference image whose faces are cropped once at startup
//! - A background worker that periodically decides whether faces are present
//!   in both the live frame and the reference image
//! - An overlay with face/eye boxes and a "Match!" / "No Match" status
//!
//! The "match" is a presence test only. No identity comparison is made.
//!
//! # Examples
//!
//! ## Detecting faces and eyes
//!
//! ```no_run
//! use face_match::{config::Config, detection::FaceEyeDetector, overlay};
//! use opencv::{imgcodecs, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut detector = FaceEyeDetector::new(
//!     &config.cascades.face,
//!     config.face_detection.params(),
//!     &config.cascades.eye,
//!     config.eye_detection.params(),
//! )?;
//!
//! let mut image = imgcodecs::imread("group.jpg", imgcodecs::IMREAD_COLOR)?;
//! let regions = detector.detect(&image)?;
//! for region in &regions {
//!     println!("face at {:?} with {} eye(s)", region.face, region.eyes.len());
//! }
//! overlay::draw_faces(&mut image, &regions, config.display.box_thickness)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Background checks
//!
//! ```no_run
//! use face_match::{
//!     checker::FaceCheckWorker, config::Config, detection::CascadeFaceDetector,
//!     matcher::{MatchFlag, MatchStatus}, reference::ReferenceFaces,
//! };
//! use opencv::{core::Mat, videoio, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let mut detector = CascadeFaceDetector::new(&config.cascades.face, config.face_detection.params())?;
//! let reference = ReferenceFaces::load("reference.jpg", &mut detector);
//!
//! let flag = MatchFlag::new();
//! let worker = FaceCheckWorker::spawn(Box::new(detector), reference.len(), flag.clone())?;
//!
//! let mut cap = videoio::VideoCapture::new(0, videoio::CAP_ANY)?;
//! let mut frame = Mat::default();
//! if cap.read(&mut frame)? {
//!     worker.submit(&frame)?;
//! }
//! worker.shutdown();
//!
//! println!("{}", MatchStatus::from_flag(flag.get(), reference.len()).label());
//! # Ok(())
//! # }
//! ```

/// Haar cascade face and eye detection
pub mod detection;

/// Reference image loading and face cropping
pub mod reference;

/// Match decision, shared match flag and displayed status
pub mod matcher;

/// Background face check worker
pub mod checker;

/// Overlay rendering
pub mod overlay;

/// Rectangle utilities
pub mod utils;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
