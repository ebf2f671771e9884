//! Reference image loading.

use crate::detection::FaceDetector;
use crate::utils::clip_rect;
use crate::{Error, Result};
use log::{error, info, warn};
use opencv::{core::Mat, imgcodecs, prelude::*};
use std::path::{Path, PathBuf};

/// Faces cropped from the reference image
#[derive(Default)]
pub struct ReferenceFaces {
    source: PathBuf,
    crops: Vec<Mat>,
}

impl ReferenceFaces {
    /// Build from already cropped faces
    #[must_use]
    pub fn from_crops<P: Into<PathBuf>>(source: P, crops: Vec<Mat>) -> Self {
        Self {
            source: source.into(),
            crops,
        }
    }

    /// Read the reference image and crop every detected face out of it
    ///
    /// # Errors
    ///
    /// Returns `ReferenceNotFound` when the image cannot be read, or the
    /// detector's error when detection fails.
    pub fn try_load<P: AsRef<Path>>(path: P, detector: &mut dyn FaceDetector) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::InvalidInput(format!("Path is not valid UTF-8: {}", path.display())))?;

        let image = imgcodecs::imread(path_str, imgcodecs::IMREAD_COLOR)?;
        if image.empty() {
            return Err(Error::ReferenceNotFound(path.display().to_string()));
        }

        Self::from_image(path, &image, detector)
    }

    /// Crop every detected face out of an in-memory reference image
    pub fn from_image<P: Into<PathBuf>>(source: P, image: &Mat, detector: &mut dyn FaceDetector) -> Result<Self> {
        let faces = detector.detect_faces(image)?;

        let mut crops = Vec::with_capacity(faces.len());
        for face in faces {
            if let Some(face) = clip_rect(face, image.cols(), image.rows()) {
                crops.push(Mat::roi(image, face)?.try_clone()?);
            }
        }

        Ok(Self::from_crops(source, crops))
    }

    /// Load the reference faces, falling back to an empty set on any error
    ///
    /// With no reference faces the match flag can never become true.
    pub fn load<P: AsRef<Path>>(path: P, detector: &mut dyn FaceDetector) -> Self {
        let path = path.as_ref();
        match Self::try_load(path, detector) {
            Ok(reference) => {
                info!("Loaded {} reference face(s)", reference.len());
                reference
            }
            Err(Error::ReferenceNotFound(_)) => {
                warn!(
                    "{} not found. Place the reference image in the working directory",
                    path.display()
                );
                Self::from_crops(path, Vec::new())
            }
            Err(e) => {
                error!("Error loading reference: {}", e);
                Self::from_crops(path, Vec::new())
            }
        }
    }

    /// Number of reference faces
    #[must_use]
    pub fn len(&self) -> usize {
        self.crops.len()
    }

    /// Whether no reference face was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Cropped faces
    #[must_use]
    pub fn crops(&self) -> &[Mat] {
        &self.crops
    }

    /// Image the faces were cropped from
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}
