//! Configuration management for the face match application

use crate::constants::{
    BOX_THICKNESS, DEFAULT_CASCADE_DIR, DEFAULT_CHECK_INTERVAL, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
    DEFAULT_REFERENCE_IMAGE, EYE_CASCADE_FILE, EYE_MIN_NEIGHBORS, EYE_SCALE_FACTOR, FACE_CASCADE_FILE,
    FACE_MIN_NEIGHBORS, FACE_SCALE_FACTOR, STATUS_BASELINE_OFFSET, STATUS_FONT_SCALE, STATUS_TEXT_MARGIN,
    STATUS_TEXT_THICKNESS, WINDOW_TITLE,
};
use crate::detection::DetectionParams;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cascade classifier files
    pub cascades: CascadeConfig,

    /// Face cascade parameters
    pub face_detection: DetectionConfig,

    /// Eye cascade parameters
    pub eye_detection: DetectionConfig,

    /// Capture device settings
    pub camera: CameraConfig,

    /// Reference image settings
    pub reference: ReferenceConfig,

    /// Background check settings
    pub matching: MatchingConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

/// Haar cascade file paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeConfig {
    /// Frontal face cascade XML
    pub face: PathBuf,

    /// Eye cascade XML
    pub eye: PathBuf,
}

/// Parameters passed to `detectMultiScale`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Image pyramid scale step, must be greater than 1.0
    pub scale_factor: f64,

    /// Neighbouring detections needed to keep a candidate
    pub min_neighbors: i32,

    /// Smallest object side in pixels (0 for no limit)
    pub min_size: i32,
}

/// Capture device configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera index
    pub index: i32,

    /// Requested frame width
    pub width: i32,

    /// Requested frame height
    pub height: i32,
}

/// Reference image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Image compared against the live frames
    pub path: PathBuf,
}

/// Background check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Frames between two background checks
    pub check_interval: u32,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Window title
    pub window_title: String,

    /// Status text font scale
    pub font_scale: f64,

    /// Status text stroke thickness
    pub text_thickness: i32,

    /// Face and eye rectangle thickness
    pub box_thickness: i32,

    /// Distance of the status text from the left edge
    pub text_margin: i32,

    /// Distance of the status text baseline from the bottom edge
    pub text_baseline_offset: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cascades: CascadeConfig::default(),
            face_detection: DetectionConfig::face(),
            eye_detection: DetectionConfig::eye(),
            camera: CameraConfig::default(),
            reference: ReferenceConfig::default(),
            matching: MatchingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        let dir = Path::new(DEFAULT_CASCADE_DIR);
        Self {
            face: dir.join(FACE_CASCADE_FILE),
            eye: dir.join(EYE_CASCADE_FILE),
        }
    }
}

impl DetectionConfig {
    /// Defaults used for the face cascade
    #[must_use]
    pub fn face() -> Self {
        Self {
            scale_factor: FACE_SCALE_FACTOR,
            min_neighbors: FACE_MIN_NEIGHBORS,
            min_size: 0,
        }
    }

    /// Defaults used for the eye cascade
    #[must_use]
    pub fn eye() -> Self {
        Self {
            scale_factor: EYE_SCALE_FACTOR,
            min_neighbors: EYE_MIN_NEIGHBORS,
            min_size: 0,
        }
    }

    /// Convert to detector parameters
    #[must_use]
    pub fn params(&self) -> DetectionParams {
        DetectionParams {
            scale_factor: self.scale_factor,
            min_neighbors: self.min_neighbors,
            min_size: self.min_size,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.scale_factor.is_nan() || self.scale_factor <= 1.0 {
            return Err(Error::ConfigError(format!(
                "{name} scale factor must be greater than 1.0"
            )));
        }
        if self.min_neighbors < 0 {
            return Err(Error::ConfigError(format!("{name} min neighbors must not be negative")));
        }
        if self.min_size < 0 {
            return Err(Error::ConfigError(format!("{name} min size must not be negative")));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REFERENCE_IMAGE),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            font_scale: STATUS_FONT_SCALE,
            text_thickness: STATUS_TEXT_THICKNESS,
            box_thickness: BOX_THICKNESS,
            text_margin: STATUS_TEXT_MARGIN,
            text_baseline_offset: STATUS_BASELINE_OFFSET,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate parameters without touching the filesystem
    pub fn validate_values(&self) -> Result<()> {
        self.face_detection.validate("Face detection")?;
        self.eye_detection.validate("Eye detection")?;

        if self.matching.check_interval == 0 {
            return Err(Error::ConfigError(
                "Check interval must be greater than 0".to_string(),
            ));
        }

        if self.camera.width <= 0 || self.camera.height <= 0 {
            return Err(Error::ConfigError(format!(
                "Camera size must be positive, got {}x{}",
                self.camera.width, self.camera.height
            )));
        }

        if self.display.font_scale.is_nan() || self.display.font_scale <= 0.0 {
            return Err(Error::ConfigError("Font scale must be greater than 0".to_string()));
        }
        if self.display.text_thickness <= 0 || self.display.box_thickness <= 0 {
            return Err(Error::ConfigError("Line thickness must be greater than 0".to_string()));
        }
        if self.display.text_margin < 0 || self.display.text_baseline_offset < 0 {
            return Err(Error::ConfigError(
                "Status text margin and baseline offset must not be negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_values()?;

        // The reference image is optional, cascades are not
        if !self.cascades.face.exists() {
            return Err(Error::ConfigError(format!(
                "Face cascade not found: {}",
                self.cascades.face.display()
            )));
        }
        if !self.cascades.eye.exists() {
            return Err(Error::ConfigError(format!(
                "Eye cascade not found: {}",
                self.cascades.eye.display()
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Match Configuration

# Haar cascade files
cascades:
  face: "/usr/share/opencv4/haarcascades/haarcascade_frontalface_default.xml"
  eye: "/usr/share/opencv4/haarcascades/haarcascade_eye.xml"

# Face cascade parameters
face_detection:
  scale_factor: 1.3
  min_neighbors: 5
  min_size: 0

# Eye cascade parameters
eye_detection:
  scale_factor: 1.1
  min_neighbors: 3
  min_size: 0

# Capture device
camera:
  index: 0
  width: 640
  height: 480

# Reference image
reference:
  path: "reference.jpg"

# Background face check
matching:
  check_interval: 10

# Display settings
display:
  window_title: "Face Recognition"
  font_scale: 2.0
  text_thickness: 3
  box_thickness: 2
  text_margin: 20
  text_baseline_offset: 30
"#;
