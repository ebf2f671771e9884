//! Main application module for the face match demo.

use crate::{
    checker::FaceCheckWorker,
    config::Config,
    constants::{KEY_POLL_DELAY_MS, QUIT_KEY},
    detection::{CascadeFaceDetector, FaceEyeDetector},
    error::{Error, Result},
    matcher::{MatchFlag, MatchStatus},
    overlay,
    reference::ReferenceFaces,
};
use log::{debug, info, warn};
use opencv::{
    core::Mat,
    highgui::{self, WINDOW_AUTOSIZE},
    prelude::*,
    videoio::{self, VideoCapture, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH},
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// Detection, reference and display settings
    pub settings: Config,
}

/// Video source type
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// Whether the frame with index `counter` is handed to the background check
#[must_use]
pub fn should_check(counter: u64, interval: u32) -> bool {
    interval != 0 && counter % u64::from(interval) == 0
}

/// Whether a `wait_key` result asks the main loop to stop
#[must_use]
pub fn is_quit_key(key: i32) -> bool {
    key == i32::from(QUIT_KEY)
}

/// Main application struct
pub struct FaceMatchApp {
    config: AppConfig,
    detector: FaceEyeDetector,
    reference: ReferenceFaces,
    checker: Option<FaceCheckWorker>,
    video_capture: VideoCapture,
    frame_counter: u64,
    last_status: MatchStatus,
}

impl FaceMatchApp {
    /// Create a new face match application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing face match application");
        let settings = &config.settings;

        let video_capture = open_capture(&config.video_source, settings)?;

        let detector = FaceEyeDetector::new(
            &settings.cascades.face,
            settings.face_detection.params(),
            &settings.cascades.eye,
            settings.eye_detection.params(),
        )?;

        // The worker owns a separate classifier; cascades are not shared across threads
        let mut reference_detector =
            CascadeFaceDetector::new(&settings.cascades.face, settings.face_detection.params())?;
        let reference = ReferenceFaces::load(&settings.reference.path, &mut reference_detector);

        let checker = FaceCheckWorker::spawn(Box::new(reference_detector), reference.len(), MatchFlag::new())?;

        highgui::named_window(&settings.display.window_title, WINDOW_AUTOSIZE)?;

        Ok(Self {
            config,
            detector,
            reference,
            checker: Some(checker),
            video_capture,
            frame_counter: 0,
            last_status: MatchStatus::NoMatch,
        })
    }

    /// Run the main application loop until `q` is pressed
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main loop, press 'q' to quit");

        let result = self.run_loop();

        if let Some(checker) = self.checker.take() {
            checker.shutdown();
        }
        highgui::destroy_all_windows()?;
        info!("Application shutting down after {} frames", self.frame_counter);

        result
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            let mut frame = Mat::default();
            if self.video_capture.read(&mut frame)? && !frame.empty() {
                self.process_frame(&mut frame)?;
                highgui::imshow(&self.config.settings.display.window_title, &frame)?;
            } else if matches!(self.config.video_source, VideoSource::File(_)) {
                info!("End of video file reached");
                return Ok(());
            } else {
                debug!("Failed to read frame");
            }

            let key = highgui::wait_key(KEY_POLL_DELAY_MS)?;
            if is_quit_key(key) {
                info!("Exit requested by user");
                return Ok(());
            }
        }
    }

    /// Submit the periodic check, then detect and draw on the frame
    fn process_frame(&mut self, frame: &mut Mat) -> Result<()> {
        let settings = &self.config.settings;

        let checker = self
            .checker
            .as_ref()
            .ok_or_else(|| Error::Worker("face check worker is shut down".to_string()))?;
        if should_check(self.frame_counter, settings.matching.check_interval) {
            checker.submit(frame)?;
        }
        let matched = checker.flag().get();
        self.frame_counter += 1;

        let regions = self.detector.detect(frame)?;
        overlay::draw_faces(frame, &regions, settings.display.box_thickness)?;

        let status = MatchStatus::from_flag(matched, self.reference.len());
        if status != self.last_status {
            info!("Match status: {}", status.label());
            self.last_status = status;
        }
        overlay::draw_status(frame, status, &settings.display)?;

        Ok(())
    }
}

fn open_capture(source: &VideoSource, settings: &Config) -> Result<VideoCapture> {
    let capture = match source {
        VideoSource::Camera(index) => {
            info!("Opening camera {}", index);
            let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;
            if !cap.is_opened()? {
                return Err(Error::Camera(format!("Cannot open camera {index}")));
            }

            let (width, height) = (settings.camera.width, settings.camera.height);
            if !cap.set(CAP_PROP_FRAME_WIDTH, f64::from(width))? || !cap.set(CAP_PROP_FRAME_HEIGHT, f64::from(height))? {
                warn!("Camera refused frame size {}x{}", width, height);
            }
            cap
        }
        VideoSource::File(path) => {
            info!("Opening video file: {}", path);
            let cap = VideoCapture::from_file(path, videoio::CAP_ANY)?;
            if !cap.is_opened()? {
                return Err(Error::Camera(format!("Cannot open video file {path}")));
            }
            cap
        }
    };

    Ok(capture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_check_every_interval() {
        let checked: Vec<u64> = (0..25).filter(|&c| should_check(c, 10)).collect();
        assert_eq!(checked, vec![0, 10, 20]);
    }

    #[test]
    fn test_should_check_zero_interval() {
        assert!(!should_check(0, 0));
        assert!(!should_check(7, 0));
    }

    #[test]
    fn test_quit_key() {
        assert!(is_quit_key(i32::from(b'q')));
        assert!(!is_quit_key(i32::from(b'Q')));
        assert!(!is_quit_key(27));
        assert!(!is_quit_key(-1));
    }
}
