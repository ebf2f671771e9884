//! Constants used throughout the application

/// Directory holding the Haar cascades shipped with `OpenCV` 4 on Linux
pub const DEFAULT_CASCADE_DIR: &str = "/usr/share/opencv4/haarcascades";

/// Frontal face cascade file name
pub const FACE_CASCADE_FILE: &str = "haarcascade_frontalface_default.xml";

/// Eye cascade file name
pub const EYE_CASCADE_FILE: &str = "haarcascade_eye.xml";

/// Default reference image, resolved against the working directory
pub const DEFAULT_REFERENCE_IMAGE: &str = "reference.jpg";

/// Default capture size
pub const DEFAULT_FRAME_WIDTH: i32 = 640;
pub const DEFAULT_FRAME_HEIGHT: i32 = 480;

/// Face cascade parameters
pub const FACE_SCALE_FACTOR: f64 = 1.3;
pub const FACE_MIN_NEIGHBORS: i32 = 5;

/// Eye cascade parameters (`detectMultiScale` defaults)
pub const EYE_SCALE_FACTOR: f64 = 1.1;
pub const EYE_MIN_NEIGHBORS: i32 = 3;

/// Frames between two background face checks
pub const DEFAULT_CHECK_INTERVAL: u32 = 10;

/// Frames waiting for the face check worker
pub const CHECK_QUEUE_CAPACITY: usize = 1;

/// Display window title
pub const WINDOW_TITLE: &str = "Face Recognition";

/// Status text rendering
pub const STATUS_FONT_SCALE: f64 = 2.0;
pub const STATUS_TEXT_THICKNESS: i32 = 3;
pub const STATUS_TEXT_MARGIN: i32 = 20;
pub const STATUS_BASELINE_OFFSET: i32 = 30;

/// Rectangle line thickness
pub const BOX_THICKNESS: i32 = 2;

/// Key polling delay in milliseconds
pub const KEY_POLL_DELAY_MS: i32 = 1;

/// Key that ends the main loop
pub const QUIT_KEY: u8 = b'q';
