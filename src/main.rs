//! Webcam face match demo: highlights faces and eyes and reports whether a face
//! is present in both the live feed and a reference image.

use anyhow::{Context, Result};
use clap::Parser;
use face_match::{
    app::{AppConfig, FaceMatchApp, VideoSource},
    config::{Config, EXAMPLE_CONFIG},
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long)]
    cam: Option<i32>,

    /// Video file to process instead of a camera
    #[arg(short, long)]
    video: Option<String>,

    /// Reference image to compare against
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Frames between two background face checks
    #[arg(long)]
    check_interval: Option<u32>,

    /// Requested capture width
    #[arg(long)]
    width: Option<i32>,

    /// Requested capture height
    #[arg(long)]
    height: Option<i32>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Apply command line overrides on top of the file configuration
    fn apply(&self, config: &mut Config) {
        if let Some(cam) = self.cam {
            config.camera.index = cam;
        }
        if let Some(reference) = &self.reference {
            config.reference.path = reference.clone();
        }
        if let Some(interval) = self.check_interval {
            config.matching.check_interval = interval;
        }
        if let Some(width) = self.width {
            config.camera.width = width;
        }
        if let Some(height) = self.height {
            config.camera.height = height;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    info!("Face Match");

    let mut settings = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            match Config::from_file(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Failed to load config file: {}. Using defaults.", e);
                    Config::default()
                }
            }
        }
        None => Config::default(),
    };
    args.apply(&mut settings);
    settings.validate().context("Invalid configuration")?;

    let config = AppConfig {
        video_source: match &args.video {
            Some(path) => VideoSource::File(path.clone()),
            None => VideoSource::Camera(settings.camera.index),
        },
        settings,
    };

    let mut app = FaceMatchApp::new(config)?;
    app.run()?;

    Ok(())
}
