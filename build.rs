//! Build script for detecting system dependencies and providing installation guidance.
//!
//! Checks for `OpenCV` through pkg-config and warns when the Haar cascades used
//! by the default configuration are not installed.

use std::env;
use std::path::Path;
use std::process::Command;

const CASCADE_DIR: &str = "/usr/share/opencv4/haarcascades";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");
    println!("cargo:rerun-if-env-changed=OPENCV_LINK_PATHS");
    println!("cargo:rerun-if-env-changed=OPENCV_INCLUDE_PATHS");

    check_opencv();

    if env::var("TARGET").unwrap_or_default().contains("linux") {
        check_cascades();
    }
}

fn pkg_config_version(package: &str) -> Option<String> {
    let output = Command::new("pkg-config").args(["--modversion", package]).output().ok()?;
    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

fn check_opencv() {
    match pkg_config_version("opencv4").or_else(|| pkg_config_version("opencv")) {
        Some(version) => println!("cargo:warning=Found OpenCV version: {version}"),
        None => {
            println!("cargo:warning=OpenCV not found via pkg-config. Make sure OpenCV is installed.");
            println!("cargo:warning=On Ubuntu: sudo apt-get install libopencv-dev pkg-config");
            println!("cargo:warning=On macOS: brew install opencv pkg-config");
        }
    }
}

fn check_cascades() {
    if !Path::new(CASCADE_DIR).join("haarcascade_frontalface_default.xml").exists() {
        println!("cargo:warning=Haar cascades not found in {CASCADE_DIR}.");
        println!("cargo:warning=Set cascades.face and cascades.eye in the config file to their location.");
    }
}
