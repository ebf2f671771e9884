//! Overlay rendering: face and eye boxes plus the match status text.

use crate::config::DisplayConfig;
use crate::detection::FaceRegion;
use crate::matcher::MatchStatus;
use crate::Result;
use opencv::{
    core::{Mat, Point, Rect, Scalar},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
};

/// Face box colour (blue, BGR)
#[must_use]
pub fn face_color() -> Scalar {
    Scalar::new(255.0, 0.0, 0.0, 0.0)
}

/// Eye box colour (green, BGR)
#[must_use]
pub fn eye_color() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

/// Draw a box around every face and its eyes
pub fn draw_faces(frame: &mut Mat, regions: &[FaceRegion], thickness: i32) -> Result<()> {
    for region in regions {
        draw_box(frame, region.face, face_color(), thickness)?;
        for eye in &region.eyes {
            draw_box(frame, *eye, eye_color(), thickness)?;
        }
    }
    Ok(())
}

fn draw_box(frame: &mut Mat, rect: Rect, color: Scalar, thickness: i32) -> Result<()> {
    imgproc::rectangle(frame, rect, color, thickness, LINE_8, 0)?;
    Ok(())
}

/// Bottom-left corner of the status text for a frame with `rows` rows
#[must_use]
pub fn status_origin(rows: i32, display: &DisplayConfig) -> Point {
    Point::new(display.text_margin, rows.saturating_sub(display.text_baseline_offset).clamp(0, rows.max(0)))
}

/// Draw the match status near the bottom of the frame
pub fn draw_status(frame: &mut Mat, status: MatchStatus, display: &DisplayConfig) -> Result<()> {
    let origin = status_origin(frame.rows(), display);
    imgproc::put_text(
        frame,
        status.label(),
        origin,
        FONT_HERSHEY_SIMPLEX,
        display.font_scale,
        status.color(),
        display.text_thickness,
        LINE_8,
        false,
    )?;
    Ok(())
}
