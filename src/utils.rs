//! Utility functions for rectangle arithmetic.

use opencv::core::Rect;

/// Clip a rectangle to the bounds of a `max_width` x `max_height` image
///
/// Returns `None` when nothing of the rectangle is left inside the image.
#[must_use]
pub fn clip_rect(rect: Rect, max_width: i32, max_height: i32) -> Option<Rect> {
    let x0 = rect.x.clamp(0, max_width.max(0));
    let y0 = rect.y.clamp(0, max_height.max(0));
    let x1 = rect.x.saturating_add(rect.width).clamp(0, max_width.max(0));
    let y1 = rect.y.saturating_add(rect.height).clamp(0, max_height.max(0));

    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Whether a rectangle lies entirely within an image
#[must_use]
pub fn rect_within(rect: Rect, max_width: i32, max_height: i32) -> bool {
    rect.x >= 0
        && rect.y >= 0
        && rect.width > 0
        && rect.height > 0
        && rect.x + rect.width <= max_width
        && rect.y + rect.height <= max_height
}
