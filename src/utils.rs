use crate::constants::PROGRESS_TEMPLATE;

use image::Rgba;
use indicatif::{ProgressBar, ProgressStyle};

/// True when red, green and blue are each strictly above `threshold`.
/// Alpha is ignored.
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

/// Length is set once the image has been decoded and its row count is known.
pub fn job_progress_bar() -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::new(0);
    pb.set_style(style);
    pb
}
