use crate::constants::TRANSPARENT_WHITE;
use crate::error::AppError;
use crate::types::{Job, Tolerance};
use crate::utils::is_near_white;

use image::{DynamicImage, ImageFormat, RgbaImage};
use indicatif::ProgressBar;

/// Returns an RGBA copy of `img` where every near-white pixel is replaced by
/// fully transparent white. Sources without alpha come out fully opaque.
pub fn remove_white_background(
    img: &DynamicImage,
    tolerance: Tolerance,
    pb: &ProgressBar,
) -> RgbaImage {
    let mut output = img.to_rgba8();
    let threshold = tolerance.threshold();
    let mut cleared: u64 = 0;

    pb.set_length(output.height() as u64);
    pb.set_message(format!("Clearing pixels above {}", threshold));

    for (_, row) in output.enumerate_rows_mut() {
        for (_, _, pixel) in row {
            if is_near_white(pixel, threshold) {
                *pixel = TRANSPARENT_WHITE;
                cleared += 1;
            }
        }
        pb.inc(1);
    }

    log::debug!(
        "cleared {} of {} pixels (threshold {})",
        cleared,
        output.width() as u64 * output.height() as u64,
        threshold
    );

    output
}

pub fn process_job(job: &Job, pb: &ProgressBar) -> Result<(), AppError> {
    log::info!(
        "processing {} -> {} (tolerance {})",
        job.input.display(),
        job.output.display(),
        job.tolerance.value()
    );

    let img = image::open(&job.input).map_err(|source| AppError::Decode {
        path: job.input.clone(),
        source,
    })?;
    log::debug!("decoded {}: {}x{}", job.input.display(), img.width(), img.height());

    let final_output = remove_white_background(&img, job.tolerance, pb);

    final_output
        .save_with_format(&job.output, ImageFormat::Png)
        .map_err(|source| AppError::Write {
            path: job.output.clone(),
            source,
        })?;

    pb.finish_and_clear();
    println!("Saved: {}", job.output.display());
    Ok(())
}
