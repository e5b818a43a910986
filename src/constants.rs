use image::Rgba;

pub const DEFAULT_TOLERANCE: u8 = 30;
pub const DEFAULT_PUBLIC_DIR: &str = "frontend/public";

/// What a background pixel is replaced with.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Fixed (input, output file name) pairs. Inputs resolve against the
/// working directory, outputs against the configured public directory.
pub const LOGO_JOBS: [(&str, &str); 2] = [
    ("logo - favicon.jpg", "logo-favicon.png"),
    ("logo horizontal.jpg", "logo-horizontal.png"),
];

pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% ({eta}) {msg}";
