use std::fs;
use std::process::Command;

use image::{ImageFormat, Rgb, RgbImage};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_logo-bg-remover"))
}

#[test]
fn runs_both_logos_and_ignores_arguments() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("frontend/public")).unwrap();
    for name in ["logo - favicon.jpg", "logo horizontal.jpg"] {
        RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]))
            .save_with_format(dir.path().join(name), ImageFormat::Jpeg)
            .unwrap();
    }

    let output = binary()
        .arg("unexpected-argument")
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Saved: frontend/public/logo-favicon.png",
            "Saved: frontend/public/logo-horizontal.png",
            "Background removal complete!",
        ]
    );
    assert!(dir.path().join("frontend/public/logo-horizontal.png").is_file());
}

#[test]
fn missing_logo_reports_the_codec_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = binary()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: "));
    assert!(!stderr.contains("Decode {"));
    assert!(output.stdout.is_empty());
}
