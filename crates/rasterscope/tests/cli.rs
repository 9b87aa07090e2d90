#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn write_test_png(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("ramp.png");
    let img = image::GrayImage::from_fn(8, 8, |x, y| image::Luma([(x * 8 + y * 24) as u8]));
    img.save(&path).expect("write test image");
    path
}

#[test]
fn reports_statistics_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let img = write_test_png(dir.path());

    Command::cargo_bin("rasterscope")
        .unwrap()
        .arg(&img)
        .arg("--bins")
        .arg("64")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"statistics\""))
        .stdout(predicate::str::contains("\"pixel_count\": 64"))
        .stdout(predicate::str::contains("\"threshold\": null"));
}

#[test]
fn binarize_flag_reports_a_threshold_and_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let img = write_test_png(dir.path());
    let out = dir.path().join("binary.png");

    Command::cargo_bin("rasterscope")
        .unwrap()
        .arg(&img)
        .arg("--binarize")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"threshold\":"))
        .stdout(predicate::str::contains("\"threshold\": null").not());

    let written = image::open(&out).expect("decode written band").to_luma8();
    assert!(written.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}

#[test]
fn invalid_bin_count_fails_with_a_clear_message() {
    let dir = tempfile::tempdir().unwrap();
    let img = write_test_png(dir.path());

    Command::cargo_bin("rasterscope")
        .unwrap()
        .arg(&img)
        .arg("--bins")
        .arg("7")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside supported range"));
}

#[test]
fn missing_file_fails_cleanly() {
    Command::cargo_bin("rasterscope")
        .unwrap()
        .arg("no-such-image.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
