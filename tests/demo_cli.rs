use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn demo_shows_help() {
    let mut cmd = Command::cargo_bin("reaktplot-demo").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reaktplot-demo"));
}

#[test]
fn demo_renders_readme_figure() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("readme.png");
    let mut cmd = Command::cargo_bin("reaktplot-demo").unwrap();
    cmd.arg("readme").arg("--out").arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Saved"));
    assert!(fs::read(&out).unwrap().starts_with(b"\x89PNG"));
}

#[test]
fn demo_applies_options_by_name() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("sine.html");
    let mut cmd = Command::cargo_bin("reaktplot-demo").unwrap();
    cmd.args(["sine", "--set", "title_text=Custom", "--set", "legend_x=0.2", "-o"])
        .arg(&out);
    cmd.assert().success();
    let page = fs::read_to_string(&out).unwrap();
    assert!(page.contains("Custom"));
    assert!(!page.contains("SINE FUNCTIONS"));
}

#[test]
fn demo_rejects_unknown_option() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("contour.png");
    let mut cmd = Command::cargo_bin("reaktplot-demo").unwrap();
    cmd.args(["contour", "--set", "no_such_option=1", "-o"])
        .arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown figure option"));
    assert!(!out.exists());
}

#[test]
fn demo_rejects_unsupported_extension() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("readme.bmp");
    let mut cmd = Command::cargo_bin("reaktplot-demo").unwrap();
    cmd.args(["readme", "-o"]).arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid format"));
}

#[test]
fn demo_reads_size_from_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("export.json");
    fs::write(&config, r#"{"width": 320, "height": 240}"#).unwrap();
    let out = dir.path().join("contour.png");
    let mut cmd = Command::cargo_bin("reaktplot-demo").unwrap();
    cmd.args(["contour", "--scale", "2", "--config"])
        .arg(&config)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    assert_eq!(image::image_dimensions(&out).unwrap(), (640, 480));
}
