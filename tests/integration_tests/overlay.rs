// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Overlay tests. Drawing labels needs system fonts, so these only go as far
//! as a dry run.

use std::io::Write;

use indoc::formatdoc;
use tempfile::TempDir;

use crate::{get_cmd_output, make_image, moonmap};

#[test]
fn test_overlay_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let image = make_image(tmp_dir.path(), "moon.png", 600, 400);

    #[rustfmt::skip]
    let cmd = moonmap()
        .args([
            "overlay",
            "--dry-run",
            "--no-progress-bars",
            "-x", "+10",
            "-r", "75%",
            "-p", "50%",
        ])
        .arg(&image)
        .ok();
    assert!(cmd.is_ok(), "overlay failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("600x400"), "{stdout}");
    assert!(stdout.contains("disk centre (310, 200), radius 150 px"), "{stdout}");
    assert!(stdout.contains("moon.png_overlay.png"), "{stdout}");
    assert!(stdout.contains("Dry run"), "{stdout}");
    // Nothing is written.
    assert!(!tmp_dir.path().join("moon.png_overlay.png").exists());
}

#[test]
fn test_overlay_args_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let image = make_image(tmp_dir.path(), "moon.png", 300, 300);
    let args_file = tmp_dir.path().join("args.toml");
    let mut f = std::fs::File::create(&args_file).unwrap();
    f.write_all(
        formatdoc! {r#"
            files = ["{}"]
            radius = "100"
            phase = "-0.5"
            output_suffix = "_grid"
        "#, image.display()}
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    let cmd = moonmap()
        .args(["overlay", "--dry-run", "--args-file"])
        .arg(&args_file)
        .args(["-r", "120"])
        .ok();
    assert!(cmd.is_ok(), "overlay failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("radius 120 px"), "{stdout}");
    assert!(stdout.contains("Phase: -0.5"), "{stdout}");
    assert!(stdout.contains("moon.png_grid.png"), "{stdout}");
}

#[test]
fn test_overlay_rejects_bad_arguments() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let image = make_image(tmp_dir.path(), "moon.png", 100, 100);

    let cmd = moonmap()
        .args(["overlay", "--dry-run", "-p", "1.5"])
        .arg(&image)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("The phase must be between -1 and 1"), "{stderr}");

    let cmd = moonmap()
        .args(["overlay", "--dry-run", "-p", "0", "--phase-colour", "#12345"])
        .arg(&image)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("phase colour"), "{stderr}");

    let cmd = moonmap()
        .args(["overlay", "--dry-run", "-p", "0"])
        .arg(tmp_dir.path().join("missing.png"))
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Couldn't read image"), "{stderr}");
}

#[test]
fn test_overlay_needs_images() {
    let cmd = moonmap().args(["overlay", "-p", "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No images were supplied"), "{stderr}");
}
