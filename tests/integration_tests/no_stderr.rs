// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{get_cmd_output, make_image, moonmap};

#[test]
fn test_overlay_dry_run_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let first = make_image(tmp_dir.path(), "first.png", 64, 48);
    let second = make_image(tmp_dir.path(), "second.png", 48, 64);

    let cmd = moonmap()
        .args(["overlay", "--dry-run", "-d", "2024-04-08T18:17:00 UTC"])
        .arg(&first)
        .arg(&second)
        .ok();
    assert!(
        cmd.is_ok(),
        "overlay failed on simple test images: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_catalog_verify_no_stderr() {
    let cmd = moonmap()
        .args(["catalog-verify", "data/moon_craters.csv"])
        .ok();
    assert!(cmd.is_ok(), "catalog-verify failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
