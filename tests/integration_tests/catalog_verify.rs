// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::{get_cmd_output, moonmap};

#[test]
fn test_verify_built_in_catalogs() {
    let cmd = moonmap()
        .args(["catalog-verify", "data/moon_craters.csv"])
        .ok();
    assert!(cmd.is_ok(), "catalog-verify failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("12 on the list of well-known craters"), "{stdout}");
    assert!(stdout.contains("Largest: Bailly (301 km)"), "{stdout}");

    let cmd = moonmap()
        .args(["catalog-verify", "--kind", "mare", "data/moon_maria.csv"])
        .ok();
    assert!(cmd.is_ok(), "catalog-verify failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("20 mare points"), "{stdout}");
}

#[test]
fn test_verify_malformed_catalog() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let bad = tmp_dir.path().join("bad.csv");
    std::fs::write(&bad, "Tycho,85,-43.3,11.22\nBadRow,notanumber\n").unwrap();

    let cmd = moonmap()
        .args(["catalog-verify", "data/moon_craters.csv"])
        .arg(&bad)
        .ok();
    assert!(cmd.is_err());
    let (stdout, stderr) = get_cmd_output(cmd);
    // The good catalog is still reported.
    assert!(stdout.contains("37 crater points"), "{stdout}");
    assert!(stdout.contains("line 2"), "{stdout}");
    assert!(stderr.contains("1 of 2 catalogs could not be read"), "{stderr}");
}

#[test]
fn test_verify_unknown_kind() {
    let cmd = moonmap()
        .args(["catalog-verify", "--kind", "volcano", "data/moon_craters.csv"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Unrecognised catalog kind 'volcano'"), "{stderr}");
}
