// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, moonmap};

#[test]
fn test_phase_at_reference_new_moon() {
    let cmd = moonmap()
        .args(["phase", "-d", "2000-01-06T18:14:00 UTC"])
        .ok();
    assert!(cmd.is_ok(), "phase failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Phase: -1"), "{stdout}");
    assert!(stdout.contains("moonmap phase complete."), "{stdout}");
}

#[test]
fn test_phase_now() {
    let cmd = moonmap().arg("phase").ok();
    assert!(cmd.is_ok(), "phase failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Phase: "), "{stdout}");
}

#[test]
fn test_phase_bad_date() {
    let cmd = moonmap().args(["phase", "-d", "tomorrow"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Couldn't parse date 'tomorrow'"), "{stderr}");
}
