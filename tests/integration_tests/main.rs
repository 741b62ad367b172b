// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod catalog_verify;
mod no_stderr;
mod overlay;
mod phase;

use std::{
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};

use moonmap::RgbImage;

fn moonmap() -> Command {
    Command::cargo_bin("moonmap").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// Write a plain grey image to `dir` and return its path.
fn make_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let image = RgbImage::from_pixel(width, height, image::Rgb([40, 40, 40]));
    let file = dir.join(name);
    image.save(&file).unwrap();
    file
}
