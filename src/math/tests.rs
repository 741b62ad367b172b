// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI};

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_trig_helpers() {
    assert_abs_diff_eq!(sin(FRAC_PI_6), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(cos(FRAC_PI_3), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(atan2(1.0, -1.0), 3.0 / 4.0 * PI, epsilon = 1e-12);
}

#[test]
fn test_to_pixel_truncates() {
    assert_eq!(to_pixel(299.999), 299);
    assert_eq!(to_pixel(300.0000001), 300);
    // Toward zero, not toward negative infinity.
    assert_eq!(to_pixel(-0.7), 0);
    assert_eq!(to_pixel(-1.2), -1);
}

#[test]
fn test_font_fraction() {
    assert_eq!(font_fraction(12, 10), 1);
    assert_eq!(font_fraction(12, 20), 0);
    assert_eq!(font_fraction(60, 20), 3);
}
