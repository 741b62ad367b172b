// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

fn config() -> ProjectionConfig {
    ProjectionConfig::new(300, 300, 240)
}

#[test]
fn test_origin_projects_to_centre() {
    let c = project(0.0, 0.0, &config());
    assert_abs_diff_eq!(c.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 300.0, epsilon = 1e-9);
    // Truncation must still give the centre pixel.
    assert_eq!(c.x as i32, 300);
    assert_eq!(c.y as i32, 300);
}

#[test]
fn test_cardinal_points() {
    let config = config();

    // Longitude -90 is the right-hand limb, +90 the left-hand limb.
    let c = project(0.0, -90.0, &config);
    assert_abs_diff_eq!(c.x, 540.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 300.0, epsilon = 1e-9);
    let c = project(0.0, 90.0, &config);
    assert_abs_diff_eq!(c.x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 300.0, epsilon = 1e-9);

    // North is up (smaller y), south is down.
    let c = project(90.0, 0.0, &config);
    assert_abs_diff_eq!(c.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 60.0, epsilon = 1e-9);
    let c = project(-90.0, 0.0, &config);
    assert_abs_diff_eq!(c.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 540.0, epsilon = 1e-9);
}

#[test]
fn test_projection_is_deterministic() {
    let config = ProjectionConfig {
        rotation_deg: 17.5,
        libration_latitude_deg: -6.6,
        libration_longitude_deg: 6.5,
        ..config()
    };
    for (lat, lon) in [(12.3, -45.6), (-80.0, 80.0), (0.0, 0.0)] {
        let a = project(lat, lon, &config);
        let b = project(lat, lon, &config);
        assert_eq!(a, b);
    }
}

#[test]
fn test_rotation_composes() {
    let base = ProjectionConfig {
        libration_latitude_deg: 3.0,
        libration_longitude_deg: -4.0,
        ..config()
    };
    let (r1, r2) = (23.0, -71.5);
    let first = ProjectionConfig {
        rotation_deg: r1,
        ..base.clone()
    };
    let both = ProjectionConfig {
        rotation_deg: r1 + r2,
        ..base
    };

    for (lat, lon) in [(10.0, 20.0), (-43.3, -11.22), (60.0, -85.0), (0.0, 0.0)] {
        let p1 = project(lat, lon, &first);
        let rotated = p1
            .translate(-300.0, -300.0)
            .rotate(r2.to_radians())
            .translate(300.0, 300.0);
        let p12 = project(lat, lon, &both);
        assert_abs_diff_eq!(rotated.x, p12.x, epsilon = 1e-9);
        assert_abs_diff_eq!(rotated.y, p12.y, epsilon = 1e-9);
    }
}

#[test]
fn test_quarter_rotation() {
    // A positive rotation turns +x toward +y (clockwise on screen).
    let config = ProjectionConfig {
        rotation_deg: 90.0,
        ..config()
    };
    let c = project(0.0, -90.0, &config);
    assert_abs_diff_eq!(c.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 540.0, epsilon = 1e-9);
}

#[test]
fn test_points_stay_inside_the_disk() {
    let config = ProjectionConfig {
        libration_latitude_deg: 7.5,
        libration_longitude_deg: -6.0,
        ..config()
    };
    let rotated = ProjectionConfig {
        rotation_deg: 33.0,
        ..config.clone()
    };
    let centre = CartesianPoint::new(300.0, 300.0);
    for lat in (-180..=180).step_by(15) {
        for lon in (-360..=360).step_by(15) {
            let (lat, lon) = (f64::from(lat), f64::from(lon));
            let c = project(lat, lon, &config);
            assert!(c.distance(&centre) <= 240.0 + 1e-9, "({lat}, {lon}) -> {c:?}");
            let c = project(lat, lon, &rotated);
            assert!(c.distance(&centre) <= 240.0 + 1e-9, "({lat}, {lon}) -> {c:?}");
        }
    }
}

#[test]
fn test_libration_shifts_the_sub_earth_point() {
    let config = ProjectionConfig {
        libration_latitude_deg: -5.0,
        libration_longitude_deg: 7.0,
        ..config()
    };
    // The point now at the centre of the disk is offset by the libration.
    let c = project(5.0, -7.0, &config);
    assert_abs_diff_eq!(c.x, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.y, 300.0, epsilon = 1e-9);
}

#[test]
fn test_far_side_mirrors_near_side() {
    let config = config();
    let near = project(20.0, 30.0, &config);
    let far = project(20.0, 150.0, &config);
    assert_abs_diff_eq!(near.x, far.x, epsilon = 1e-9);
    assert_abs_diff_eq!(near.y, far.y, epsilon = 1e-9);

    assert!(is_on_near_side(20.0, 30.0, &config));
    assert!(!is_on_near_side(20.0, 150.0, &config));
}

#[test]
fn test_near_side_predicate() {
    let config = config();
    assert!(is_on_near_side(0.0, 0.0, &config));
    assert!(is_on_near_side(45.0, -60.0, &config));
    // The limb is visible.
    assert!(is_on_near_side(0.0, 90.0, &config));
    assert!(is_on_near_side(0.0, -90.0, &config));
    assert!(!is_on_near_side(0.0, 180.0, &config));

    // Libration brings some of the far side into view.
    let librated = ProjectionConfig {
        libration_longitude_deg: -8.0,
        ..config
    };
    assert!(!is_on_near_side(0.0, 95.0, &ProjectionConfig::new(0, 0, 1)));
    assert!(is_on_near_side(0.0, 95.0, &librated));
}
