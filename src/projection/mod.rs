// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Orthographic projection of selenographic coordinates onto the image plane.
//!
//! The disk is viewed from Earth along the sub-Earth direction, which is moved
//! by the libration angles. Depth is discarded, so a point on the far
//! hemisphere lands on the mirror position of its near-side counterpart;
//! [`is_on_near_side`] tells the two apart for callers that want to cull.

#[cfg(test)]
mod tests;

use crate::{
    constants::REFERENCE_MERIDIAN_OFFSET_DEG,
    coord::CartesianPoint,
    math::{cos, sin},
    params::ProjectionConfig,
};

/// The latitude and longitude that are actually projected, after libration
/// and the reference-meridian offset [radians].
#[inline]
fn effective_angles(latitude_deg: f64, longitude_deg: f64, config: &ProjectionConfig) -> (f64, f64) {
    let lat = -latitude_deg - config.libration_latitude_deg;
    let lon = longitude_deg + REFERENCE_MERIDIAN_OFFSET_DEG + config.libration_longitude_deg;
    (lat.to_radians(), lon.to_radians())
}

/// Project a selenographic latitude and longitude [degrees] to an absolute
/// image position [pixels].
///
/// Nothing is truncated here; positions only become integer pixels when they
/// are drawn.
pub fn project(latitude_deg: f64, longitude_deg: f64, config: &ProjectionConfig) -> CartesianPoint {
    let (lat, lon) = effective_angles(latitude_deg, longitude_deg, config);
    let radius = f64::from(config.radius);

    let x = radius * cos(lat) * cos(lon);
    // The depth component, radius * cos(lat) * sin(lon), is discarded.
    let z = radius * sin(lat);
    let mut point = CartesianPoint::new(x, z);

    if config.rotation_deg != 0.0 {
        point = point.rotate(config.rotation_deg.to_radians());
    }

    let (centre_x, centre_y) = config.centre();
    point.translate(centre_x, centre_y)
}

/// Is this selenographic coordinate on the hemisphere facing the viewer? Points
/// exactly on the limb count as visible.
///
/// [`project`] never calls this; the overlay draws both hemispheres.
pub fn is_on_near_side(latitude_deg: f64, longitude_deg: f64, config: &ProjectionConfig) -> bool {
    let (lat, lon) = effective_angles(latitude_deg, longitude_deg, config);
    // Allow for the rounding of cos(90°) so that the limb itself is included.
    cos(lat) * sin(lon) >= -1e-12
}
