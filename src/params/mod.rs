// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for projecting and rendering an overlay.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and are ready to be used directly. A [`ProjectionConfig`] is a
//! plain value; a front-end that changes a parameter builds a new one (or
//! mutates its own copy) and renders again.

mod colour;
mod error;

pub use colour::{Colour, ColourParseError, RenderColours};
pub use error::ProjectionConfigError;

use crate::constants::{
    BASE_FONT_SIZE, DEFAULT_RADIUS_FRACTION, DEFAULT_STROKE_WIDTH_FRACTION,
    MIN_DEFAULT_STROKE_WIDTH,
};

/// Everything needed to place selenographic coordinates on an image and draw
/// the overlay. All angles are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// The x pixel of the centre of the lunar disk.
    pub centre_x: i32,

    /// The y pixel of the centre of the lunar disk.
    pub centre_y: i32,

    /// The radius of the lunar disk [pixels]. Must be positive.
    pub radius: i32,

    /// In-plane rotation of the whole disk about its centre [degrees].
    pub rotation_deg: f64,

    /// Shift of the apparent sub-Earth point in latitude [degrees].
    pub libration_latitude_deg: f64,

    /// Shift of the apparent sub-Earth point in longitude [degrees].
    pub libration_longitude_deg: f64,

    /// The illuminated phase in [-1, 1]. This only moves the terminator; it
    /// doesn't affect the projection.
    pub phase: f64,

    /// Line and text weight [pixels].
    pub stroke_width: f64,

    pub colours: RenderColours,
}

impl ProjectionConfig {
    /// A config with the given disk geometry and no rotation, libration or
    /// phase offset. The stroke width is 1 pixel.
    pub fn new(centre_x: i32, centre_y: i32, radius: i32) -> ProjectionConfig {
        ProjectionConfig {
            centre_x,
            centre_y,
            radius,
            rotation_deg: 0.0,
            libration_latitude_deg: 0.0,
            libration_longitude_deg: 0.0,
            phase: 0.0,
            stroke_width: MIN_DEFAULT_STROKE_WIDTH,
            colours: RenderColours::default(),
        }
    }

    /// A config with the defaults derived from an image's dimensions: the disk
    /// is centred, its radius is 80% of half the shorter dimension and the
    /// stroke width scales with the shorter dimension.
    pub fn for_image(width: u32, height: u32) -> ProjectionConfig {
        let (centre_x, centre_y) = default_centre(width, height);
        ProjectionConfig {
            stroke_width: default_stroke_width(width, height),
            ..ProjectionConfig::new(centre_x, centre_y, default_radius(width, height))
        }
    }

    /// Check the invariants that rendering relies on.
    pub fn validate(&self) -> Result<(), ProjectionConfigError> {
        if self.radius <= 0 {
            return Err(ProjectionConfigError::NonPositiveRadius(self.radius));
        }
        for (name, value) in [
            ("rotation", self.rotation_deg),
            ("libration latitude", self.libration_latitude_deg),
            ("libration longitude", self.libration_longitude_deg),
        ] {
            if !value.is_finite() {
                return Err(ProjectionConfigError::NotFinite { name, value });
            }
        }
        if !(-1.0..=1.0).contains(&self.phase) {
            return Err(ProjectionConfigError::PhaseOutOfRange(self.phase));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ProjectionConfigError::InvalidStrokeWidth(self.stroke_width));
        }

        Ok(())
    }

    /// The size of label text [pixels]. This is a 12-pixel base font scaled by
    /// the stroke width.
    pub fn font_size(&self) -> u32 {
        ((BASE_FONT_SIZE * self.stroke_width).round() as u32).max(1)
    }

    /// The width of drawn lines [pixels].
    pub fn line_width(&self) -> u32 {
        (self.stroke_width.round() as u32).max(1)
    }

    /// The centre of the disk as a floating-point point.
    pub(crate) fn centre(&self) -> (f64, f64) {
        (f64::from(self.centre_x), f64::from(self.centre_y))
    }
}

/// The centre of an image, using integer halving.
pub fn default_centre(width: u32, height: u32) -> (i32, i32) {
    ((width / 2) as i32, (height / 2) as i32)
}

/// The default disk radius for an image: 80% of half the shorter dimension.
/// Half the shorter dimension is integer-halved before scaling.
pub fn default_radius(width: u32, height: u32) -> i32 {
    radius_from_fraction(width, height, DEFAULT_RADIUS_FRACTION)
}

/// A disk radius that is a fraction of half the shorter image dimension.
pub fn radius_from_fraction(width: u32, height: u32, fraction: f64) -> i32 {
    let half = width.min(height) / 2;
    (f64::from(half) * fraction) as i32
}

/// The default stroke width for an image: 0.1% of the shorter dimension, but
/// never less than a pixel.
pub fn default_stroke_width(width: u32, height: u32) -> f64 {
    (f64::from(width.min(height)) * DEFAULT_STROKE_WIDTH_FRACTION).max(MIN_DEFAULT_STROKE_WIDTH)
}
