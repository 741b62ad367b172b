// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plane coordinate types.
//!
//! Both representations describe the same point; converting between them is
//! lossless up to floating-point precision.


use crate::math::{atan2, cos, sin};

/// A point on the image plane. Units are pixels; +x is to the right and +y is
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
}

/// A point on the image plane in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarPoint {
    /// Distance from the origin [pixels]
    pub radius: f64,
    /// Angle from the +x axis toward +y [radians]
    pub angle: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64) -> CartesianPoint {
        CartesianPoint { x, y }
    }

    /// Shift this point by the supplied amounts.
    pub fn translate(self, dx: f64, dy: f64) -> CartesianPoint {
        CartesianPoint {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Rotate this point about the origin.
    pub fn rotate(self, angle_rad: f64) -> CartesianPoint {
        let mut polar = PolarPoint::from(self);
        polar.angle += angle_rad;
        CartesianPoint::from(polar)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &CartesianPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl PolarPoint {
    pub fn new(radius: f64, angle: f64) -> PolarPoint {
        PolarPoint { radius, angle }
    }
}

impl From<PolarPoint> for CartesianPoint {
    fn from(p: PolarPoint) -> CartesianPoint {
        CartesianPoint {
            x: p.radius * cos(p.angle),
            y: p.radius * sin(p.angle),
        }
    }
}

impl From<CartesianPoint> for PolarPoint {
    fn from(c: CartesianPoint) -> PolarPoint {
        PolarPoint {
            radius: c.x.hypot(c.y),
            angle: atan2(c.y, c.x),
        }
    }
}
