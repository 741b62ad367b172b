// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors from checking a [`super::ProjectionConfig`].
#[derive(Error, Debug, PartialEq)]
pub enum ProjectionConfigError {
    #[error("The disk radius must be positive; got {0} pixels")]
    NonPositiveRadius(i32),

    #[error("The phase must be between -1 and 1 (-100% and 100%); got {0}")]
    PhaseOutOfRange(f64),

    #[error("The stroke width must be a positive number of pixels; got {0}")]
    InvalidStrokeWidth(f64),

    #[error("The {name} must be a finite number of degrees; got {value}")]
    NotFinite { name: &'static str, value: f64 },
}
