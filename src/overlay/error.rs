// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::params::ProjectionConfigError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Refusing to render with an invalid configuration: {0}")]
    InvalidConfig(#[from] ProjectionConfigError),

    #[error("Image dimensions {width}x{height} are too large to draw on")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("Error from the plotters library while drawing the {element}: {err}")]
    Draw { element: &'static str, err: String },
}
