// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from the overlay subcommand.

use std::path::PathBuf;

use thiserror::Error;

use super::super::common::DateArgError;
use crate::{
    catalog::ReadCatalogError,
    overlay::RenderError,
    params::{ColourParseError, ProjectionConfigError},
    unit_parsing::UnitParseError,
};

/// Errors from making sense of overlay arguments.
#[derive(Error, Debug)]
pub(crate) enum OverlayArgsError {
    #[error("No images were supplied")]
    NoImages,

    #[error("Couldn't parse the {arg}: {err}")]
    Parse {
        arg: &'static str,
        err: UnitParseError,
    },

    #[error("Couldn't parse the {arg} colour: {err}")]
    Colour {
        arg: &'static str,
        err: ColourParseError,
    },

    #[error("Invalid overlay parameters for {}: {err}", file.display())]
    InvalidConfig {
        file: PathBuf,
        err: ProjectionConfigError,
    },

    #[error(transparent)]
    Date(#[from] DateArgError),

    #[error(transparent)]
    Catalog(#[from] ReadCatalogError),
}

/// Errors from drawing overlays.
#[derive(Error, Debug)]
pub(crate) enum OverlayError {
    #[error("Couldn't read image {}: {err}", file.display())]
    ImageRead {
        file: PathBuf,
        err: image::ImageError,
    },

    #[error("Couldn't write image {}: {err}", file.display())]
    ImageWrite {
        file: PathBuf,
        err: image::ImageError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),
}
