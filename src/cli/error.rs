// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all moonmap-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::{
    common::DateArgError,
    overlay::{OverlayArgsError, OverlayError},
};
use crate::{
    catalog::ReadCatalogError,
    overlay::RenderError,
    params::{ColourParseError, ProjectionConfigError},
    unit_parsing::UnitParseError,
};

/// The *only* publicly visible error from moonmap.
#[derive(Error, Debug)]
pub enum MoonmapError {
    /// An error related to feature catalogs.
    #[error("{0}\n\nCatalog rows have the form: name,diameter_km,latitude_deg,longitude_deg")]
    Catalog(String),

    /// An error encountered while drawing an overlay.
    #[error("{0}")]
    Render(String),

    /// A user-supplied argument couldn't be understood.
    #[error("{0}\n\nSee `moonmap <SUBCOMMAND> --help` for the accepted formats.")]
    Args(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// An image couldn't be read or written.
    #[error("{0}")]
    Image(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<OverlayArgsError> for MoonmapError {
    fn from(e: OverlayArgsError) -> Self {
        match e {
            OverlayArgsError::Catalog(e) => Self::from(e),
            OverlayArgsError::Date(e) => Self::from(e),
            OverlayArgsError::NoImages
            | OverlayArgsError::Parse { .. }
            | OverlayArgsError::Colour { .. }
            | OverlayArgsError::InvalidConfig { .. } => Self::Args(e.to_string()),
        }
    }
}

impl From<OverlayError> for MoonmapError {
    fn from(e: OverlayError) -> Self {
        let s = e.to_string();
        match e {
            OverlayError::ImageRead { .. } | OverlayError::ImageWrite { .. } => Self::Image(s),
            OverlayError::Render(e) => Self::from(e),
        }
    }
}

impl From<DateArgError> for MoonmapError {
    fn from(e: DateArgError) -> Self {
        let s = e.to_string();
        match e {
            DateArgError::Parse { .. } => Self::Args(s),
            DateArgError::Now(_) => Self::Generic(s),
        }
    }
}

// Library errors.

impl From<ReadCatalogError> for MoonmapError {
    fn from(e: ReadCatalogError) -> Self {
        let s = e.to_string();
        match e {
            ReadCatalogError::IO { .. } => Self::Generic(s),
            _ => Self::Catalog(s),
        }
    }
}

impl From<RenderError> for MoonmapError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::InvalidConfig(e) => Self::from(e),
            RenderError::ImageTooLarge { .. } | RenderError::Draw { .. } => {
                Self::Render(e.to_string())
            }
        }
    }
}

impl From<ProjectionConfigError> for MoonmapError {
    fn from(e: ProjectionConfigError) -> Self {
        Self::Args(e.to_string())
    }
}

impl From<UnitParseError> for MoonmapError {
    fn from(e: UnitParseError) -> Self {
        Self::Args(e.to_string())
    }
}

impl From<ColourParseError> for MoonmapError {
    fn from(e: ColourParseError) -> Self {
        Self::Args(e.to_string())
    }
}

impl From<image::ImageError> for MoonmapError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e.to_string())
    }
}

impl From<std::io::Error> for MoonmapError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
