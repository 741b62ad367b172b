// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Overlay a selenographic coordinate grid, the terminator and named lunar
features onto photographs of the Moon.
 */

pub mod catalog;
mod cli;
pub mod constants;
pub mod coord;
pub mod grid;
pub(crate) mod math;
pub mod overlay;
pub mod params;
pub mod phase;
pub mod projection;
pub mod unit_parsing;

use crossbeam_utils::atomic::AtomicCell;

/// Should progress bars be drawn? The CLI turns these on unless asked not to.
pub(crate) static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);

// Re-exports.
pub use catalog::{FeatureCatalog, MissingResourcePolicy, PointKind, PointOfInterest};
pub use cli::{Moonmap, MoonmapError};
pub use coord::{CartesianPoint, PolarPoint};
pub use grid::{GridLine, GridSampler};
pub use overlay::{render, RenderError};
pub use params::{Colour, ProjectionConfig, RenderColours};
pub use phase::phase;
pub use projection::{is_on_near_side, project};

// External re-exports.
pub use hifitime::Epoch;
pub use image::RgbImage;
