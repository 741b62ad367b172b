// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. `moonmap` should do as many
calculations as possible in double precision, and only truncate to integer
pixels at the drawing boundary.
 */

/// The mean length of a synodic month [days].
pub const SYNODIC_MONTH_DAYS: f64 = 29.53058770576;

/// The reference new moon used by the phase calculator, as
/// (year, month, day, hour, minute, second) in UTC.
pub const LUNAR_EPOCH_UTC: (i32, u8, u8, u8, u8, u8) = (2000, 1, 6, 18, 14, 0);

/// Number of seconds in a day.
pub(crate) const DAYSEC: f64 = 86400.0;

/// The spacing between grid lines [degrees].
pub const DEFAULT_GRID_LINE_SPACING_DEG: u32 = 10;

/// The spacing between consecutive vertices of a grid line [degrees].
pub const DEFAULT_GRID_SAMPLE_SPACING_DEG: u32 = 2;

/// Grid lines (and their vertices) span this many degrees either side of the
/// reference meridian or the equator.
pub const GRID_EXTENT_DEG: i32 = 90;

/// Offset added to every longitude so that longitude 0 projects to the centre
/// column of the disk [degrees].
pub const REFERENCE_MERIDIAN_OFFSET_DEG: f64 = 90.0;

/// The size of the base font before it is scaled by the stroke width [pixels].
pub const BASE_FONT_SIZE: f64 = 12.0;

/// Crater marker radii are the font size divided by this.
pub const MARKER_RADIUS_DIVISOR: u32 = 10;

/// Label shadow offsets are the font size divided by this.
pub const SHADOW_OFFSET_DIVISOR: u32 = 20;

/// The default disk radius as a fraction of half the shorter image dimension.
pub const DEFAULT_RADIUS_FRACTION: f64 = 0.8;

/// The default stroke width as a fraction of the shorter image dimension.
pub const DEFAULT_STROKE_WIDTH_FRACTION: f64 = 0.001;

/// The smallest default stroke width [pixels].
pub const MIN_DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// The default suffix appended to output image filenames.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_overlay";
