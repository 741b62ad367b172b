// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sampling of the coordinate grid and the terminator.
//!
//! Nothing is drawn here; the sampler only says which polylines and labels
//! make up the grid for a given [`ProjectionConfig`].


use crate::{
    constants::{DEFAULT_GRID_LINE_SPACING_DEG, DEFAULT_GRID_SAMPLE_SPACING_DEG, GRID_EXTENT_DEG},
    coord::CartesianPoint,
    params::ProjectionConfig,
    projection::project,
};

/// What a [`GridLine`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLineKind {
    /// A line of constant latitude.
    Parallel,

    /// A line of constant longitude.
    Meridian,

    /// The day/night boundary. This is a meridian whose longitude comes from
    /// the phase.
    Terminator,
}

/// Text to be drawn at a projected position.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLabel {
    pub text: String,
    pub anchor: CartesianPoint,
}

/// A projected polyline. Each pair of consecutive vertices is drawn as its own
/// segment.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub kind: GridLineKind,

    /// The constant latitude (parallels) or longitude (meridians and the
    /// terminator) of this line [degrees].
    pub value_deg: f64,

    pub vertices: Vec<CartesianPoint>,

    /// The terminator is never labelled.
    pub label: Option<GridLabel>,
}

impl GridLine {
    /// Iterate over the segments of this line.
    pub fn segments(&self) -> impl Iterator<Item = (CartesianPoint, CartesianPoint)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Enumerates grid lines. The defaults are a line every 10° and a vertex every
/// 2° along each line; finer sampling gives smoother curves at higher cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSampler {
    line_spacing_deg: u32,
    sample_spacing_deg: u32,
}

impl Default for GridSampler {
    fn default() -> Self {
        Self {
            line_spacing_deg: DEFAULT_GRID_LINE_SPACING_DEG,
            sample_spacing_deg: DEFAULT_GRID_SAMPLE_SPACING_DEG,
        }
    }
}

impl GridSampler {
    /// A sampler with custom spacings [degrees]. Zero spacings are treated as
    /// 1°.
    pub fn new(line_spacing_deg: u32, sample_spacing_deg: u32) -> GridSampler {
        GridSampler {
            line_spacing_deg: line_spacing_deg.max(1),
            sample_spacing_deg: sample_spacing_deg.max(1),
        }
    }

    pub fn line_spacing_deg(&self) -> u32 {
        self.line_spacing_deg
    }

    pub fn sample_spacing_deg(&self) -> u32 {
        self.sample_spacing_deg
    }

    /// Lines of constant latitude from -90° to 90°, each sampled over
    /// longitudes -90° to 90° and labelled at its westmost (-90°) vertex.
    pub fn parallels(&self, config: &ProjectionConfig) -> Vec<GridLine> {
        steps(self.line_spacing_deg)
            .map(|latitude| {
                let vertices = steps(self.sample_spacing_deg)
                    .map(|longitude| project(latitude, longitude, config))
                    .collect();
                GridLine {
                    kind: GridLineKind::Parallel,
                    value_deg: latitude,
                    vertices,
                    label: Some(GridLabel {
                        text: label_text(latitude),
                        anchor: project(latitude, -f64::from(GRID_EXTENT_DEG), config),
                    }),
                }
            })
            .collect()
    }

    /// Lines of constant longitude from -90° to 90°, each sampled over
    /// latitudes -90° to 90° and labelled where it crosses the equator.
    pub fn meridians(&self, config: &ProjectionConfig) -> Vec<GridLine> {
        steps(self.line_spacing_deg)
            .map(|longitude| {
                let mut line = self.meridian(longitude, config);
                line.label = Some(GridLabel {
                    text: label_text(longitude),
                    anchor: project(0.0, longitude, config),
                });
                line
            })
            .collect()
    }

    /// The terminator: an unlabelled meridian at longitude `phase * 180 + 90`.
    pub fn terminator(&self, config: &ProjectionConfig) -> GridLine {
        GridLine {
            kind: GridLineKind::Terminator,
            ..self.meridian(terminator_longitude(config.phase), config)
        }
    }

    fn meridian(&self, longitude: f64, config: &ProjectionConfig) -> GridLine {
        GridLine {
            kind: GridLineKind::Meridian,
            value_deg: longitude,
            vertices: steps(self.sample_spacing_deg)
                .map(|latitude| project(latitude, longitude, config))
                .collect(),
            label: None,
        }
    }
}

/// The longitude of the terminator for a phase in [-1, 1] [degrees].
pub fn terminator_longitude(phase: f64) -> f64 {
    phase * 180.0 + 90.0
}

/// Every `spacing` degrees from -90 to 90 inclusive (90 is only included if
/// the spacing divides 180).
fn steps(spacing: u32) -> impl Iterator<Item = f64> {
    (-GRID_EXTENT_DEG..=GRID_EXTENT_DEG)
        .step_by(spacing as usize)
        .map(f64::from)
}

fn label_text(value_deg: f64) -> String {
    format!("{value_deg:.0}")
}
