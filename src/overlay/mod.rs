// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drawing the overlay onto an image.
//!
//! Everything is drawn in this order:
//! 1. the outline of the lunar disk;
//! 2. parallels and meridians with their labels;
//! 3. the terminator;
//! 4. the catalog points, in catalog order.
//!
//! Every label gets a four-pass shadow before its foreground pass so that it
//! stays legible on bright parts of the Moon.

mod error;

pub use error::RenderError;

use image::RgbImage;
use log::{debug, trace};
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    catalog::{FeatureCatalog, PointKind},
    constants::{MARKER_RADIUS_DIVISOR, SHADOW_OFFSET_DIVISOR},
    coord::CartesianPoint,
    grid::{GridLine, GridSampler},
    math::{font_fraction, to_pixel},
    params::{Colour, ProjectionConfig},
    projection::project,
};

const FONT_FAMILY: &str = "sans-serif";

/// Draw the overlay on a copy of `image`. The input is never modified; the
/// returned image has the same dimensions. The config is validated before
/// anything is drawn.
///
/// Labels are drawn with the system's `sans-serif` font (found through
/// fontconfig). Without one, this returns [`RenderError::Draw`].
pub fn render(
    image: &RgbImage,
    config: &ProjectionConfig,
    catalog: &FeatureCatalog,
) -> Result<RgbImage, RenderError> {
    render_with_sampler(image, config, catalog, &GridSampler::default())
}

/// [`render`] with a custom grid density.
pub fn render_with_sampler(
    image: &RgbImage,
    config: &ProjectionConfig,
    catalog: &FeatureCatalog,
    sampler: &GridSampler,
) -> Result<RgbImage, RenderError> {
    config.validate()?;
    let (width, height) = image.dimensions();
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(RenderError::ImageTooLarge { width, height });
    }
    debug!("Rendering a {width}x{height} overlay");

    let mut output = image.clone();
    {
        let buffer: &mut [u8] = &mut output;
        let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
        draw_overlay(&root, config, catalog, sampler)?;
        root.present().map_err(|e| RenderError::Draw {
            element: "image",
            err: e.to_string(),
        })?;
    }
    Ok(output)
}

/// Draw the overlay on any drawing area. [`render`] uses this with a bitmap;
/// other backends (e.g. SVG) work just as well. The config is assumed valid.
pub fn draw_overlay<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    config: &ProjectionConfig,
    catalog: &FeatureCatalog,
    sampler: &GridSampler,
) -> Result<(), RenderError> {
    let colours = &config.colours;
    let line_width = config.line_width();
    let font_size = config.font_size();
    trace!("Line width {line_width} px, font size {font_size} px");

    area.draw(&Circle::new(
        (config.centre_x, config.centre_y),
        config.radius as u32,
        line_style(colours.grid, line_width),
    ))
    .map_err(|e| RenderError::Draw {
        element: "disk outline",
        err: e.to_string(),
    })?;

    let parallels = sampler.parallels(config);
    let meridians = sampler.meridians(config);
    trace!(
        "Drawing {} parallels and {} meridians",
        parallels.len(),
        meridians.len()
    );
    for line in parallels.iter().chain(meridians.iter()) {
        draw_line(area, line, colours.grid, line_width)?;
        if let Some(label) = &line.label {
            draw_label(
                area,
                &label.text,
                label.anchor,
                colours.grid_label,
                config,
                false,
            )?;
        }
    }

    let terminator = sampler.terminator(config);
    trace!("Drawing the terminator at longitude {}", terminator.value_deg);
    draw_line(area, &terminator, colours.phase, line_width)?;

    trace!("Drawing {} catalog points", catalog.len());
    for point in catalog {
        let position = project(point.latitude_deg, point.longitude_deg, config);
        let (colour, marker) = match point.kind {
            PointKind::Mare => (colours.mare_label, false),
            PointKind::Crater => (colours.crater_label, true),
        };
        draw_label(area, &point.name, position, colour, config, marker)?;
    }

    Ok(())
}

fn line_style(colour: Colour, width: u32) -> ShapeStyle {
    ShapeStyle {
        color: colour.into(),
        filled: false,
        stroke_width: width,
    }
}

/// Draw each segment of a grid line separately.
fn draw_line<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    line: &GridLine,
    colour: Colour,
    width: u32,
) -> Result<(), RenderError> {
    let style = line_style(colour, width);
    for (begin, end) in line.segments() {
        area.draw(&PathElement::new(
            vec![pixel(begin), pixel(end)],
            style.clone(),
        ))
        .map_err(|e| RenderError::Draw {
            element: "grid",
            err: e.to_string(),
        })?;
    }
    Ok(())
}

/// Draw text with its left baseline at `anchor`, preceded by its shadow.
/// Craters also get a filled dot at `anchor`, in the text colour.
fn draw_label<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    anchor: CartesianPoint,
    colour: Colour,
    config: &ProjectionConfig,
    marker: bool,
) -> Result<(), RenderError> {
    let font_size = config.font_size();
    let (x, y) = pixel(anchor);

    if marker {
        let radius = font_fraction(font_size, MARKER_RADIUS_DIVISOR);
        if radius > 0 {
            area.draw(&Circle::new(
                (x, y),
                radius as u32,
                ShapeStyle {
                    color: colour.into(),
                    filled: true,
                    stroke_width: 1,
                },
            ))
            .map_err(|e| RenderError::Draw {
                element: "crater marker",
                err: e.to_string(),
            })?;
        }
    }

    let step = font_fraction(font_size, SHADOW_OFFSET_DIVISOR);
    let shadow = text_style(config.colours.shadow, font_size);
    let foreground = text_style(colour, font_size);
    for (style, position) in [
        (&shadow, (x - step, y - step)),
        (&shadow, (x - step, y + step)),
        (&shadow, (x + step, y - step)),
        (&shadow, (x + step, y + step)),
        (&foreground, (x, y)),
    ] {
        area.draw_text(text, style, position)
            .map_err(|e| RenderError::Draw {
                element: "labels",
                err: e.to_string(),
            })?;
    }
    Ok(())
}

fn text_style(colour: Colour, font_size: u32) -> TextStyle<'static> {
    let colour: RGBAColor = colour.into();
    (FONT_FAMILY, f64::from(font_size))
        .into_font()
        .color(&colour)
        .pos(Pos::new(HPos::Left, VPos::Bottom))
}

/// Truncate a projected point to the pixel it is drawn at.
fn pixel(p: CartesianPoint) -> (i32, i32) {
    (to_pixel(p.x), to_pixel(p.y))
}
