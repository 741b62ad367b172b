// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Draw overlays onto images of the Moon.

mod error;

pub(crate) use error::{OverlayArgsError, OverlayError};

use std::{
    borrow::Cow,
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::common::{
    display_warnings, parse_date, InfoPrinter, Warn, ARG_FILE_HELP, DATE_HELP,
    OUTPUT_SUFFIX_HELP, RADIUS_HELP,
};
use crate::{
    catalog::{FeatureCatalog, MissingResourcePolicy},
    constants::DEFAULT_OUTPUT_SUFFIX,
    overlay::render,
    params::{
        default_centre, default_radius, default_stroke_width, radius_from_fraction,
        Colour, ProjectionConfig, RenderColours,
    },
    phase::phase,
    unit_parsing::{parse_fraction, parse_position, parse_value, PositionFormat, ValueFormat},
    MoonmapError, PROGRESS_BARS,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct OverlayArgs {
    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    args_file: Option<PathBuf>,

    /// Paths to the images of the Moon. Each overlay is written next to its
    /// input.
    #[clap(name = "IMAGES", parse(from_os_str))]
    #[serde(default)]
    files: Vec<PathBuf>,

    #[clap(short, long, help = DATE_HELP.as_str(), help_heading = "GEOMETRY")]
    date: Option<String>,

    /// The x pixel of the centre of the lunar disk. A leading sign makes this
    /// an offset from the centre of the image (e.g. +12). Default: the centre
    /// of the image
    #[clap(short = 'x', long, allow_hyphen_values = true, help_heading = "GEOMETRY")]
    centre_x: Option<String>,

    /// The y pixel of the centre of the lunar disk. A leading sign makes this
    /// an offset from the centre of the image (e.g. -7). Default: the centre
    /// of the image
    #[clap(short = 'y', long, allow_hyphen_values = true, help_heading = "GEOMETRY")]
    centre_y: Option<String>,

    #[clap(short, long, help = RADIUS_HELP.as_str(), help_heading = "GEOMETRY")]
    radius: Option<String>,

    /// Rotate the whole overlay about the centre of the disk [degrees].
    /// Default: 0
    #[clap(short = 'a', long, allow_hyphen_values = true, help_heading = "GEOMETRY")]
    rotation: Option<f64>,

    /// The libration in latitude [degrees]. Default: 0
    #[clap(short = 'b', long, allow_hyphen_values = true, help_heading = "GEOMETRY")]
    libration_latitude: Option<f64>,

    /// The libration in longitude [degrees]. Default: 0
    #[clap(short = 'l', long, allow_hyphen_values = true, help_heading = "GEOMETRY")]
    libration_longitude: Option<f64>,

    /// The illuminated phase, between -1 and 1 or as a percentage (e.g.
    /// -35%). -1 is a new moon and 0 is a full moon. Default: derived from
    /// the date
    #[clap(short, long, allow_hyphen_values = true, help_heading = "GEOMETRY")]
    phase: Option<String>,

    #[clap(short, long, help = OUTPUT_SUFFIX_HELP.as_str(), help_heading = "OUTPUT")]
    output_suffix: Option<String>,

    /// The weight of lines and text [pixels]. Default: 0.1% of the shorter
    /// image dimension, but at least 1
    #[clap(long, help_heading = "OUTPUT")]
    stroke_width: Option<f64>,

    /// The colour of the grid and the disk outline (#RRGGBB or #RRGGBBAA).
    #[clap(long, help_heading = "COLOURS")]
    grid_colour: Option<String>,

    /// The colour of the grid labels.
    #[clap(long, help_heading = "COLOURS")]
    grid_label_colour: Option<String>,

    /// The colour of the terminator.
    #[clap(long, help_heading = "COLOURS")]
    phase_colour: Option<String>,

    /// The colour of mare labels.
    #[clap(long, help_heading = "COLOURS")]
    mare_colour: Option<String>,

    /// The colour of crater labels and markers.
    #[clap(long, help_heading = "COLOURS")]
    crater_colour: Option<String>,

    /// The colour drawn underneath every label.
    #[clap(long, help_heading = "COLOURS")]
    shadow_colour: Option<String>,

    /// Read the mare and crater catalogs from this directory instead of the
    /// built-in ones.
    #[clap(long, parse(from_os_str), help_heading = "CATALOG")]
    catalog_dir: Option<PathBuf>,

    /// Fail if a catalog doesn't exist, rather than drawing without it.
    #[clap(long, help_heading = "CATALOG")]
    #[serde(default)]
    strict_catalog: bool,

    /// Don't label maria.
    #[clap(long, help_heading = "CATALOG")]
    #[serde(default)]
    no_maria: bool,

    /// Label every crater larger than this diameter [km], rather than only
    /// the well-known craters.
    #[clap(long, help_heading = "CATALOG")]
    min_crater_diameter: Option<f64>,
}

impl OverlayArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<OverlayArgs, MoonmapError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let OverlayArgs {
                args_file: _,
                files,
                date,
                centre_x,
                centre_y,
                radius,
                rotation,
                libration_latitude,
                libration_longitude,
                phase,
                output_suffix,
                stroke_width,
                grid_colour,
                grid_label_colour,
                phase_colour,
                mare_colour,
                crater_colour,
                shadow_colour,
                catalog_dir,
                strict_catalog,
                no_maria,
                min_crater_diameter,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(OverlayArgs {
                args_file: None,
                files: if cli_args.files.is_empty() {
                    files
                } else {
                    cli_args.files
                },
                date: cli_args.date.or(date),
                centre_x: cli_args.centre_x.or(centre_x),
                centre_y: cli_args.centre_y.or(centre_y),
                radius: cli_args.radius.or(radius),
                rotation: cli_args.rotation.or(rotation),
                libration_latitude: cli_args.libration_latitude.or(libration_latitude),
                libration_longitude: cli_args.libration_longitude.or(libration_longitude),
                phase: cli_args.phase.or(phase),
                output_suffix: cli_args.output_suffix.or(output_suffix),
                stroke_width: cli_args.stroke_width.or(stroke_width),
                grid_colour: cli_args.grid_colour.or(grid_colour),
                grid_label_colour: cli_args.grid_label_colour.or(grid_label_colour),
                phase_colour: cli_args.phase_colour.or(phase_colour),
                mare_colour: cli_args.mare_colour.or(mare_colour),
                crater_colour: cli_args.crater_colour.or(crater_colour),
                shadow_colour: cli_args.shadow_colour.or(shadow_colour),
                catalog_dir: cli_args.catalog_dir.or(catalog_dir),
                strict_catalog: cli_args.strict_catalog || strict_catalog,
                no_maria: cli_args.no_maria || no_maria,
                min_crater_diameter: cli_args.min_crater_diameter.or(min_crater_diameter),
            })
        } else {
            Ok(cli_args)
        }
    }

    /// Make sense of the arguments. Anything that depends on the size of an
    /// image is kept unresolved until the image is known.
    fn parse(self) -> Result<OverlayParams, OverlayArgsError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            files,
            date,
            centre_x,
            centre_y,
            radius,
            rotation,
            libration_latitude,
            libration_longitude,
            phase: phase_arg,
            output_suffix,
            stroke_width,
            grid_colour,
            grid_label_colour,
            phase_colour,
            mare_colour,
            crater_colour,
            shadow_colour,
            catalog_dir,
            strict_catalog,
            no_maria,
            min_crater_diameter,
        } = self;

        if files.is_empty() {
            return Err(OverlayArgsError::NoImages);
        }

        let centre_x = centre_x
            .as_deref()
            .map(parse_position)
            .transpose()
            .map_err(|err| OverlayArgsError::Parse {
                arg: "centre x",
                err,
            })?;
        let centre_y = centre_y
            .as_deref()
            .map(parse_position)
            .transpose()
            .map_err(|err| OverlayArgsError::Parse {
                arg: "centre y",
                err,
            })?;
        let radius = radius
            .as_deref()
            .map(parse_value)
            .transpose()
            .map_err(|err| OverlayArgsError::Parse { arg: "radius", err })?;

        let (phase, phase_source) = match phase_arg {
            Some(p) => {
                if date.is_some() {
                    "Ignoring the date, because a phase was given".warn();
                }
                let phase =
                    parse_fraction(&p).map_err(|err| OverlayArgsError::Parse { arg: "phase", err })?;
                (phase, Cow::Borrowed("given"))
            }
            None => {
                let epoch = parse_date(date.as_deref())?;
                (phase(epoch), Cow::Owned(format!("at {epoch}")))
            }
        };

        let mut colours = RenderColours::default();
        for (arg, value, colour) in [
            ("grid", grid_colour, &mut colours.grid),
            ("grid label", grid_label_colour, &mut colours.grid_label),
            ("phase", phase_colour, &mut colours.phase),
            ("mare", mare_colour, &mut colours.mare_label),
            ("crater", crater_colour, &mut colours.crater_label),
            ("shadow", shadow_colour, &mut colours.shadow),
        ] {
            if let Some(value) = value {
                *colour = value
                    .parse::<Colour>()
                    .map_err(|err| OverlayArgsError::Colour { arg, err })?;
            }
        }

        let policy = if strict_catalog {
            MissingResourcePolicy::Error
        } else {
            MissingResourcePolicy::Ignore
        };
        let mut catalog = FeatureCatalog::new().with_policy(policy);
        if let Some(dir) = catalog_dir {
            catalog = catalog.with_directory(dir);
        }
        if !no_maria {
            catalog.load_maria()?;
        }
        match min_crater_diameter {
            Some(min) => catalog.load_craters(|p| p.diameter_km > min)?,
            None => catalog.load_visible_craters()?,
        };

        Ok(OverlayParams {
            files,
            centre_x,
            centre_y,
            radius,
            rotation_deg: rotation.unwrap_or(0.0),
            libration_latitude_deg: libration_latitude.unwrap_or(0.0),
            libration_longitude_deg: libration_longitude.unwrap_or(0.0),
            phase,
            phase_source,
            stroke_width,
            colours,
            output_suffix: output_suffix.unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_string()),
            catalog,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), MoonmapError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;
        display_warnings();
        params.display_info();

        let jobs = params.plan()?;
        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.draw(&jobs)?;
        Ok(())
    }
}

/// Overlay arguments that have been parsed, but not yet applied to any image.
#[derive(Debug)]
struct OverlayParams {
    files: Vec<PathBuf>,
    centre_x: Option<(i32, PositionFormat)>,
    centre_y: Option<(i32, PositionFormat)>,
    radius: Option<(f64, ValueFormat)>,
    rotation_deg: f64,
    libration_latitude_deg: f64,
    libration_longitude_deg: f64,
    phase: f64,
    /// How the phase was arrived at, for reporting.
    phase_source: Cow<'static, str>,
    stroke_width: Option<f64>,
    colours: RenderColours,
    output_suffix: String,
    catalog: FeatureCatalog,
}

/// An image and how to draw on it.
#[derive(Debug)]
struct OverlayJob {
    input: PathBuf,
    output: PathBuf,
    config: ProjectionConfig,
}

impl OverlayParams {
    /// The projection for an image with the given dimensions.
    fn config_for(&self, width: u32, height: u32) -> ProjectionConfig {
        let (default_x, default_y) = default_centre(width, height);
        let resolve = |position: Option<(i32, PositionFormat)>, default: i32| match position {
            Some((n, PositionFormat::Absolute)) => n,
            Some((n, PositionFormat::Offset)) => default + n,
            None => default,
        };
        let radius = match self.radius {
            Some((percent, ValueFormat::Percent)) => {
                radius_from_fraction(width, height, percent / 100.0)
            }
            Some((pixels, ValueFormat::NoUnit)) => pixels as i32,
            None => default_radius(width, height),
        };

        ProjectionConfig {
            centre_x: resolve(self.centre_x, default_x),
            centre_y: resolve(self.centre_y, default_y),
            radius,
            rotation_deg: self.rotation_deg,
            libration_latitude_deg: self.libration_latitude_deg,
            libration_longitude_deg: self.libration_longitude_deg,
            phase: self.phase,
            stroke_width: self
                .stroke_width
                .unwrap_or_else(|| default_stroke_width(width, height)),
            colours: self.colours,
        }
    }

    fn display_info(&self) {
        let mut printer = InfoPrinter::new("Overlay".into());
        let num_files = self.files.len();
        printer.push_line(
            format!(
                "{num_files} image{}",
                if num_files == 1 { "" } else { "s" }
            )
            .into(),
        );
        printer.push_block(vec![
            format!("Phase: {} ({})", self.phase, self.phase_source).into(),
            format!("Rotation: {}°", self.rotation_deg).into(),
            format!(
                "Libration: {}° latitude, {}° longitude",
                self.libration_latitude_deg, self.libration_longitude_deg
            )
            .into(),
        ]);
        let mut catalog_block: Vec<Cow<'static, str>> = self
            .catalog
            .counts()
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(kind, count)| format!("{count} {kind} labels").into())
            .collect();
        if catalog_block.is_empty() {
            catalog_block.push("No catalog labels".into());
        }
        printer.push_block(catalog_block);
        printer.push_line(format!("Output suffix: {}", self.output_suffix).into());
        printer.display();
    }

    /// Work out (and check) the projection for every image before anything
    /// is drawn. Only image headers are read here.
    fn plan(&self) -> Result<Vec<OverlayJob>, MoonmapError> {
        let mut printer = InfoPrinter::new("Images".into());
        let mut jobs = Vec::with_capacity(self.files.len());
        for input in &self.files {
            let (width, height) =
                image::image_dimensions(input).map_err(|err| OverlayError::ImageRead {
                    file: input.clone(),
                    err,
                })?;
            let config = self.config_for(width, height);
            config
                .validate()
                .map_err(|err| OverlayArgsError::InvalidConfig {
                    file: input.clone(),
                    err,
                })?;
            let output = output_path(input, &self.output_suffix);
            printer.push_block(vec![
                format!("{}: {width}x{height}", input.display()).into(),
                format!(
                    "disk centre ({}, {}), radius {} px, stroke width {} px",
                    config.centre_x, config.centre_y, config.radius, config.stroke_width
                )
                .into(),
                format!("-> {}", output.display()).into(),
            ]);
            jobs.push(OverlayJob {
                input: input.clone(),
                output,
                config,
            });
        }
        printer.display();
        Ok(jobs)
    }

    fn draw(&self, jobs: &[OverlayJob]) -> Result<(), MoonmapError> {
        let draw_target = if PROGRESS_BARS.load() && jobs.len() > 1 {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        };
        let style = ProgressStyle::default_bar()
            .template(
                "{msg:17}: [{wide_bar:.blue}] {pos:2}/{len:2} images ({elapsed_precise}<{eta_precise})",
            )
            .map_err(|e| MoonmapError::Generic(e.to_string()))?
            .progress_chars("=> ");
        let progress = ProgressBar::with_draw_target(Some(jobs.len() as u64), draw_target)
            .with_style(style)
            .with_position(0)
            .with_message("Drawing overlays");

        for job in jobs {
            debug!("Reading {}", job.input.display());
            let image = image::open(&job.input)
                .map_err(|err| OverlayError::ImageRead {
                    file: job.input.clone(),
                    err,
                })?
                .to_rgb8();
            let overlaid =
                render(&image, &job.config, &self.catalog).map_err(OverlayError::from)?;

            if job.output.exists() {
                warn!("Overwriting {}", job.output.display());
            }
            overlaid
                .save(&job.output)
                .map_err(|err| OverlayError::ImageWrite {
                    file: job.output.clone(),
                    err,
                })?;
            info!("Wrote {}", job.output.display());
            progress.inc(1);
        }
        progress.finish_with_message("Drawn overlays");

        Ok(())
    }
}

/// The output file for an input image: the whole input path (extension
/// included) with the suffix and ".png" appended.
fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(suffix);
    name.push(".png");
    PathBuf::from(name)
}
