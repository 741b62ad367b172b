// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Things shared by the `moonmap` subcommands: argument files, help texts and
//! date handling.

mod printers;

pub(super) use printers::{display_warnings, InfoPrinter, Warn};

use std::str::FromStr;

use hifitime::Epoch;
use itertools::Itertools;
use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    catalog::POINT_KINDS_COMMA_SEPARATED,
    constants::{DEFAULT_OUTPUT_SUFFIX, DEFAULT_RADIUS_FRACTION},
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref DATE_HELP: String =
        "The date and time used to derive the phase, e.g. \"2024-04-08T18:17:00 UTC\". Default: now".to_string();

    pub(super) static ref RADIUS_HELP: String =
        format!("The radius of the lunar disk, in pixels or as a percentage of half the shorter image dimension (e.g. 75%). Default: {}%", DEFAULT_RADIUS_FRACTION * 100.0);

    pub(super) static ref OUTPUT_SUFFIX_HELP: String =
        format!("Appended to each input filename to make the output filename, which always ends in .png. Default: {DEFAULT_OUTPUT_SUFFIX}");

    pub(super) static ref POINT_KIND_HELP: String =
        format!("The kind of points in the catalog files. Valid kinds are: {}. Default: crater", *POINT_KINDS_COMMA_SEPARATED);
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(MoonmapError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(MoonmapError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(MoonmapError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

#[derive(Error, Debug)]
pub(crate) enum DateArgError {
    #[error("Couldn't parse date '{date}': {err}")]
    Parse { date: String, err: String },

    #[error("Couldn't get the current time: {0}")]
    Now(String),
}

/// Parse a user-supplied date, or use the current time if there isn't one.
/// Dates without a time scale are UTC.
pub(super) fn parse_date(date: Option<&str>) -> Result<Epoch, DateArgError> {
    match date {
        Some(date) => {
            let epoch = Epoch::from_str(date.trim()).map_err(|e| DateArgError::Parse {
                date: date.to_string(),
                err: e.to_string(),
            })?;
            debug!("Using date {epoch}");
            Ok(epoch)
        }
        None => {
            let now = Epoch::now().map_err(|e| DateArgError::Now(e.to_string()))?;
            debug!("No date given; using now ({now})");
            Ok(now)
        }
    }
}
