// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse user-supplied strings into plain numbers, offsets or
//! percentages.

mod error;
#[cfg(test)]
mod tests;

pub use error::*;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// How a pixel position was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFormat {
    /// An absolute pixel, e.g. "512".
    Absolute,

    /// An offset from some reference pixel, e.g. "+10" or "-3".
    Offset,
}

/// Parse a pixel position. A leading sign makes the position an offset.
pub fn parse_position(s: &str) -> Result<(i32, PositionFormat), UnitParseError> {
    let s = s.trim();
    let number: i32 = s.parse().map_err(|_| UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "pixel position",
    })?;
    if s.starts_with('+') || s.starts_with('-') {
        Ok((number, PositionFormat::Offset))
    } else {
        Ok((number, PositionFormat::Absolute))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum ValueFormat {
    #[strum(serialize = "%")]
    Percent,

    NoUnit,
}

/// Parse a string that may be a percentage. The number is returned as written,
/// i.e. "80%" gives 80, not 0.8.
pub fn parse_value(s: &str) -> Result<(f64, ValueFormat), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, ValueFormat::NoUnit));
    };

    // That didn't work; let's search over our supported formats.
    for value_format in ValueFormat::iter().filter(|&vf| vf != ValueFormat::NoUnit) {
        let value_format_str: &'static str = value_format.into();
        if let Some(prefix) = s.trim().strip_suffix(value_format_str) {
            let number: f64 = match prefix.trim().parse() {
                Ok(n) => n,
                Err(_) => return Err(UnitParseError::GotPercentButCantParse(s.to_string())),
            };
            return Ok((number, value_format));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "number or percentage",
    })
}

/// Parse a string that may be a percentage into a fraction, so "80%" and "0.8"
/// both give 0.8.
pub fn parse_fraction(s: &str) -> Result<f64, UnitParseError> {
    match parse_value(s)? {
        (percent, ValueFormat::Percent) => Ok(percent / 100.0),
        (fraction, ValueFormat::NoUnit) => Ok(fraction),
    }
}
