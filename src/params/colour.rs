// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Colours used when drawing an overlay.

use std::{fmt, str::FromStr};

use plotters::style::RGBAColor;
use thiserror::Error;

/// An 8-bit-per-channel colour with its own alpha. An alpha of 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const GREEN: Colour = Colour::rgb(0, 255, 0);
    pub const YELLOW: Colour = Colour::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Scale each colour channel by 0.7, keeping the alpha.
    pub fn darker(self) -> Colour {
        let scale = |c: u8| (f64::from(c) * 0.7) as u8;
        Colour {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// The alpha as a fraction in [0, 1].
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<Colour> for RGBAColor {
    fn from(c: Colour) -> RGBAColor {
        RGBAColor(c.r, c.g, c.b, c.opacity())
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ColourParseError {
    #[error("Colour '{0}' must be 6 or 8 hexadecimal digits (#RRGGBB or #RRGGBBAA)")]
    BadLength(String),

    #[error("Colour '{0}' contains a non-hexadecimal digit")]
    NotHex(String),
}

impl FromStr for Colour {
    type Err = ColourParseError;

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Colour, ColourParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !matches!(hex.chars().count(), 6 | 8) {
            return Err(ColourParseError::BadLength(s.to_string()));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColourParseError::NotHex(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ColourParseError::NotHex(s.to_string()))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Colour {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

/// The six colours of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderColours {
    /// The disk boundary and the grid lines.
    pub grid: Colour,

    /// The latitude and longitude labels of the grid.
    pub grid_label: Colour,

    /// The terminator line.
    pub phase: Colour,

    pub mare_label: Colour,

    /// Crater labels and their markers.
    pub crater_label: Colour,

    /// Drawn underneath every label.
    pub shadow: Colour,
}

impl Default for RenderColours {
    fn default() -> Self {
        let dark_green = Colour::GREEN.darker().darker();
        Self {
            grid: dark_green,
            grid_label: dark_green,
            phase: Colour::GREEN,
            mare_label: Colour::GREEN,
            crater_label: Colour::YELLOW,
            shadow: Colour::BLACK,
        }
    }
}
