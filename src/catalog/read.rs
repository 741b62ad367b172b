// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parsing of catalog text.
//!
//! Each non-blank line is `name,diameter,latitude,longitude`. There is no
//! header and no quoting, so names can't contain commas. Longitudes in the text
//! are positive toward the west; they are negated here so that
//! [`PointOfInterest::longitude_deg`] is positive toward the east.

use std::io::BufRead;

use log::trace;

use super::{error::ReadCatalogError, PointKind, PointOfInterest};

/// Parse a buffer containing catalog text. Any malformed line fails the whole
/// buffer; nothing is returned for the lines that did parse.
pub(crate) fn parse_catalog<T: BufRead>(
    buf: &mut T,
    kind: PointKind,
    source_name: &str,
) -> Result<Vec<PointOfInterest>, ReadCatalogError> {
    let mut line = String::new();
    let mut line_num: u32 = 0;
    let mut points = vec![];

    let parse_float = |string: &str, field: &'static str, line_num: u32| -> Result<f64, ReadCatalogError> {
        string
            .trim()
            .parse()
            .map_err(|_| ReadCatalogError::ParseFloat {
                source_name: source_name.to_string(),
                line_num,
                field,
                string: string.to_string(),
            })
    };

    loop {
        line.clear();
        let n = buf
            .read_line(&mut line)
            .map_err(|err| ReadCatalogError::IO {
                source_name: source_name.to_string(),
                err,
            })?;
        if n == 0 {
            break;
        }
        line_num += 1;

        let record = line.trim_end_matches(&['\n', '\r'][..]);
        if record.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = record.split(',').collect();
        let [name, diameter, latitude, longitude] = fields[..] else {
            return Err(ReadCatalogError::WrongFieldCount {
                source_name: source_name.to_string(),
                line_num,
                got: fields.len(),
            });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ReadCatalogError::EmptyName {
                source_name: source_name.to_string(),
                line_num,
            });
        }
        let point = PointOfInterest {
            kind,
            name: name.to_string(),
            diameter_km: parse_float(diameter, "diameter", line_num)?,
            latitude_deg: parse_float(latitude, "latitude", line_num)?,
            longitude_deg: -parse_float(longitude, "longitude", line_num)?,
        };
        trace!("{source_name} line {line_num}: {point:?}");
        points.push(point);
    }

    Ok(points)
}
