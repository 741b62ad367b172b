// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors associated with reading in a feature catalog.
#[derive(Error, Debug)]
pub enum ReadCatalogError {
    #[error("Catalog {source_name} line {line_num}: Expected 4 comma-separated fields (name,diameter,latitude,longitude), got {got}")]
    WrongFieldCount {
        source_name: String,
        line_num: u32,
        got: usize,
    },

    #[error("Catalog {source_name} line {line_num}: Could not parse '{string}' as a float for the {field}")]
    ParseFloat {
        source_name: String,
        line_num: u32,
        field: &'static str,
        string: String,
    },

    #[error("Catalog {source_name} line {line_num}: The point has no name")]
    EmptyName { source_name: String, line_num: u32 },

    #[error("Catalog resource {0} does not exist")]
    MissingResource(String),

    #[error("Catalog {source_name}: {err}")]
    IO {
        source_name: String,
        err: std::io::Error,
    },
}
