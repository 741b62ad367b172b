// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify feature catalog files.

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use log::info;

use super::common::POINT_KIND_HELP;
use crate::{
    catalog::{is_visible_crater, read_catalog_file, PointKind, POINT_KINDS_COMMA_SEPARATED},
    MoonmapError,
};

/// Verify that feature catalogs can be read by moonmap.
#[derive(Parser, Debug)]
pub struct CatalogVerifyArgs {
    /// Path to the catalog(s) to be verified.
    #[clap(name = "CATALOGS", required = true, parse(from_os_str))]
    catalogs: Vec<PathBuf>,

    #[clap(short, long, help = POINT_KIND_HELP.as_str())]
    kind: Option<String>,
}

impl CatalogVerifyArgs {
    /// Read and print stats out for each input catalog. If a catalog couldn't
    /// be read, print the error, and continue trying to read the other
    /// catalogs. Any unreadable catalog makes this fail overall.
    pub fn run(&self) -> Result<(), MoonmapError> {
        let kind = match self.kind.as_deref() {
            None => PointKind::Crater,
            Some(k) => PointKind::from_str(&k.to_lowercase()).map_err(|_| {
                MoonmapError::Args(format!(
                    "Unrecognised catalog kind '{k}'. Valid kinds are: {}",
                    *POINT_KINDS_COMMA_SEPARATED
                ))
            })?,
        };

        let mut num_failed = 0;
        for catalog in &self.catalogs {
            info!("{}:", catalog.display());

            let points = match read_catalog_file(catalog, kind) {
                Ok(points) => points,
                Err(e) => {
                    info!("{}", e);
                    info!("");
                    num_failed += 1;
                    continue;
                }
            };
            info!("    {} {kind} points", points.len());
            if kind == PointKind::Crater {
                let num_visible = points.iter().filter(|p| is_visible_crater(p)).count();
                info!("    {num_visible} on the list of well-known craters");
            }
            if let Some(largest) = points
                .iter()
                .max_by(|a, b| a.diameter_km.total_cmp(&b.diameter_km))
            {
                info!(
                    "    Largest: {} ({} km)",
                    largest.name, largest.diameter_km
                );
            }
            info!("");
        }

        if num_failed > 0 {
            return Err(MoonmapError::Catalog(format!(
                "{num_failed} of {} catalogs could not be read",
                self.catalogs.len()
            )));
        }
        Ok(())
    }
}
