// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print the phase of the Moon.

use clap::Parser;
use log::info;

use super::common::{parse_date, DATE_HELP};
use crate::{phase::phase, MoonmapError};

/// Print the phase of the Moon at a date, between -1 (new) and 1. A full moon
/// is 0.
#[derive(Parser, Debug)]
pub struct PhaseArgs {
    #[clap(short, long, help = DATE_HELP.as_str())]
    date: Option<String>,
}

impl PhaseArgs {
    pub fn run(&self) -> Result<(), MoonmapError> {
        let epoch = parse_date(self.date.as_deref())?;
        info!("Phase: {}", phase(epoch));
        Ok(())
    }
}
