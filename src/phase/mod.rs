// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The phase of the Moon for a given instant.
//!
//! This is a linear approximation: the phase advances uniformly over a mean
//! synodic month, counted from a reference new moon. The eccentricity of the
//! lunar orbit is not modelled, so results can be off by several hours.


use hifitime::Epoch;

use crate::constants::{DAYSEC, LUNAR_EPOCH_UTC, SYNODIC_MONTH_DAYS};

/// The reference new moon.
pub fn lunar_epoch() -> Epoch {
    let (y, m, d, h, min, s) = LUNAR_EPOCH_UTC;
    Epoch::from_gregorian_utc(y, m, d, h, min, s, 0)
}

/// The phase at `epoch`, in [-1, 1). -1 is a new moon, 0 a full moon, and the
/// phase then increases toward the next new moon.
pub fn phase(epoch: Epoch) -> f64 {
    // Unix seconds ignore leap seconds, so whole days since the reference are
    // whole multiples of a day.
    let delta_days = (epoch.to_unix_seconds() - lunar_epoch().to_unix_seconds()) / DAYSEC;
    let half = SYNODIC_MONTH_DAYS / 2.0;
    let residual = delta_days.rem_euclid(SYNODIC_MONTH_DAYS);
    ((residual - half) / half).clamp(-1.0, 1.0)
}

/// [`phase`] as a percentage in [-100, 100).
pub fn phase_percent(epoch: Epoch) -> f64 {
    phase(epoch) * 100.0
}
