// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Beam parameters at a particular frequency.

use log::trace;
use ndarray::prelude::*;
use serde::Serialize;

use super::{pattern, stokes_i, Pol};
use crate::{
    math::interp,
    registry::{CalibrationTable, Channels},
};

/// Squints and FWHMs interpolated from a [`CalibrationTable`]. `T` is `f64`
/// for a single frequency, or an array for many.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamParams<T> {
    /// Pointing offsets of the beam centres [degrees].
    pub squint_deg: Channels<T>,

    /// Full widths at half maximum [degrees].
    pub fwhm_deg: Channels<T>,
}

/// Linearly interpolate each channel of `table` independently at `freq_mhz`.
/// Frequencies outside the tabulated range get the parameters of the nearest
/// tabulated frequency.
pub fn interpolate(table: &CalibrationTable, freq_mhz: f64) -> BeamParams<f64> {
    let freqs = table.freqs_mhz();
    let params = BeamParams {
        squint_deg: table.squints_deg().map(|v| interp(freq_mhz, freqs, v)),
        fwhm_deg: table.fwhms_deg().map(|v| interp(freq_mhz, freqs, v)),
    };
    trace!("Beam parameters at {freq_mhz} MHz: {params:?}");
    params
}

/// Like [`interpolate`], but for each element of `freqs_mhz`. Each channel's
/// result has the same shape as `freqs_mhz`.
pub fn interpolate_array<D: Dimension>(
    table: &CalibrationTable,
    freqs_mhz: ArrayView<f64, D>,
) -> BeamParams<Array<f64, D>> {
    let freqs = table.freqs_mhz();
    BeamParams {
        squint_deg: table
            .squints_deg()
            .map(|v| freqs_mhz.mapv(|f| interp(f, freqs, v))),
        fwhm_deg: table
            .fwhms_deg()
            .map(|v| freqs_mhz.mapv(|f| interp(f, freqs, v))),
    }
}

impl BeamParams<f64> {
    /// The H co-polarised beam at `(x_deg, y_deg)`.
    pub fn hh(&self, x_deg: f64, y_deg: f64) -> f64 {
        let Self {
            squint_deg: s,
            fwhm_deg: w,
        } = self;
        pattern(x_deg, y_deg, s.hx, s.hy, w.hx, w.hy)
    }

    /// The V co-polarised beam at `(x_deg, y_deg)`.
    pub fn vv(&self, x_deg: f64, y_deg: f64) -> f64 {
        let Self {
            squint_deg: s,
            fwhm_deg: w,
        } = self;
        pattern(x_deg, y_deg, s.vx, s.vy, w.vx, w.vy)
    }

    /// The Stokes I beam at `(x_deg, y_deg)`.
    pub fn stokes_i(&self, x_deg: f64, y_deg: f64) -> f64 {
        stokes_i(self.hh(x_deg, y_deg), self.vv(x_deg, y_deg))
    }

    pub fn response(&self, pol: Pol, x_deg: f64, y_deg: f64) -> f64 {
        match pol {
            Pol::HH => self.hh(x_deg, y_deg),
            Pol::VV => self.vv(x_deg, y_deg),
            Pol::I => self.stokes_i(x_deg, y_deg),
        }
    }
}
