// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The analytic beam shape.
//!
//! A cosine aperture illumination gives a far-field pattern of
//! `cos(pi r) / (1 - 4 r^2)` (Condon & Ransom, Essential Radio Astronomy,
//! 2016, p. 83). This is used as a simplified model of the co-polarised
//! mainlobes; sidelobe levels are not expected to be accurate.

use std::f64::consts::PI;

use crate::constants::TAPER_SCALE;

/// The cosine aperture taper. `r` is normalised such that the half-power point
/// occurs at `r = 0.5`, i.e. `cosine_taper(0.0) == 1.0` and
/// `cosine_taper(0.5) == sqrt(0.5)`.
///
/// The result is signed; sidelobes are negative.
///
/// The denominator vanishes at `r = 1 / (2 * TAPER_SCALE)` (~0.4205). The
/// singularity is removable (the limit is pi/4) but is not special-cased; a
/// radius that lands exactly on it gives an infinity, and radii around it
/// are well behaved.
#[inline]
pub fn cosine_taper(r: f64) -> f64 {
    let rr = r * TAPER_SCALE;
    (PI * rr).cos() / (1.0 - 4.0 * (rr * rr))
}

/// The beam pattern of one co-polarised feed at the sky offset `(x, y)`. The
/// beam centre is at `(squint_x, squint_y)` and its widths along each axis
/// are `fwhm_x` and `fwhm_y`. All arguments are in degrees.
#[inline]
pub fn pattern(x: f64, y: f64, squint_x: f64, squint_y: f64, fwhm_x: f64, fwhm_y: f64) -> f64 {
    let dx = (x - squint_x) / fwhm_x;
    let dy = (y - squint_y) / fwhm_y;
    cosine_taper((dx * dx + dy * dy).sqrt())
}

/// Combine co-polarised amplitudes into a Stokes I (total power) response.
/// This is never negative.
#[inline]
pub fn stokes_i(hh: f64, vv: f64) -> f64 {
    0.5 * (hh.abs().powi(2) + vv.abs().powi(2))
}
