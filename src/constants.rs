// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision.
 */

/// The radial scaling applied inside the cosine taper, such that a normalised
/// radius of 0.5 lands on the half-power point. This is the root of
/// `cos(pi * k / 2) / (1 - k^2) = sqrt(0.5)` near 1, found with a Newton solve
/// to a tolerance of 1e-15.
pub const TAPER_SCALE: f64 = 1.1889647809329453;

/// Calibration tables list squints and FWHMs in arc-minutes; there are this
/// many arc-minutes in a degree.
pub const ARCMIN_PER_DEG: f64 = 60.0;

/// The model used when one isn't specified.
pub const DEFAULT_MODEL_NAME: &str = "MKAT-AA-L-JIM-2020";

/// The default side length of a sampled beam grid [degrees].
pub const DEFAULT_BEAM_EXTENT_DEG: f64 = 10.0;

/// The default number of pixels along each side of a sampled beam grid.
pub const DEFAULT_NUM_PIXELS: usize = 128;
