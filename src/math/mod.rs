// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


/// One-dimensional piecewise-linear interpolation of the samples `(xp, fp)`
/// at `x`.
///
/// `xp` must be strictly increasing and the same length as `fp`; neither may
/// be empty. Values of `x` below `xp[0]` get `fp[0]` and values above the last
/// `xp` get the last `fp`, i.e. the interpolant is flat outside the sampled
/// range. A NaN `x` gives NaN.
///
/// # Examples
///
/// `assert_abs_diff_eq!(interp(1.5, &[1.0, 2.0], &[10.0, 20.0]), 15.0);`
pub(crate) fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert!(!xp.is_empty());
    debug_assert_eq!(xp.len(), fp.len());

    if x.is_nan() {
        return f64::NAN;
    }

    let last = xp.len() - 1;
    if x < xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // The index of the last sample not greater than `x`. The checks above
    // guarantee that `j + 1` is a valid index.
    let j = xp.partition_point(|&v| v <= x) - 1;
    if x == xp[j] {
        return fp[j];
    }
    let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
    slope * (x - xp[j]) + fp[j]
}
