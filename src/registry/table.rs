// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-frequency beam parameters, and the text format they are tabulated in.
//!
//! A table is nine comma-separated columns: frequency [MHz], then the squints
//! of Hx, Hy, Vx and Vy, then the FWHMs of Hx, Hy, Vx and Vy. The first two
//! lines are the column names and units, and are skipped. Squints and FWHMs
//! are written in arc-minutes but are stored here in degrees.

use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};
use vec1::Vec1;

use super::CalibrationTableError;
use crate::constants::ARCMIN_PER_DEG;

/// The number of header lines at the top of a tabulated calibration table.
const NUM_HEADER_LINES: usize = 2;

/// The number of columns in each row of a tabulated calibration table.
pub const NUM_COLUMNS: usize = 9;

/// A component of a co-polarised beam. The first letter is the feed
/// polarisation, the second the sky axis that a squint or FWHM is measured
/// along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Channel {
    Hx,
    Hy,
    Vx,
    Vy,
}

/// One value for each of the four beam [`Channel`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channels<T> {
    pub hx: T,
    pub hy: T,
    pub vx: T,
    pub vy: T,
}

impl<T> Channels<T> {
    pub fn get(&self, channel: Channel) -> &T {
        match channel {
            Channel::Hx => &self.hx,
            Channel::Hy => &self.hy,
            Channel::Vx => &self.vx,
            Channel::Vy => &self.vy,
        }
    }

    pub fn as_ref(&self) -> Channels<&T> {
        Channels {
            hx: &self.hx,
            hy: &self.hy,
            vx: &self.vx,
            vy: &self.vy,
        }
    }

    /// Apply `f` to each channel, in the order Hx, Hy, Vx, Vy.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Channels<U> {
        Channels {
            hx: f(self.hx),
            hy: f(self.hy),
            vx: f(self.vx),
            vy: f(self.vy),
        }
    }

    /// Iterate over `(channel, value)` pairs, in the order Hx, Hy, Vx, Vy.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &T)> {
        [
            (Channel::Hx, &self.hx),
            (Channel::Hy, &self.hy),
            (Channel::Vx, &self.vx),
            (Channel::Vy, &self.vy),
        ]
        .into_iter()
    }
}

/// Measured beam parameters on a grid of frequencies. All the sequences are
/// the same length and aligned with [`CalibrationTable::freqs_mhz`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationTable {
    /// Strictly increasing [MHz].
    freqs_mhz: Vec1<f64>,

    /// Pointing offsets of the beam centres [degrees].
    squints_deg: Channels<Vec1<f64>>,

    /// Full widths at half maximum; always positive [degrees].
    fwhms_deg: Channels<Vec1<f64>>,
}

impl CalibrationTable {
    /// Create a new [`CalibrationTable`] from values already in degrees. The
    /// lengths, ordering and signs of the inputs are checked.
    pub fn new(
        freqs_mhz: Vec<f64>,
        squints_deg: Channels<Vec<f64>>,
        fwhms_deg: Channels<Vec<f64>>,
    ) -> Result<CalibrationTable, CalibrationTableError> {
        let freqs_mhz = Vec1::try_from_vec(freqs_mhz).map_err(|_| CalibrationTableError::Empty)?;
        let num_freqs = freqs_mhz.len();

        for (i, pair) in freqs_mhz.windows(2).enumerate() {
            // Written this way so that NaNs are also caught.
            if !(pair[1] > pair[0]) {
                return Err(CalibrationTableError::FreqsNotIncreasing {
                    index: i + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        if let Some(&f) = freqs_mhz.iter().find(|f| !f.is_finite()) {
            return Err(CalibrationTableError::NonFiniteFreq(f));
        }

        for (kind, values) in [("squint", &squints_deg), ("FWHM", &fwhms_deg)] {
            for (channel, v) in values.iter() {
                if v.len() != num_freqs {
                    return Err(CalibrationTableError::LengthMismatch {
                        kind,
                        channel,
                        got: v.len(),
                        expected: num_freqs,
                    });
                }
                if let Some((i, &value)) = v.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                    return Err(CalibrationTableError::NonFiniteValue {
                        kind,
                        channel,
                        freq_mhz: freqs_mhz[i],
                        value,
                    });
                }
            }
        }

        for (channel, v) in fwhms_deg.iter() {
            if let Some((i, &fwhm_deg)) = v.iter().enumerate().find(|(_, &v)| v <= 0.0) {
                return Err(CalibrationTableError::NonPositiveFwhm {
                    channel,
                    freq_mhz: freqs_mhz[i],
                    fwhm_deg,
                });
            }
        }

        // All lengths were checked above, so these can't fail.
        let to_vec1 = |v: Vec<f64>| Vec1::try_from_vec(v).expect("length checked against freqs");
        Ok(CalibrationTable {
            freqs_mhz,
            squints_deg: squints_deg.map(to_vec1),
            fwhms_deg: fwhms_deg.map(to_vec1),
        })
    }

    /// Create a new [`CalibrationTable`] from rows of tabulated values, i.e.
    /// frequency [MHz] followed by the four squints and four FWHMs
    /// [arc-minutes].
    pub fn from_arcmin_rows(
        rows: &[[f64; NUM_COLUMNS]],
    ) -> Result<CalibrationTable, CalibrationTableError> {
        let mut freqs_mhz = Vec::with_capacity(rows.len());
        let mut squints: Channels<Vec<f64>> = Channels::default();
        let mut fwhms: Channels<Vec<f64>> = Channels::default();
        for row in rows {
            freqs_mhz.push(row[0]);
            squints.hx.push(row[1] / ARCMIN_PER_DEG);
            squints.hy.push(row[2] / ARCMIN_PER_DEG);
            squints.vx.push(row[3] / ARCMIN_PER_DEG);
            squints.vy.push(row[4] / ARCMIN_PER_DEG);
            fwhms.hx.push(row[5] / ARCMIN_PER_DEG);
            fwhms.hy.push(row[6] / ARCMIN_PER_DEG);
            fwhms.vx.push(row[7] / ARCMIN_PER_DEG);
            fwhms.vy.push(row[8] / ARCMIN_PER_DEG);
        }
        CalibrationTable::new(freqs_mhz, squints, fwhms)
    }

    /// The frequencies that the parameters were measured at [MHz].
    pub fn freqs_mhz(&self) -> &[f64] {
        self.freqs_mhz.as_slice()
    }

    /// The pointing offsets for each channel [degrees].
    pub fn squints_deg(&self) -> Channels<&[f64]> {
        self.squints_deg.as_ref().map(|v| v.as_slice())
    }

    /// The full widths at half maximum for each channel [degrees].
    pub fn fwhms_deg(&self) -> Channels<&[f64]> {
        self.fwhms_deg.as_ref().map(|v| v.as_slice())
    }

    /// The number of tabulated frequencies.
    pub fn len(&self) -> usize {
        self.freqs_mhz.len()
    }

    /// Always false; a table has at least one row.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The lowest and highest tabulated frequencies [MHz].
    pub fn freq_range_mhz(&self) -> (f64, f64) {
        (*self.freqs_mhz.first(), *self.freqs_mhz.last())
    }

    /// Is this frequency inside the tabulated range? Outside it, beam
    /// parameters are held at their values at the nearest edge.
    pub fn covers_freq(&self, freq_mhz: f64) -> bool {
        let (min, max) = self.freq_range_mhz();
        (min..=max).contains(&freq_mhz)
    }
}

/// Parse the text form of a table. The first two lines are headers and are
/// always skipped, even if blank. Blank lines after them are ignored.
impl FromStr for CalibrationTable {
    type Err = CalibrationTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = vec![];
        let lines = s
            .lines()
            .enumerate()
            .skip(NUM_HEADER_LINES)
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());
        for (line_num, line) in lines {
            let mut row = [0.0; NUM_COLUMNS];
            let mut num_columns = 0;
            for (i, value) in line.split(',').map(str::trim).enumerate() {
                if i < NUM_COLUMNS {
                    row[i] = value
                        .parse()
                        .map_err(|_| CalibrationTableError::ParseFloat {
                            line_num,
                            value: value.to_string(),
                        })?;
                }
                num_columns += 1;
            }
            if num_columns != NUM_COLUMNS {
                return Err(CalibrationTableError::WrongNumberOfColumns {
                    line_num,
                    got: num_columns,
                });
            }
            rows.push(row);
        }
        trace!("Parsed {} calibration table rows", rows.len());

        CalibrationTable::from_arcmin_rows(&rows)
    }
}
