// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with calibration tables and the model registry.

use thiserror::Error;

use super::Channel;

/// A model name was requested that isn't registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown model '{name}', available ones are: {}", .valid.join(", "))]
pub struct UnknownModelError {
    /// The requested name.
    pub name: String,

    /// All registered model names.
    pub valid: Vec<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationTableError {
    #[error("The calibration table has no rows")]
    Empty,

    #[error("Line {line_num} of the calibration table has {got} columns; expected {}", super::NUM_COLUMNS)]
    WrongNumberOfColumns { line_num: usize, got: usize },

    #[error("Couldn't parse '{value}' on line {line_num} of the calibration table as a number")]
    ParseFloat { line_num: usize, value: String },

    #[error("Calibration table frequencies must be strictly increasing, but row {index} has {next} MHz after {prev} MHz")]
    FreqsNotIncreasing { index: usize, prev: f64, next: f64 },

    #[error("Calibration table frequency {0} MHz is not finite")]
    NonFiniteFreq(f64),

    #[error("The {channel} {kind} column has {got} values, but there are {expected} frequencies")]
    LengthMismatch {
        kind: &'static str,
        channel: Channel,
        got: usize,
        expected: usize,
    },

    #[error("The {channel} {kind} at {freq_mhz} MHz is not finite ({value})")]
    NonFiniteValue {
        kind: &'static str,
        channel: Channel,
        freq_mhz: f64,
        value: f64,
    },

    #[error("The {channel} FWHM at {freq_mhz} MHz must be positive, but is {fwhm_deg} degrees")]
    NonPositiveFwhm {
        channel: Channel,
        freq_mhz: f64,
        fwhm_deg: f64,
    },
}
