// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all katbeam-related errors. This should be the *only* error
//! enum that is publicly visible from the command-line interface.

use thiserror::Error;

use super::{beam_plot::BeamPlotError, common::BeamSamplingArgsError};
use crate::{
    beam::BeamError,
    registry::{CalibrationTableError, UnknownModelError},
};

const URL: &str = "https://github.com/ska-sa/katbeam";

/// The *only* publicly visible error from the katbeam binary. Each error
/// message should include the URL, unless it's "generic".
#[derive(Error, Debug)]
pub enum KatbeamError {
    /// An error related to the arguments that describe how to sample a beam.
    #[error("{0}\n\nSee for more info: {URL}#sampling-beams")]
    BeamArgs(String),

    /// An error related to beam-plot.
    #[error("{0}\n\nSee for more info: {URL}#plotting")]
    BeamPlot(String),

    /// An unknown beam model was requested.
    #[error("{0}\n\nSee for more info: {URL}#models")]
    Model(String),

    /// An error related to user-supplied calibration tables.
    #[error("{0}\n\nSee for more info: {URL}#calibration-tables")]
    CalibrationTable(String),

    /// An error related to argument files.
    #[error("{0}\n\nSee for more info: {URL}#argument-files")]
    ArgFile(String),

    /// A generic error that can't be clarified further with documentation, e.g.
    /// IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<BeamSamplingArgsError> for KatbeamError {
    fn from(e: BeamSamplingArgsError) -> Self {
        let s = e.to_string();
        match e {
            BeamSamplingArgsError::NoFreq
            | BeamSamplingArgsError::NonFiniteFreq(_)
            | BeamSamplingArgsError::BadExtent(_)
            | BeamSamplingArgsError::TooFewPixels(_) => Self::BeamArgs(s),
            BeamSamplingArgsError::TableFile { .. } => Self::CalibrationTable(s),
            BeamSamplingArgsError::Model(e) => Self::from(e),
            BeamSamplingArgsError::Table(e) => Self::from(e),
        }
    }
}

impl From<BeamPlotError> for KatbeamError {
    fn from(e: BeamPlotError) -> Self {
        let s = e.to_string();
        match e {
            #[cfg(not(feature = "plotting"))]
            BeamPlotError::NoPlottingFeature => Self::BeamPlot(s),
            #[cfg(feature = "plotting")]
            BeamPlotError::Draw(_) => Self::BeamPlot(s),
            BeamPlotError::Beam(e) => Self::from(e),
        }
    }
}

impl From<BeamError> for KatbeamError {
    fn from(e: BeamError) -> Self {
        let s = e.to_string();
        match e {
            BeamError::UnknownModel(e) => Self::from(e),
            BeamError::Table(e) => Self::from(e),
            BeamError::IncompatibleShapes { .. } => Self::Generic(s),
        }
    }
}

impl From<UnknownModelError> for KatbeamError {
    fn from(e: UnknownModelError) -> Self {
        Self::Model(e.to_string())
    }
}

impl From<CalibrationTableError> for KatbeamError {
    fn from(e: CalibrationTableError) -> Self {
        Self::CalibrationTable(e.to_string())
    }
}

impl From<std::io::Error> for KatbeamError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for KatbeamError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Generic(format!("Couldn't serialise arguments as toml: {e}"))
    }
}

impl From<log::SetLoggerError> for KatbeamError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Generic(format!("Failed to initialise logging: {e}"))
    }
}
