// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arguments for sampling a beam over a square patch of sky.

#[cfg(test)]
mod tests;

use std::{borrow::Cow, path::PathBuf, str::FromStr};

use clap::Parser;
use log::debug;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{InfoPrinter, Warn, DEFAULT_POL, EXTENT_HELP, MODEL_HELP, NUM_PIXELS_HELP, POL_HELP};
use crate::{
    beam::{BeamError, BeamModel, Pol},
    constants::{DEFAULT_BEAM_EXTENT_DEG, DEFAULT_MODEL_NAME, DEFAULT_NUM_PIXELS},
    registry::{CalibrationTable, CalibrationTableError, UnknownModelError},
};

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct BeamSamplingArgs {
    #[clap(short, long, help = MODEL_HELP.as_str(), help_heading = "BEAM")]
    pub(crate) model: Option<String>,

    /// Use the squints and FWHMs in this file instead of those of a built-in
    /// model. The file must have two header lines followed by comma-separated
    /// rows of frequency [MHz], then the Hx, Hy, Vx and Vy squints and the Hx,
    /// Hy, Vx and Vy FWHMs [arcmin]. If --model is also given, it is used as
    /// the name of this beam.
    #[clap(long, parse(from_os_str), help_heading = "BEAM")]
    pub(crate) calibration_table: Option<PathBuf>,

    #[clap(short, long, help = POL_HELP.as_str(), help_heading = "BEAM")]
    pub(crate) pol: Option<Pol>,

    /// The frequency to evaluate the beam at [MHz]. Frequencies outside of the
    /// model's tabulated range use the parameters at the nearest edge.
    #[clap(short, long, allow_hyphen_values = true, help_heading = "BEAM")]
    pub(crate) freq_mhz: Option<f64>,

    #[clap(short, long, help = EXTENT_HELP.as_str(), help_heading = "SAMPLING")]
    pub(crate) extent: Option<f64>,

    #[clap(short, long, help = NUM_PIXELS_HELP.as_str(), help_heading = "SAMPLING")]
    pub(crate) num_pixels: Option<usize>,
}

impl BeamSamplingArgs {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            model: self.model.or(other.model),
            calibration_table: self.calibration_table.or(other.calibration_table),
            pol: self.pol.or(other.pol),
            freq_mhz: self.freq_mhz.or(other.freq_mhz),
            extent: self.extent.or(other.extent),
            num_pixels: self.num_pixels.or(other.num_pixels),
        }
    }

    pub(crate) fn parse(self) -> Result<BeamSampling, BeamSamplingArgsError> {
        let Self {
            model,
            calibration_table,
            pol,
            freq_mhz,
            extent,
            num_pixels,
        } = self;

        let freq_mhz = freq_mhz.ok_or(BeamSamplingArgsError::NoFreq)?;
        if !freq_mhz.is_finite() {
            return Err(BeamSamplingArgsError::NonFiniteFreq(freq_mhz));
        }
        let extent_deg = extent.unwrap_or(DEFAULT_BEAM_EXTENT_DEG);
        // Also catches NaN.
        if !(extent_deg > 0.0 && extent_deg.is_finite()) {
            return Err(BeamSamplingArgsError::BadExtent(extent_deg));
        }
        let num_pixels = num_pixels.unwrap_or(DEFAULT_NUM_PIXELS);
        if num_pixels < 2 {
            return Err(BeamSamplingArgsError::TooFewPixels(num_pixels));
        }
        let pol = pol.unwrap_or(DEFAULT_POL);

        let mut printer = InfoPrinter::new("Beam info");
        let beam = match calibration_table {
            Some(file) => {
                debug!("Reading calibration table {}", file.display());
                let contents = std::fs::read_to_string(&file).map_err(|err| {
                    BeamSamplingArgsError::TableFile {
                        file: file.clone(),
                        err,
                    }
                })?;
                let name = model.unwrap_or_else(|| {
                    file.file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.display().to_string())
                });
                let beam = BeamModel::from_table(name, CalibrationTable::from_str(&contents)?);
                printer.push_line(format!("Model: {} (from {})", beam.name(), file.display()));
                beam
            }
            None => {
                let beam = BeamModel::new(model.as_deref().unwrap_or(DEFAULT_MODEL_NAME))?;
                printer.push_line(format!("Model: {}", beam.name()));
                beam
            }
        };

        let (min_freq, max_freq) = beam.table().freq_range_mhz();
        printer.push_line(format!(
            "Tabulated frequencies: {min_freq} to {max_freq} MHz ({} rows)",
            beam.table().len()
        ));
        if !beam.table().covers_freq(freq_mhz) {
            let warning: Vec<Cow<'static, str>> = vec![
                format!(
                    "{freq_mhz} MHz is outside of {}'s tabulated frequencies ({min_freq} to {max_freq} MHz).",
                    beam.name()
                )
                .into(),
                "The beam parameters at the nearest tabulated frequency are used.".into(),
            ];
            warning.warn();
        }
        printer.push_block(vec![
            format!("Polarisation: {pol}").into(),
            format!("Frequency: {freq_mhz} MHz").into(),
        ]);
        printer.push_line(format!(
            "Sampling {num_pixels}x{num_pixels} points over {extent_deg}x{extent_deg} degrees"
        ));
        printer.display();

        Ok(BeamSampling {
            beam,
            pol,
            freq_mhz,
            extent_deg,
            num_pixels,
        })
    }
}

/// A beam, and where and how to sample it.
#[derive(Debug, Clone)]
pub(crate) struct BeamSampling {
    pub(crate) beam: BeamModel,
    pub(crate) pol: Pol,
    pub(crate) freq_mhz: f64,
    pub(crate) extent_deg: f64,
    pub(crate) num_pixels: usize,
}

impl BeamSampling {
    /// The sky offsets sampled along each axis [degrees].
    pub(crate) fn margin(&self) -> Array1<f64> {
        let half = self.extent_deg / 2.0;
        Array1::linspace(-half, half, self.num_pixels)
    }

    /// Evaluate the beam over the square grid of the [`BeamSampling::margin`]
    /// offsets. Rows correspond to `y`, columns to `x`.
    pub(crate) fn evaluate(&self) -> Result<Array2<f64>, BeamError> {
        let margin = self.margin();
        let x = margin.view().insert_axis(Axis(0));
        let y = margin.view().insert_axis(Axis(1));
        self.beam.response_array(self.pol, x, y, self.freq_mhz)
    }
}

#[derive(Error, Debug)]
pub(crate) enum BeamSamplingArgsError {
    #[error("No frequency was supplied")]
    NoFreq,

    #[error("The frequency must be finite, but got {0} MHz")]
    NonFiniteFreq(f64),

    #[error("The sampled extent must be a positive number of degrees, but got {0}")]
    BadExtent(f64),

    #[error("At least 2 pixels are needed along each side, but got {0}")]
    TooFewPixels(usize),

    #[error("Couldn't read calibration table file '{}': {err}", file.display())]
    TableFile {
        file: PathBuf,
        err: std::io::Error,
    },

    #[error(transparent)]
    Model(#[from] UnknownModelError),

    #[error(transparent)]
    Table(#[from] CalibrationTableError),
}
