// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to plot beams.

mod error;

pub(crate) use error::BeamPlotError;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, BeamSamplingArgs, ARG_FILE_HELP};
use crate::cli::KatbeamError;

const DEFAULT_OUTPUT_FILENAME: &str = "beam.png";

lazy_static::lazy_static! {
    static ref OUTPUT_HELP: String =
        format!("The PNG file to write the plot to. Default: {DEFAULT_OUTPUT_FILENAME}");
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct BeamPlotArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "beam")]
    #[serde(default)]
    pub(super) sampling_args: BeamSamplingArgs,
}

impl BeamPlotArgs {
    /// Consolidate the command-line and file arguments, preferring the
    /// command-line ones.
    pub(super) fn merge(self) -> Result<BeamPlotArgs, KatbeamError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let BeamPlotArgs {
                args_file: _,
                output,
                sampling_args,
            } = unpack_arg_file!(arg_file);

            Ok(BeamPlotArgs {
                args_file: None,
                output: cli_args.output.or(output),
                sampling_args: cli_args.sampling_args.merge(sampling_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    #[cfg(not(feature = "plotting"))]
    pub(super) fn run(self, _dry_run: bool) -> Result<(), KatbeamError> {
        // Plotting is an optional feature. This is because it doesn't look
        // possible to statically compile the C dependencies needed for
        // plotting. If the "plotting" feature isn't available, warn the user
        // that they'll need to compile katbeam from source.
        Err(KatbeamError::from(BeamPlotError::NoPlottingFeature))
    }

    #[cfg(feature = "plotting")]
    pub(super) fn run(self, dry_run: bool) -> Result<(), KatbeamError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let BeamPlotArgs {
            args_file: _,
            output,
            sampling_args,
        } = self;

        let sampling = sampling_args.parse()?;
        let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME));
        info!("Plotting to {}", output.display());
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        plotting::plot_beam(&sampling, &output)?;
        info!("Wrote {}", output.display());
        Ok(())
    }
}

#[cfg(feature = "plotting")]
mod plotting {
    use std::path::Path;

    use log::debug;
    use plotters::prelude::*;
    use thiserror::Error;

    use super::BeamPlotError;
    use crate::cli::common::BeamSampling;

    /// The number of X pixels on the plots.
    const X_PIXELS: u32 = 1100;
    /// The number of Y pixels on the plots.
    const Y_PIXELS: u32 = 1000;
    /// The width of the colour bar, including its labels.
    const COLOUR_BAR_PIXELS: u32 = 150;

    /// The title of a beam plot.
    pub(super) fn title(sampling: &BeamSampling) -> String {
        format!(
            "{} pol beam for {} at {}MHz",
            sampling.pol,
            sampling.beam.name(),
            sampling.freq_mhz
        )
    }

    /// Map a value in `[0, 1]` to a colour, from blue through to red. Values
    /// that aren't finite are drawn grey.
    pub(super) fn colour(normalised: f64) -> HSLColor {
        if !normalised.is_finite() {
            return HSLColor(0.0, 0.0, 0.86);
        }
        let n = normalised.clamp(0.0, 1.0);
        HSLColor(2.0 / 3.0 * (1.0 - n), 1.0, 0.5)
    }

    pub(super) fn plot_beam(sampling: &BeamSampling, output: &Path) -> Result<(), BeamPlotError> {
        let grid = sampling.evaluate()?;
        let margin = sampling.margin();
        let half = sampling.extent_deg / 2.0;
        let step = sampling.extent_deg / (sampling.num_pixels - 1) as f64;

        let (min, max) = grid
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });
        let (min, max) = if min <= max { (min, max) } else { (0.0, 1.0) };
        let range = if max > min { max - min } else { 1.0 };
        debug!("Beam values range from {min} to {max}");

        let root_area = BitMapBackend::new(output, (X_PIXELS, Y_PIXELS)).into_drawing_area();
        root_area
            .fill(&WHITE)
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;
        let (beam_area, bar_area) =
            root_area.split_horizontally((X_PIXELS - COLOUR_BAR_PIXELS) as i32);

        let mut cc = ChartBuilder::on(&beam_area)
            .caption(title(sampling), ("sans-serif", 32))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                -half - step / 2.0..half + step / 2.0,
                -half - step / 2.0..half + step / 2.0,
            )
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;
        cc.configure_mesh()
            .disable_mesh()
            .x_desc("deg")
            .y_desc("deg")
            .label_style(("sans-serif", 20))
            .draw()
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;

        // Rows of the grid are y offsets, columns are x offsets.
        cc.draw_series(grid.indexed_iter().map(|((row, col), &v)| {
            let (x, y) = (margin[col], margin[row]);
            Rectangle::new(
                [
                    (x - step / 2.0, y - step / 2.0),
                    (x + step / 2.0, y + step / 2.0),
                ],
                colour((v - min) / range).filled(),
            )
        }))
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

        // The colour bar.
        let mut bar = ChartBuilder::on(&bar_area)
            .margin_top(62)
            .margin_bottom(65)
            .margin_right(15)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..1.0, min..min + range)
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;
        bar.configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .label_style(("sans-serif", 18))
            .draw()
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;
        const NUM_BAR_STEPS: usize = 256;
        bar.draw_series((0..NUM_BAR_STEPS).map(|i| {
            let lower = i as f64 / NUM_BAR_STEPS as f64;
            let upper = (i + 1) as f64 / NUM_BAR_STEPS as f64;
            Rectangle::new(
                [(0.0, min + lower * range), (1.0, min + upper * range)],
                colour(lower).filled(),
            )
        }))
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

        root_area
            .present()
            .map_err(|e| DrawError::Plotters(Box::new(e)))?;
        Ok(())
    }

    #[derive(Error, Debug)]
    pub(crate) enum DrawError {
        #[error("Error from the plotters library: {0}")]
        Plotters(Box<dyn std::error::Error>),
    }
}
