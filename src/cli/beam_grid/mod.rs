// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sample a beam over a square patch of sky and write the values out.


use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::{debug, info, trace};
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, BeamSampling, BeamSamplingArgs, ARG_FILE_HELP};
use crate::cli::KatbeamError;

const DEFAULT_OUTPUT_FILENAME: &str = "beam_grid.tsv";

lazy_static::lazy_static! {
    static ref OUTPUT_HELP: String =
        format!("The file to write the results to. The file is tab-separated, with each line (1) the x offset [degrees], (2) the y offset [degrees], and (3) the beam response. Default: {DEFAULT_OUTPUT_FILENAME}");
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct BeamGridArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "beam")]
    #[serde(default)]
    pub(super) sampling_args: BeamSamplingArgs,
}

impl BeamGridArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<BeamGridArgs, KatbeamError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let BeamGridArgs {
                args_file: _,
                output,
                sampling_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(BeamGridArgs {
                args_file: None,
                output: cli_args.output.or(output),
                sampling_args: cli_args.sampling_args.merge(sampling_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), KatbeamError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let BeamGridArgs {
            args_file: _,
            output,
            sampling_args,
        } = self;

        let sampling = sampling_args.parse()?;
        let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME));
        info!("Writing beam values to {}", output.display());
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        write_grid(&sampling, &output)?;
        info!("Wrote {}", output.display());
        Ok(())
    }
}

fn write_grid(sampling: &BeamSampling, output: &Path) -> Result<(), KatbeamError> {
    let grid = sampling.evaluate()?;
    let mut out = BufWriter::new(File::create(output)?);
    write_grid_values(&mut out, sampling.margin().view(), grid.view())?;
    out.flush()?;
    Ok(())
}

/// Write one line per grid point. `grid` rows correspond to `y` offsets and
/// columns to `x` offsets, both taken from `margin`.
fn write_grid_values<W: Write>(
    out: &mut W,
    margin: ArrayView1<f64>,
    grid: ArrayView2<f64>,
) -> std::io::Result<()> {
    for (&y, row) in margin.iter().zip(grid.outer_iter()) {
        for (&x, value) in margin.iter().zip(row) {
            writeln!(out, "{x}\t{y}\t{value:e}")?;
        }
    }
    Ok(())
}
