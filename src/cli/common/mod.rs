// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Here, we abstract aspects of
//! `katbeam` that are shared between subcommands, e.g. the `beam-grid` and
//! `beam-plot` subcommands both sample a beam over a square patch of sky, so
//! the same sampling arguments are shared between them.

mod beam;
mod printers;

pub(super) use beam::{BeamSampling, BeamSamplingArgs, BeamSamplingArgsError};
pub(super) use printers::{display_warnings, InfoPrinter, Warn};

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    beam::Pol,
    constants::{DEFAULT_BEAM_EXTENT_DEG, DEFAULT_MODEL_NAME, DEFAULT_NUM_PIXELS},
    registry::KNOWN_MODELS_COMMA_SEPARATED,
};

/// The polarisation sampled when one isn't specified.
pub(super) const DEFAULT_POL: Pol = Pol::HH;

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    pub(super) static ref MODEL_HELP: String =
        format!("The name of the beam model. Available models: {}. Default: {DEFAULT_MODEL_NAME}", *KNOWN_MODELS_COMMA_SEPARATED);

    pub(super) static ref POL_HELP: String =
        format!("The beam response to sample. Valid values: {}. Default: {DEFAULT_POL}", Pol::iter().join(", "));

    pub(super) static ref EXTENT_HELP: String =
        format!("The side length of the square patch of sky to sample, centred on the pointing centre [degrees]. Default: {DEFAULT_BEAM_EXTENT_DEG}");

    pub(super) static ref NUM_PIXELS_HELP: String =
        format!("The number of samples along each side of the patch. Default: {DEFAULT_NUM_PIXELS}");
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use log::debug;

        use crate::cli::{common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED}, KatbeamError};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(KatbeamError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(KatbeamError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(KatbeamError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}
