// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The registry of named beam models and their calibration tables.
//!
//! Each [`KnownModel`] is backed by a static text table. Tables are parsed
//! once, on first use, and shared for the rest of the process; callers get
//! their own copies through [`resolve`].

mod error;
mod known_models;
mod table;

pub use error::{CalibrationTableError, UnknownModelError};
pub use table::{CalibrationTable, Channel, Channels, NUM_COLUMNS};

use std::{collections::HashMap, str::FromStr};

use itertools::Itertools;
use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

lazy_static::lazy_static! {
    static ref KNOWN_TABLES: HashMap<KnownModel, CalibrationTable> = KnownModel::iter()
        .map(|model| {
            debug!("Parsing the calibration table for {model}");
            let table = CalibrationTable::from_str(model.table_text()).unwrap_or_else(|e| {
                panic!("The built-in calibration table for {model} is invalid: {e}")
            });
            (model, table)
        })
        .collect();

    /// All registered model names, comma separated.
    pub static ref KNOWN_MODELS_COMMA_SEPARATED: String = KnownModel::iter().join(", ");
}

/// The beam models with built-in calibration tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum KnownModel {
    /// MeerKAT L band (900 to 1650 MHz).
    #[strum(serialize = "MKAT-AA-L-JIM-2020")]
    MeerkatL,

    /// MeerKAT UHF band (550 to 1050 MHz).
    #[strum(serialize = "MKAT-AA-UHF-JIM-2020")]
    MeerkatUhf,

    /// MeerKAT S band (1750 to 3450 MHz).
    #[strum(serialize = "MKAT-AA-S-JIM-2020")]
    MeerkatS,
}

impl KnownModel {
    /// The registered name of this model.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The parsed calibration table of this model.
    pub fn table(self) -> &'static CalibrationTable {
        &KNOWN_TABLES[&self]
    }

    fn table_text(self) -> &'static str {
        match self {
            KnownModel::MeerkatL => known_models::MKAT_AA_L_JIM_2020,
            KnownModel::MeerkatUhf => known_models::MKAT_AA_UHF_JIM_2020,
            KnownModel::MeerkatS => known_models::MKAT_AA_S_JIM_2020,
        }
    }
}

/// The names of all registered models.
pub fn known_model_names() -> Vec<&'static str> {
    KnownModel::iter().map(KnownModel::name).collect()
}

/// Look up a registered model by name. Names are case sensitive.
pub fn find_model(name: &str) -> Result<KnownModel, UnknownModelError> {
    KnownModel::from_str(name).map_err(|_| UnknownModelError {
        name: name.to_string(),
        valid: known_model_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

/// Get a copy of the calibration table registered under `name`.
pub fn resolve(name: &str) -> Result<CalibrationTable, UnknownModelError> {
    let model = find_model(name)?;
    debug!("Resolved model {model}");
    Ok(model.table().clone())
}
