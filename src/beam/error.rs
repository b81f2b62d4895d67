// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with beam calculations.

use thiserror::Error;

use crate::registry::{CalibrationTableError, UnknownModelError};

#[derive(Error, Debug)]
pub enum BeamError {
    #[error(transparent)]
    UnknownModel(#[from] UnknownModelError),

    #[error(transparent)]
    Table(#[from] CalibrationTableError),

    #[error("Arrays with shapes {shapes:?} can't be broadcast together")]
    IncompatibleShapes { shapes: Vec<Vec<usize>> },
}
