// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::beam::BeamError;

#[derive(Error, Debug)]
pub(crate) enum BeamPlotError {
    #[cfg(not(feature = "plotting"))]
    #[error("katbeam was not compiled with the \"plotting\" feature.\nYou need to compile katbeam from source with this feature to plot beams.")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Draw(#[from] super::plotting::DrawError),

    #[error(transparent)]
    Beam(#[from] BeamError),
}
