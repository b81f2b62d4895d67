// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Simplified primary beam models.
//!
//! A [`BeamModel`] pairs a name with a [`CalibrationTable`] of measured,
//! frequency-dependent squints and FWHMs. Beam responses are evaluated by
//! interpolating the table at the requested frequency and feeding the
//! parameters to an analytic [`cosine_taper`].
//!
//! Note that a real beam varies per antenna and with the environment, and
//! per-antenna pointing errors during an observation often exceed an
//! arc-minute; the "imaging" primary beam is therefore slightly broader than
//! this model.

mod error;
mod params;
mod pattern;

pub use error::BeamError;
pub use params::{interpolate, interpolate_array, BeamParams};
pub use pattern::{cosine_taper, pattern, stokes_i};

use std::str::FromStr;

use log::debug;
use ndarray::{prelude::*, Zip};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::registry::{self, CalibrationTable, KnownModel, UnknownModelError};

/// The beam responses that can be evaluated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Pol {
    /// The H co-polarised amplitude.
    HH,

    /// The V co-polarised amplitude.
    VV,

    /// The Stokes I (total power) response.
    I,
}

/// A named beam model.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamModel {
    name: String,
    table: CalibrationTable,
}

impl BeamModel {
    /// Create a new [`BeamModel`] from one of the registered models.
    pub fn new(name: &str) -> Result<BeamModel, UnknownModelError> {
        let table = registry::resolve(name)?;
        debug!(
            "Created beam model {name} ({} frequencies, {:?} MHz)",
            table.len(),
            table.freq_range_mhz()
        );
        Ok(BeamModel {
            name: name.to_string(),
            table,
        })
    }

    /// Create a new [`BeamModel`] from a table that isn't registered.
    pub fn from_table<S: Into<String>>(name: S, table: CalibrationTable) -> BeamModel {
        BeamModel {
            name: name.into(),
            table,
        }
    }

    /// Create a new [`BeamModel`] from the text of a calibration table (see
    /// [`registry`] for the format).
    pub fn from_table_str<S: Into<String>>(name: S, table: &str) -> Result<BeamModel, BeamError> {
        let table = CalibrationTable::from_str(table)?;
        Ok(BeamModel::from_table(name, table))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// Get the squints and FWHMs at a frequency [MHz].
    pub fn interpolate(&self, freq_mhz: f64) -> BeamParams<f64> {
        interpolate(&self.table, freq_mhz)
    }

    /// Get the squints and FWHMs at many frequencies [MHz].
    pub fn interpolate_array<D: Dimension>(
        &self,
        freqs_mhz: ArrayView<f64, D>,
    ) -> BeamParams<Array<f64, D>> {
        interpolate_array(&self.table, freqs_mhz)
    }

    /// Calculate the H co-polarised beam at the sky offset `(x_deg, y_deg)`
    /// [degrees] and frequency `freq_mhz` [MHz].
    pub fn hh(&self, x_deg: f64, y_deg: f64, freq_mhz: f64) -> f64 {
        self.interpolate(freq_mhz).hh(x_deg, y_deg)
    }

    /// Calculate the V co-polarised beam at the sky offset `(x_deg, y_deg)`
    /// [degrees] and frequency `freq_mhz` [MHz].
    pub fn vv(&self, x_deg: f64, y_deg: f64, freq_mhz: f64) -> f64 {
        self.interpolate(freq_mhz).vv(x_deg, y_deg)
    }

    /// Calculate the Stokes I beam at the sky offset `(x_deg, y_deg)`
    /// [degrees] and frequency `freq_mhz` [MHz]. This is never negative.
    pub fn stokes_i(&self, x_deg: f64, y_deg: f64, freq_mhz: f64) -> f64 {
        self.interpolate(freq_mhz).stokes_i(x_deg, y_deg)
    }

    /// Calculate the `pol` beam response at the sky offset `(x_deg, y_deg)`
    /// [degrees] and frequency `freq_mhz` [MHz].
    pub fn response(&self, pol: Pol, x_deg: f64, y_deg: f64, freq_mhz: f64) -> f64 {
        self.interpolate(freq_mhz).response(pol, x_deg, y_deg)
    }

    /// Like [`BeamModel::hh`], but for many sky offsets. `x_deg` and `y_deg`
    /// are broadcast against each other with numpy's rules; each of their
    /// axes must either be the same length or length 1. The result has the
    /// broadcast shape. To also broadcast against an array of frequencies, see
    /// [`BeamModel::response_broadcast`].
    pub fn hh_array<D: Dimension>(
        &self,
        x_deg: ArrayView<f64, D>,
        y_deg: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        self.response_array(Pol::HH, x_deg, y_deg, freq_mhz)
    }

    /// Like [`BeamModel::vv`], but for many sky offsets. See
    /// [`BeamModel::hh_array`].
    pub fn vv_array<D: Dimension>(
        &self,
        x_deg: ArrayView<f64, D>,
        y_deg: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        self.response_array(Pol::VV, x_deg, y_deg, freq_mhz)
    }

    /// Like [`BeamModel::stokes_i`], but for many sky offsets. See
    /// [`BeamModel::hh_array`].
    pub fn stokes_i_array<D: Dimension>(
        &self,
        x_deg: ArrayView<f64, D>,
        y_deg: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        self.response_array(Pol::I, x_deg, y_deg, freq_mhz)
    }

    /// Like [`BeamModel::response`], but for many sky offsets. See
    /// [`BeamModel::hh_array`].
    pub fn response_array<D: Dimension>(
        &self,
        pol: Pol,
        x_deg: ArrayView<f64, D>,
        y_deg: ArrayView<f64, D>,
        freq_mhz: f64,
    ) -> Result<Array<f64, D>, BeamError> {
        let incompatible = || BeamError::IncompatibleShapes {
            shapes: vec![x_deg.shape().to_vec(), y_deg.shape().to_vec()],
        };
        let shape = broadcast_shape(&[x_deg.shape(), y_deg.shape()]).ok_or_else(incompatible)?;
        let (x, y) = match (x_deg.broadcast(shape.clone()), y_deg.broadcast(shape)) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(incompatible()),
        };

        // Parameters only depend on frequency, so interpolate once.
        let params = self.interpolate(freq_mhz);
        Zip::from(x)
            .and(y)
            .map_collect(|&x, &y| params.response(pol, x, y))
            .into_dimensionality::<D>()
            .map_err(|_| incompatible())
    }

    /// Like [`BeamModel::hh`], but with sky offsets and frequencies all
    /// broadcast against each other. See [`BeamModel::response_broadcast`].
    pub fn hh_broadcast<Dx: Dimension, Dy: Dimension, Df: Dimension>(
        &self,
        x_deg: ArrayView<f64, Dx>,
        y_deg: ArrayView<f64, Dy>,
        freqs_mhz: ArrayView<f64, Df>,
    ) -> Result<ArrayD<f64>, BeamError> {
        self.response_broadcast(Pol::HH, x_deg, y_deg, freqs_mhz)
    }

    pub fn vv_broadcast<Dx: Dimension, Dy: Dimension, Df: Dimension>(
        &self,
        x_deg: ArrayView<f64, Dx>,
        y_deg: ArrayView<f64, Dy>,
        freqs_mhz: ArrayView<f64, Df>,
    ) -> Result<ArrayD<f64>, BeamError> {
        self.response_broadcast(Pol::VV, x_deg, y_deg, freqs_mhz)
    }

    pub fn stokes_i_broadcast<Dx: Dimension, Dy: Dimension, Df: Dimension>(
        &self,
        x_deg: ArrayView<f64, Dx>,
        y_deg: ArrayView<f64, Dy>,
        freqs_mhz: ArrayView<f64, Df>,
    ) -> Result<ArrayD<f64>, BeamError> {
        self.response_broadcast(Pol::I, x_deg, y_deg, freqs_mhz)
    }

    /// Calculate the `pol` beam response with the sky offsets `x_deg` and
    /// `y_deg` [degrees] and the frequencies `freqs_mhz` [MHz] broadcast
    /// against each other with numpy's rules. The inputs may have different
    /// numbers of dimensions (use a 0-dimensional view for a scalar); shorter
    /// shapes are padded with length-1 axes on the left.
    ///
    /// ```
    /// use katbeam::BeamModel;
    /// use ndarray::array;
    ///
    /// let beam = BeamModel::default();
    /// let x = array![[0.0], [1.0]];
    /// let y = array![0.0, 0.5, 1.0];
    /// let freqs = array![[1000.0], [1400.0]];
    /// let i = beam.stokes_i_broadcast(x.view(), y.view(), freqs.view()).unwrap();
    /// assert_eq!(i.shape(), &[2, 3]);
    /// ```
    pub fn response_broadcast<Dx: Dimension, Dy: Dimension, Df: Dimension>(
        &self,
        pol: Pol,
        x_deg: ArrayView<f64, Dx>,
        y_deg: ArrayView<f64, Dy>,
        freqs_mhz: ArrayView<f64, Df>,
    ) -> Result<ArrayD<f64>, BeamError> {
        let shapes = [x_deg.shape(), y_deg.shape(), freqs_mhz.shape()];
        let incompatible = || BeamError::IncompatibleShapes {
            shapes: shapes.iter().map(|s| s.to_vec()).collect(),
        };
        let shape = broadcast_shape(&shapes).ok_or_else(incompatible)?;
        let (x, y, f) = match (
            x_deg.broadcast(shape.clone()),
            y_deg.broadcast(shape.clone()),
            freqs_mhz.broadcast(shape),
        ) {
            (Some(x), Some(y), Some(f)) => (x, y, f),
            _ => return Err(incompatible()),
        };

        Ok(Zip::from(x)
            .and(y)
            .and(f)
            .map_collect(|&x, &y, &f| self.response(pol, x, y, f)))
    }

    /// Like [`BeamModel::hh`], but for many frequencies. See
    /// [`BeamModel::response_freqs`].
    pub fn hh_freqs<D: Dimension>(
        &self,
        x_deg: f64,
        y_deg: f64,
        freqs_mhz: ArrayView<f64, D>,
    ) -> Array<f64, D> {
        self.response_freqs(Pol::HH, x_deg, y_deg, freqs_mhz)
    }

    pub fn vv_freqs<D: Dimension>(
        &self,
        x_deg: f64,
        y_deg: f64,
        freqs_mhz: ArrayView<f64, D>,
    ) -> Array<f64, D> {
        self.response_freqs(Pol::VV, x_deg, y_deg, freqs_mhz)
    }

    pub fn stokes_i_freqs<D: Dimension>(
        &self,
        x_deg: f64,
        y_deg: f64,
        freqs_mhz: ArrayView<f64, D>,
    ) -> Array<f64, D> {
        self.response_freqs(Pol::I, x_deg, y_deg, freqs_mhz)
    }

    /// Calculate the `pol` beam response at one sky offset for each frequency
    /// in `freqs_mhz` [MHz]. The result has the same shape as `freqs_mhz`.
    pub fn response_freqs<D: Dimension>(
        &self,
        pol: Pol,
        x_deg: f64,
        y_deg: f64,
        freqs_mhz: ArrayView<f64, D>,
    ) -> Array<f64, D> {
        freqs_mhz.mapv(|f| self.response(pol, x_deg, y_deg, f))
    }
}

impl From<KnownModel> for BeamModel {
    fn from(model: KnownModel) -> Self {
        BeamModel::from_table(model.name(), model.table().clone())
    }
}

/// The MeerKAT L-band model.
impl Default for BeamModel {
    fn default() -> Self {
        BeamModel::from(KnownModel::MeerkatL)
    }
}

/// The shape that arrays broadcast to, following numpy's rules: shapes are
/// aligned at their last axes and padded on the left with length-1 axes, then
/// along each axis the lengths must match or be 1.
fn broadcast_shape(shapes: &[&[usize]]) -> Option<IxDyn> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];
    for shape in shapes {
        let pad = ndim - shape.len();
        for (axis, &len) in out[pad..].iter_mut().zip(shape.iter()) {
            *axis = match (*axis, len) {
                (a, b) if a == b => a,
                (1, b) => b,
                (a, 1) => a,
                _ => return None,
            };
        }
    }
    Some(IxDyn(&out))
}
