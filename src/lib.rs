// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Simplified analytic primary beam models for the MeerKAT radio telescope.

The beams are cosine-tapered illumination patterns whose per-feed squints and
widths are interpolated in frequency from holography-derived calibration
tables.

```
use katbeam::BeamModel;

let beam = BeamModel::new("MKAT-AA-L-JIM-2020").unwrap();
let on_axis = beam.stokes_i(0.0, 0.0, 1420.0);
assert!((on_axis - 1.0).abs() < 1e-3);
```
 */

pub mod beam;
mod cli;
pub mod constants;
pub(crate) mod math;
pub mod registry;

// Re-exports.
pub use beam::{BeamError, BeamModel, BeamParams, Pol};
pub use cli::{Katbeam, KatbeamError};
pub use registry::{resolve, CalibrationTable, Channels, KnownModel, UnknownModelError};
