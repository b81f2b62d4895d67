// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use clap::Parser;
use strum::IntoEnumIterator;

use super::{common::InfoPrinter, KatbeamError};
use crate::registry::{Channel, KnownModel};

/// List the available beam models.
#[derive(Parser, Debug)]
pub(super) struct BeamModelsArgs {
    /// Also print each model's calibration table, converted to degrees.
    #[clap(short, long)]
    show_tables: bool,
}

impl BeamModelsArgs {
    pub(super) fn run(self) -> Result<(), KatbeamError> {
        for model in KnownModel::iter() {
            let table = model.table();
            let (min, max) = table.freq_range_mhz();
            let mut printer = InfoPrinter::new(model.name());
            printer.push_line(format!(
                "{} frequencies from {min} to {max} MHz",
                table.len()
            ));

            if self.show_tables {
                let mut header = String::from("  freq");
                for kind in ["squint", "FWHM"] {
                    for channel in Channel::iter() {
                        header.push_str(&format!(" {:>9}", format!("{channel} {kind}")));
                    }
                }
                let mut block: Vec<Cow<'static, str>> = vec![header.into()];

                let squints = table.squints_deg();
                let fwhms = table.fwhms_deg();
                for (i, freq) in table.freqs_mhz().iter().enumerate() {
                    let mut row = format!("{freq:>6}");
                    for values in [&squints, &fwhms] {
                        for (_, v) in values.iter() {
                            row.push_str(&format!(" {:>9.5}", v[i]));
                        }
                    }
                    block.push(row.into());
                }
                printer.push_block(block);
            }

            printer.display();
        }

        Ok(())
    }
}
