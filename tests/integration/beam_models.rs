// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::*;

#[test]
fn all_models_are_listed() {
    let cmd = katbeam().arg("beam-models").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "{stderr}");
    for (name, range) in [
        ("MKAT-AA-L-JIM-2020", "16 frequencies from 900 to 1650 MHz"),
        ("MKAT-AA-UHF-JIM-2020", "11 frequencies from 550 to 1050 MHz"),
        ("MKAT-AA-S-JIM-2020", "35 frequencies from 1750 to 3450 MHz"),
    ] {
        assert!(stdout.contains(name), "{name}");
        assert!(stdout.contains(range), "{range}");
    }
}

#[test]
fn tables_can_be_shown() {
    let cmd = katbeam().args(["beam-models", "--show-tables"]).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Hx squint"));
    assert!(stdout.contains("Vy FWHM"));
}
