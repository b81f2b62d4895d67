// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tempfile::TempDir;

use crate::*;

#[cfg(feature = "plotting")]
#[test]
fn dry_runs_check_arguments() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("beam.png");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-plot",
            "--dry-run",
            "--model", "MKAT-AA-UHF-JIM-2020",
            "--freq-mhz", "800",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    assert!(!output.exists());

    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-plot",
            "--dry-run",
            "--pol", "Q",
            "--freq-mhz", "800",
        ])
        .ok();
    assert!(cmd.is_err());
}

#[cfg(not(feature = "plotting"))]
#[test]
fn plotting_needs_the_feature() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("beam.png");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-plot",
            "--freq-mhz", "800",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("\"plotting\" feature"), "{stderr}");
}
