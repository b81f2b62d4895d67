// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod beam_grid;
mod beam_models;
mod beam_plot;

use std::{
    fs::File,
    path::{Path, PathBuf},
    process::Output,
    str::from_utf8,
};

use assert_cmd::{output::OutputError, Command};

fn katbeam() -> Command {
    Command::cargo_bin("katbeam").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn make_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(filename: T, dir: U) -> (PathBuf, File) {
    let path = dir.as_ref().join(filename);
    let f = File::create(&path).expect("couldn't make file");
    (path, f)
}

#[test]
fn help_lists_subcommands() {
    let cmd = katbeam().arg("--help").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    for sub_command in ["beam-models", "beam-grid", "beam-plot"] {
        assert!(stdout.contains(sub_command), "{sub_command}");
    }
}

#[test]
fn no_arguments_is_an_error() {
    let cmd = katbeam().ok();
    assert!(cmd.is_err());
}

#[test]
fn version_is_reported() {
    let cmd = katbeam().arg("--version").ok();
    assert!(cmd.is_ok());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
