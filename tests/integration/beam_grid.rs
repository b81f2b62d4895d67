// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use tempfile::TempDir;

use crate::*;

fn read_grid(path: &Path) -> Vec<[f64; 3]> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let v: Vec<f64> = line
                .split('\t')
                .map(|s| s.parse().expect("not a float"))
                .collect();
            assert_eq!(v.len(), 3);
            [v[0], v[1], v[2]]
        })
        .collect()
}

#[test]
fn grids_are_written() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("grid.tsv");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-grid",
            "--model", "MKAT-AA-UHF-JIM-2020",
            "--pol", "I",
            "--freq-mhz", "800",
            "--extent", "2",
            "--num-pixels", "3",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));

    let grid = read_grid(&output);
    assert_eq!(grid.len(), 9);
    // (x, y) = (1, 0).
    let [x, y, value] = grid[5];
    assert_abs_diff_eq!(x, 1.0);
    assert_abs_diff_eq!(y, 0.0);
    assert_abs_diff_eq!(value, 0.40773282811098666, epsilon = 1e-10);
    // Stokes I is never negative.
    assert!(grid.iter().all(|[_, _, v]| *v >= 0.0));
}

#[test]
fn out_of_range_frequencies_warn() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("grid.tsv");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-grid",
            "--freq-mhz", "500",
            "--num-pixels", "2",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("outside of MKAT-AA-L-JIM-2020's tabulated frequencies"));
    assert_eq!(read_grid(&output).len(), 4);
}

#[test]
fn unknown_models_are_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("grid.tsv");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-grid",
            "--model", "MKAT-AA-K-JIM-2020",
            "--freq-mhz", "1000",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(
        stderr.contains("Unknown model 'MKAT-AA-K-JIM-2020', available ones are: MKAT-AA-L-JIM-2020, MKAT-AA-UHF-JIM-2020, MKAT-AA-S-JIM-2020"),
        "{stderr}"
    );
    assert!(stderr.contains("See for more info"));
    assert!(!output.exists());
}

#[test]
fn bad_sampling_args_are_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("grid.tsv");
    let output = format!("{}", output.display());
    for (args, message) in [
        (vec![], "No frequency was supplied"),
        (vec!["--freq-mhz", "NaN"], "The frequency must be finite"),
        (
            vec!["--freq-mhz", "1000", "--num-pixels", "1"],
            "At least 2 pixels",
        ),
        (
            vec!["--freq-mhz", "1000", "--extent", "0"],
            "positive number of degrees",
        ),
    ] {
        let cmd = katbeam()
            .arg("beam-grid")
            .args(&args)
            .args(["--output", &output])
            .ok();
        assert!(cmd.is_err(), "{args:?}");
        let (_, stderr) = get_cmd_output(cmd);
        assert!(stderr.contains(message), "{stderr}");
    }
}

#[test]
fn dry_runs_write_nothing() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("grid.tsv");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-grid",
            "--dry-run",
            "--freq-mhz", "1000",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    assert!(!output.exists());
}

#[test]
fn saved_arguments_reproduce_a_run() {
    let tmp_dir = TempDir::new().unwrap();
    let first = tmp_dir.path().join("first.tsv");
    let toml = tmp_dir.path().join("args.toml");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-grid",
            "--model", "MKAT-AA-S-JIM-2020",
            "--pol", "vv",
            "--freq-mhz", "2500",
            "--num-pixels", "5",
            "--output", &format!("{}", first.display()),
            "--save-toml", &format!("{}", toml.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    assert!(toml.exists());

    // Use the saved arguments, but write somewhere else.
    let second = tmp_dir.path().join("second.tsv");
    let cmd = katbeam()
        .args([
            "beam-grid",
            &format!("{}", toml.display()),
            "--output",
            &format!("{}", second.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    assert_eq!(read_grid(&first), read_grid(&second));
}

#[test]
fn custom_calibration_tables() {
    let tmp_dir = TempDir::new().unwrap();
    let (table, mut f) = make_file_in_dir("toy.csv", tmp_dir.path());
    f.write_all(
        b"freq, Hx squint, Hy squint, Vx squint, Vy squint, Hx fwhm, Hy fwhm, Vx fwhm, Vy fwhm
MHz, arcmin, arcmin, arcmin, arcmin, arcmin, arcmin, arcmin, arcmin
100, 0, 0, 0, 0, 120, 120, 120, 120
200, 0, 0, 0, 0, 60, 60, 60, 60
",
    )
    .unwrap();
    let output = tmp_dir.path().join("grid.tsv");
    #[rustfmt::skip]
    let cmd = katbeam()
        .args([
            "beam-grid",
            "--calibration-table", &format!("{}", table.display()),
            "--freq-mhz", "100",
            "--extent", "2",
            "--num-pixels", "3",
            "--output", &format!("{}", output.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("toy"));

    // A 2 degree FWHM means that 1 degree out is the half-power point.
    let grid = read_grid(&output);
    assert_abs_diff_eq!(grid[4][2], 1.0);
    assert_abs_diff_eq!(grid[5][2], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
}
