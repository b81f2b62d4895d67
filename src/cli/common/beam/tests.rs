// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use indoc::indoc;
use ndarray::array;
use tempfile::NamedTempFile;

use super::*;

fn freq_only(freq_mhz: f64) -> BeamSamplingArgs {
    BeamSamplingArgs {
        freq_mhz: Some(freq_mhz),
        ..Default::default()
    }
}

#[test]
fn merging_prefers_cli_args() {
    let cli = BeamSamplingArgs {
        model: Some("MKAT-AA-UHF-JIM-2020".to_string()),
        freq_mhz: Some(800.0),
        ..Default::default()
    };
    let file = BeamSamplingArgs {
        model: Some("MKAT-AA-S-JIM-2020".to_string()),
        pol: Some(Pol::VV),
        freq_mhz: Some(2000.0),
        num_pixels: Some(16),
        ..Default::default()
    };
    let merged = cli.merge(file);
    assert_eq!(
        merged,
        BeamSamplingArgs {
            model: Some("MKAT-AA-UHF-JIM-2020".to_string()),
            calibration_table: None,
            pol: Some(Pol::VV),
            freq_mhz: Some(800.0),
            extent: None,
            num_pixels: Some(16),
        }
    );
}

#[test]
fn defaults_are_used() {
    let sampling = freq_only(1284.0).parse().unwrap();
    assert_eq!(sampling.beam.name(), DEFAULT_MODEL_NAME);
    assert_eq!(sampling.pol, DEFAULT_POL);
    assert_abs_diff_eq!(sampling.freq_mhz, 1284.0);
    assert_abs_diff_eq!(sampling.extent_deg, DEFAULT_BEAM_EXTENT_DEG);
    assert_eq!(sampling.num_pixels, DEFAULT_NUM_PIXELS);
}

#[test]
fn frequency_is_required_and_finite() {
    let result = BeamSamplingArgs::default().parse();
    assert!(matches!(result, Err(BeamSamplingArgsError::NoFreq)));

    for freq in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = freq_only(freq).parse();
        assert!(matches!(
            result,
            Err(BeamSamplingArgsError::NonFiniteFreq(_))
        ));
    }

    // Out of the tabulated range is fine.
    assert!(freq_only(100.0).parse().is_ok());
}

#[test]
fn bad_extents_and_pixels_are_rejected() {
    for extent in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = BeamSamplingArgs {
            extent: Some(extent),
            ..freq_only(1000.0)
        }
        .parse();
        assert!(
            matches!(result, Err(BeamSamplingArgsError::BadExtent(_))),
            "{extent}"
        );
    }

    for num_pixels in [0, 1] {
        let result = BeamSamplingArgs {
            num_pixels: Some(num_pixels),
            ..freq_only(1000.0)
        }
        .parse();
        assert!(matches!(
            result,
            Err(BeamSamplingArgsError::TooFewPixels(n)) if n == num_pixels
        ));
    }
}

#[test]
fn unknown_models_are_rejected() {
    let result = BeamSamplingArgs {
        model: Some("MKAT-AA-X-JIM-2020".to_string()),
        ..freq_only(1000.0)
    }
    .parse();
    match result {
        Err(BeamSamplingArgsError::Model(e)) => {
            assert_eq!(e.name, "MKAT-AA-X-JIM-2020");
            assert_eq!(e.valid.len(), 3);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn calibration_table_files() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        indoc! {"
            freq, Hx squint, Hy squint, Vx squint, Vy squint, Hx fwhm, Hy fwhm, Vx fwhm, Vy fwhm
            MHz, arcmin, arcmin, arcmin, arcmin, arcmin, arcmin, arcmin, arcmin
            100, 6, 0, 0, 0, 60, 60, 60, 60
            200, 6, 0, 0, 0, 30, 30, 30, 30
        "}
        .as_bytes(),
    )
    .unwrap();
    file.flush().unwrap();

    let sampling = BeamSamplingArgs {
        calibration_table: Some(file.path().to_path_buf()),
        ..freq_only(100.0)
    }
    .parse()
    .unwrap();
    assert_eq!(
        sampling.beam.name(),
        file.path().file_stem().unwrap().to_str().unwrap()
    );
    // 6 arcmin of squint is 0.1 degrees.
    assert_abs_diff_eq!(sampling.beam.hh(0.1, 0.0, 100.0), 1.0);

    let sampling = BeamSamplingArgs {
        model: Some("toy".to_string()),
        calibration_table: Some(file.path().to_path_buf()),
        ..freq_only(100.0)
    }
    .parse()
    .unwrap();
    assert_eq!(sampling.beam.name(), "toy");

    let result = BeamSamplingArgs {
        calibration_table: Some(PathBuf::from("/does/not/exist.csv")),
        ..freq_only(100.0)
    }
    .parse();
    assert!(matches!(
        result,
        Err(BeamSamplingArgsError::TableFile { .. })
    ));
}

#[test]
fn invalid_calibration_table_files() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"header\nheader\n100, 0, 0, 0, 0, 60, 60, 60\n")
        .unwrap();
    file.flush().unwrap();

    let result = BeamSamplingArgs {
        calibration_table: Some(file.path().to_path_buf()),
        ..freq_only(100.0)
    }
    .parse();
    assert!(matches!(
        result,
        Err(BeamSamplingArgsError::Table(
            CalibrationTableError::WrongNumberOfColumns { line_num: 3, got: 8 }
        ))
    ));
}

#[test]
fn grids_are_meshgrids() {
    let sampling = BeamSamplingArgs {
        model: Some("MKAT-AA-UHF-JIM-2020".to_string()),
        pol: Some(Pol::I),
        extent: Some(4.0),
        num_pixels: Some(5),
        ..freq_only(800.0)
    }
    .parse()
    .unwrap();

    let margin = sampling.margin();
    assert_abs_diff_eq!(margin, array![-2.0, -1.0, 0.0, 1.0, 2.0]);

    let grid = sampling.evaluate().unwrap();
    assert_eq!(grid.dim(), (5, 5));
    for ((row, col), &value) in grid.indexed_iter() {
        assert_abs_diff_eq!(
            value,
            sampling.beam.stokes_i(margin[col], margin[row], 800.0)
        );
    }
    // (x, y) = (1, 0) is row 2, column 3.
    assert_abs_diff_eq!(grid[(2, 3)], 0.40773282811098666, epsilon = 1e-10);
}
