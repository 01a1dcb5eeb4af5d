//! Integration tests for per-round weight fitting.
//!
//! Fixtures live under `tests/test-cases/rounds/` as `data_<round>` files in
//! the exported format: three integer features plus an outcome code per line.
//!
//! Hand-computed expectations for the fixtures:
//! - `data_16` (`2 3 4 1`, `1 1 1 2`): first row steps the initial weights to
//!   (0.984, 0.976, 0.968); the second row scores z = 2.928 against target 0
//!   and subtracts 0.002928 from every weight.
//! - `data_17` (`1 0 2 0`): z = 3, target = −1, so the step is 0.004·f_k.

use std::path::Path;

use approx::assert_relative_eq;
use evalfit::data::io::{self, DatasetLoadError};
use evalfit::output::format_weights;
use evalfit::training::{SgdParams, SgdTrainer, SquaredLoss, TrainError, Verbosity};
use rstest::rstest;

const FIXTURE_DIR: &str = "tests/test-cases/rounds";

fn trainer() -> SgdTrainer<SquaredLoss> {
    SgdTrainer::new(
        SquaredLoss,
        SgdParams {
            verbosity: Verbosity::Silent,
            ..Default::default()
        },
    )
}

#[test]
fn fits_fixture_rounds_in_order() {
    let results = trainer()
        .fit_range(Path::new(FIXTURE_DIR), 16..=17)
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, 16);
    assert_eq!(results[1].0, 17);

    let step = 0.001 * 2.928;
    let w16 = results[0].1.weights();
    assert_relative_eq!(w16[0], 0.984 - step, epsilon = 1e-9);
    assert_relative_eq!(w16[1], 0.976 - step, epsilon = 1e-9);
    assert_relative_eq!(w16[2], 0.968 - step, epsilon = 1e-9);

    let w17 = results[1].1.weights();
    assert_relative_eq!(w17[0], 0.996, epsilon = 1e-9);
    assert_relative_eq!(w17[1], 1.0, epsilon = 1e-9);
    assert_relative_eq!(w17[2], 0.992, epsilon = 1e-9);
}

#[test]
fn formatted_output_matches_initializer_syntax() {
    let results = trainer()
        .fit_range(Path::new(FIXTURE_DIR), 16..=17)
        .unwrap();

    let lines: Vec<String> = results
        .iter()
        .map(|(_, model)| format_weights(model))
        .collect();

    assert_eq!(lines[0], "{0.981072, 0.973072, 0.965072},");
    assert_eq!(lines[1], "{0.996000, 1.000000, 0.992000},");

    // Structural check: `{f, f, f},` with six fractional digits each.
    for line in &lines {
        let inner = line
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix("},"))
            .unwrap_or_else(|| panic!("bad line shape: {line}"));
        let parts: Vec<&str> = inner.split(", ").collect();
        assert_eq!(parts.len(), 3, "bad line shape: {line}");
        for part in parts {
            let (_, frac) = part.split_once('.').expect("missing decimal point");
            assert_eq!(frac.len(), 6, "expected 6 fractional digits in {part}");
            part.parse::<f64>().expect("not a float");
        }
    }
}

#[test]
fn rounds_are_fitted_independently() {
    let t = trainer();
    let from_range = t.fit_range(Path::new(FIXTURE_DIR), 16..=17).unwrap();

    let alone = t.train(&io::load_round(Path::new(FIXTURE_DIR), 17).unwrap());
    assert_eq!(from_range[1].1.weights(), alone.weights());
}

#[test]
fn fitting_is_deterministic_across_runs() {
    let t = trainer();
    let first = t.fit_range(Path::new(FIXTURE_DIR), 16..=17).unwrap();
    let second = t.fit_range(Path::new(FIXTURE_DIR), 16..=17).unwrap();

    for ((round_a, model_a), (round_b, model_b)) in first.iter().zip(&second) {
        assert_eq!(round_a, round_b);
        assert_eq!(model_a.weights(), model_b.weights());
    }
}

#[test]
fn missing_round_aborts_with_round_index() {
    // data_18 does not exist; the run must fail naming round 18 and record
    // nothing for it.
    let err = trainer()
        .fit_range(Path::new(FIXTURE_DIR), 16..=18)
        .unwrap_err();

    let TrainError::Dataset { round, source } = err;
    assert_eq!(round, 18);
    assert!(matches!(source, DatasetLoadError::Io(_)));
}

#[rstest]
#[case(99, "expected 4 integer fields")]
#[case(98, "invalid integer token")]
fn malformed_round_reports_offending_line(#[case] round: u32, #[case] needle: &str) {
    let err = trainer()
        .fit_range(Path::new(FIXTURE_DIR), round..=round)
        .unwrap_err();

    let message = err.to_string();
    assert!(
        message.contains(&format!("round {round}")),
        "missing round in: {message}"
    );
    assert!(message.contains(needle), "missing detail in: {message}");
}
