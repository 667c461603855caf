//! Frequency calibration from input text to answers.

use std::fs;

use drift_core::{CalibrationError, first_repeat, parse_deltas, resulting_frequency};
use drift_types::Occurrence;

use crate::common::{WALKTHROUGH_DELTAS, signed_lines, write_input};

#[test]
fn walkthrough_file_yields_both_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(dir.path(), "day1.txt", WALKTHROUGH_DELTAS);

    let deltas = parse_deltas(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(resulting_frequency(&deltas), Ok(3));
    assert_eq!(first_repeat(&deltas), Ok(Occurrence { value: 2, step: 6 }));
}

#[test]
fn statement_examples_from_text() {
    let cases: [(&[i64], i64); 4] = [
        (&[1, -1], 0),
        (&[3, 3, 4, -2, -4], 10),
        (&[-6, 3, 8, 5, -6], 5),
        (&[7, 7, -2, -7, -4], 14),
    ];
    for (deltas, expected) in cases {
        let parsed = parse_deltas(&signed_lines(deltas)).unwrap();
        assert_eq!(
            first_repeat(&parsed).map(|occurrence| occurrence.value),
            Ok(expected),
            "deltas {deltas:?}"
        );
    }
}

#[test]
fn repeat_far_into_the_cycle_is_found_without_walking() {
    // 0, 1000, 1, 1001, 2, ... : 1000 comes back after 1000 passes.
    let deltas = parse_deltas(&signed_lines(&[1000, -999])).unwrap();
    assert_eq!(
        first_repeat(&deltas),
        Ok(Occurrence {
            value: 1000,
            step: 2000,
        })
    );
}

#[test]
fn very_long_cycle_finishes() {
    // A step of +1 per pass and a gap of a billion: far too many passes to
    // simulate, still answered by the pair search.
    let deltas = parse_deltas(&signed_lines(&[1_000_000_000, -999_999_999])).unwrap();
    let occurrence = first_repeat(&deltas).unwrap();
    assert_eq!(occurrence.value, 1_000_000_000);
    assert_eq!(occurrence.step, 2_000_000_000);
}

#[test]
fn diverging_drift_has_no_solution() {
    let deltas = parse_deltas("+5\n+5\n-1\n").unwrap();
    assert_eq!(first_repeat(&deltas), Err(CalibrationError::NoSolution));
    assert_eq!(resulting_frequency(&deltas), Ok(9));
}

#[test]
fn malformed_input_is_reported_not_solved() {
    let err = parse_deltas("+1\n+2\nthree\n").unwrap_err();
    assert_eq!(err.to_string(), "line 3: invalid frequency change \"three\"");
}
