//! Config-driven input resolution.

use std::fs;

use drift_config::DriftConfig;
use drift_core::{overlap_area, parse_claims, parse_deltas, resulting_frequency};

use crate::common::{EXAMPLE_CLAIMS, WALKTHROUGH_DELTAS, write_input};

#[test]
fn configured_inputs_are_readable() {
    let dir = tempfile::tempdir().unwrap();
    let frequency = write_input(dir.path(), "day1.txt", WALKTHROUGH_DELTAS);
    let claims = write_input(dir.path(), "day3.txt", EXAMPLE_CLAIMS);
    let config_path = write_input(
        dir.path(),
        "config.toml",
        &format!(
            "[inputs]\nfrequency = {:?}\nclaims = {:?}\n",
            frequency.display().to_string(),
            claims.display().to_string()
        ),
    );

    let config = DriftConfig::load_from(&config_path).unwrap();

    let deltas_text = fs::read_to_string(config.frequency_path().unwrap()).unwrap();
    let deltas = parse_deltas(&deltas_text).unwrap();
    assert_eq!(resulting_frequency(&deltas), Ok(3));

    let claims_text = fs::read_to_string(config.claims_path().unwrap()).unwrap();
    assert_eq!(overlap_area(&parse_claims(&claims_text).unwrap()), 4);
}

#[test]
fn env_var_in_configured_path_is_expanded() {
    let dir = tempfile::tempdir().unwrap();
    write_input(dir.path(), "day1.txt", WALKTHROUGH_DELTAS);
    let config_path = write_input(
        dir.path(),
        "config.toml",
        "[inputs]\nfrequency = \"${DRIFT_SUITE_INPUT_DIR}/day1.txt\"\n",
    );
    unsafe {
        std::env::set_var("DRIFT_SUITE_INPUT_DIR", dir.path());
    }

    let config = DriftConfig::load_from(&config_path).unwrap();
    let resolved = config.frequency_path().unwrap();
    unsafe {
        std::env::remove_var("DRIFT_SUITE_INPUT_DIR");
    }

    assert_eq!(resolved, dir.path().join("day1.txt"));
    assert!(resolved.exists());
}
