//! Fabric claims from input text to answers.

use std::fs;

use drift_core::{intact_claim, overlap_area, parse_claims};
use drift_types::ClaimId;

use crate::common::{EXAMPLE_CLAIMS, write_input};

#[test]
fn example_file_yields_both_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_input(dir.path(), "day3.txt", EXAMPLE_CLAIMS);

    let claims = parse_claims(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(claims.len(), 3);
    assert_eq!(overlap_area(&claims), 4);
    assert_eq!(intact_claim(&claims), Some(ClaimId::new(3)));
}

#[test]
fn grid_of_overlapping_claims() {
    // Four 3x3 claims offset by one inch form a 4x4 block; the centre 2x2
    // is shared by all, the edge midpoints by two.
    let input = "#10 @ 0,0: 3x3\n#11 @ 1,0: 3x3\n#12 @ 0,1: 3x3\n#13 @ 1,1: 3x3\n#14 @ 10,10: 1x1\n";
    let claims = parse_claims(input).unwrap();
    assert_eq!(overlap_area(&claims), 16 - 4);
    assert_eq!(intact_claim(&claims), Some(ClaimId::new(14)));
}

#[test]
fn malformed_claim_line_is_reported() {
    let err = parse_claims("#1 @ 1,3: 4x4\n\n#2 3,1: 4x4\n").unwrap_err();
    assert_eq!(err.to_string(), "line 3: invalid claim \"#2 3,1: 4x4\"");
}
