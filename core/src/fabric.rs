//! Fabric claim overlap.
//!
//! Claims are compared pairwise. Inputs are at most a few thousand claims, so
//! the quadratic pass is fine. Shared cells are enumerated one by one, so
//! callers should keep claims on the fabric; [`parse_claims`] rejects any
//! claim reaching past [`FABRIC_SIDE`].
//!
//! [`parse_claims`]: crate::parse_claims
//! [`FABRIC_SIDE`]: crate::FABRIC_SIDE

use std::collections::HashSet;

use drift_types::{Claim, ClaimId};

/// Every cell covered by at least two claims.
#[must_use]
pub fn overlapping_cells(claims: &[Claim]) -> HashSet<(u64, u64)> {
    let mut cells = HashSet::new();
    for (index, first) in claims.iter().enumerate() {
        for second in &claims[index + 1..] {
            if let Some(shared) = first.rect.intersection(&second.rect) {
                cells.extend(shared.cells());
            }
        }
    }
    cells
}

/// Square inches of fabric inside two or more claims.
#[must_use]
pub fn overlap_area(claims: &[Claim]) -> usize {
    let area = overlapping_cells(claims).len();
    tracing::debug!(claims = claims.len(), area, "Counted overlapping fabric");
    area
}

/// The first claim, in input order, that shares no cell with any other claim.
#[must_use]
pub fn intact_claim(claims: &[Claim]) -> Option<ClaimId> {
    claims
        .iter()
        .enumerate()
        .find(|&(index, claim)| {
            claims
                .iter()
                .enumerate()
                .all(|(other_index, other)| other_index == index || !claim.rect.overlaps(&other.rect))
        })
        .map(|(_, claim)| claim.id)
}
