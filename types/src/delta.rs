//! Frequency delta types.
//!
//! A [`DeltaSequence`] is non-empty by construction, so every consumer can
//! rely on at least one step per pass.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("delta sequence must contain at least one change")]
pub struct EmptySequenceError;

/// Ordered, immutable list of signed frequency changes applied once per pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct DeltaSequence(Vec<i64>);

impl DeltaSequence {
    pub fn new(deltas: impl Into<Vec<i64>>) -> Result<Self, EmptySequenceError> {
        let deltas = deltas.into();
        if deltas.is_empty() {
            Err(EmptySequenceError)
        } else {
            Ok(Self(deltas))
        }
    }

    /// Number of steps in one pass. Never zero.
    #[must_use]
    pub fn pass_len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl TryFrom<Vec<i64>> for DeltaSequence {
    type Error = EmptySequenceError;

    fn try_from(value: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[i64]> for DeltaSequence {
    type Error = EmptySequenceError;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        Self::new(value.to_vec())
    }
}

impl From<DeltaSequence> for Vec<i64> {
    fn from(value: DeltaSequence) -> Self {
        value.0
    }
}

impl Deref for DeltaSequence {
    type Target = [i64];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// A running-sum value together with the step at which it was reached for the
/// second time.
///
/// `step` counts applied deltas across passes: step 0 is the starting zero,
/// step `N` is the first value of the second pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub value: i64,
    pub step: u64,
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (step {})", self.value, self.step)
    }
}
