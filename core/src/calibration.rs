//! Frequency calibration.
//!
//! The device starts at frequency zero and applies a [`DeltaSequence`] over and
//! over. [`first_repeat`] finds the first frequency reached twice without
//! walking the repeated passes one by one.
//!
//! # Closed form
//!
//! With partial sums `P[0..=N]` (`P[0] = 0`) and per-pass increment
//! `A = P[N]`, the value at index `i` of pass `k` is `P[i] + k * A`. A value
//! first seen at index `t` in pass zero is seen again at index `s` of pass `k`
//! exactly when `P[t] - P[s] == k * A` for some `k >= 1`, which happens at
//! step `k * N + s`. Checking every `(t, s)` pair is O(N²) and terminates no
//! matter how many passes the repeat needs.

use std::collections::HashSet;

use thiserror::Error;

use drift_types::{DeltaSequence, Occurrence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    #[error("no frequency is ever reached twice")]
    NoSolution,
    #[error("frequency or step count overflowed")]
    Overflow,
}

/// Frequency after a single pass over `deltas`.
pub fn resulting_frequency(deltas: &DeltaSequence) -> Result<i64, CalibrationError> {
    deltas
        .iter()
        .try_fold(0i64, |frequency, &delta| frequency.checked_add(delta))
        .ok_or(CalibrationError::Overflow)
}

/// Partial sums of one pass, starting at zero.
///
/// Holds `N + 1` entries for a sequence of `N` deltas. The last entry is the
/// net change of one pass and doubles as the first value of the next pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    sums: Vec<i64>,
}

impl Progression {
    pub fn new(deltas: &DeltaSequence) -> Result<Self, CalibrationError> {
        let mut sums = Vec::with_capacity(deltas.pass_len() + 1);
        let mut frequency = 0i64;
        sums.push(frequency);
        for &delta in deltas.iter() {
            frequency = frequency
                .checked_add(delta)
                .ok_or(CalibrationError::Overflow)?;
            sums.push(frequency);
        }
        Ok(Self { sums })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.sums
    }

    /// Net change produced by one full pass.
    #[must_use]
    pub fn increment(&self) -> i64 {
        self.sums[self.sums.len() - 1]
    }

    /// One entry per step of a pass, including the starting zero.
    #[must_use]
    pub fn per_pass(&self) -> &[i64] {
        &self.sums[..self.sums.len() - 1]
    }

    /// First value seen twice before the second pass moves past its first
    /// step, found by a plain scan.
    #[must_use]
    pub fn first_in_pass_repeat(&self) -> Option<Occurrence> {
        let mut seen = HashSet::with_capacity(self.sums.len());
        self.sums
            .iter()
            .enumerate()
            .find(|&(_, value)| !seen.insert(*value))
            .map(|(step, &value)| Occurrence {
                value,
                step: step as u64,
            })
    }
}

/// First running frequency reached twice when `deltas` repeats forever.
///
/// Fails with [`CalibrationError::NoSolution`] when the frequencies never
/// revisit a value, e.g. `[+1]`.
pub fn first_repeat(deltas: &DeltaSequence) -> Result<Occurrence, CalibrationError> {
    let progression = Progression::new(deltas)?;

    if let Some(occurrence) = progression.first_in_pass_repeat() {
        tracing::debug!(
            value = occurrence.value,
            step = occurrence.step,
            "Repeat found inside the first pass"
        );
        return Ok(occurrence);
    }

    let increment = progression.increment();
    if increment == 0 {
        return Err(CalibrationError::NoSolution);
    }

    let per_pass = progression.per_pass();
    let pass_len = per_pass.len() as u64;
    let mut best: Option<Occurrence> = None;
    let mut overflowed = false;

    for (target, &value) in per_pass.iter().enumerate() {
        for (start, &from) in per_pass.iter().enumerate() {
            if target == start {
                continue;
            }
            let Some(passes) = passes_between(from, value, increment) else {
                continue;
            };
            let Some(step) = passes
                .checked_mul(pass_len)
                .and_then(|step| step.checked_add(start as u64))
            else {
                overflowed = true;
                continue;
            };
            if best.is_none_or(|current| step < current.step) {
                best = Some(Occurrence { value, step });
            }
        }
    }

    tracing::debug!(increment, pass_len, found = best.is_some(), "Pair search finished");

    match best {
        Some(occurrence) => Ok(occurrence),
        None if overflowed => Err(CalibrationError::Overflow),
        None => Err(CalibrationError::NoSolution),
    }
}

/// Whole number of passes that carries `from` onto `to`, if any.
fn passes_between(from: i64, to: i64, increment: i64) -> Option<u64> {
    let gap = i128::from(to) - i128::from(from);
    let increment = i128::from(increment);
    if gap % increment != 0 {
        return None;
    }
    u64::try_from(gap / increment).ok()
}
