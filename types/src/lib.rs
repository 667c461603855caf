//! Core domain types for drift.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod claim;
mod delta;

pub use claim::{Cells, Claim, ClaimId, Rect};
pub use delta::{DeltaSequence, EmptySequenceError, Occurrence};
