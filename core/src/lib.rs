//! Core solvers for drift.
//!
//! Two independent puzzles live here:
//!
//! - [`calibration`]: frequency drift. The resulting frequency after one pass
//!   and the first frequency reached twice when the change list repeats.
//! - [`fabric`]: overlapping fabric claims.
//!
//! [`parse`] turns puzzle text into the domain types from `drift-types`.
//! Nothing in this crate performs IO.

pub mod calibration;
pub mod fabric;
pub mod parse;

pub use calibration::{CalibrationError, Progression, first_repeat, resulting_frequency};
pub use fabric::{intact_claim, overlap_area, overlapping_cells};
pub use parse::{FABRIC_SIDE, ParseError, parse_claims, parse_deltas};
