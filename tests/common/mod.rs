//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Frequency changes from the puzzle statement's walkthrough.
pub const WALKTHROUGH_DELTAS: &str = "+1\n-2\n+3\n+1\n";

/// The three claims from the puzzle statement.
pub const EXAMPLE_CLAIMS: &str = "#1 @ 1,3: 4x4\n#2 @ 3,1: 4x4\n#3 @ 5,5: 2x2\n";

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test input");
    path
}

/// Render deltas the way puzzle inputs do, with explicit signs.
pub fn signed_lines(deltas: &[i64]) -> String {
    deltas.iter().map(|delta| format!("{delta:+}\n")).collect()
}
