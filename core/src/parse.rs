//! Puzzle input parsing.
//!
//! Both formats are line oriented. Blank lines are skipped and every reported
//! line number is 1-based.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use drift_types::{Claim, ClaimId, DeltaSequence, EmptySequenceError, Rect};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: invalid frequency change {text:?}")]
    InvalidDelta { line: usize, text: String },
    #[error("line {line}: invalid claim {text:?}")]
    InvalidClaim { line: usize, text: String },
    #[error("line {line}: claim {text:?} extends past the {side}-inch fabric", side = FABRIC_SIDE)]
    ClaimOutOfBounds { line: usize, text: String },
    #[error(transparent)]
    Empty(#[from] EmptySequenceError),
}

/// Side of the square fabric in inches. Claims must lie entirely inside it,
/// which also bounds the cells the overlap counter enumerates.
pub const FABRIC_SIDE: u32 = 1000;

static CLAIM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d+)\s*@\s*(\d+),(\d+):\s*(\d+)x(\d+)$").expect("valid claim regex")
});

fn non_blank_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse one signed change per line (`+6`, `-3`, `0`).
pub fn parse_deltas(input: &str) -> Result<DeltaSequence, ParseError> {
    let deltas = non_blank_lines(input)
        .map(|(line, text)| {
            text.parse::<i64>().map_err(|_| ParseError::InvalidDelta {
                line,
                text: text.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = deltas.len(), "Parsed frequency changes");
    Ok(DeltaSequence::new(deltas)?)
}

/// Parse claims written as `#123 @ 3,2: 5x4`.
pub fn parse_claims(input: &str) -> Result<Vec<Claim>, ParseError> {
    let claims = non_blank_lines(input)
        .map(|(line, text)| {
            let claim = parse_claim(text).ok_or_else(|| ParseError::InvalidClaim {
                line,
                text: text.to_string(),
            })?;
            if claim.rect.right() > u64::from(FABRIC_SIDE)
                || claim.rect.bottom() > u64::from(FABRIC_SIDE)
            {
                return Err(ParseError::ClaimOutOfBounds {
                    line,
                    text: text.to_string(),
                });
            }
            Ok(claim)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = claims.len(), "Parsed fabric claims");
    Ok(claims)
}

fn parse_claim(text: &str) -> Option<Claim> {
    let captures = CLAIM_PATTERN.captures(text)?;
    let number = |index: usize| captures.get(index)?.as_str().parse::<u32>().ok();

    Some(Claim::new(
        ClaimId::new(number(1)?),
        Rect::new(number(2)?, number(3)?, number(4)?, number(5)?),
    ))
}
