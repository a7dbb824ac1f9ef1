//! Line-oriented command parsing for the prompt front-end.
//!
//! Each parser takes one raw line as typed (trailing newline included or not) and
//! returns the core request or the [`GameError`] to show before prompting again.

use crate::core::GameError;
use crate::types::{Coord, Direction, ShapeKind};

/// Parse a shape label such as `t` or ` Z `.
pub fn parse_shape(line: &str) -> Result<ShapeKind, GameError> {
    ShapeKind::from_str(line).ok_or(GameError::UnknownShape)
}

/// Parse a rotation direction.
///
/// An empty line ends the rotation loop and yields `Ok(None)`.
pub fn parse_direction(line: &str) -> Result<Option<Direction>, GameError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Direction::from_str(line)
        .map(Some)
        .ok_or(GameError::InvalidDirection)
}

/// Parse `row,col` (whitespace around either number is allowed).
///
/// Only the shape of the input is checked here; any pair of integers is accepted and
/// range checking is left to the grid. Values past the `i32` range saturate, so they
/// still come back from the grid as `OutOfBounds`.
pub fn parse_coordinate(line: &str) -> Result<Coord, GameError> {
    let (row, col) = line
        .trim()
        .split_once(',')
        .ok_or(GameError::MalformedCoordinate)?;
    Ok(Coord::new(parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(s: &str) -> Result<i32, GameError> {
    let s = s.trim();
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::MalformedCoordinate);
    }
    match s.parse::<i64>() {
        Ok(v) => Ok(v.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
        // Only overflow is left at this point
        Err(_) if s.starts_with('-') => Ok(i32::MIN),
        Err(_) => Ok(i32::MAX),
    }
}

/// Interpret a replay answer; only `y`/`yes` (any case) means yes.
pub fn parse_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
