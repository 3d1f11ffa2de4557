//! Core type definitions for network parsing
//!
//! This module contains the grid coordinate used as the key type everywhere
//! in the engine, and the four line-drawing glyphs with their directional
//! offsets.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A column/row coordinate in the character grid
///
/// Positions are ordered the way the drawing is read: top-to-bottom, then
/// left-to-right. In the drawing
///
/// ```text
///      b
/// a----|
/// ```
///
/// `b` sorts before `a`, so the edge between them is always reported as
/// `(b, a)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    /// Column, counted in characters from the start of the line
    pub x: i64,
    /// Row, counted in lines from the start of the text
    pub y: i64,
}

impl Position {
    pub const LEFT: Position = Position::new(-1, 0);
    pub const RIGHT: Position = Position::new(1, 0);
    pub const ABOVE: Position = Position::new(0, -1);
    pub const BELOW: Position = Position::new(0, 1);
    pub const UPPER_LEFT: Position = Position::new(-1, -1);
    pub const UPPER_RIGHT: Position = Position::new(1, -1);
    pub const LOWER_LEFT: Position = Position::new(-1, 1);
    pub const LOWER_RIGHT: Position = Position::new(1, 1);

    /// Create a new position
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset this position by `dx` columns along the same row
    pub fn shifted(self, dx: i64) -> Self {
        Self::new(self.x + dx, self.y)
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Position::new(x, y)
    }
}

impl From<Position> for (i64, i64) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.x, self.y)
    }
}

/// A line-drawing character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `/`
    Rising,
    /// `\`
    Falling,
}

/// Every compass offset paired with the glyph that, sitting at that offset,
/// points back towards the origin cell.
const POINTING_BACK: [(Position, Glyph); 8] = [
    (Position::UPPER_LEFT, Glyph::Falling),
    (Position::ABOVE, Glyph::Vertical),
    (Position::UPPER_RIGHT, Glyph::Rising),
    (Position::LEFT, Glyph::Horizontal),
    (Position::RIGHT, Glyph::Horizontal),
    (Position::LOWER_LEFT, Glyph::Rising),
    (Position::BELOW, Glyph::Vertical),
    (Position::LOWER_RIGHT, Glyph::Falling),
];

impl Glyph {
    /// All glyph characters, in the order the scanner recognises them
    pub const CHARS: [char; 4] = ['-', '|', '/', '\\'];

    /// Classify a character, returning `None` for anything that isn't a glyph
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Glyph::Horizontal),
            '|' => Some(Glyph::Vertical),
            '/' => Some(Glyph::Rising),
            '\\' => Some(Glyph::Falling),
            _ => None,
        }
    }

    /// Returns true if `c` is one of the four line-drawing characters
    pub fn is_glyph(c: char) -> bool {
        Self::from_char(c).is_some()
    }

    pub fn as_char(&self) -> char {
        match self {
            Glyph::Horizontal => '-',
            Glyph::Vertical => '|',
            Glyph::Rising => '/',
            Glyph::Falling => '\\',
        }
    }

    /// The two cells this glyph reaches along its own axis
    pub fn offsets(&self) -> [Position; 2] {
        match self {
            Glyph::Horizontal => [Position::LEFT, Position::RIGHT],
            Glyph::Vertical => [Position::ABOVE, Position::BELOW],
            Glyph::Rising => [Position::LOWER_LEFT, Position::UPPER_RIGHT],
            Glyph::Falling => [Position::UPPER_LEFT, Position::LOWER_RIGHT],
        }
    }

    /// Offsets at which a neighbouring glyph connects back to the origin cell
    ///
    /// A `|` directly below, or a `-` directly to the left, is joined to
    /// whatever sits at the origin even when the origin's own axis doesn't
    /// reach it. This is what makes right-angle corners like `-|` work.
    pub fn pointing_back() -> &'static [(Position, Glyph); 8] {
        &POINTING_BACK
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
