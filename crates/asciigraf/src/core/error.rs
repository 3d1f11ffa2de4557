//! Core error types for network parsing
//!
//! A drawing can only go wrong in one way: a line-drawing character that
//! doesn't join exactly two things. Both flavours of that fault are carried
//! by [`InvalidEdgeError`].

use std::fmt;
use thiserror::Error;

use super::Position;

/// Whether a junction resolved to too many or too few neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeFault {
    TooMany,
    TooFew,
}

impl fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeFault::TooMany => write!(f, "many"),
            EdgeFault::TooFew => write!(f, "few"),
        }
    }
}

/// An edge in the drawing is wrongly drawn
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEdgeError {
    #[error(
        "Too many nodes on edge at row {row}, column {column}:\nNetwork String:\n{network}\nAffected Edge:\n{affected}\n{snippet}"
    )]
    TooManyNodes {
        row: i64,
        column: i64,
        neighbours: Vec<Position>,
        network: String,
        affected: String,
        snippet: String,
    },

    #[error(
        "Too few nodes on edge at row {row}, column {column}:\nNetwork String:\n{network}\nAffected Edge:\n{affected}\n{snippet}"
    )]
    TooFewNodes {
        row: i64,
        column: i64,
        neighbours: Vec<Position>,
        network: String,
        affected: String,
        snippet: String,
    },
}

impl InvalidEdgeError {
    /// Create an error for the junction at `position`
    ///
    /// `affected` is the re-drawn edge around the junction and `snippet` the
    /// highlighted region of the original text; either may be empty when
    /// rendering them failed.
    pub fn new(
        fault: EdgeFault,
        position: Position,
        neighbours: Vec<Position>,
        network: String,
        affected: String,
        snippet: String,
    ) -> Self {
        let (row, column) = (position.y, position.x);
        match fault {
            EdgeFault::TooMany => Self::TooManyNodes {
                row,
                column,
                neighbours,
                network,
                affected,
                snippet,
            },
            EdgeFault::TooFew => Self::TooFewNodes {
                row,
                column,
                neighbours,
                network,
                affected,
                snippet,
            },
        }
    }

    pub fn fault(&self) -> EdgeFault {
        match self {
            Self::TooManyNodes { .. } => EdgeFault::TooMany,
            Self::TooFewNodes { .. } => EdgeFault::TooFew,
        }
    }

    /// Position of the offending line-drawing character
    pub fn position(&self) -> Position {
        match self {
            Self::TooManyNodes { row, column, .. } | Self::TooFewNodes { row, column, .. } => {
                Position::new(*column, *row)
            }
        }
    }

    /// The neighbours that were resolved for the offending character
    pub fn neighbours(&self) -> &[Position] {
        match self {
            Self::TooManyNodes { neighbours, .. } | Self::TooFewNodes { neighbours, .. } => {
                neighbours
            }
        }
    }

    /// The highlighted region of the original text
    pub fn snippet(&self) -> &str {
        match self {
            Self::TooManyNodes { snippet, .. } | Self::TooFewNodes { snippet, .. } => snippet,
        }
    }
}
