//! asciigraf - Turn ASCII-art network drawings into graphs
//!
//! Node names are joined by lines drawn with `-`, `|`, `/` and `\`. Each
//! line becomes an undirected edge carrying its length, the cells it runs
//! through and, optionally, a label written in parentheses on the line.
//!
//! # Quick Start
//!
//! ```rust
//! use asciigraf::graph_from_ascii;
//!
//! let graph = graph_from_ascii(
//!     "
//!     A---(nuts)----B
//!                   |
//!                   C
//!     ",
//! )
//! .unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! let edge = graph.edge("A", "B").unwrap();
//! assert_eq!(edge.length, 13);
//! assert_eq!(edge.label.as_deref(), Some("nuts"));
//! assert_eq!(graph.edge("C", "B").unwrap().length, 1);
//! ```
//!
//! # Errors
//!
//! A line that doesn't join exactly two things is rejected, with the
//! offending part of the drawing highlighted:
//!
//! ```rust
//! use asciigraf::{graph_from_ascii, EdgeFault};
//!
//! let err = graph_from_ascii("1---").unwrap_err();
//! assert_eq!(err.fault(), EdgeFault::TooFew);
//! assert!(err.to_string().starts_with("Too few nodes"));
//! ```

pub mod core;
pub mod network;

pub use crate::core::*;
pub use network::{AsciiGraph, AsciiParser, EdgeData, NodeData, ParserConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{EdgeFault, Glyph, InvalidEdgeError, Position};
    pub use crate::graph_from_ascii;
    pub use crate::network::{AsciiGraph, AsciiParser, EdgeData, NodeData, ParserConfig};
}

/// Parse an ASCII drawing of a network into a graph
///
/// Uses the default [`ParserConfig`]. Empty or whitespace-only input gives
/// an empty graph.
///
/// # Example
/// ```rust
/// use asciigraf::graph_from_ascii;
///
/// let graph = graph_from_ascii(" A---B----C----D").unwrap();
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.has_edge("B", "C"));
/// ```
pub fn graph_from_ascii(text: &str) -> Result<AsciiGraph, InvalidEdgeError> {
    AsciiParser::new().parse(text)
}
