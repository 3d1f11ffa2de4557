//! ASCII network parsing
//!
//! The pipeline runs scanner → labels → adjacency → tracer → database, with
//! diagnostic rendering only on the error path.

pub mod adjacency;
pub mod database;
pub mod diagnostic;
pub mod labels;
pub mod parser;
pub mod scanner;
pub mod tracer;

pub use database::{AsciiGraph, EdgeData, NodeData};
pub use diagnostic::{draw, highlight};
pub use labels::patch_glyphs_over_labels;
pub use parser::{AsciiParser, ParserConfig};
pub use scanner::{glyphs, scan, tokens, ScannedNetwork, Token};
