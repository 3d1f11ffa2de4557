//! Core types shared by the parsing engine
//!
//! Grid coordinates, line-drawing glyphs, the error type, a small character
//! canvas used to re-draw parts of a network, and logging setup.

mod canvas;
mod error;
pub mod logging;
mod types;

pub use canvas::*;
pub use error::*;
pub use logging::*;
pub use types::*;
