//! Label patcher
//!
//! A label sitting on a line interrupts the glyphs either side of it:
//!
//! ```text
//! ---(horizontal_label)---          |
//!                            (vertical_label)
//!                                   |
//! ```
//!
//! Patching fills the label's cells with glyphs wherever the line runs
//! through it, so the tracer sees one unbroken line.

use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::scanner::char_positions;
use crate::core::{Glyph, Position};

/// Return a copy of `glyphs` with lines continued through every label
///
/// Each label is swept left to right so a `-` written into one cell is seen
/// by the next. Labels are visited in reading order and a later decision on
/// the same cell overwrites an earlier one. Cells no rule matches stay
/// empty, which is how a label floating on its own ends up on no edge.
pub fn patch_glyphs_over_labels(
    labels: &BTreeMap<Position, String>,
    glyphs: &BTreeMap<Position, Glyph>,
) -> BTreeMap<Position, Glyph> {
    let mut patched = glyphs.clone();

    for (root, label) in labels {
        for (position, c) in char_positions(*root, label) {
            let neighbour = |offset: Position| patched.get(&(position + offset)).copied();

            let glyph = match c {
                '(' => (neighbour(Position::LEFT) == Some(Glyph::Horizontal))
                    .then_some(Glyph::Horizontal),
                ')' => (neighbour(Position::RIGHT) == Some(Glyph::Horizontal))
                    .then_some(Glyph::Horizontal),
                _ if neighbour(Position::ABOVE) == Some(Glyph::Vertical)
                    && neighbour(Position::BELOW) == Some(Glyph::Vertical) =>
                {
                    Some(Glyph::Vertical)
                }
                _ => (neighbour(Position::LEFT) == Some(Glyph::Horizontal))
                    .then_some(Glyph::Horizontal),
            };

            if let Some(glyph) = glyph {
                trace!(%position, %glyph, label = %label, "Patched label cell");
                patched.insert(position, glyph);
            }
        }
    }

    debug!(
        patched_count = patched.len() - glyphs.len(),
        "Patched glyphs over labels"
    );
    patched
}
