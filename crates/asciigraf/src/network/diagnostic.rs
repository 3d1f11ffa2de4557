//! Diagnostic rendering
//!
//! Turns a bad junction back into text a human can find in their drawing.
//! Nothing here is allowed to fail: if a view can't be produced the caller
//! gets an empty string and the original error is still reported.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;
use unicode_width::UnicodeWidthChar;

use super::adjacency::Junction;
use crate::core::{AsciiCanvas, Glyph, InvalidEdgeError, Position};

/// Re-draw glyphs and nodes at their original positions
///
/// `nodes` maps node-character positions to node names; each name is drawn
/// once, starting at its smallest position.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use asciigraf::core::{Glyph, Position};
/// use asciigraf::network::draw;
///
/// let glyphs = BTreeMap::from([
///     (Position::new(2, 0), Glyph::Vertical),
///     (Position::new(2, 2), Glyph::Vertical),
/// ]);
/// let nodes = BTreeMap::from([(Position::new(0, 1), "node".to_string())]);
/// assert_eq!(draw(&glyphs, &nodes), "  |\nnode\n  |");
/// ```
pub fn draw(glyphs: &BTreeMap<Position, Glyph>, nodes: &BTreeMap<Position, String>) -> String {
    let mut starts: HashMap<&str, Position> = HashMap::new();
    for (position, name) in nodes {
        starts
            .entry(name.as_str())
            .and_modify(|start| *start = (*start).min(*position))
            .or_insert(*position);
    }

    let mut canvas = AsciiCanvas::default();
    for (position, glyph) in glyphs {
        canvas.set_char(*position, glyph.as_char());
    }
    for (name, position) in starts {
        canvas.draw_text(position, name);
    }
    canvas.to_string()
}

/// Show the rows of `text` around `offending`, with a `^` under each
/// offending character
///
/// `context` rows above and below are included. Each row is prefixed with
/// its 1-based line number.
///
/// ```text
///    2 |         1---------------3
///      |                 ^
///    3 |                 |
/// ```
pub fn highlight(text: &str, offending: &BTreeSet<Position>, context: usize) -> String {
    render_highlight(text, offending, context).unwrap_or_default()
}

fn render_highlight(
    text: &str,
    offending: &BTreeSet<Position>,
    context: usize,
) -> Option<String> {
    let first = offending.first()?.y;
    let last = offending.last()?.y;
    let lines: Vec<&str> = text.split('\n').collect();

    let context = i64::try_from(context).ok()?;
    let top = usize::try_from((first - context).max(0)).ok()?;
    let bottom = usize::try_from((last + context).max(0)).ok()?.min(lines.len().checked_sub(1)?);
    let gutter = (bottom + 1).to_string().len().max(4);

    let mut out = String::new();
    for (row, line) in lines.iter().enumerate().take(bottom + 1).skip(top) {
        writeln!(out, "{:>gutter$} | {}", row + 1, line.trim_end()).ok()?;

        let columns: Vec<i64> = offending
            .iter()
            .filter(|p| p.y == row as i64)
            .map(|p| p.x)
            .collect();
        if columns.is_empty() {
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut marker = String::new();
        for column in 0..=*columns.iter().max()? {
            if columns.contains(&column) {
                marker.push('^');
                continue;
            }
            // Pad by display width so the marker lands under wide characters
            let width = usize::try_from(column)
                .ok()
                .and_then(|i| chars.get(i))
                .map_or(1, |c| c.width().unwrap_or(0));
            marker.extend(std::iter::repeat(' ').take(width));
        }
        writeln!(out, "{:>gutter$} | {}", "", marker).ok()?;
    }

    Some(out.trim_end_matches('\n').to_string())
}

/// Build the error for a junction that doesn't join exactly two cells
///
/// The error carries the whole drawing, the glyphs around the junction
/// re-drawn on their own, and a highlighted view of the source rows.
pub fn invalid_edge(
    text: &str,
    junction: &Junction,
    glyphs: &BTreeMap<Position, Glyph>,
    context: usize,
) -> InvalidEdgeError {
    let affected: BTreeMap<Position, Glyph> = std::iter::once(&junction.position)
        .chain(junction.neighbours.iter())
        .filter_map(|position| glyphs.get(position).map(|glyph| (*position, *glyph)))
        .collect();

    let mut offending = junction.neighbours.clone();
    offending.insert(junction.position);

    InvalidEdgeError::new(
        junction.fault(),
        junction.position,
        junction.neighbours.iter().copied().collect(),
        text.to_string(),
        draw(&affected, &BTreeMap::new()),
        highlight(text, &offending, context),
    )
}
