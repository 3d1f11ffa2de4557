//! Adjacency resolver
//!
//! Works out, for every glyph, the two cells it joins. A neighbour is
//! either another glyph or a character of a node name.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

use crate::core::{EdgeFault, Glyph, Position};

/// The two cells joined by each glyph, smaller position first
pub type Adjacency = BTreeMap<Position, (Position, Position)>;

/// A glyph that doesn't join exactly two cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junction {
    pub position: Position,
    pub neighbours: BTreeSet<Position>,
}

impl Junction {
    pub fn fault(&self) -> EdgeFault {
        if self.neighbours.len() > 2 {
            EdgeFault::TooMany
        } else {
            EdgeFault::TooFew
        }
    }
}

/// Every cell joined to the glyph at `position`
///
/// Two rules feed the set. A glyph reaches along its own axis (`-` left and
/// right, `|` up and down, and so on) to any glyph or node character. It is
/// also reached by any adjacent glyph whose axis points back at it, which is
/// what joins the two halves of a corner:
///
/// ```text
///  -|    the `-` is joined to the `|`, and the `|` to the `-`
///   |
/// ```
pub fn neighbours<T>(
    position: Position,
    glyphs: &BTreeMap<Position, Glyph>,
    node_chars: &HashMap<Position, T>,
) -> BTreeSet<Position> {
    let mut found = BTreeSet::new();
    let Some(glyph) = glyphs.get(&position) else {
        return found;
    };

    for offset in glyph.offsets() {
        let candidate = position + offset;
        if glyphs.contains_key(&candidate) || node_chars.contains_key(&candidate) {
            found.insert(candidate);
        }
    }

    for (offset, expected) in Glyph::pointing_back() {
        let candidate = position + *offset;
        if glyphs.get(&candidate) == Some(expected) {
            found.insert(candidate);
        }
    }

    found
}

/// Resolve the neighbours of every glyph
///
/// Glyphs are checked in reading order and the first one that doesn't join
/// exactly two cells is returned as the error.
pub fn resolve<T>(
    glyphs: &BTreeMap<Position, Glyph>,
    node_chars: &HashMap<Position, T>,
) -> Result<Adjacency, Junction> {
    let mut adjacency = Adjacency::new();

    for position in glyphs.keys() {
        let found = neighbours(*position, glyphs, node_chars);
        let mut pair = found.iter().copied();
        match (pair.next(), pair.next(), pair.next()) {
            (Some(first), Some(second), None) => {
                adjacency.insert(*position, (first, second));
            }
            _ => {
                warn!(%position, neighbour_count = found.len(), "Glyph does not join exactly two cells");
                return Err(Junction {
                    position: *position,
                    neighbours: found,
                });
            }
        }
    }

    debug!(glyph_count = adjacency.len(), "Resolved adjacency");
    Ok(adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::scanner::{scan, text_by_char};

    fn resolve_text(text: &str) -> Result<Adjacency, Junction> {
        let network = scan(text);
        let node_chars = text_by_char(&network.nodes);
        resolve(&network.glyphs, &node_chars)
    }

    #[test]
    fn test_straight_line() {
        let adjacency = resolve_text("A---B").unwrap();
        assert_eq!(
            adjacency[&Position::new(1, 0)],
            (Position::new(0, 0), Position::new(2, 0))
        );
        assert_eq!(
            adjacency[&Position::new(3, 0)],
            (Position::new(2, 0), Position::new(4, 0))
        );
    }

    #[test]
    fn test_corner_joins_both_ways() {
        let adjacency = resolve_text("1-|\n  |\n  2").unwrap();
        assert_eq!(
            adjacency[&Position::new(1, 0)],
            (Position::new(0, 0), Position::new(2, 0))
        );
        assert_eq!(
            adjacency[&Position::new(2, 0)],
            (Position::new(1, 0), Position::new(2, 1))
        );
    }

    #[test]
    fn test_diagonal() {
        let adjacency = resolve_text("  A\n /\nB").unwrap();
        assert_eq!(
            adjacency[&Position::new(1, 1)],
            (Position::new(2, 0), Position::new(0, 2))
        );
    }

    #[test]
    fn test_dangling_line_has_too_few() {
        let junction = resolve_text("1---").unwrap_err();
        assert_eq!(junction.position, Position::new(3, 0));
        assert_eq!(junction.fault(), EdgeFault::TooFew);
        assert_eq!(junction.neighbours.len(), 1);
    }

    #[test]
    fn test_tee_has_too_many() {
        let junction = resolve_text("1---3\n  |\n  2").unwrap_err();
        assert_eq!(junction.position, Position::new(2, 0));
        assert_eq!(junction.fault(), EdgeFault::TooMany);
        assert_eq!(junction.neighbours.len(), 3);
    }

    #[test]
    fn test_isolated_glyph_has_no_neighbours() {
        let junction = resolve_text("  |  ").unwrap_err();
        assert!(junction.neighbours.is_empty());
        assert_eq!(junction.fault(), EdgeFault::TooFew);
    }
}
