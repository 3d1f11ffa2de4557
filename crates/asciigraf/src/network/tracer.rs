//! Edge tracer
//!
//! Follows glyphs from a seed out to a node in both directions, turning the
//! adjacency map into whole edges.

use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, trace};

use super::adjacency::{Adjacency, Junction};
use crate::core::Position;

/// One line of the drawing, from a node character to a node character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedEdge {
    /// Every cell of the edge, both endpoint node characters included
    pub positions: Vec<Position>,
}

impl TracedEdge {
    /// The node character the edge starts at (the smaller end)
    pub fn start(&self) -> Position {
        self.positions[0]
    }

    /// The node character the edge ends at
    pub fn end(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Cells between the two endpoints
    pub fn points(&self) -> &[Position] {
        &self.positions[1..self.positions.len() - 1]
    }
}

/// Walk away from `seed` through `first` until a node character is reached
///
/// The returned cells start at `first` and end at the node character.
fn follow<T>(
    seed: Position,
    first: Position,
    adjacency: &Adjacency,
    node_chars: &HashMap<Position, T>,
) -> Result<Vec<Position>, Junction> {
    let mut walked = Vec::new();
    let (mut from, mut current) = (seed, first);

    loop {
        walked.push(current);
        if node_chars.contains_key(&current) {
            return Ok(walked);
        }

        // Back at the seed without meeting a node: a closed loop with no ends
        let neighbours = adjacency.get(&current).filter(|_| current != seed);
        let Some(&(a, b)) = neighbours.filter(|_| walked.len() <= adjacency.len()) else {
            return Err(Junction {
                position: seed,
                neighbours: adjacency
                    .get(&seed)
                    .map(|&(a, b)| BTreeSet::from([a, b]))
                    .unwrap_or_default(),
            });
        };

        let next = if b == from { a } else { b };
        from = current;
        current = next;
    }
}

fn trace_from<T>(
    seed: Position,
    (first, second): (Position, Position),
    adjacency: &Adjacency,
    node_chars: &HashMap<Position, T>,
) -> Result<TracedEdge, Junction> {
    let before = follow(seed, first, adjacency, node_chars)?;
    let after = follow(seed, second, adjacency, node_chars)?;

    let mut positions: Vec<Position> = before
        .into_iter()
        .rev()
        .chain(std::iter::once(seed))
        .chain(after)
        .collect();

    if positions[0] > positions[positions.len() - 1] {
        positions.reverse();
    }

    Ok(TracedEdge { positions })
}

/// Trace every edge in the drawing
///
/// Glyphs are used as seeds in reading order; a glyph already covered by an
/// earlier edge is skipped, so each physical line yields one edge.
pub fn trace_edges<T>(
    adjacency: &Adjacency,
    node_chars: &HashMap<Position, T>,
) -> Result<Vec<TracedEdge>, Junction> {
    let mut assigned = HashSet::new();
    let mut edges = Vec::new();

    for (&seed, &pair) in adjacency {
        if assigned.contains(&seed) {
            continue;
        }

        let edge = trace_from(seed, pair, adjacency, node_chars)?;
        trace!(
            %seed,
            start = %edge.start(),
            end = %edge.end(),
            length = edge.points().len(),
            "Traced edge"
        );
        assigned.extend(edge.points().iter().copied());
        edges.push(edge);
    }

    debug!(edge_count = edges.len(), "Traced edges");
    Ok(edges)
}
