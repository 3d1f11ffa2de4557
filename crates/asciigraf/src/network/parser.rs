//! Network parser
//!
//! Runs the whole pipeline: scan, patch labels, resolve adjacency, trace
//! edges, build the graph.

use tracing::{debug, info, span, trace, Level};

use super::adjacency::resolve;
use super::database::{build_graph, AsciiGraph};
use super::diagnostic::invalid_edge;
use super::labels::patch_glyphs_over_labels;
use super::scanner::{scan, text_by_char};
use super::tracer::trace_edges;
use crate::core::InvalidEdgeError;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Rows shown above and below a faulty junction in error messages
    pub diagnostic_context: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            diagnostic_context: 1,
        }
    }
}

/// Parser for ASCII network drawings
///
/// Holds no state between calls; one parser can be reused for any number of
/// drawings.
#[derive(Debug, Clone, Default)]
pub struct AsciiParser {
    config: ParserConfig,
}

impl AsciiParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a drawing into a graph
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEdgeError`] when a line-drawing character doesn't
    /// join exactly two things, or a line closes on itself without reaching
    /// a node.
    pub fn parse(&self, input: &str) -> Result<AsciiGraph, InvalidEdgeError> {
        let parse_span = span!(Level::INFO, "parse_network", input_len = input.len());
        let _enter = parse_span.enter();

        trace!("Starting network parse");

        let scan_span = span!(Level::DEBUG, "scan");
        let scan_enter = scan_span.enter();
        let network = scan(input);
        let node_chars = text_by_char(&network.nodes);
        drop(scan_enter);

        let patch_span = span!(Level::DEBUG, "patch_labels");
        let patch_enter = patch_span.enter();
        let glyphs = patch_glyphs_over_labels(&network.labels, &network.glyphs);
        drop(patch_enter);

        let adjacency_span = span!(Level::DEBUG, "resolve_adjacency");
        let adjacency_enter = adjacency_span.enter();
        let adjacency = resolve(&glyphs, &node_chars).map_err(|junction| {
            invalid_edge(input, &junction, &glyphs, self.config.diagnostic_context)
        })?;
        drop(adjacency_enter);

        let trace_span = span!(Level::DEBUG, "trace_edges");
        let trace_enter = trace_span.enter();
        let traced = trace_edges(&adjacency, &node_chars).map_err(|junction| {
            invalid_edge(input, &junction, &glyphs, self.config.diagnostic_context)
        })?;
        drop(trace_enter);

        let build_span = span!(Level::DEBUG, "build_graph");
        let build_enter = build_span.enter();
        let graph = build_graph(&network.nodes, &network.labels, &node_chars, &traced);
        debug!(
            label_count = network.labels.len(),
            labelled_edges = graph.edges().filter(|edge| edge.label.is_some()).count(),
            "Attached labels"
        );
        drop(build_enter);

        info!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "Network parse completed"
        );
        Ok(graph)
    }
}
