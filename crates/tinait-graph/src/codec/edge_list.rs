//! The `{{v,w},{v,w},...}` edge-list string.
//!
//! Edges are written with `v < w`, ordered by `v` then `w`; the empty graph is `{}`. The order is
//! not part of the string and must be supplied when decoding.

use super::Scanner;
use crate::{Graph, Result, VertexOrdering};
use std::fmt::Write;

const FORMAT: &str = "edge list";

pub fn encode(g: &Graph) -> String {
    render(g.edges())
}

/// Encodes `g` with every vertex `v` written as `ordering.label(v)`.
///
/// Pairs keep the scan order of the unlabeled graph, so a pair may be written with its larger
/// label first.
pub fn encode_with_labeling(g: &Graph, ordering: &VertexOrdering) -> String {
    let edges = g
        .edges()
        .map(|(v, w)| (ordering.label(v), ordering.label(w)));
    render(edges)
}

pub(crate) fn render(edges: impl Iterator<Item = (usize, usize)>) -> String {
    let mut out = String::from("{");
    write_pairs(&mut out, edges);
    out.push('}');
    out
}

/// Appends `{v,w},{v,w}` (no surrounding braces).
pub(crate) fn write_pairs(out: &mut String, edges: impl Iterator<Item = (usize, usize)>) {
    for (i, (v, w)) in edges.enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{{{v},{w}}}");
    }
}

/// Parses an edge-list string for a graph of the given order.
pub fn decode(order: usize, text: &str) -> Result<Graph> {
    let mut s = Scanner::new(FORMAT, text);
    s.expect(b'{')?;
    let edges = s.edge_sequence(Some(b'}'))?;
    s.expect(b'}')?;
    s.finish()?;
    tracing::trace!(order, edges = edges.len(), "decoded edge list");
    Graph::from_edges(order, &edges)
}
