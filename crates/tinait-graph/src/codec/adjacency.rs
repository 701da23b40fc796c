//! Adjacency-list blocks as printed by nauty's `showg`:
//!
//! ```text
//! Graph 1, order 3.
//!   1 : 3;
//!   2 : 3;
//!   3 : 1 2;
//!
//! ```
//!
//! The header line is ignored on input. A block ends at the first blank line (or end of input);
//! its order is the number of vertex lines. Only pairs `v < w` are read, so an asymmetric listing
//! still yields a simple undirected graph.

use super::Scanner;
use crate::{Error, Graph, Result};
use std::fmt::Write;

const FORMAT: &str = "adjacency list";

/// Encodes `g` as block number `index` (the number only appears in the header).
pub fn encode(g: &Graph, index: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Graph {index}, order {}.", g.order());
    for v in 1..=g.order() {
        let _ = write!(out, "  {v} :");
        for w in g.neighbors(v) {
            let _ = write!(out, " {w}");
        }
        out.push_str(";\n");
    }
    out.push('\n');
    out
}

/// Decodes the vertex lines of one block (header and terminating blank line excluded).
pub fn decode_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Graph> {
    let mut edges = Vec::new();
    let mut order = 0usize;
    for line in lines {
        order += 1;
        let mut s = Scanner::new(FORMAT, line.trim_end());
        while s.eat(b' ') {}
        let v = s.number()?;
        if v != order {
            return Err(s.error(format!("expected vertex {order}, got {v}")));
        }
        while s.eat(b' ') {}
        s.expect(b':')?;
        loop {
            while s.eat(b' ') {}
            if s.eat(b';') {
                break;
            }
            let w = s.number()?;
            if v < w {
                edges.push((v, w));
            }
        }
        s.finish()?;
    }
    Graph::from_edges(order, &edges)
}

/// Decodes a whole block: a header line followed by the vertex lines.
pub fn decode(block: &str) -> Result<Graph> {
    let mut lines = block.lines().skip_while(|l| l.trim().is_empty());
    if lines.next().is_none() {
        return Err(Error::parse(FORMAT, "missing header line"));
    }
    decode_lines(lines.take_while(|l| !l.trim().is_empty()))
}
