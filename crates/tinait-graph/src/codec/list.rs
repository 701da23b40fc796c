//! One graph per line: the order, a space, then the edge pairs, e.g. `3 {1,2},{2,3}`.

use super::Scanner;
use super::edge_list::write_pairs;
use crate::{Graph, Result};

const FORMAT: &str = "list";

pub fn encode(g: &Graph) -> String {
    let mut out = g.order().to_string();
    if g.size() > 0 {
        out.push(' ');
        write_pairs(&mut out, g.edges());
    }
    out
}

pub fn decode(line: &str) -> Result<Graph> {
    let mut s = Scanner::new(FORMAT, line);
    let order = s.number()?;
    if s.at_end() {
        return Graph::with_order(order);
    }
    s.expect(b' ')?;
    let edges = s.edge_sequence(None)?;
    s.finish()?;
    Graph::from_edges(order, &edges)
}
