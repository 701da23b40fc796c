//! LaTeX/TikZ snippets drawing a graph with its vertices on a circle of radius 100.

use crate::Graph;
use std::f64::consts::PI;
use std::fmt::Write;

/// Package includes the snippets rely on.
pub fn preamble() -> &'static str {
    "\\usepackage{tikz}\n\
\\usetikzlibrary{ decorations.pathreplacing }\n\
\\usetikzlibrary{ shapes.misc }\n\
\\usetikzlibrary{ calc }\n"
}

/// Position of vertex `v` (truncated toward zero).
pub fn coordinate(v: usize, order: usize) -> (i32, i32) {
    let angle = 2.0 * (v - 1) as f64 * PI / order as f64;
    ((100.0 * angle.cos()) as i32, (100.0 * angle.sin()) as i32)
}

pub fn encode(g: &Graph, caption: &str) -> String {
    let order = g.order();
    let mut out = String::new();
    let _ = write!(
        out,
        "{caption}\n\n\\begin{{center}}\n\\begin{{tikzpicture}}[\n\
scale=0.04,mynode/.style={{draw,fill=white,circle,outer sep=4pt,inner sep=2pt}},\
myedge/.style={{line width=1.5,black}}\n]\n"
    );
    for v in 1..=order {
        let (x, y) = coordinate(v, order);
        let _ = writeln!(out, "\\coordinate(p{v}) at({x},{y});");
    }
    out.push('\n');
    for (v, w) in g.edges() {
        let _ = writeln!(out, "\\draw[myedge] (p{v}) -- (p{w});");
    }
    out.push('\n');
    for v in 1..=order {
        let _ = writeln!(out, "\\node[mynode] at (p{v}) {{}};");
    }
    out.push_str("\\end{tikzpicture}\n\\end{center}\n\n");
    out
}
