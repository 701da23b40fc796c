use crate::Graph;
use crate::graph::{bit, vertices_of};

/// All maximal cliques of `g` as vertex masks, via Bron–Kerbosch with pivoting.
///
/// The empty graph has exactly one maximal clique, the empty set.
pub fn maximal_cliques(g: &Graph) -> Vec<u64> {
    let mut cliques = Vec::new();
    expand(g, 0, crate::graph::full_mask(g.order()), 0, &mut cliques);
    cliques
}

/// `[clique number, number of maximal cliques]`.
pub fn clique_numbers(g: &Graph) -> [u32; 2] {
    let cliques = maximal_cliques(g);
    let largest = cliques.iter().map(|c| c.count_ones()).max().unwrap_or(0);
    [largest, cliques.len() as u32]
}

/// `[independence number, number of maximal independent sets]`, i.e. the clique numbers of the
/// complement.
pub fn independence_numbers(g: &Graph) -> [u32; 2] {
    clique_numbers(&g.complement())
}

fn expand(g: &Graph, r: u64, mut p: u64, mut x: u64, out: &mut Vec<u64>) {
    if p == 0 {
        if x == 0 {
            out.push(r);
        }
        return;
    }
    let skip = highest(p | x).map_or(0, |u| g.row(u));
    for v in vertices_of(p & !skip) {
        let row = g.row(v);
        expand(g, r | bit(v), p & row, x & row, out);
        p &= !bit(v);
        x |= bit(v);
    }
}

fn highest(mask: u64) -> Option<usize> {
    (mask != 0).then(|| 64 - mask.leading_zeros() as usize)
}
