//! Decision procedures, orderings and numeric invariants over a [`Graph`].
//!
//! Every function takes the graph by shared reference and is deterministic, so repeated calls
//! on an unchanged graph return the same result.

mod chordal;
mod clique;
mod closed;
mod invariants;
mod predicates;

pub use chordal::{is_chordal, is_perfect_elimination_ordering, lexicographic_ordering};
pub use clique::{clique_numbers, independence_numbers, maximal_cliques};
pub use closed::{closed_labeling, is_closed, is_closed_wrt_labeling};
pub use invariants::{detour_number, extreme_degrees, girth};
pub use predicates::{is_clawfree, is_cograph, is_cone, is_connected, is_euler};

use crate::Graph;
use crate::graph::{bit, full_mask};

/// All vertex masks with exactly `k` of the `order` vertices, in increasing numeric order.
pub(crate) fn subsets_of_size(order: usize, k: usize) -> impl Iterator<Item = u64> {
    let limit = 1u64 << order;
    let mut next = (k <= order).then(|| full_mask(k));
    std::iter::from_fn(move || {
        let x = next?;
        next = if x == 0 {
            None
        } else {
            // Gosper's hack: the next larger integer with the same popcount.
            let c = x & x.wrapping_neg();
            let r = x + c;
            let y = (((r ^ x) >> 2) / c) | r;
            (y < limit).then_some(y)
        };
        Some(x)
    })
}

/// Degree of `v` inside the subgraph induced by `mask`.
#[inline]
pub(crate) fn induced_degree(g: &Graph, v: usize, mask: u64) -> u32 {
    (g.row(v) & mask).count_ones()
}

/// `true` iff the subgraph induced by `mask` is connected (the empty mask counts as connected).
pub(crate) fn induces_connected(g: &Graph, mask: u64) -> bool {
    if mask == 0 {
        return true;
    }
    let start = mask.trailing_zeros() as usize + 1;
    let mut reached = bit(start);
    let mut frontier = reached;
    while frontier != 0 {
        let mut grown = 0u64;
        for v in crate::graph::vertices_of(frontier) {
            grown |= g.row(v);
        }
        frontier = grown & mask & !reached;
        reached |= frontier;
    }
    reached == mask
}
