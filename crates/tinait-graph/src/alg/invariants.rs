use super::{induced_degree, induces_connected, subsets_of_size};
use crate::Graph;
use crate::graph::vertices_of;
use std::collections::VecDeque;

/// Number of edges of a longest induced path.
///
/// Subsets are tried from the largest size down, so the first induced path found is a longest
/// one. Graphs without edges have detour number 0.
pub fn detour_number(g: &Graph) -> u32 {
    let n = g.order();
    for k in (2..=n).rev() {
        if subsets_of_size(n, k).any(|mask| induces_path(g, mask)) {
            tracing::trace!(order = n, vertices = k, "longest induced path found");
            return (k - 1) as u32;
        }
    }
    0
}

/// `[minimum degree, maximum degree]`; `[0, 0]` for the empty graph.
pub fn extreme_degrees(g: &Graph) -> [u32; 2] {
    let degrees = (1..=g.order()).map(|v| g.degree(v) as u32);
    let min = degrees.clone().min().unwrap_or(0);
    let max = degrees.max().unwrap_or(0);
    [min, max]
}

/// Length of a shortest cycle, or 0 for a forest.
pub fn girth(g: &Graph) -> u32 {
    (1..=g.order())
        .filter_map(|source| shortest_cycle_through(g, source))
        .min()
        .unwrap_or(0)
}

/// Breadth-first search from `source`. Every non-tree edge `{u, w}` closes a closed walk of
/// length `d(u) + d(w) + 1`; the minimum over all sources is the girth.
fn shortest_cycle_through(g: &Graph, source: usize) -> Option<u32> {
    let n = g.order();
    let mut distance: Vec<Option<u32>> = vec![None; n + 1];
    let mut parent = vec![0usize; n + 1];
    let mut queue = VecDeque::from([source]);
    distance[source] = Some(0);

    let mut best: Option<u32> = None;
    while let Some(u) = queue.pop_front() {
        let du = distance[u].unwrap_or(0);
        for w in vertices_of(g.row(u)) {
            match distance[w] {
                None => {
                    distance[w] = Some(du + 1);
                    parent[w] = u;
                    queue.push_back(w);
                }
                Some(dw) if parent[u] != w => {
                    let length = du + dw + 1;
                    best = Some(best.map_or(length, |b| b.min(length)));
                }
                Some(_) => {}
            }
        }
    }
    best
}

/// The subgraph induced by `mask` is a path: degrees 1 or 2 summing to `2(k - 1)`, connected.
fn induces_path(g: &Graph, mask: u64) -> bool {
    let k = mask.count_ones();
    let mut sum = 0;
    for v in vertices_of(mask) {
        let d = induced_degree(g, v, mask);
        if d != 1 && d != 2 {
            return false;
        }
        sum += d;
    }
    sum == 2 * (k - 1) && induces_connected(g, mask)
}
