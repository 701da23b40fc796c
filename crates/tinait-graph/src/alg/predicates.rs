use super::{induced_degree, induces_connected, subsets_of_size};
use crate::Graph;
use crate::graph::{bit, vertices_of};

/// Depth-first reachability from vertex 1. Orders 0 and 1 are connected.
pub fn is_connected(g: &Graph) -> bool {
    let n = g.order();
    if n < 2 {
        return true;
    }
    let mut visited = bit(1);
    let mut stack = vec![1usize];
    while let Some(current) = stack.pop() {
        let fresh = g.row(current) & !visited;
        visited |= fresh;
        stack.extend(vertices_of(fresh));
    }
    visited.count_ones() as usize == n
}

/// No four vertices induce a path `P4`.
pub fn is_cograph(g: &Graph) -> bool {
    if g.order() < 4 {
        return true;
    }
    !subsets_of_size(g.order(), 4).any(|mask| induces_p4(g, mask))
}

/// Every vertex has even degree.
pub fn is_euler(g: &Graph) -> bool {
    (1..=g.order()).all(|v| g.degree(v).is_multiple_of(2))
}

/// No four vertices induce a claw `K1,3`.
pub fn is_clawfree(g: &Graph) -> bool {
    if g.order() < 4 {
        return true;
    }
    !subsets_of_size(g.order(), 4).any(|mask| induces_claw(g, mask))
}

/// Some vertex is adjacent to all others.
pub fn is_cone(g: &Graph) -> bool {
    (1..=g.order()).any(|v| g.is_universal(v))
}

fn induces_p4(g: &Graph, mask: u64) -> bool {
    let mut sum = 0;
    for v in vertices_of(mask) {
        let d = induced_degree(g, v, mask);
        if d != 1 && d != 2 {
            return false;
        }
        sum += d;
    }
    sum == 6 && induces_connected(g, mask)
}

fn induces_claw(g: &Graph, mask: u64) -> bool {
    let mut sum = 0;
    for v in vertices_of(mask) {
        let d = induced_degree(g, v, mask);
        if d != 1 && d != 3 {
            return false;
        }
        sum += d;
    }
    sum == 6
}
