//! Closed graphs.
//!
//! A labeling is *closed* if for all edges `{a,b}`, `{i,j}` with `a < b` and `i < j`: `a = i`
//! implies `{b,j}` is an edge and `b = j` implies `{a,i}` is an edge. A graph is closed if some
//! labeling is. Closed graphs are chordal, and every closed labeling is a perfect elimination
//! ordering, so the search walks the space of perfect elimination orderings reachable from one
//! built out of successive simplicial pairs.
//!
//! The graph must be chordal. When it is not, the initial ordering cannot be built: `is_closed`
//! answers `false` and `closed_labeling` returns [`Error::NotChordal`].

use crate::graph::{bit, vertices_of};
use crate::{Error, Graph, Result, VertexOrdering};

/// Checks the closed condition for the labeling induced by `ordering`: for every vertex, its
/// nearest earlier neighbor must be adjacent to all of its other earlier neighbors, and its
/// nearest later neighbor to all of its other later neighbors.
pub fn is_closed_wrt_labeling(g: &Graph, ordering: &VertexOrdering) -> bool {
    closed_wrt(g, ordering.sequence(), ordering.positions())
}

fn closed_wrt(g: &Graph, peo: &[usize], pos: &[usize]) -> bool {
    let n = g.order();
    for v in 1..=n {
        let p = pos[v - 1];

        if let Some(nearest) = (0..p).rev().find(|&i| g.adjacent(v, peo[i])) {
            let u = peo[nearest];
            if peo[..nearest]
                .iter()
                .any(|&w| g.adjacent(v, w) && !g.adjacent(u, w))
            {
                return false;
            }
        }

        if let Some(nearest) = (p + 1..n).find(|&i| g.adjacent(v, peo[i])) {
            let u = peo[nearest];
            if peo[nearest + 1..]
                .iter()
                .any(|&w| g.adjacent(v, w) && !g.adjacent(u, w))
            {
                return false;
            }
        }
    }
    true
}

/// Whether some labeling of `g` is closed. Requires `g` to be chordal.
pub fn is_closed(g: &Graph) -> bool {
    if g.order() < 3 {
        return true;
    }
    match PeoSearch::new(g) {
        Ok(mut search) => search.run(),
        Err(_) => false,
    }
}

/// A closed labeling of `g`, as the ordering whose positions are the labels.
///
/// Requires `g` to be closed (in particular chordal). For a chordal graph that is not closed the
/// last ordering visited by the search is returned.
pub fn closed_labeling(g: &Graph) -> Result<VertexOrdering> {
    if g.order() < 3 {
        return Ok(VertexOrdering::identity(g.order()));
    }
    let mut search = PeoSearch::new(g)?;
    let found = search.run();
    tracing::debug!(
        order = g.order(),
        found,
        moves = search.moves,
        sequence = ?search.peo,
        "closed labeling search finished"
    );
    Ok(VertexOrdering::from_sequence(search.peo))
}

/// Search state over perfect elimination orderings.
///
/// `peo[i]` is the vertex at position `i` and `pos[v - 1]` its inverse. `later[v - 1]` counts the
/// neighbors of `v` placed after it; two adjacent neighbors in the ordering may be exchanged
/// without leaving the space of perfect elimination orderings iff they are non-adjacent or
/// `later[x] == later[y] + 1`. `first[t]`/`second[t]` is the `t`-th simplicial pair of the
/// initial ordering, `first[t]` always being the one placed earlier.
struct PeoSearch<'g> {
    graph: &'g Graph,
    peo: Vec<usize>,
    pos: Vec<usize>,
    later: Vec<usize>,
    first: Vec<usize>,
    second: Vec<usize>,
    moves: usize,
}

impl<'g> PeoSearch<'g> {
    /// Builds the initial ordering by peeling off pairs of simplicial vertices; an odd vertex
    /// left over goes last.
    fn new(graph: &'g Graph) -> Result<Self> {
        let n = graph.order();
        let mut peo = Vec::with_capacity(n);
        let mut first = Vec::with_capacity(n / 2);
        let mut second = Vec::with_capacity(n / 2);
        let mut removed = 0u64;

        for _ in 0..n / 2 {
            let (a, b) = simplicial_pair(graph, removed).ok_or(Error::NotChordal)?;
            removed |= bit(a) | bit(b);
            first.push(a);
            second.push(b);
            peo.push(a);
            peo.push(b);
        }
        if n % 2 == 1 {
            let rest = (1..=n)
                .find(|&v| removed & bit(v) == 0)
                .ok_or(Error::NotChordal)?;
            peo.push(rest);
        }

        let mut pos = vec![0; n];
        for (i, &v) in peo.iter().enumerate() {
            pos[v - 1] = i;
        }
        let later = (1..=n)
            .map(|v| {
                peo[pos[v - 1] + 1..]
                    .iter()
                    .filter(|&&w| graph.adjacent(v, w))
                    .count()
            })
            .collect();

        Ok(Self {
            graph,
            peo,
            pos,
            later,
            first,
            second,
            moves: 0,
        })
    }

    /// Full search: the transposition walk over all pairs, one switch of the last pair, and the
    /// walk again.
    fn run(&mut self) -> bool {
        let pairs = self.first.len();
        self.is_closed()
            || self.walk(pairs)
            || self.switch(pairs.checked_sub(1))
            || self.walk(pairs)
    }

    fn is_closed(&self) -> bool {
        closed_wrt(self.graph, &self.peo, &self.pos)
    }

    fn position(&self, v: usize) -> usize {
        self.pos[v - 1]
    }

    fn swappable(&self, t: usize) -> bool {
        if t + 1 >= self.peo.len() {
            return false;
        }
        let (x, y) = (self.peo[t], self.peo[t + 1]);
        !self.graph.adjacent(x, y) || self.later[x - 1] == self.later[y - 1] + 1
    }

    /// Exchanges positions `t` and `t + 1`, then tests the new ordering.
    fn transpose(&mut self, t: usize) -> bool {
        let (x, y) = (self.peo[t], self.peo[t + 1]);
        self.exchange(x, y);
        self.is_closed()
    }

    /// Moves `v` one position to the front, then tests the new ordering.
    fn step_back(&mut self, v: usize) -> bool {
        match self.position(v).checked_sub(1) {
            Some(t) => self.transpose(t),
            None => false,
        }
    }

    /// Exchanges the two vertices of pair `t` (if any), then tests the new ordering.
    fn switch(&mut self, t: Option<usize>) -> bool {
        if let Some(t) = t {
            let (x, y) = (self.first[t], self.second[t]);
            self.exchange(x, y);
            self.first[t] = y;
            self.second[t] = x;
        }
        self.is_closed()
    }

    /// Swaps the positions of `x` (placed earlier) and `y`.
    fn exchange(&mut self, x: usize, y: usize) {
        let (px, py) = (self.position(x), self.position(y));
        self.peo.swap(px, py);
        self.pos.swap(x - 1, y - 1);
        if self.graph.adjacent(x, y) {
            self.later[x - 1] -= 1;
            self.later[y - 1] += 1;
        }
        self.moves += 1;
    }

    /// Walks the orderings reachable by moving the vertices of pairs `0..i`, stopping at the
    /// first closed one. Every branch recurses on `i - 1`, and the pair `i - 1` itself is walked
    /// back to where it started, so the state on a `false` return differs from the entry state
    /// only by switches.
    fn walk(&mut self, i: usize) -> bool {
        if i == 0 {
            return false;
        }
        if self.walk(i - 1) {
            return true;
        }

        let a = self.first[i - 1];
        let b = self.second[i - 1];
        let mut moved_b = 0usize;
        let mut typical = false;

        while self.swappable(self.position(b)) {
            moved_b += 1;
            if self.transpose(self.position(b)) || self.walk(i - 1) {
                return true;
            }

            let mut moved_a = 0usize;
            if self.a_may_advance(a, b) {
                typical = true;
                loop {
                    moved_a += 1;
                    if self.transpose(self.position(a)) || self.walk(i - 1) {
                        return true;
                    }
                    if !self.a_may_advance(a, b) {
                        break;
                    }
                }
            }

            if typical {
                if self.switch(i.checked_sub(2)) || self.walk(i - 1) {
                    return true;
                }
                let back = if moved_b % 2 == 1 {
                    moved_a.saturating_sub(1)
                } else {
                    moved_a + 1
                };
                for _ in 0..back {
                    if self.step_back(a) || self.walk(i - 1) {
                        return true;
                    }
                }
            }
        }

        if typical && moved_b % 2 == 1 {
            if self.step_back(a) {
                return true;
            }
        } else if self.switch(i.checked_sub(2)) {
            return true;
        }

        if self.walk(i - 1) {
            return true;
        }
        for _ in 0..moved_b {
            if self.step_back(b) || self.walk(i - 1) {
                return true;
            }
        }
        false
    }

    /// `a` is not directly in front of `b` and may swap with its successor.
    fn a_may_advance(&self, a: usize, b: usize) -> bool {
        let p = self.position(a);
        self.peo.get(p + 1) != Some(&b) && self.swappable(p)
    }
}

/// The first two vertices (by label) outside `removed` whose remaining neighbors form a clique.
fn simplicial_pair(g: &Graph, removed: u64) -> Option<(usize, usize)> {
    let remaining = crate::graph::full_mask(g.order()) & !removed;
    let mut found = vertices_of(remaining).filter(|&v| is_simplicial(g, v, remaining));
    Some((found.next()?, found.next()?))
}

fn is_simplicial(g: &Graph, v: usize, remaining: u64) -> bool {
    let neighbors = g.row(v) & remaining;
    vertices_of(neighbors).all(|w| neighbors & !bit(w) & !g.row(w) == 0)
}
