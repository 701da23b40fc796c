//! The adjacency model shared by every codec and algorithm in this crate.
//!
//! Vertices are labeled `1..=order`. Each vertex owns one `u64` neighbor row (bit `w - 1` is set
//! iff `{v, w}` is an edge), which is why the order is capped at [`MAX_ORDER`]: every vertex
//! subset of a graph also fits into a single `u64` mask.

use crate::{Error, Result};
use std::fmt;

/// Largest supported number of vertices.
pub const MAX_ORDER: usize = 62;

/// Finite simple undirected graph on at most [`MAX_ORDER`] vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Graph {
    order: usize,
    rows: Vec<u64>,
    size: usize,
}

/// Mask with the lowest `order` bits set.
#[inline]
pub(crate) fn full_mask(order: usize) -> u64 {
    if order >= 64 {
        u64::MAX
    } else {
        (1u64 << order) - 1
    }
}

#[inline]
pub(crate) const fn bit(v: usize) -> u64 {
    1u64 << (v - 1)
}

/// Iterates the 1-based vertices contained in `mask`, ascending.
pub(crate) fn vertices_of(mut mask: u64) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let v = mask.trailing_zeros() as usize + 1;
        mask &= mask - 1;
        Some(v)
    })
}

impl Graph {
    /// The empty graph (order 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Edgeless graph on `order` vertices.
    pub fn with_order(order: usize) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(Error::TooManyVertices { order });
        }
        Ok(Self {
            order,
            rows: vec![0; order],
            size: 0,
        })
    }

    /// Takes ownership of a row-major `order × order` matrix.
    ///
    /// The diagonal is ignored. The matrix must be symmetric; the first asymmetric pair is
    /// reported as an [`Error::IllegalEdge`].
    pub fn from_matrix(order: usize, matrix: Vec<bool>) -> Result<Self> {
        let mut g = Self::with_order(order)?;
        if matrix.len() != order * order {
            return Err(Error::MatrixShape {
                order,
                len: matrix.len(),
            });
        }
        for v in 1..=order {
            for w in v + 1..=order {
                let vw = matrix[(v - 1) * order + w - 1];
                let wv = matrix[(w - 1) * order + v - 1];
                if vw != wv {
                    return Err(Error::IllegalEdge { v, w, order });
                }
                if vw {
                    g.insert_edge(v, w);
                }
            }
        }
        Ok(g)
    }

    /// Builds a graph from 1-based edge pairs. Repeated pairs are counted once.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::with_order(order)?;
        for &(v, w) in edges {
            g.try_insert_edge(v, w)?;
        }
        Ok(g)
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` iff `{v, w}` is an edge. Both vertices must lie in `1..=order`.
    #[inline]
    pub fn adjacent(&self, v: usize, w: usize) -> bool {
        self.rows[v - 1] & bit(w) != 0
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.rows[v - 1].count_ones() as usize
    }

    /// Neighbors of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        vertices_of(self.rows[v - 1])
    }

    /// All edges `(v, w)` with `v < w`, ordered by `v` then `w`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.order).flat_map(move |v| {
            let later = self.rows[v - 1] & !full_mask(v);
            vertices_of(later).map(move |w| (v, w))
        })
    }

    /// Same vertex set, adjacency inverted off the diagonal.
    pub fn complement(&self) -> Graph {
        let all = full_mask(self.order);
        let rows: Vec<u64> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| !row & all & !(1u64 << i))
            .collect();
        let total = self.order * self.order.saturating_sub(1) / 2;
        Graph {
            order: self.order,
            rows,
            size: total - self.size,
        }
    }

    /// For a cone, the graph left after deleting its first universal vertex, relabeled
    /// order-preservingly to `1..order`.
    pub fn cone_base(&self) -> Option<Graph> {
        let apex = (1..=self.order).find(|&v| self.is_universal(v))?;
        let mut base = Graph {
            order: self.order - 1,
            rows: vec![0; self.order - 1],
            size: 0,
        };
        let relabel = |v: usize| if v < apex { v } else { v - 1 };
        for (v, w) in self.edges() {
            if v != apex && w != apex {
                base.insert_edge(relabel(v), relabel(w));
            }
        }
        Some(base)
    }

    pub(crate) fn is_universal(&self, v: usize) -> bool {
        self.rows[v - 1] == full_mask(self.order) & !bit(v)
    }

    /// Neighbor row of `v` as a vertex mask.
    #[inline]
    pub(crate) fn row(&self, v: usize) -> u64 {
        self.rows[v - 1]
    }

    pub(crate) fn try_insert_edge(&mut self, v: usize, w: usize) -> Result<()> {
        if v == 0 || w == 0 || v > self.order || w > self.order || v == w {
            return Err(Error::IllegalEdge {
                v,
                w,
                order: self.order,
            });
        }
        self.insert_edge(v, w);
        Ok(())
    }

    fn insert_edge(&mut self, v: usize, w: usize) {
        if self.adjacent(v, w) {
            return;
        }
        self.rows[v - 1] |= bit(w);
        self.rows[w - 1] |= bit(v);
        self.size += 1;
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::edge_list::encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_of_walks_set_bits_ascending() {
        let got: Vec<usize> = vertices_of(0b1010_0101).collect();
        assert_eq!(got, vec![1, 3, 6, 8]);
    }

    #[test]
    fn full_mask_covers_order() {
        assert_eq!(full_mask(0), 0);
        assert_eq!(full_mask(3), 0b111);
        assert_eq!(full_mask(62).count_ones(), 62);
    }
}
