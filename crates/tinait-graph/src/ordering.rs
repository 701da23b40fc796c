/// A permutation of `1..=order` together with its inverse.
///
/// `sequence()[i]` is the vertex placed at position `i`; `position(v)` is the 0-based position of
/// vertex `v`. Orderings are derived from a [`Graph`](crate::Graph) and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexOrdering {
    sequence: Vec<usize>,
    positions: Vec<usize>,
}

impl VertexOrdering {
    /// Builds the ordering from a sequence of 1-based vertices.
    ///
    /// The caller guarantees that `sequence` is a permutation of `1..=sequence.len()`.
    pub fn from_sequence(sequence: Vec<usize>) -> Self {
        let mut positions = vec![0; sequence.len()];
        for (i, &v) in sequence.iter().enumerate() {
            positions[v - 1] = i;
        }
        Self {
            sequence,
            positions,
        }
    }

    pub fn identity(order: usize) -> Self {
        Self::from_sequence((1..=order).collect())
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Inverse map: `positions()[v - 1]` is the 0-based position of `v`.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[inline]
    pub fn position(&self, v: usize) -> usize {
        self.positions[v - 1]
    }

    /// The 1-based label this ordering assigns to `v`.
    #[inline]
    pub fn label(&self, v: usize) -> usize {
        self.positions[v - 1] + 1
    }
}
