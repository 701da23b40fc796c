use crate::graph::bit;
use crate::{Graph, VertexOrdering};

/// Lexicographic breadth-first search by partition refinement.
///
/// Blocks are kept in order, starting with `[1]` and `[2..=order]`. Each step removes the last
/// vertex of the first block and splits every remaining block into its unvisited neighbors of
/// that vertex followed by the rest. For a chordal graph the visiting order lists every vertex
/// after all of its neighbors that form a clique with it, i.e. its reverse is a perfect
/// elimination ordering.
pub fn lexicographic_ordering(g: &Graph) -> VertexOrdering {
    let n = g.order();
    let mut blocks: Vec<Vec<usize>> = Vec::with_capacity(n);
    if n > 0 {
        blocks.push(vec![1]);
    }
    if n > 1 {
        blocks.push((2..=n).collect());
    }

    let mut visited = 0u64;
    let mut sequence = Vec::with_capacity(n);
    while let Some(first) = blocks.first_mut() {
        let Some(vertex) = first.pop() else {
            blocks.remove(0);
            continue;
        };
        if first.is_empty() {
            blocks.remove(0);
        }
        visited |= bit(vertex);
        sequence.push(vertex);

        let pivot = g.row(vertex) & !visited;
        blocks = refine(blocks, pivot);
    }
    VertexOrdering::from_sequence(sequence)
}

/// Splits every block into (members of `set`, the rest), dropping empty halves.
fn refine(blocks: Vec<Vec<usize>>, set: u64) -> Vec<Vec<usize>> {
    let mut refined = Vec::with_capacity(blocks.len() * 2);
    for block in blocks {
        let (inside, outside): (Vec<usize>, Vec<usize>) =
            block.into_iter().partition(|&v| set & bit(v) != 0);
        if !inside.is_empty() {
            refined.push(inside);
        }
        if !outside.is_empty() {
            refined.push(outside);
        }
    }
    refined
}

/// Checks the elimination certificate: for every vertex, its latest earlier neighbor in
/// `ordering` is adjacent to all of its other earlier neighbors.
pub fn is_perfect_elimination_ordering(g: &Graph, ordering: &VertexOrdering) -> bool {
    let sequence = ordering.sequence();
    (1..=g.order()).all(|v| {
        let p = ordering.position(v);
        let Some(nearest) = (0..p).rev().find(|&i| g.adjacent(v, sequence[i])) else {
            return true;
        };
        let u = sequence[nearest];
        sequence[..nearest]
            .iter()
            .all(|&w| !g.adjacent(v, w) || g.adjacent(u, w))
    })
}

/// Chordality via the lexicographic ordering. Orders below 4 are always chordal.
pub fn is_chordal(g: &Graph) -> bool {
    if g.order() < 4 {
        return true;
    }
    let ordering = lexicographic_ordering(g);
    is_perfect_elimination_ordering(g, &ordering)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refine_keeps_block_order_and_puts_neighbors_first() {
        let blocks = vec![vec![2, 3], vec![4, 5, 6]];
        let refined = refine(blocks, bit(3) | bit(5));
        assert_eq!(refined, vec![vec![3], vec![2], vec![5], vec![4, 6]]);
    }

    #[test]
    fn lexicographic_ordering_starts_at_vertex_one() {
        let g = Graph::from_edges(4, &[(1, 3), (3, 4), (2, 4)]).unwrap();
        let ordering = lexicographic_ordering(&g);
        assert_eq!(ordering.sequence(), &[1, 3, 4, 2]);
    }
}
