#![forbid(unsafe_code)]

//! Small simple undirected graphs (at most 62 vertices) and the structural questions asked about
//! them: chordality, closedness, claw- and P4-freeness, cliques, induced paths and girth.
//!
//! Graphs come in as g6, list or adjacency-list records through [`GraphReader`] and are judged
//! through free functions in [`alg`] or by name through a [`Registry`].

pub mod alg;
pub mod codec;
pub mod error;
pub mod graph;
mod ordering;
pub mod registry;

pub use codec::{Format, GraphReader};
pub use error::{Error, Result};
pub use graph::{Graph, MAX_ORDER};
pub use ordering::VertexOrdering;
pub use registry::{Invariant, OrderingGenerator, Predicate, Registry};
