use crate::graph::MAX_ORDER;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "graph has too many vertices: {order} (at most {max} are supported)",
        max = MAX_ORDER
    )]
    TooManyVertices { order: usize },

    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("illegal edge {{{v},{w}}} for a graph of order {order}")]
    IllegalEdge { v: usize, w: usize, order: usize },

    #[error("adjacency matrix of length {len} does not fit order {order}")]
    MatrixShape { order: usize, len: usize },

    #[error("graph is not chordal: no pair of simplicial vertices left to eliminate")]
    NotChordal,

    #[error("unknown {kind}: {key}")]
    UnknownCapability { kind: &'static str, key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
