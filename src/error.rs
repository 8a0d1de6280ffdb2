use thiserror::Error;

/// Errors reported by the engine. Each one is a caller-input problem and
/// leaves the engine untouched.
#[derive(Debug, Error)]
pub enum MstError {
    /// Self-loop or a node id outside `[0, N)`.
    #[error("invalid endpoint pair ({u}, {v}) for a graph with {node_count} nodes")]
    InvalidEndpoint {
        u: usize,
        v: usize,
        node_count: usize,
    },

    #[error("node {0} does not exist")]
    NodeNotFound(usize),

    #[error("edge ({u}, {v}) does not exist")]
    EdgeNotFound { u: usize, v: usize },

    #[error("unknown algorithm '{0}', expected 'kruskal' or 'prim'")]
    UnknownAlgorithm(String),

    /// Weights must be finite and non-negative.
    #[error("invalid edge weight {0}")]
    InvalidWeight(f64),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MstError>;
