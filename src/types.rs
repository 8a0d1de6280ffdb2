use crate::error::MstError;
use std::cmp::Ordering;
use std::str::FromStr;

/// Wrapper for petgraph's graph type, used for import and export.
///
/// Node weights are engine ids, edge weights are edge weights.
pub type WeightedUnGraph = petgraph::graph::UnGraph<u32, f64>;

/// Unordered pair of node ids, stored as `(min, max)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }

    /// Returns the endpoint that is not `x`.
    pub fn other(&self, x: usize) -> usize {
        self.0 ^ self.1 ^ x
    }
}

/// A weighted undirected edge, always reported with `u < v`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub w: f64,
}

impl Edge {
    pub fn new(a: usize, b: usize, w: f64) -> Self {
        let EdgeKey(u, v) = EdgeKey::new(a, b);
        Self { u, v, w }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.u, self.v)
    }

    /// Total order used for every tie-break: weight, then `(min, max)`.
    pub fn order(&self, other: &Edge) -> Ordering {
        self.w
            .total_cmp(&other.w)
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.w)
    }
}

/// Strategy used for full rebuilds of the spanning forest.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Algorithm {
    #[default]
    Kruskal,
    Prim,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            _ => Err(MstError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Snapshot returned by [`crate::MstEngine::stats`].
#[derive(Clone, PartialEq, Debug)]
pub struct Stats {
    pub algorithm: Algorithm,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub num_mst_edges: usize,
    pub mst_cost: f64,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Algorithm: {}\nNodes: {}\nEdges: {}\nMST edges: {}\nMST cost: {:.2}",
            self.algorithm, self.num_nodes, self.num_edges, self.num_mst_edges, self.mst_cost
        )
    }
}
