use crate::disjoint_set::DisjointSet;
use crate::types::Edge;
use hashbrown::HashMap;

/// Canonical adjacency of the full graph.
///
/// Node ids are always the contiguous range `[0, N)`. Every edge is stored in
/// both endpoint maps with the same weight. The store itself does no
/// validation; [`crate::MstEngine`] checks arguments before calling in.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adj: Vec<HashMap<usize, f64>>,
    edge_count: usize,
}

impl GraphStore {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![HashMap::new(); n],
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_node(&self, id: usize) -> bool {
        id < self.adj.len()
    }

    /// Appends a node at index `N` and returns it.
    pub fn add_node(&mut self) -> usize {
        self.adj.push(HashMap::new());
        self.adj.len() - 1
    }

    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adj.get(u)?.get(&v).copied()
    }

    /// Inserts the edge, returning the weight it replaced.
    pub fn insert_edge(&mut self, u: usize, v: usize, w: f64) -> Option<f64> {
        let old = self.adj[u].insert(v, w);
        self.adj[v].insert(u, w);
        if old.is_none() {
            self.edge_count += 1;
        }
        old
    }

    /// Removes the edge, returning its weight if it existed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Option<f64> {
        let w = self.adj.get_mut(u)?.remove(&v)?;
        self.adj[v].remove(&u);
        self.edge_count -= 1;
        Some(w)
    }

    /// Neighbours of `u` with the connecting weights, in no particular order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adj[u].iter().map(|(&v, &w)| (v, w))
    }

    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].len()
    }

    /// Edges incident to `u`, sorted by the opposite endpoint.
    pub fn incident_edges(&self, u: usize) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.neighbors(u).map(|(v, w)| Edge::new(u, v, w)).collect();
        edges.sort_by_key(|e| e.key());
        edges
    }

    /// Every edge once, unordered.
    pub fn edges_unordered(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, nbrs)| {
            nbrs.iter()
                .filter(move |&(&v, _)| u < v)
                .map(move |(&v, &w)| Edge { u, v, w })
        })
    }

    /// Every edge once, ordered by `(u, v)`.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges_unordered().collect();
        edges.sort_by_key(|e| e.key());
        edges
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        let mut ds = DisjointSet::new(self.node_count());
        for e in self.edges_unordered() {
            ds.union(e.u, e.v);
        }
        ds.count()
    }

    /// Removes node `id`, which must already be isolated, and shifts every
    /// higher id down by one.
    pub fn remove_isolated_node(&mut self, id: usize) {
        debug_assert!(self.adj[id].is_empty(), "node {id} still has edges");
        self.adj.remove(id);
        for nbrs in self.adj.iter_mut() {
            if nbrs.keys().all(|&v| v < id) {
                continue;
            }
            *nbrs = nbrs
                .drain()
                .map(|(v, w)| (shift_down(v, id), w))
                .collect();
        }
    }

    pub fn clear(&mut self, n: usize) {
        self.adj.clear();
        self.adj.resize(n, HashMap::new());
        self.edge_count = 0;
    }
}

/// New id of `v` after node `removed` is compacted out.
pub(crate) fn shift_down(v: usize, removed: usize) -> usize {
    if v > removed { v - 1 } else { v }
}
