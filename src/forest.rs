use crate::graph_store::shift_down;
use crate::types::{Edge, EdgeKey};
use fixedbitset::FixedBitSet;
use std::collections::{BTreeMap, VecDeque};

/// The current minimum spanning forest.
///
/// Holds its own tree adjacency so path and component queries never touch
/// the full graph. Edges are keyed by endpoint pair; the weight is a copy of
/// the graph store's weight for that pair. `cost` is recomputed on every
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct SpanningForest {
    adj: Vec<Vec<(usize, f64)>>,
    edges: BTreeMap<EdgeKey, f64>,
    cost: f64,
}

impl SpanningForest {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edges: BTreeMap::new(),
            cost: 0.0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of forest edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    pub fn add_node(&mut self) -> usize {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    pub fn clear(&mut self, n: usize) {
        self.adj.clear();
        self.adj.resize(n, Vec::new());
        self.edges.clear();
        self.cost = 0.0;
    }

    /// Adds a tree edge. The caller guarantees the endpoints are in different trees.
    pub fn insert(&mut self, e: Edge) {
        debug_assert!(!self.connected(e.u, e.v), "{e} would close a cycle");
        self.adj[e.u].push((e.v, e.w));
        self.adj[e.v].push((e.u, e.w));
        self.edges.insert(e.key(), e.w);
        self.refresh_cost();
    }

    /// Removes a tree edge, returning it if it was present.
    pub fn remove(&mut self, u: usize, v: usize) -> Option<Edge> {
        let w = self.edges.remove(&EdgeKey::new(u, v))?;
        self.adj[u].retain(|&(x, _)| x != v);
        self.adj[v].retain(|&(x, _)| x != u);
        self.refresh_cost();
        Some(Edge::new(u, v, w))
    }

    fn refresh_cost(&mut self) {
        self.cost = self.edges.values().sum();
    }

    /// Forest edges ordered by `(u, v)`.
    pub fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|(&EdgeKey(u, v), &w)| Edge { u, v, w })
            .collect()
    }

    /// Nodes of the tree containing `start`.
    pub fn component(&self, start: usize) -> FixedBitSet {
        let mut seen = FixedBitSet::with_capacity(self.adj.len());
        let mut stack = vec![start];
        seen.insert(start);
        while let Some(x) = stack.pop() {
            for &(y, _) in &self.adj[x] {
                if !seen.put(y) {
                    stack.push(y);
                }
            }
        }
        seen
    }

    pub fn connected(&self, s: usize, t: usize) -> bool {
        s == t || self.tree_path(s, t).is_some()
    }

    /// Edges on the unique tree path from `s` to `t`, or `None` if they lie in
    /// different trees. Breadth-first walk, O(N).
    pub fn tree_path(&self, s: usize, t: usize) -> Option<Vec<Edge>> {
        let n = self.adj.len();
        let mut parent: Vec<Option<(usize, f64)>> = vec![None; n];
        let mut seen = FixedBitSet::with_capacity(n);
        let mut queue = VecDeque::from([s]);
        seen.insert(s);

        while let Some(x) = queue.pop_front() {
            if x == t {
                break;
            }
            for &(y, w) in &self.adj[x] {
                if !seen.put(y) {
                    parent[y] = Some((x, w));
                    queue.push_back(y);
                }
            }
        }
        if !seen.contains(t) {
            return None;
        }

        let mut path = Vec::new();
        let mut cur = t;
        while cur != s {
            let (p, w) = parent[cur]?;
            path.push(Edge::new(p, cur, w));
            cur = p;
        }
        Some(path)
    }

    /// Heaviest edge on the tree path between `s` and `t`. Among equal weights
    /// the edge with the largest endpoint pair wins.
    pub fn path_max(&self, s: usize, t: usize) -> Option<Edge> {
        self.tree_path(s, t)?.into_iter().max_by(|a, b| a.order(b))
    }

    /// Number of trees, isolated nodes included.
    pub fn tree_count(&self) -> usize {
        self.adj.len() - self.edges.len()
    }

    /// Drops node `id`, which must have no tree edges, and shifts higher ids down.
    pub fn remove_isolated_node(&mut self, id: usize) {
        debug_assert!(self.adj[id].is_empty(), "node {id} still has tree edges");
        self.adj.remove(id);
        for nbrs in self.adj.iter_mut() {
            for (y, _) in nbrs.iter_mut() {
                *y = shift_down(*y, id);
            }
        }
        self.edges = std::mem::take(&mut self.edges)
            .into_iter()
            .map(|(EdgeKey(u, v), w)| (EdgeKey(shift_down(u, id), shift_down(v, id)), w))
            .collect();
    }
}
