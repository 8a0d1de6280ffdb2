//! Full construction of a minimum spanning forest.
//!
//! Both strategies break weight ties by `(min(u, v), max(u, v))` ascending,
//! so repeated builds on the same graph return the same forest.

use crate::disjoint_set::DisjointSet;
use crate::graph_store::GraphStore;
use crate::types::{Algorithm, Edge};
use fixedbitset::FixedBitSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

impl Algorithm {
    /// Builds a minimum spanning forest of `graph` from scratch.
    pub fn build(&self, graph: &GraphStore) -> Vec<Edge> {
        match self {
            Algorithm::Kruskal => kruskal(graph),
            Algorithm::Prim => prim(graph),
        }
    }
}

/// Kruskal: scan edges by `(w, u, v)` and keep those joining two components.
///
/// O(E log E) worst case, radix sort in practice.
pub fn kruskal(graph: &GraphStore) -> Vec<Edge> {
    let n = graph.node_count();
    let mut edges: Vec<Edge> = graph.edges_unordered().collect();
    // radsort is stable, so sorting by the least significant key first
    // leaves the edges ordered by (w, u, v)
    radsort::sort_by_key(&mut edges, |e| e.v);
    radsort::sort_by_key(&mut edges, |e| e.u);
    radsort::sort_by_key(&mut edges, |e| e.w);

    let mut ds = DisjointSet::new(n);
    let mut forest = Vec::with_capacity(n.saturating_sub(1));
    for e in edges {
        if ds.union(e.u, e.v) {
            forest.push(e);
            if forest.len() + 1 == n {
                break;
            }
        }
    }
    forest
}

/// Frontier entry for Prim; reversed so the max-heap pops the lightest edge.
#[derive(Debug)]
struct Crossing {
    edge: Edge,
    to: usize,
}

impl PartialEq for Crossing {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Crossing {}

impl PartialOrd for Crossing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Crossing {
    fn cmp(&self, other: &Self) -> Ordering {
        other.edge.order(&self.edge)
    }
}

/// Prim: grow one tree per component, seeding each from the lowest unvisited id.
///
/// O(E log E) with a lazy binary heap.
pub fn prim(graph: &GraphStore) -> Vec<Edge> {
    let n = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut forest = Vec::with_capacity(n.saturating_sub(1));
    let mut frontier = BinaryHeap::new();

    for seed in 0..n {
        if visited.contains(seed) {
            continue;
        }
        visit(graph, seed, &mut visited, &mut frontier);

        while let Some(Crossing { edge, to }) = frontier.pop() {
            if visited.contains(to) {
                continue;
            }
            forest.push(edge);
            visit(graph, to, &mut visited, &mut frontier);
        }
    }
    forest
}

fn visit(graph: &GraphStore, x: usize, visited: &mut FixedBitSet, frontier: &mut BinaryHeap<Crossing>) {
    visited.insert(x);
    for (y, w) in graph.neighbors(x) {
        if !visited.contains(y) {
            frontier.push(Crossing {
                edge: Edge::new(x, y, w),
                to: y,
            });
        }
    }
}
