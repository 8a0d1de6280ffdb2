//! Incremental upkeep of the spanning forest after a single edge mutation.
//!
//! Both entry points expect the graph store to be updated already. Insertion
//! uses the cycle property on the tree path between the endpoints; deletion of
//! a tree edge searches the two halves for the lightest reconnecting edge.

use crate::forest::SpanningForest;
use crate::graph_store::GraphStore;
use crate::types::Edge;
use log::{debug, trace};

/// What happened to the forest after a mutation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ForestChange {
    /// Forest left as it was.
    Unchanged,
    /// New edge joined two trees.
    Linked(Edge),
    /// New edge replaced the heaviest edge on its tree path.
    Swapped { added: Edge, removed: Edge },
    /// Tree edge was deleted and a crossing edge took its place.
    Reconnected { removed: Edge, added: Edge },
    /// Tree edge was deleted and nothing crosses the cut.
    Split(Edge),
}

/// Updates `forest` for a freshly inserted graph edge.
pub fn on_edge_inserted(forest: &mut SpanningForest, edge: Edge) -> ForestChange {
    debug_assert!(!forest.contains(edge.u, edge.v));

    let Some(heaviest) = forest.path_max(edge.u, edge.v) else {
        debug!("{edge} links two trees");
        forest.insert(edge);
        return ForestChange::Linked(edge);
    };

    if edge.w < heaviest.w {
        debug!("{edge} replaces {heaviest} on its tree path");
        forest.remove(heaviest.u, heaviest.v);
        forest.insert(edge);
        ForestChange::Swapped {
            added: edge,
            removed: heaviest,
        }
    } else {
        trace!("{edge} closes a cycle without improving it");
        ForestChange::Unchanged
    }
}

/// Updates `forest` after the pair `(u, v)` was removed from `graph`.
pub fn on_edge_removed(graph: &GraphStore, forest: &mut SpanningForest, u: usize, v: usize) -> ForestChange {
    let Some(removed) = forest.remove(u, v) else {
        return ForestChange::Unchanged;
    };

    match lightest_crossing(graph, forest, u, v) {
        Some(added) => {
            debug!("{removed} left the forest, {added} reconnects the halves");
            forest.insert(added);
            ForestChange::Reconnected { removed, added }
        }
        None => {
            debug!("{removed} left the forest, its tree splits in two");
            ForestChange::Split(removed)
        }
    }
}

/// Lightest graph edge with one endpoint in the tree of `u` and the other in
/// the tree of `v`, ordered by `(w, min, max)`.
fn lightest_crossing(graph: &GraphStore, forest: &SpanningForest, u: usize, v: usize) -> Option<Edge> {
    let side_a = forest.component(u);
    let side_b = forest.component(v);
    // walk the smaller half, every crossing edge is incident to it
    let (near, far) = if side_a.count_ones(..) <= side_b.count_ones(..) {
        (side_a, side_b)
    } else {
        (side_b, side_a)
    };

    near.ones()
        .flat_map(|x| graph.neighbors(x).map(move |(y, w)| (x, y, w)))
        .filter(|&(_, y, _)| far.contains(y))
        .map(|(x, y, w)| Edge::new(x, y, w))
        .min_by(|a, b| a.order(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Graph and forest with the same edges inserted through the incremental path.
    fn build(n: usize, edges: &[(usize, usize, f64)]) -> (GraphStore, SpanningForest) {
        let mut graph = GraphStore::new(n);
        let mut forest = SpanningForest::new(n);
        for &(u, v, w) in edges {
            graph.insert_edge(u, v, w);
            let _ = on_edge_inserted(&mut forest, Edge::new(u, v, w));
        }
        (graph, forest)
    }

    #[test]
    fn test_insert_links_trees() {
        let (_, mut forest) = build(3, &[(0, 1, 1.0)]);
        let change = on_edge_inserted(&mut forest, Edge::new(1, 2, 4.0));
        assert_eq!(change, ForestChange::Linked(Edge::new(1, 2, 4.0)));
        assert_eq!(forest.cost(), 5.0);
    }

    #[test]
    fn test_insert_swaps_heaviest() {
        let (_, mut forest) = build(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)]);
        let change = on_edge_inserted(&mut forest, Edge::new(0, 2, 0.5));
        assert_eq!(
            change,
            ForestChange::Swapped {
                added: Edge::new(0, 2, 0.5),
                removed: Edge::new(1, 2, 2.0)
            }
        );
        assert_eq!(forest.cost(), 4.5);
    }

    #[test]
    fn test_insert_rejects_heavy_or_equal_edge() {
        let (_, mut forest) = build(3, &[(0, 1, 1.0), (1, 2, 2.0)]);
        assert_eq!(on_edge_inserted(&mut forest, Edge::new(0, 2, 2.0)), ForestChange::Unchanged);
        assert_eq!(on_edge_inserted(&mut forest, Edge::new(0, 2, 9.0)), ForestChange::Unchanged);
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_remove_non_tree_edge() {
        let (mut graph, mut forest) = build(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
        graph.remove_edge(0, 2);
        assert_eq!(on_edge_removed(&graph, &mut forest, 0, 2), ForestChange::Unchanged);
        assert_eq!(forest.cost(), 3.0);
    }

    #[test]
    fn test_remove_tree_edge_reconnects() {
        let (mut graph, mut forest) =
            build(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 3, 10.0), (1, 3, 6.0)]);
        graph.remove_edge(1, 2);
        let change = on_edge_removed(&graph, &mut forest, 1, 2);
        assert_eq!(
            change,
            ForestChange::Reconnected {
                removed: Edge::new(1, 2, 2.0),
                added: Edge::new(1, 3, 6.0)
            }
        );
        assert_eq!(forest.cost(), 10.0);
    }

    #[test]
    fn test_remove_bridge_splits() {
        let (mut graph, mut forest) = build(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)]);
        graph.remove_edge(1, 2);
        assert_eq!(
            on_edge_removed(&graph, &mut forest, 1, 2),
            ForestChange::Split(Edge::new(1, 2, 2.0))
        );
        assert_eq!(forest.tree_count(), 2);
        assert_eq!(forest.cost(), 4.0);
        assert!(!forest.connected(0, 3));
    }
}
