use crate::disjoint_set::DisjointSet;
use crate::engine::MstEngine;
use petgraph::algo::{connected_components, min_spanning_tree};
use petgraph::data::Element;

/// Weight of a minimum spanning forest of the engine's graph, computed by petgraph.
pub fn reference_cost(engine: &MstEngine) -> f64 {
    min_spanning_tree(&engine.to_graph())
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

/// Checks the forest invariants and optimality against independent computations.
pub fn assert_consistent(engine: &MstEngine) {
    let n = engine.node_count();
    let components = connected_components(&engine.to_graph());
    assert_eq!(engine.component_count(), components);
    assert_eq!(engine.forest_edge_count(), n - components);

    let forest = engine.mst_edges();
    let mut ds = DisjointSet::new(n);
    for e in &forest {
        assert!(e.u < e.v && e.v < n, "bad endpoints {e}");
        assert!(ds.union(e.u, e.v), "cycle through {e}");
        assert_eq!(engine.edge_weight(e.u, e.v), Some(e.w), "{e} not in graph");
    }
    // same partition as the graph means each component is spanned by one tree
    assert_eq!(connected_components(&engine.forest_graph()), components);

    let cost: f64 = forest.iter().map(|e| e.w).sum();
    assert!((engine.mst_cost() - cost).abs() < 1e-9);
    assert!(
        (engine.mst_cost() - reference_cost(engine)).abs() < 1e-9,
        "forest cost {} differs from reference {}",
        engine.mst_cost(),
        reference_cost(engine)
    );
}
