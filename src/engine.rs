use crate::error::{MstError, Result};
use crate::forest::SpanningForest;
use crate::graph_store::GraphStore;
use crate::maintenance::{self, ForestChange};
use crate::types::{Algorithm, Edge, Stats, WeightedUnGraph};
use log::{debug, info};
use petgraph::visit::{EdgeRef, NodeIndexable};

/// Owns a graph and its minimum spanning forest and keeps them consistent
/// under single node and edge mutations.
///
/// Every public mutation validates its arguments first and either applies
/// fully or returns an error without touching any state. The engine is
/// single-writer; wrap it in a lock if it has to be shared.
///
/// ```
/// use adaptive_mst::MstEngine;
///
/// let mut engine = MstEngine::new(4);
/// engine.add_edge(0, 1, 1.0).unwrap();
/// engine.add_edge(1, 2, 2.0).unwrap();
/// engine.add_edge(2, 3, 3.0).unwrap();
/// engine.add_edge(0, 3, 10.0).unwrap();
/// assert_eq!(engine.mst_cost(), 6.0);
///
/// engine.add_edge(0, 2, 0.5).unwrap();
/// assert_eq!(engine.mst_cost(), 4.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MstEngine {
    graph: GraphStore,
    forest: SpanningForest,
    algorithm: Algorithm,
}

impl MstEngine {
    /// Engine with `n` isolated nodes and the default algorithm.
    pub fn new(n: usize) -> Self {
        Self::with_algorithm(n, Algorithm::default())
    }

    pub fn with_algorithm(n: usize, algorithm: Algorithm) -> Self {
        Self {
            graph: GraphStore::new(n),
            forest: SpanningForest::new(n),
            algorithm,
        }
    }

    /// Imports a petgraph graph. Node indices become engine ids; for parallel
    /// edges the last one wins. The forest is built from scratch with `algorithm`.
    pub fn from_graph(graph: &WeightedUnGraph, algorithm: Algorithm) -> Result<Self> {
        let mut engine = Self::with_algorithm(graph.node_count(), algorithm);
        for edge in graph.edge_references() {
            let (u, v) = (graph.to_index(edge.source()), graph.to_index(edge.target()));
            let w = engine.check_edge(u, v, *edge.weight())?;
            engine.graph.insert_edge(u, v, w);
        }
        engine.rebuild();
        Ok(engine)
    }

    /// Appends an isolated node and returns its id.
    pub fn add_node(&mut self) -> usize {
        let id = self.graph.add_node();
        self.forest.add_node();
        id
    }

    /// Deletes node `id` and its edges, then shifts every higher id down by one.
    pub fn delete_node(&mut self, id: usize) -> Result<()> {
        if !self.graph.contains_node(id) {
            return Err(MstError::NodeNotFound(id));
        }
        for e in self.graph.incident_edges(id) {
            self.remove_edge_unchecked(e.u, e.v);
        }
        self.graph.remove_isolated_node(id);
        self.forest.remove_isolated_node(id);
        debug!("node {id} deleted, {} nodes left", self.graph.node_count());
        Ok(())
    }

    /// Inserts edge `(u, v)` with weight `w`, or changes the weight of an
    /// existing one. A weight change goes through deletion and reinsertion so
    /// forest membership is re-evaluated.
    pub fn add_edge(&mut self, u: usize, v: usize, w: f64) -> Result<()> {
        let w = self.check_edge(u, v, w)?;
        if let Some(old) = self.graph.weight(u, v) {
            debug!("weight of ({u}, {v}) changes from {old} to {w}");
            self.remove_edge_unchecked(u, v);
        }
        self.graph.insert_edge(u, v, w);
        let _ = maintenance::on_edge_inserted(&mut self.forest, Edge::new(u, v, w));
        Ok(())
    }

    /// Deletes edge `(u, v)` and returns its weight.
    pub fn delete_edge(&mut self, u: usize, v: usize) -> Result<f64> {
        let w = self
            .graph
            .weight(u, v)
            .ok_or(MstError::EdgeNotFound { u, v })?;
        self.remove_edge_unchecked(u, v);
        Ok(w)
    }

    fn remove_edge_unchecked(&mut self, u: usize, v: usize) -> ForestChange {
        self.graph.remove_edge(u, v);
        maintenance::on_edge_removed(&self.graph, &mut self.forest, u, v)
    }

    /// Validates an edge and returns its normalised weight.
    fn check_edge(&self, u: usize, v: usize, w: f64) -> Result<f64> {
        let n = self.graph.node_count();
        if u == v || u >= n || v >= n {
            return Err(MstError::InvalidEndpoint { u, v, node_count: n });
        }
        if !w.is_finite() || w < 0.0 {
            return Err(MstError::InvalidWeight(w));
        }
        // folds -0.0 into 0.0 so the weight orderings agree
        Ok(w + 0.0)
    }

    /// Drops everything and starts over with `n` isolated nodes.
    pub fn reset(&mut self, n: usize) {
        self.graph.clear(n);
        self.forest.clear(n);
        info!("engine reset to {n} isolated nodes");
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Selects the strategy for later rebuilds. Does not rebuild.
    pub fn set_algorithm(&mut self, name: &str) -> Result<()> {
        self.algorithm = name.parse()?;
        Ok(())
    }

    /// Selects a strategy and rebuilds the forest from scratch with it.
    pub fn build_initial_mst(&mut self, name: &str) -> Result<Vec<Edge>> {
        self.set_algorithm(name)?;
        self.rebuild();
        Ok(self.mst_edges())
    }

    /// Rebuilds the forest from scratch with the selected strategy.
    pub fn rebuild(&mut self) {
        self.forest.clear(self.graph.node_count());
        for e in self.algorithm.build(&self.graph) {
            self.forest.insert(e);
        }
        info!(
            "{} rebuilt the forest: {} edges, cost {}",
            self.algorithm,
            self.forest.len(),
            self.forest.cost()
        );
    }

    pub fn stats(&self) -> Stats {
        Stats {
            algorithm: self.algorithm,
            num_nodes: self.graph.node_count(),
            num_edges: self.graph.edge_count(),
            num_mst_edges: self.forest.len(),
            mst_cost: self.forest.cost(),
        }
    }

    /// All graph edges ordered by `(u, v)`, `u < v`.
    pub fn graph_edges(&self) -> Vec<Edge> {
        self.graph.edges()
    }

    /// Forest edges ordered by `(u, v)`, `u < v`.
    pub fn mst_edges(&self) -> Vec<Edge> {
        self.forest.edges()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn forest_edge_count(&self) -> usize {
        self.forest.len()
    }

    pub fn mst_cost(&self) -> f64 {
        self.forest.cost()
    }

    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        self.graph.weight(u, v)
    }

    pub fn is_forest_edge(&self, u: usize, v: usize) -> bool {
        self.forest.contains(u, v)
    }

    /// Connected components of the full graph.
    pub fn component_count(&self) -> usize {
        self.graph.component_count()
    }

    /// Full graph as a petgraph graph; node weights are ids.
    pub fn to_graph(&self) -> WeightedUnGraph {
        export(self.graph.node_count(), &self.graph.edges())
    }

    /// Forest as a petgraph graph over the same node set.
    pub fn forest_graph(&self) -> WeightedUnGraph {
        export(self.graph.node_count(), &self.forest.edges())
    }
}

fn export(n: usize, edges: &[Edge]) -> WeightedUnGraph {
    let mut graph = WeightedUnGraph::with_capacity(n, edges.len());
    for i in 0..n {
        graph.add_node(i as u32);
    }
    for e in edges {
        graph.add_edge(graph.from_index(e.u), graph.from_index(e.v), e.w);
    }
    graph
}
