// #![warn(missing_docs)]

//! # adaptive_mst
//!
//! Keeps a minimum spanning forest of an undirected weighted graph up to
//! date while nodes and edges are added and removed one at a time.
//!
//! Insertions use the cycle property on the tree path between the new
//! edge's endpoints, deletions of tree edges look for the lightest edge
//! across the resulting cut. Full rebuilds (Kruskal or Prim) are only run
//! on request.
//!
//! Import and export go through [`petgraph`](https://docs.rs/petgraph).

pub mod builder;
pub mod disjoint_set;
pub mod engine;
pub mod error;
pub mod forest;
pub mod graph_store;
pub mod input;
pub mod maintenance;
pub mod output;
pub mod types;

#[cfg(test)]
mod testing;

pub use engine::MstEngine;
pub use error::{MstError, Result};
pub use types::{Algorithm, Edge, Stats, WeightedUnGraph};
