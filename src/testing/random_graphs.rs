use crate::graph_store::GraphStore;
use crate::graph_store::shift_down;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Weights are drawn from a small set so ties show up often.
fn random_weight(rng: &mut StdRng) -> f64 {
    rng.random_range(0..12) as f64 * 0.5
}

/// Random graph store with `n` nodes and up to `m` edges. Repeated pairs
/// overwrite each other, self-loops are skipped.
pub fn random_graph_store(n: usize, m: usize, seed: u64) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphStore::new(n);
    for _ in 0..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s != t {
            let w = random_weight(&mut rng);
            graph.insert_edge(s, t, w);
        }
    }
    graph
}

/// One public mutation of [`crate::MstEngine`].
#[derive(Clone, Copy, Debug)]
pub enum Mutation {
    AddNode,
    DeleteNode(usize),
    AddEdge(usize, usize, f64),
    DeleteEdge(usize, usize),
}

/// Sequence of `steps` mutations that are all valid when applied in order to
/// an engine starting with `n` isolated nodes.
pub fn random_mutations(n: usize, steps: usize, seed: u64) -> Vec<Mutation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nodes = n;
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut out = Vec::with_capacity(steps);

    while out.len() < steps {
        let roll = rng.random_range(0..100);
        if roll < 55 && nodes >= 2 {
            let u = rng.random_range(0..nodes);
            let v = rng.random_range(0..nodes);
            if u == v {
                continue;
            }
            let key = (u.min(v), u.max(v));
            if !edges.contains(&key) {
                edges.push(key);
            }
            out.push(Mutation::AddEdge(u, v, random_weight(&mut rng)));
        } else if roll < 80 && !edges.is_empty() {
            let (u, v) = edges.swap_remove(rng.random_range(0..edges.len()));
            out.push(Mutation::DeleteEdge(v, u));
        } else if roll < 90 || nodes == 0 {
            nodes += 1;
            out.push(Mutation::AddNode);
        } else {
            let id = rng.random_range(0..nodes);
            nodes -= 1;
            edges = edges
                .into_iter()
                .filter(|&(u, v)| u != id && v != id)
                .map(|(u, v)| (shift_down(u, id), shift_down(v, id)))
                .collect();
            out.push(Mutation::DeleteNode(id));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_graph_store_is_reproducible() {
        let a = random_graph_store(10, 30, 7);
        let b = random_graph_store(10, 30, 7);
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.node_count(), 10);
    }

    #[test]
    fn test_random_mutations_length() {
        assert_eq!(random_mutations(3, 64, 1).len(), 64);
        assert_eq!(random_mutations(0, 10, 2).len(), 10);
    }
}
