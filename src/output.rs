use crate::engine::MstEngine;
use crate::error::Result;
use crate::types::Edge;
use dot::{Edges, GraphWalk, Kind, LabelText, Labeller, Nodes, Style};

type Node = usize;

#[derive(Clone)]
struct DrawnEdge {
    edge: Edge,
    in_forest: bool,
}

struct Drawing {
    nodes: Vec<Node>,
    edges: Vec<DrawnEdge>,
}

impl<'a> Labeller<'a, Node, DrawnEdge> for Drawing {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> LabelText<'a> {
        LabelText::label(n.to_string())
    }

    fn edge_label(&self, e: &DrawnEdge) -> LabelText<'a> {
        LabelText::label(e.edge.w.to_string())
    }

    fn edge_style(&self, e: &DrawnEdge) -> Style {
        if e.in_forest { Style::Bold } else { Style::Dashed }
    }

    fn kind(&self) -> Kind {
        Kind::Graph
    }
}

impl<'a> GraphWalk<'a, Node, DrawnEdge> for Drawing {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, DrawnEdge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &DrawnEdge) -> Node {
        e.edge.u
    }

    fn target(&self, e: &DrawnEdge) -> Node {
        e.edge.v
    }
}

/// Returns the graph in DOT format.
///
/// Every edge is labelled with its weight. Forest edges are bold, the rest
/// are dashed. Labels are the engine's 0-based ids.
///
/// Intended to be used with `neato`.
pub fn draw_graph(engine: &MstEngine) -> Result<String> {
    let drawing = Drawing {
        nodes: (0..engine.node_count()).collect(),
        edges: engine
            .graph_edges()
            .into_iter()
            .map(|edge| DrawnEdge {
                edge,
                in_forest: engine.is_forest_edge(edge.u, edge.v),
            })
            .collect(),
    };

    let mut buffer = Vec::new();
    dot::render(&drawing, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the graph to a file in DOT format.
pub fn to_dot_file(engine: &MstEngine, path: &str) -> Result<()> {
    let dot_str = draw_graph(engine)?;
    std::fs::write(path, dot_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_graph_marks_forest_edges() {
        let mut engine = MstEngine::new(3);
        engine.add_edge(0, 1, 1.0).unwrap();
        engine.add_edge(1, 2, 2.0).unwrap();
        engine.add_edge(0, 2, 5.0).unwrap();

        let out = draw_graph(&engine).unwrap();
        assert!(out.starts_with("graph G {"));
        assert!(out.contains("N0 -- N1"));
        assert!(out.contains("N0 -- N2"));
        assert_eq!(out.matches("bold").count(), 2);
        assert_eq!(out.matches("dashed").count(), 1);
        assert!(out.contains("label=\"5\""));
    }

    #[test]
    fn test_draw_empty() {
        let out = draw_graph(&MstEngine::default()).unwrap();
        assert!(out.starts_with("graph G {"));
    }
}
