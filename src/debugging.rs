use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::decomposition::Decomposition;
use crate::types::EdgeKind;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    kind: EdgeKind,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    decomposition: &'a Decomposition,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let d = self.decomposition;
        dot::LabelText::label(format!(
            "{}\nhead:{} pos:{}\nd:{} sz:{}\np:{}",
            n,
            d.head[*n],
            d.pos[*n],
            d.depth[*n],
            d.size[*n],
            if d.parent[*n].is_some() {
                d.parent[*n].unwrap().to_string()
            } else {
                "Root".to_string()
            }
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}", e.kind))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns a string representation of the decomposition in dot format.
///
/// Every rooted tree edge points from parent to child and is labelled
/// heavy or light; node labels dump head, pos, depth, size and parent.
///
/// Use returned string with `dot` not `neato`.
pub fn draw(decomposition: &Decomposition) -> String {
    let mut graph = Graph {
        nodes: (0..decomposition.len()).collect(),
        edges: Vec::new(),
        decomposition,
    };

    for v in 0..decomposition.len() {
        if let Some(p) = decomposition.parent[v] {
            let kind = if decomposition.heavy[p] == Some(v) {
                EdgeKind::Heavy
            } else {
                EdgeKind::Light
            };
            graph.edges.push(Edge {
                source: p,
                target: v,
                kind,
            });
        }
    }

    let mut buf = Vec::new();
    dot::render(&graph, &mut buf).expect("dot rendering should not fail");
    String::from_utf8(buf).expect("dot output should be valid utf8")
}
