use crate::UnGraph;
use crate::decomposition::Decomposition;
use petgraph::visit::EdgeRef;

/// Returns a decomposed tree in DOT format.
///
/// It shows your nodes labels, not petgraph's internal indices.
///
/// Heavy edges are bold and light edges are dashed; the root is colored
/// green.
///
/// Intended to be used with `dot`.
pub fn draw_tree(graph: &UnGraph, decomposition: &Decomposition) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for node_idx in graph.node_indices() {
        let label = graph.node_weight(node_idx).unwrap();
        let color = if decomposition.parent[node_idx.index()].is_none() {
            "green"
        } else {
            "lightblue"
        };
        output.push_str(&format!(
            "  {} [label=\"{}\", fillcolor={}];\n",
            node_idx.index(),
            label,
            color
        ));
    }

    for edge in graph.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        // the child end of a heavy edge is its parent's heavy child
        let heavy = decomposition.heavy[a] == Some(b) || decomposition.heavy[b] == Some(a);
        let style = if heavy { "bold" } else { "dashed" };
        output.push_str(&format!("  {} -- {} [style={}];\n", a, b, style));
    }
    output.push_str("}\n");
    output
}

/// Writes the decomposed tree to a file in DOT format.
pub fn to_dot_file(graph: &UnGraph, decomposition: &Decomposition, path: &str) {
    let dot_str = draw_tree(graph, decomposition);
    to_file(&dot_str, path);
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) {
    std::fs::write(path, content).expect("Rust should write to file");
}
