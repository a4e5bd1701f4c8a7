use crate::UnGraph;
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Reads a tree from a file.
///
/// Undirected tree input:
/// - one line, one edge in format "u,v",
/// - by convention start numbering from 0 and go up to |V|-1.
///
/// <div class="warning">
///
/// > The edge list must describe a tree: connected, |V|-1 edges.
/// > This is checked by [`get_decomposition`](crate::decomposition::get_decomposition),
/// > not here.
///
/// </div>
///
/// Example input:
/// ```text
/// 0,1
/// 1,2
/// 1,3
/// ```
pub fn from_file(path: &str) -> UnGraph {
    let file = File::open(path).expect("File should exist and be readable");
    let reader = BufReader::new(file);
    parse_tree_from_custom_format(reader)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> UnGraph {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_tree_from_custom_format(reader)
}

fn parse_tree_from_custom_format<R: BufRead>(reader: R) -> UnGraph {
    let mut edges = Vec::new();
    let mut max_node = 0;

    for line in reader.lines() {
        let line = line.expect("Line should be readable");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<_> = line.split(',').collect();
        if parts.len() != 2 {
            panic!("Wrong format, expected 'u,v' for an edge");
        }
        let u: usize = parts[0]
            .parse()
            .expect("Node index should be a non-negative number");
        let v: usize = parts[1]
            .parse()
            .expect("Node index should be a non-negative number");
        max_node = max_node.max(u).max(v);
        edges.push((u, v));
    }

    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..=max_node).map(|i| graph.add_node(i as u32)).collect();

    graph.extend_with_edges(edges.iter().map(|&(u, v)| (nodes[u], nodes[v], ())));

    graph
}

/// Builds a tree from adjacency lists, one `Vec` of neighbor ids per vertex.
///
/// Each undirected edge may be listed from both endpoints; the second
/// listing is ignored, so neighbor order per vertex is preserved for the
/// first listing. Self-loops and neighbors outside `0..adj.len()` panic.
///
/// ```
/// let tree = hld_trees::input::from_adjacency(&[vec![1], vec![0, 2, 3], vec![1], vec![1]]);
/// assert_eq!(tree.node_count(), 4);
/// assert_eq!(tree.edge_count(), 3);
/// ```
pub fn from_adjacency(adj: &[Vec<usize>]) -> UnGraph {
    let n = adj.len();
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32);
    }

    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(n);
    for (u, neighbors) in adj.iter().enumerate() {
        for &v in neighbors {
            assert!(v < n, "Neighbor {} out of range for {} vertices", v, n);
            assert!(u != v, "Self-loop at vertex {}", u);
            let key = (u.min(v), u.max(v));
            if seen.insert(key) {
                graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }
    }

    graph
}
