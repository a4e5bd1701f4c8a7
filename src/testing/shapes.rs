use crate::UnGraph;
use petgraph::graph::NodeIndex;

/// Generates a path 0 - 1 - ... - (n-1), the worst case for tree depth.
#[allow(dead_code)]
pub fn path_tree(n: usize) -> UnGraph {
    assert!(n > 0);
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32);
        if i > 0 {
            graph.add_edge(NodeIndex::new(i - 1), NodeIndex::new(i), ());
        }
    }
    graph
}

/// Generates a star with center 0 and leaves 1..n, the worst case for
/// branching.
#[allow(dead_code)]
pub fn star_tree(n: usize) -> UnGraph {
    assert!(n > 0);
    let mut graph = UnGraph::new_undirected();
    for i in 0..n {
        graph.add_node(i as u32);
        if i > 0 {
            graph.add_edge(NodeIndex::new(0), NodeIndex::new(i), ());
        }
    }
    graph
}

/// Generates a broom: a path of `handle` vertices with `bristles` leaves
/// hanging off its far end. Mixes one long heavy path with a fan of light
/// edges.
#[allow(dead_code)]
pub fn broom_tree(handle: usize, bristles: usize) -> UnGraph {
    assert!(handle > 0);
    let mut graph = UnGraph::new_undirected();
    for i in 0..handle + bristles {
        graph.add_node(i as u32);
    }
    for i in 1..handle {
        graph.add_edge(NodeIndex::new(i - 1), NodeIndex::new(i), ());
    }
    for i in 0..bristles {
        graph.add_edge(NodeIndex::new(handle - 1), NodeIndex::new(handle + i), ());
    }
    graph
}
