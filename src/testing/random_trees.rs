use crate::UnGraph;
use petgraph::visit::NodeIndexable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generates a random tree: every vertex past the first attaches to a
/// uniformly chosen earlier vertex.
#[allow(dead_code)]
pub fn random_tree(n: usize, seed: usize) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = UnGraph::new_undirected();

    for i in 0..n {
        graph.add_node(i.try_into().unwrap());
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(graph.from_index(i), graph.from_index(j), ());
        }
    }

    graph
}

/// Random vertex values to go with [`random_tree`].
#[allow(dead_code)]
pub fn random_values(n: usize, seed: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    (0..n).map(|_| rng.random_range(-100..100)).collect()
}
