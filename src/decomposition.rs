use crate::UnGraph;
use fixedbitset::FixedBitSet;
use petgraph::visit::NodeIndexable;

/// This struct holds all information about the heavy-light decomposition of
/// a rooted tree. All arrays are indexed by vertex id and frozen after
/// [`get_decomposition`] returns.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Immediate parent in the rooted tree, `None` for the root.
    pub parent: Vec<Option<usize>>,
    /// Distance in edges from the root.
    pub depth: Vec<usize>,
    /// Number of vertices in the subtree rooted at v, v included.
    pub size: Vec<usize>,
    /// The child with the largest subtree (first in adjacency order on
    /// ties), `None` for leaves.
    pub heavy: Vec<Option<usize>>,
    /// Topmost vertex of the heavy path containing v.
    pub head: Vec<usize>,
    /// Index of v in the flattened array. Every heavy path and every
    /// subtree is a contiguous `pos` range.
    pub pos: Vec<usize>,
    /// Inverse of `pos`: vertex occupying flattened index i.
    pub flat: Vec<usize>,
}

impl Decomposition {
    fn new(graph_size: usize) -> Self {
        Self {
            parent: vec![None; graph_size],
            depth: vec![0; graph_size],
            size: vec![0; graph_size],
            heavy: vec![None; graph_size],
            head: vec![0; graph_size],
            pos: vec![0; graph_size],
            flat: vec![0; graph_size],
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Computes the heavy-light decomposition of `g` rooted at `root`.
///
/// Two iterative passes over explicit stacks; no recursion, so trees that
/// degenerate into long paths cannot exhaust the call stack. The first pass
/// is a post-order walk filling `parent`/`depth`/`size`/`heavy`, the second
/// a pre-order walk that visits the heavy child of each vertex first and
/// assigns `head`/`pos`/`flat` so that heavy paths are contiguous in `pos`.
///
/// # Panics
///
/// Panics if `g` is empty, `root` is out of range, or `g` is not a tree
/// (edge count other than |V|-1, or not connected).
pub fn get_decomposition(g: &UnGraph, root: usize) -> Decomposition {
    let graph_size = g.node_count();
    assert!(graph_size > 0, "Tree should not be empty");
    assert!(
        root < graph_size,
        "Root {} out of range for {} vertices",
        root,
        graph_size
    );
    assert!(
        g.edge_count() == graph_size - 1,
        "Graph has {} edges, a tree on {} vertices has {}",
        g.edge_count(),
        graph_size,
        graph_size - 1
    );

    // petgraph yields neighbors in reverse insertion order, flip back so
    // "adjacency order" means insertion order
    let adj: Vec<Vec<usize>> = (0..graph_size)
        .map(|u| {
            let mut neighbors: Vec<usize> =
                g.neighbors(g.from_index(u)).map(|v| g.to_index(v)).collect();
            neighbors.reverse();
            neighbors
        })
        .collect();

    let mut d = Decomposition::new(graph_size);
    let mut visited = FixedBitSet::with_capacity(graph_size);
    let mut stack = Vec::with_capacity(graph_size);

    // pass 1: post-order, sizes and heavy children
    stack.push(root);
    while let Some(&u) = stack.last() {
        if !visited.contains(u) {
            visited.insert(u);
            for &v in &adj[u] {
                if !visited.contains(v) {
                    d.parent[v] = Some(u);
                    d.depth[v] = d.depth[u] + 1;
                    stack.push(v);
                }
            }
        } else {
            stack.pop();
            d.size[u] = 1;
            let mut max_child_size = 0;
            for &v in &adj[u] {
                if d.parent[u] == Some(v) {
                    continue;
                }
                d.size[u] += d.size[v];
                if d.size[v] > max_child_size {
                    max_child_size = d.size[v];
                    d.heavy[u] = Some(v);
                }
            }
        }
    }
    assert!(
        visited.count_ones(..) == graph_size,
        "Tree must be connected, reached {} of {} vertices from root {}",
        visited.count_ones(..),
        graph_size,
        root
    );

    // pass 2: pre-order, heavy child popped right after its parent
    let mut stack = vec![(root, root)];
    let mut time = 0;
    while let Some((u, h)) = stack.pop() {
        d.head[u] = h;
        d.pos[u] = time;
        d.flat[time] = u;
        time += 1;
        for &v in adj[u].iter().rev() {
            if d.parent[u] != Some(v) && d.heavy[u] != Some(v) {
                stack.push((v, v));
            }
        }
        if let Some(hv) = d.heavy[u] {
            stack.push((hv, h));
        }
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_adjacency;
    use crate::testing::random_trees::random_tree;
    use crate::testing::shapes::{path_tree, star_tree};

    /// Checks the invariant that makes path decomposition work: the heavy
    /// path through v occupies a contiguous `pos` block starting at its
    /// head, increasing by depth, and `flat` inverts `pos`.
    fn assert_contiguity(d: &Decomposition) {
        for v in 0..d.len() {
            assert_eq!(d.flat[d.pos[v]], v);
            assert!(d.pos[v] >= d.pos[d.head[v]]);

            let mut u = d.head[v];
            let mut expected = d.pos[u];
            loop {
                assert_eq!(d.head[u], d.head[v]);
                assert_eq!(d.pos[u], expected);
                assert_eq!(d.depth[u], d.depth[d.head[v]] + (expected - d.pos[d.head[v]]));
                expected += 1;
                match d.heavy[u] {
                    Some(next) => u = next,
                    None => break,
                }
            }
        }
    }

    fn assert_subtree_contiguity(d: &Decomposition) {
        for v in 0..d.len() {
            // collect the subtree of v by parent-walking from every vertex
            for w in 0..d.len() {
                let mut a = w;
                let mut in_subtree = false;
                loop {
                    if a == v {
                        in_subtree = true;
                        break;
                    }
                    match d.parent[a] {
                        Some(p) => a = p,
                        None => break,
                    }
                }
                let in_range = d.pos[w] >= d.pos[v] && d.pos[w] < d.pos[v] + d.size[v];
                assert_eq!(in_subtree, in_range);
            }
        }
    }

    #[test]
    fn test_example_tree() {
        let g = from_adjacency(&[vec![1], vec![0, 2, 3], vec![1], vec![1]]);
        let d = get_decomposition(&g, 0);

        assert_eq!(d.parent, vec![None, Some(0), Some(1), Some(1)]);
        assert_eq!(d.depth, vec![0, 1, 2, 2]);
        assert_eq!(d.size, vec![4, 3, 1, 1]);
        // children 2 and 3 tie at size 1, adjacency order keeps 2
        assert_eq!(d.heavy, vec![Some(1), Some(2), None, None]);
        assert_eq!(d.head, vec![0, 0, 0, 3]);
        assert_eq!(d.pos, vec![0, 1, 2, 3]);
        assert_eq!(d.flat, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_vertex() {
        let mut g = UnGraph::new_undirected();
        g.add_node(0);
        let d = get_decomposition(&g, 0);
        assert_eq!(d.parent, vec![None]);
        assert_eq!(d.size, vec![1]);
        assert_eq!(d.heavy, vec![None]);
        assert_eq!(d.pos, vec![0]);
    }

    #[test]
    fn test_path_is_one_heavy_path() {
        let g = path_tree(10);
        let d = get_decomposition(&g, 0);
        for v in 0..10 {
            assert_eq!(d.head[v], 0);
            assert_eq!(d.pos[v], v);
            assert_eq!(d.depth[v], v);
        }
        assert_contiguity(&d);
    }

    #[test]
    fn test_star_paths() {
        let g = star_tree(6);
        let d = get_decomposition(&g, 0);
        assert_eq!(d.size[0], 6);
        // exactly one leaf continues the center's heavy path
        let continuing = (1..6).filter(|&v| d.head[v] == 0).count();
        assert_eq!(continuing, 1);
        for v in 1..6 {
            assert_eq!(d.depth[v], 1);
            assert!(d.head[v] == 0 || d.head[v] == v);
        }
        assert_contiguity(&d);
    }

    #[test]
    fn test_nontrivial_root() {
        let g = from_adjacency(&[vec![1], vec![0, 2, 3], vec![1], vec![1]]);
        let d = get_decomposition(&g, 2);
        assert_eq!(d.parent[2], None);
        assert_eq!(d.depth, vec![2, 1, 0, 2]);
        assert_eq!(d.size[2], 4);
        assert_contiguity(&d);
    }

    #[test]
    fn test_random_trees_invariants() {
        for seed in 0..30 {
            let n = 1 + seed * 3;
            let g = random_tree(n, seed);
            let d = get_decomposition(&g, 0);
            assert_contiguity(&d);
            assert_subtree_contiguity(&d);
            assert_eq!(d.size[0], n);

            // a heavy child really is the biggest child
            for v in 0..n {
                if let Some(h) = d.heavy[v] {
                    for w in 0..n {
                        if d.parent[w] == Some(v) {
                            assert!(d.size[w] <= d.size[h]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "should not be empty")]
    fn test_empty_graph() {
        let g = UnGraph::new_undirected();
        get_decomposition(&g, 0);
    }

    #[test]
    #[should_panic(expected = "must be connected")]
    fn test_disconnected_graph() {
        // two components, edge count still |V|-1 because of the cycle
        let g = from_adjacency(&[vec![1, 2], vec![2], vec![], vec![]]);
        get_decomposition(&g, 0);
    }

    #[test]
    #[should_panic(expected = "a tree on")]
    fn test_cyclic_graph() {
        let g = from_adjacency(&[vec![1, 2], vec![2], vec![]]);
        get_decomposition(&g, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_root_out_of_range() {
        let g = from_adjacency(&[vec![1], vec![]]);
        get_decomposition(&g, 5);
    }
}
