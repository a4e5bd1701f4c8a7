use crate::UnGraph;
use crate::decomposition::{Decomposition, get_decomposition};
use crate::monoid::Monoid;
use crate::segment_tree::{AggregateStore, RangeAssign, SegmentTree};
use std::mem::swap;

/// Heavy-light decomposition with one owned backing store over the
/// flattened vertex values.
///
/// Path queries decompose into O(log n) contiguous `pos` ranges and cost
/// O(log²n); point updates cost O(log n). The store type decides which
/// write operations exist: the default [`SegmentTree`] gives point updates
/// only, a store implementing [`RangeAssign`] (such as
/// [`LazySegmentTree`](crate::lazy_segment_tree::LazySegmentTree)) also
/// unlocks [`update_path`](Hld::update_path) and
/// [`add_to_subtree`](Hld::add_to_subtree).
///
/// ```
/// use hld_trees::{Hld, Max, input};
///
/// let tree = input::from_adjacency(&[vec![1], vec![0, 2, 3], vec![1], vec![1]]);
/// let mut hld = Hld::new(&tree, &[1, 5, 3, 2], 0, Max);
/// assert_eq!(hld.query(0, 2), 5);
/// ```
pub struct Hld<M: Monoid, S: AggregateStore<M> = SegmentTree<M>> {
    decomposition: Decomposition,
    monoid: M,
    store: S,
}

impl<M: Monoid + Clone> Hld<M, SegmentTree<M>> {
    /// Decomposes `g` rooted at `root` and builds a point-update
    /// [`SegmentTree`] over `values` in flattened order.
    ///
    /// # Panics
    ///
    /// Panics if `g` is not a tree rooted at a valid `root` (see
    /// [`get_decomposition`]) or if `values` does not have one entry per
    /// vertex.
    pub fn new(g: &UnGraph, values: &[M::T], root: usize, monoid: M) -> Self {
        Self::with_store(g, values, root, monoid)
    }
}

impl<M: Monoid + Clone, S: AggregateStore<M>> Hld<M, S> {
    /// Same as [`Hld::new`] but with the store type picked by the caller.
    pub fn with_store(g: &UnGraph, values: &[M::T], root: usize, monoid: M) -> Self {
        let decomposition = get_decomposition(g, root);
        assert!(
            values.len() == decomposition.len(),
            "Got {} values for {} vertices",
            values.len(),
            decomposition.len()
        );
        let flattened: Vec<M::T> = decomposition
            .flat
            .iter()
            .map(|&v| values[v].clone())
            .collect();
        let store = S::build(monoid.clone(), flattened);
        Self {
            decomposition,
            monoid,
            store,
        }
    }

    /// The frozen decomposition arrays, for inspection and drawing.
    pub fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.decomposition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decomposition.is_empty()
    }

    fn check_vertex(&self, u: usize) {
        assert!(
            u < self.decomposition.len(),
            "Vertex {} out of range for tree of {} vertices",
            u,
            self.decomposition.len()
        );
    }

    /// Folds the values on the path between `u` and `v`, endpoints
    /// included, starting from `unit`.
    ///
    /// Climbs whichever endpoint has the deeper path head, folding one
    /// heavy-path segment per hop; each hop crosses a light edge, so there
    /// are O(log n) hops. The final same-path segment folds shallower
    /// vertex first.
    pub fn query(&mut self, mut u: usize, mut v: usize) -> M::T {
        self.check_vertex(u);
        self.check_vertex(v);
        let d = &self.decomposition;
        let mut res = self.monoid.unit();
        while d.head[u] != d.head[v] {
            if d.depth[d.head[u]] < d.depth[d.head[v]] {
                swap(&mut u, &mut v);
            }
            let segment = self.store.query(d.pos[d.head[u]], d.pos[u] + 1);
            res = self.monoid.op(&res, &segment);
            u = d.parent[d.head[u]].expect("deeper of two distinct heads is not the root");
        }
        if d.depth[u] > d.depth[v] {
            swap(&mut u, &mut v);
        }
        let tail = self.store.query(d.pos[u], d.pos[v] + 1);
        self.monoid.op(&res, &tail)
    }

    /// Overwrites the value of vertex `u`. O(log n).
    pub fn update(&mut self, u: usize, value: M::T) {
        self.check_vertex(u);
        self.store.update(self.decomposition.pos[u], value);
    }
}

impl<M: Monoid + Clone, S: RangeAssign<M>> Hld<M, S> {
    /// Paints every vertex on the path between `u` and `v`, endpoints
    /// included, with `value`. O(log²n).
    pub fn update_path(&mut self, mut u: usize, mut v: usize, value: M::T) {
        self.check_vertex(u);
        self.check_vertex(v);
        let d = &self.decomposition;
        while d.head[u] != d.head[v] {
            if d.depth[d.head[u]] < d.depth[d.head[v]] {
                swap(&mut u, &mut v);
            }
            self.store
                .assign(d.pos[d.head[u]], d.pos[u] + 1, value.clone());
            u = d.parent[d.head[u]].expect("deeper of two distinct heads is not the root");
        }
        if d.depth[u] > d.depth[v] {
            swap(&mut u, &mut v);
        }
        self.store.assign(d.pos[u], d.pos[v] + 1, value);
    }

    /// Paints every vertex in the subtree of `u`, `u` included, with
    /// `value`. The subtree is one contiguous `pos` range, so this is a
    /// single O(log n) range assignment.
    pub fn add_to_subtree(&mut self, u: usize, value: M::T) {
        self.check_vertex(u);
        let d = &self.decomposition;
        self.store.assign(d.pos[u], d.pos[u] + d.size[u], value);
    }
}
