use crate::monoid::Monoid;

/// Backing store for the flattened tree: point updates and half-open range
/// queries over a fixed-size sequence.
///
/// `query` takes `&mut self` so that lazy stores can push pending tags down
/// while answering.
pub trait AggregateStore<M: Monoid> {
    /// Builds the store over `data`. The length is fixed afterwards.
    fn build(monoid: M, data: Vec<M::T>) -> Self;

    /// Overwrites the value at `pos`.
    fn update(&mut self, pos: usize, value: M::T);

    /// Folds `data[left..right]` in index order, `unit` for an empty range.
    fn query(&mut self, left: usize, right: usize) -> M::T;
}

/// Extra capability: overwrite every slot of a half-open range at once.
///
/// `Hld::update_path` and `Hld::add_to_subtree` require this; the plain
/// [`SegmentTree`] deliberately does not provide it, so picking the wrong
/// store is rejected at compile time instead of corrupting answers at call
/// time.
pub trait RangeAssign<M: Monoid>: AggregateStore<M> {
    /// Sets every slot in `[left, right)` to `value`.
    fn assign(&mut self, left: usize, right: usize, value: M::T);
}

/// Flat, iterative, bottom-up segment tree.
///
/// 1-indexed binary heap layout of `2n` slots, leaves at `[n, 2n)`. Point
/// update and range query are O(log n); slot 0 is unused padding.
pub struct SegmentTree<M: Monoid> {
    n: usize,
    tree: Vec<M::T>,
    monoid: M,
}

impl<M: Monoid> SegmentTree<M> {
    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn pull_up(&mut self, i: usize) {
        self.tree[i] = self.monoid.op(&self.tree[2 * i], &self.tree[2 * i + 1]);
    }
}

impl<M: Monoid> AggregateStore<M> for SegmentTree<M> {
    fn build(monoid: M, data: Vec<M::T>) -> Self {
        let n = data.len();
        let mut tree: Vec<M::T> = (0..n).map(|_| monoid.unit()).chain(data).collect();
        for i in (1..n).rev() {
            tree[i] = monoid.op(&tree[2 * i], &tree[2 * i + 1]);
        }
        Self { n, tree, monoid }
    }

    fn update(&mut self, pos: usize, value: M::T) {
        assert!(
            pos < self.n,
            "Leaf {} out of range for segment tree of {} leaves",
            pos,
            self.n
        );
        let mut i = pos + self.n;
        self.tree[i] = value;
        while i > 1 {
            i >>= 1;
            self.pull_up(i);
        }
    }

    fn query(&mut self, mut left: usize, mut right: usize) -> M::T {
        assert!(
            left <= right && right <= self.n,
            "Invalid range [{}, {}) for segment tree of {} leaves",
            left,
            right,
            self.n
        );
        left += self.n;
        right += self.n;
        // two accumulators keep the fold in index order, so non-commutative
        // operators come out right
        let mut front = self.monoid.unit();
        let mut back = self.monoid.unit();
        while left < right {
            if left & 1 == 1 {
                front = self.monoid.op(&front, &self.tree[left]);
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                back = self.monoid.op(&self.tree[right], &back);
            }
            left >>= 1;
            right >>= 1;
        }
        self.monoid.op(&front, &back)
    }
}
