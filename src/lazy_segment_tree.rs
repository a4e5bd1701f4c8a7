use crate::monoid::{Monoid, repeat};
use crate::segment_tree::{AggregateStore, RangeAssign};

/// Segment tree with pending "paint" tags: range assignment in O(log n) on
/// top of the usual point update and range query.
///
/// The leaf count is padded up to a power of two; padding leaves hold `unit`
/// and are never painted, so they drop out of every fold by the identity
/// law. Assignments compose by replacement, and the aggregate of a fully
/// painted node is [`repeat`]`(value, width)`.
pub struct LazySegmentTree<M: Monoid> {
    n: usize,
    size: usize,
    log: u32,
    tree: Vec<M::T>,
    paint: Vec<Option<M::T>>,
    monoid: M,
}

impl<M: Monoid> LazySegmentTree<M> {
    /// Number of logical leaves.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Width of the leaf span covered by node `i`.
    fn width(&self, i: usize) -> usize {
        self.size >> i.ilog2()
    }

    fn apply_paint(&mut self, i: usize, value: &M::T) {
        self.tree[i] = repeat(&self.monoid, value, self.width(i));
        if i < self.size {
            self.paint[i] = Some(value.clone());
        }
    }

    fn push_down(&mut self, i: usize) {
        if let Some(value) = self.paint[i].take() {
            self.apply_paint(2 * i, &value);
            self.apply_paint(2 * i + 1, &value);
        }
    }

    fn pull_up(&mut self, i: usize) {
        self.tree[i] = self.monoid.op(&self.tree[2 * i], &self.tree[2 * i + 1]);
    }

    /// Pushes pending tags on the ancestors of both range borders, top-down.
    fn push_borders(&mut self, left: usize, right: usize) {
        for k in (1..=self.log).rev() {
            if (left >> k) << k != left {
                self.push_down(left >> k);
            }
            if (right >> k) << k != right {
                self.push_down((right - 1) >> k);
            }
        }
    }

    /// Recomputes the ancestors of both range borders, bottom-up.
    fn pull_borders(&mut self, left: usize, right: usize) {
        for k in 1..=self.log {
            if (left >> k) << k != left {
                self.pull_up(left >> k);
            }
            if (right >> k) << k != right {
                self.pull_up((right - 1) >> k);
            }
        }
    }
}

impl<M: Monoid> AggregateStore<M> for LazySegmentTree<M> {
    fn build(monoid: M, data: Vec<M::T>) -> Self {
        let n = data.len();
        let size = n.next_power_of_two();
        let log = size.trailing_zeros();
        let mut tree: Vec<M::T> = (0..size)
            .map(|_| monoid.unit())
            .chain(data)
            .chain((n..size).map(|_| monoid.unit()))
            .collect();
        for i in (1..size).rev() {
            tree[i] = monoid.op(&tree[2 * i], &tree[2 * i + 1]);
        }
        let paint = (0..size).map(|_| None).collect();
        Self {
            n,
            size,
            log,
            tree,
            paint,
            monoid,
        }
    }

    fn update(&mut self, pos: usize, value: M::T) {
        assert!(
            pos < self.n,
            "Leaf {} out of range for segment tree of {} leaves",
            pos,
            self.n
        );
        let i = pos + self.size;
        for k in (1..=self.log).rev() {
            self.push_down(i >> k);
        }
        self.tree[i] = value;
        for k in 1..=self.log {
            self.pull_up(i >> k);
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
        if left == right {
            return self.monoid.unit();
        }
        left += self.size;
        right += self.size;
        self.push_borders(left, right);
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

impl<M: Monoid> RangeAssign<M> for LazySegmentTree<M> {
    fn assign(&mut self, left: usize, right: usize, value: M::T) {
        assert!(
            left <= right && right <= self.n,
            "Invalid range [{}, {}) for segment tree of {} leaves",
            left,
            right,
            self.n
        );
        if left == right {
            return;
        }
        let left = left + self.size;
        let right = right + self.size;
        self.push_borders(left, right);
        let (mut l, mut r) = (left, right);
        while l < r {
            if l & 1 == 1 {
                self.apply_paint(l, &value);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                self.apply_paint(r, &value);
            }
            l >>= 1;
            r >>= 1;
        }
        self.pull_borders(left, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monoid::{Add, Max};
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_behaves_like_plain_store() {
        let mut tree = LazySegmentTree::build(Max, vec![4, 3, 2, 8, 5]);
        assert_eq!(tree.query(0, 5), 8);
        assert_eq!(tree.query(4, 5), 5);
        assert_eq!(tree.query(2, 2), i64::MIN);
        tree.update(3, 0);
        assert_eq!(tree.query(0, 5), 5);
    }

    #[test]
    fn test_assign_then_query() {
        let mut tree = LazySegmentTree::build(Max, vec![1, 2, 3, 4, 5, 6]);
        tree.assign(1, 4, 9);
        assert_eq!(tree.query(0, 6), 9);
        assert_eq!(tree.query(1, 2), 9);
        assert_eq!(tree.query(4, 6), 6);
        tree.assign(0, 6, -1);
        assert_eq!(tree.query(0, 6), -1);
    }

    #[test]
    fn test_assign_sum_accounts_for_width() {
        let mut tree = LazySegmentTree::build(Add, vec![1, 1, 1, 1, 1, 1, 1]);
        tree.assign(2, 7, 3);
        assert_eq!(tree.query(0, 7), 2 + 5 * 3);
        assert_eq!(tree.query(2, 5), 9);
    }

    #[test]
    fn test_point_update_after_paint() {
        let mut tree = LazySegmentTree::build(Add, vec![0; 8]);
        tree.assign(0, 8, 2);
        tree.update(4, 10);
        assert_eq!(tree.query(0, 8), 7 * 2 + 10);
        assert_eq!(tree.query(4, 5), 10);
        assert_eq!(tree.query(3, 4), 2);
    }

    #[test]
    fn test_matches_naive_simulation() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [1usize, 2, 3, 7, 16, 33] {
            let mut naive: Vec<i64> = (0..n).map(|_| rng.random_range(-20..20)).collect();
            let mut tree = LazySegmentTree::build(Add, naive.clone());
            for _ in 0..300 {
                let l = rng.random_range(0..=n);
                let r = rng.random_range(l..=n);
                match rng.random_range(0..3) {
                    0 => {
                        let x = rng.random_range(-20..20);
                        tree.assign(l, r, x);
                        naive[l..r].fill(x);
                    }
                    1 if n > 0 => {
                        let i = rng.random_range(0..n);
                        let x = rng.random_range(-20..20);
                        tree.update(i, x);
                        naive[i] = x;
                    }
                    _ => {
                        assert_eq!(tree.query(l, r), naive[l..r].iter().sum::<i64>());
                    }
                }
            }
            assert_eq!(tree.query(0, n), naive.iter().sum::<i64>());
        }
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_assign_past_end() {
        let mut tree = LazySegmentTree::build(Max, vec![1, 2, 3]);
        tree.assign(1, 4, 0);
    }
}
