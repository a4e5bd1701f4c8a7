/// An associative operator with an identity element, injected as a value.
///
/// `op` must be associative and `unit` must satisfy `op(unit, x) == x` for
/// every value `x` a query can reach. Commutativity is not required; range
/// queries fold values in index order.
pub trait Monoid {
    type T: Clone;

    fn op(&self, a: &Self::T, b: &Self::T) -> Self::T;
    fn unit(&self) -> Self::T;
}

/// Maximum over `i64`, with `i64::MIN` standing in for minus infinity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl Monoid for Max {
    type T = i64;

    fn op(&self, a: &i64, b: &i64) -> i64 {
        *a.max(b)
    }

    fn unit(&self) -> i64 {
        i64::MIN
    }
}

/// Sum over `i64`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Add;

impl Monoid for Add {
    type T = i64;

    fn op(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn unit(&self) -> i64 {
        0
    }
}

/// Monoid built from a closure and an explicit identity constant.
#[derive(Clone)]
pub struct FnMonoid<T, F> {
    func: F,
    unit: T,
}

impl<T: Clone, F: Fn(&T, &T) -> T> FnMonoid<T, F> {
    pub fn new(func: F, unit: T) -> Self {
        Self { func, unit }
    }
}

impl<T: Clone, F: Fn(&T, &T) -> T> Monoid for FnMonoid<T, F> {
    type T = T;

    fn op(&self, a: &T, b: &T) -> T {
        (self.func)(a, b)
    }

    fn unit(&self) -> T {
        self.unit.clone()
    }
}

/// Folds `times` copies of `value` in O(log times) by doubling.
///
/// Only associativity is needed: all copies are equal, so the grouping does
/// not matter. `repeat(m, v, 0)` is `m.unit()`.
pub fn repeat<M: Monoid>(monoid: &M, value: &M::T, mut times: usize) -> M::T {
    let mut acc = monoid.unit();
    let mut base = value.clone();
    while times > 0 {
        if times & 1 == 1 {
            acc = monoid.op(&acc, &base);
        }
        times >>= 1;
        if times > 0 {
            base = monoid.op(&base, &base);
        }
    }
    acc
}
