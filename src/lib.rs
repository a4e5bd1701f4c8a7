// #![warn(missing_docs)]

//! # hld_trees
//!
//! A Rust library for learning what heavy-light decomposition is,
//! how it is built and how it can be used for path queries on trees.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! A tree is flattened so that every heavy path is a contiguous array
//! range; a segment tree over the flattened values then answers any
//! path aggregate in O(log²n) and any point update in O(log n).
//!
//! ```
//! use hld_trees::{Hld, Max, input};
//!
//! let tree = input::from_adjacency(&[vec![1], vec![0, 2, 3], vec![1], vec![1]]);
//! let mut hld = Hld::new(&tree, &[1, 5, 3, 2], 0, Max);
//! // max on the path 0 - 1 - 2
//! assert_eq!(hld.query(0, 2), 5);
//! ```

pub mod debugging;
pub mod decomposition;
pub mod hld;
pub mod input;
pub mod lazy_segment_tree;
pub mod monoid;
pub mod output;
pub mod segment_tree;
pub mod testing;
pub mod types;

pub use decomposition::Decomposition;
pub use decomposition::get_decomposition;
pub use hld::Hld;
pub use lazy_segment_tree::LazySegmentTree;
pub use monoid::{Add, FnMonoid, Max, Monoid};
pub use segment_tree::{AggregateStore, RangeAssign, SegmentTree};
pub use types::EdgeKind;
pub use types::UnGraph;
