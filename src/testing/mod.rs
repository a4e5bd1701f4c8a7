pub mod random_trees;
pub mod shapes;
