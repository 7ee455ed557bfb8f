mod node;

pub mod arena;
pub mod avl_tree;
pub mod bst_tree;
pub mod heap;
