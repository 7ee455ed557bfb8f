//! Weight-balanced binary search tree. Insertion and removal maintain a
//! per-node subtree size and rotate whenever two sibling subtrees differ by
//! more than two nodes, keeping the tree shallow.

mod multiset;
mod tree;

pub use self::multiset::{AvlMultiset, AvlMultisetIntoIter, AvlMultisetIter};
