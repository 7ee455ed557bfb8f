//! Unbalanced binary search tree ordered by value. Equal values are routed
//! to the left subtree, so duplicates are kept.

mod multiset;
pub(crate) mod tree;

pub use self::multiset::{BstMultiset, BstMultisetIntoIter, BstMultisetIter};
