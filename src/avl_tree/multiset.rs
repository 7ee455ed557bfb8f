use crate::arena::NodeId;
use crate::avl_tree::tree;
use crate::bst_tree::tree::{self as bst, InOrder};
use crate::node::{Link, Nodes};

/// An ordered multiset implemented with a weight-balanced binary search
/// tree.
///
/// The surface matches [`BstMultiset`](crate::bst_tree::BstMultiset):
/// lookups and exports are balance-agnostic and share its machinery. The
/// mutating operations additionally maintain each node's subtree size and
/// rotate whenever one child subtree outweighs its sibling by more than two
/// nodes, so sorted insertion does not degrade into a linear chain.
///
/// # Examples
///
/// ```
/// use ordered_collections::avl_tree::AvlMultiset;
///
/// let mut set = AvlMultiset::new();
/// for value in 1..=6 {
///     set.insert(value);
/// }
///
/// assert_eq!(set.len(), 6);
/// assert_eq!(set.to_sorted_vec(), vec![1, 2, 3, 4, 5, 6]);
///
/// assert!(set.remove(&3));
/// assert!(!set.contains(&3));
/// ```
pub struct AvlMultiset<T> {
    nodes: Nodes<T>,
    root: Link,
}

impl<T> AvlMultiset<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlMultiset<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let set: AvlMultiset<u32> = AvlMultiset::new();
    /// ```
    pub fn new() -> Self {
        AvlMultiset {
            nodes: Nodes::new(),
            root: None,
        }
    }

    /// Inserts a value into the multiset, rebalancing the descent path on
    /// the way back up. Always succeeds; an equal value is stored again
    /// rather than replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(1);
    /// set.insert(1);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        tree::insert(&mut self.nodes, &mut self.root, value);
    }

    /// Checks if a value exists in the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        bst::find(&self.nodes, self.root, value).is_some()
    }

    /// Removes one occurrence of a value from the multiset, maintaining the
    /// weights along the search path and rebalancing around the removal
    /// point. Returns `false` and leaves the tree untouched if no equal
    /// value exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        tree::delete(&mut self.nodes, &mut self.root, value).is_some()
    }

    /// Returns the number of stored values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the multiset is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let set: AvlMultiset<u32> = AvlMultiset::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clears the multiset, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the minimum value of the multiset, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|id| &self.nodes[bst::min_node(&self.nodes, id)].value)
    }

    /// Returns the maximum value of the multiset, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.root
            .map(|id| &self.nodes[bst::max_node(&self.nodes, id)].value)
    }

    /// Exports the contents as a sorted vec: a non-lazy snapshot produced by
    /// locating the minimum node and stepping through in-order successors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(5);
    /// set.insert(2);
    /// set.insert(6);
    /// assert_eq!(set.to_sorted_vec(), vec![2, 5, 6]);
    /// ```
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the multiset that yields values in sorted
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::avl_tree::AvlMultiset;
    ///
    /// let mut set = AvlMultiset::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlMultisetIter<T> {
        AvlMultisetIter {
            inner: InOrder::new(&self.nodes, self.root),
        }
    }
}

impl<T> IntoIterator for AvlMultiset<T>
where
    T: Ord,
{
    type IntoIter = AvlMultisetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let ids = bst::in_order_ids(&self.nodes, self.root);
        AvlMultisetIntoIter {
            nodes: self.nodes,
            ids: ids.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlMultiset<T>
where
    T: 'a + Ord,
{
    type IntoIter = AvlMultisetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlMultiset<T>`.
///
/// This iterator yields owned values in sorted order.
pub struct AvlMultisetIntoIter<T> {
    nodes: Nodes<T>,
    ids: std::vec::IntoIter<NodeId>,
}

impl<T> Iterator for AvlMultisetIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        Some(self.nodes.remove(id).value)
    }
}

/// An iterator for `AvlMultiset<T>`.
///
/// This iterator yields immutable references in sorted order.
pub struct AvlMultisetIter<'a, T> {
    inner: InOrder<'a, T>,
}

impl<'a, T> Iterator for AvlMultisetIter<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> Default for AvlMultiset<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
