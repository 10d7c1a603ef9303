//! The [`Tree`] itself. Every structural operation is a recursion over the owned node graph
//! hanging off the root.

use std::cmp::Ordering;
use std::ptr;

use tracing::{debug, instrument, trace};

use crate::balance::{self, Balance};
use crate::error::{TreeError, TreeResult};
use crate::node::{self, Link, Node};

/// A Binary Search Tree over a duplicate-free set of ordered values.
///
/// The tree is built balanced but does not keep itself balanced: [`insert`][Self::insert] and
/// [`delete`][Self::delete] only touch the path to the value, and [`rebalance`][Self::rebalance]
/// rebuilds the whole tree from its sorted contents when asked to.
///
/// # Examples
///
/// ```
/// use rebuild_bst::Tree;
///
/// let mut tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into();
/// assert!(tree.is_balanced());
///
/// // Inserting never rebalances so this leaves a long chain on the right.
/// for x in [100, 101, 102] {
///     tree.insert(x);
/// }
/// assert!(!tree.is_balanced());
///
/// tree.rebalance();
/// assert!(tree.is_balanced());
/// assert_eq!(tree.inorder(), [&1, &3, &4, &5, &7, &8, &9, &100, &101, &102]);
/// ```
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::drop_iteratively(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from values that are already strictly ascending. Use
    /// [`FromIterator`] or [`From<Vec<T>>`] for arbitrary input.
    ///
    /// # Errors
    ///
    /// [`TreeError::Unsorted`] if some value is not greater than the one before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::from_sorted(vec![1, 2, 3]).unwrap();
    /// assert_eq!(tree.root().map(|n| n.data()), Some(&2));
    ///
    /// let err = Tree::from_sorted(vec![1, 3, 3]).unwrap_err();
    /// assert_eq!(err, TreeError::Unsorted { index: 2 });
    /// ```
    pub fn from_sorted(sorted: Vec<T>) -> TreeResult<Self>
    where
        T: Ord,
    {
        if let Some(index) = sorted.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(TreeError::Unsorted { index: index + 1 });
        }
        Ok(Self::build(sorted))
    }

    fn build(sorted: Vec<T>) -> Self {
        let len = sorted.len();
        let tree = Self {
            root: node::build(sorted),
            len,
        };
        debug!(len, height = tree.height(), "built tree");
        tree
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree as it was, if the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = node::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        trace!(inserted);
        inserted
    }

    /// Deletes `value` from the tree and returns it, or `None` if it wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let mut tree: Tree<_> = vec![1, 2, 3].into();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.inorder(), [&1, &3]);
    /// ```
    #[instrument(level = "trace", skip_all, fields(len = self.len))]
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let deleted = node::delete(&mut self.root, value);
        if deleted.is_some() {
            self.len -= 1;
        }
        trace!(deleted = deleted.is_some());
        deleted
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![1, 2, 3].into();
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.data()), Some(&3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.find(value))
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] on an empty tree.
    pub fn min_value(&self) -> TreeResult<&T> {
        self.root().map(Node::min_value).ok_or(TreeError::Empty)
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] on an empty tree.
    pub fn max_value(&self) -> TreeResult<&T> {
        self.root().map(Node::max_value).ok_or(TreeError::Empty)
    }

    /// The number of edges on the longest root-to-leaf path. A single node has height 0 and an
    /// empty tree has height -1.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, |root| root.height() as isize)
    }

    /// The number of edges between the root and `target`. The root has depth 0.
    ///
    /// `target` is matched by identity, so it must be a node of this tree (e.g. one returned by
    /// [`find`][Self::find] or handed to a [`visit`][Self::visit] callback).
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeNotInTree`] if `target` isn't reachable from this tree's root, even if
    /// this tree holds an equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Tree, TreeError};
    ///
    /// let tree: Tree<_> = vec![1, 2, 3].into();
    /// let other: Tree<_> = vec![1, 2, 3].into();
    ///
    /// let three = tree.find(&3).unwrap();
    /// assert_eq!(tree.depth(three), Ok(1));
    ///
    /// let foreign = other.find(&3).unwrap();
    /// assert_eq!(tree.depth(foreign), Err(TreeError::NodeNotInTree));
    /// ```
    pub fn depth(&self, target: &Node<T>) -> TreeResult<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;

        while let Some(node) = current {
            if ptr::eq(node, target) {
                return Ok(depth);
            }
            current = match target.data().cmp(node.data()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                // Same value at a different address: `target` belongs to some other tree.
                Ordering::Equal => None,
            };
            depth += 1;
        }

        Err(TreeError::NodeNotInTree)
    }

    /// The depth of the node holding `value`, or `None` if it isn't in the tree.
    pub fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;

        while let Some(node) = current {
            current = match value.cmp(node.data()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// Checks every node for left and right subtree heights differing by more than one.
    pub fn balance(&self) -> Balance {
        balance::check(self.root())
    }

    /// Whether the heights of the left and right subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.balance().is_balanced()
    }

    /// Rebuilds the whole tree into a balanced shape from its values in ascending order. The
    /// values themselves are moved, not cloned, and no value is added or lost.
    #[instrument(level = "debug", skip_all, fields(len = self.len))]
    pub fn rebalance(&mut self) {
        let sorted = node::into_sorted(self.root.take(), self.len);
        self.root = node::build(sorted);
        debug!(height = self.height(), "rebalanced");
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Sorts and deduplicates the values, then builds a balanced tree from them.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self::build(values)
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}
