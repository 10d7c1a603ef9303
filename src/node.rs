use std::cmp::Ordering;
use std::mem;

/// An owned, possibly empty child slot. Every `Node` is owned by exactly one slot (or by the
/// [`Tree`][crate::Tree]'s root), so the structure can't share or cycle.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One vertex of a [`Tree`][crate::Tree]. A `Node` is a plain record: it holds its data and up to
/// two children and is only ever modified through the tree that owns it.
#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of this node's left subtree, if any. Every value in it is less than
    /// [`data`][Self::data].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any. Every value in it is greater than
    /// [`data`][Self::data].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    pub fn height(&self) -> usize {
        // `None < Some(_)` so a missing child never wins the `max`.
        let left = self.left().map(|n| n.height() + 1);
        let right = self.right().map(|n| n.height() + 1);
        left.max(right).unwrap_or(0)
    }

    /// The smallest value in the subtree rooted here, found by following left children.
    pub fn min_value(&self) -> &T {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        &current.data
    }

    /// The largest value in the subtree rooted here, found by following right children.
    pub fn max_value(&self) -> &T {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        &current.data
    }

    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.data) {
            Ordering::Less => self.left().and_then(|n| n.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }
}

/// Builds a height-balanced subtree from strictly ascending values. The middle element
/// (`len / 2`, so the upper of the two middles for even lengths) becomes the subtree root and the
/// halves on either side of it become its children.
pub(crate) fn build<T>(mut sorted: Vec<T>) -> Link<T> {
    if sorted.is_empty() {
        return None;
    }

    let mid = sorted.len() / 2;
    let right = sorted.split_off(mid + 1);
    let data = sorted.pop()?;

    Some(Box::new(Node {
        data,
        left: build(sorted),
        right: build(right),
    }))
}

/// Inserts `value` into the subtree in `link`, filling the empty slot the search ends on.
/// Returns `false` without touching anything if the value is already present.
pub(crate) fn insert<T>(link: &mut Link<T>, value: T) -> bool
where
    T: Ord,
{
    match link {
        None => {
            *link = Some(Node::new_boxed(value));
            true
        }
        Some(node) => match value.cmp(&node.data) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Equal => false,
            Ordering::Greater => insert(&mut node.right, value),
        },
    }
}

/// Removes `value` from the subtree in `link` and returns it.
///
/// A node with at most one child is replaced in its slot by that child. A node with two children
/// keeps its place in the tree and takes over the value of its in-order successor (the minimum of
/// its right subtree), which is spliced out instead.
pub(crate) fn delete<T>(link: &mut Link<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let node = link.as_mut()?;
    match value.cmp(&node.data) {
        Ordering::Less => delete(&mut node.left, value),
        Ordering::Greater => delete(&mut node.right, value),
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            let successor = take_min(&mut node.right)?;
            Some(mem::replace(&mut node.data, successor))
        }
        Ordering::Equal => {
            let mut removed = link.take()?;
            *link = removed.left.take().or_else(|| removed.right.take());
            Some(removed.data)
        }
    }
}

/// Splices the leftmost node out of the subtree in `link` and returns its value. The leftmost
/// node has no left child so its right child takes over its slot.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    if link.as_ref()?.left.is_some() {
        return take_min(&mut link.as_mut()?.left);
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.data)
}

/// Moves every value out of the subtree in ascending order, freeing the nodes as it goes. Uses an
/// explicit stack so skewed trees don't exhaust the call stack.
pub(crate) fn into_sorted<T>(root: Link<T>, len: usize) -> Vec<T> {
    let mut sorted = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(mut node) = stack.pop() else {
            break;
        };
        current = node.right.take();
        sorted.push(node.data);
    }

    sorted
}

/// Unlinks every node without recursing so dropping a skewed tree can't overflow the stack.
pub(crate) fn drop_iteratively<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
