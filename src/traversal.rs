use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

/// The order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first: by increasing depth, left to right within a depth.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Yields values in ascending order.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

impl<T> Node<T> {
    /// Calls `visit` on every node of the subtree rooted here, in the given `order`. Each node is
    /// visited exactly once and the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into();
    /// let three = tree.find(&3).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// three.visit(Order::Post, |node| seen.push(*node.data()));
    /// assert_eq!(seen, [1, 4, 3]);
    /// ```
    pub fn visit<'a, F>(&'a self, order: Order, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        match order {
            Order::Level => visit_level(self, &mut visit),
            Order::Pre => visit_pre(self, &mut visit),
            Order::In => visit_in(self, &mut visit),
            Order::Post => visit_post(self, &mut visit),
        }
    }
}

fn visit_level<'a, T, F>(root: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

fn visit_pre<'a, T, F>(node: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    visit(node);
    if let Some(left) = node.left() {
        visit_pre(left, visit);
    }
    if let Some(right) = node.right() {
        visit_pre(right, visit);
    }
}

fn visit_in<'a, T, F>(node: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(left) = node.left() {
        visit_in(left, visit);
    }
    visit(node);
    if let Some(right) = node.right() {
        visit_in(right, visit);
    }
}

fn visit_post<'a, T, F>(node: &'a Node<T>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(left) = node.left() {
        visit_post(left, visit);
    }
    if let Some(right) = node.right() {
        visit_post(right, visit);
    }
    visit(node);
}

impl<T> Tree<T> {
    /// Calls `visit` on every node in the tree, in the given `order`. Does nothing on an empty
    /// tree.
    pub fn visit<'a, F>(&'a self, order: Order, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        if let Some(root) = self.root() {
            root.visit(order, visit);
        }
    }

    /// Collects the tree's values in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::{Order, Tree};
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into();
    ///
    /// assert_eq!(tree.values(Order::Level), [&5, &3, &8, &1, &4, &7, &9]);
    /// assert_eq!(tree.values(Order::Pre), [&5, &3, &1, &4, &8, &7, &9]);
    /// assert_eq!(tree.values(Order::In), [&1, &3, &4, &5, &7, &8, &9]);
    /// assert_eq!(tree.values(Order::Post), [&1, &4, &3, &7, &9, &8, &5]);
    /// ```
    pub fn values(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.visit(order, |node| values.push(node.data()));
        values
    }

    /// Values in breadth-first order. See [`Order::Level`].
    pub fn level_order(&self) -> Vec<&T> {
        self.values(Order::Level)
    }

    /// Values in ascending order. See [`Order::In`].
    pub fn inorder(&self) -> Vec<&T> {
        self.values(Order::In)
    }

    /// See [`Order::Pre`].
    pub fn preorder(&self) -> Vec<&T> {
        self.values(Order::Pre)
    }

    /// See [`Order::Post`].
    pub fn postorder(&self) -> Vec<&T> {
        self.values(Order::Post)
    }

    /// A lazy, ascending iterator over the tree's values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuild_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into();
    /// let doubled: Vec<_> = tree.iter().map(|x| x * 2).collect();
    ///
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`], created by [`Tree::iter`]. Keeps the path of unvisited
/// ancestors on an explicit stack.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
