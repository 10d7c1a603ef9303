//! A Binary Search Tree that is balanced on demand rather than on every write.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, so the shape of the tree matters. A [`Tree`] built from a
//! collection starts out with height `⌊lg N⌋` by always rooting a subtree at the middle of its
//! sorted values. Inserts and deletes don't rotate anything to preserve that shape. Instead
//! [`Tree::is_balanced`] reports whether any node's subtrees differ in height by more than one,
//! and [`Tree::rebalance`] rebuilds the whole tree from its values in sorted order.
//!
//! # Examples
//!
//! ```
//! use rebuild_bst::{Order, Tree};
//!
//! let mut tree: Tree<_> = vec![8, 3, 5, 3, 1].into();
//!
//! // Duplicates are dropped on construction and ignored on insert.
//! assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
//! assert!(!tree.insert(5));
//!
//! assert_eq!(tree.find(&3).map(|n| n.data()), Some(&3));
//! assert_eq!(tree.delete(&3), Some(3));
//! assert!(tree.find(&3).is_none());
//!
//! assert_eq!(tree.values(Order::Level), [&5, &1, &8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod display;
mod error;
mod node;
mod traversal;
mod tree;


pub use balance::Balance;
pub use error::{TreeError, TreeResult};
pub use node::Node;
pub use traversal::{Iter, Order};
pub use tree::Tree;
