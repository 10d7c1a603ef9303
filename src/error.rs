use thiserror::Error;

/// Failures for the few operations that have a precondition on their input.
///
/// Everything else on a [`Tree`][crate::Tree] is total: inserting a duplicate,
/// deleting or finding a missing key are no-ops rather than errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs at least one node.
    #[error("tree is empty")]
    Empty,

    /// The given node is not reachable from this tree's root.
    #[error("node is not reachable from this tree's root")]
    NodeNotInTree,

    /// Input handed to [`Tree::from_sorted`][crate::Tree::from_sorted] was not strictly ascending.
    #[error("input is not strictly ascending at index {index}")]
    Unsorted {
        /// Index of the first element that is not greater than its predecessor.
        index: usize,
    },
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
