use crate::node::Node;

/// Outcome of checking a subtree for height balance.
///
/// A subtree is balanced when, at every node in it, the heights of the left and right subtrees
/// differ by at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    /// The subtree is balanced. Carries the number of levels in it (one more than its
    /// [`height`][Node::height]), so an empty subtree is `Balanced(0)` and a single leaf is
    /// `Balanced(1)`.
    Balanced(usize),
    /// Some node in the subtree has children whose heights differ by more than one.
    Unbalanced,
}

impl Balance {
    /// Whether this is [`Balance::Balanced`].
    pub fn is_balanced(self) -> bool {
        matches!(self, Self::Balanced(_))
    }

    /// The height of a balanced subtree, counted in edges like
    /// [`Tree::height`][crate::Tree::height]: -1 when empty, 0 for a single leaf. `None` when
    /// unbalanced.
    pub fn height(self) -> Option<isize> {
        match self {
            Self::Balanced(levels) => Some(levels as isize - 1),
            Self::Unbalanced => None,
        }
    }
}

/// Checks the subtree rooted at `node` in one bottom-up pass, stopping at the first node that
/// breaks balance.
pub(crate) fn check<T>(node: Option<&Node<T>>) -> Balance {
    let Some(node) = node else {
        return Balance::Balanced(0);
    };
    let Balance::Balanced(left) = check(node.left()) else {
        return Balance::Unbalanced;
    };
    let Balance::Balanced(right) = check(node.right()) else {
        return Balance::Unbalanced;
    };

    if left.abs_diff(right) > 1 {
        Balance::Unbalanced
    } else {
        Balance::Balanced(left.max(right) + 1)
    }
}
