use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// Draws the tree sideways, one value per line. Right subtrees are drawn above their parent and
/// left subtrees below it, so reading from the bottom up gives the values in ascending order.
///
/// For a tree holding 1, 2 and 3:
///
/// ```
/// use rebuild_bst::Tree;
///
/// let tree: Tree<_> = vec![1, 2, 3].into();
/// assert_eq!(tree.to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_node<T>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    if let Some(right) = node.right() {
        let branch = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{prefix}{branch}"), false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{prefix}{connector}{}", node.data())?;

    if let Some(left) = node.left() {
        let branch = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{prefix}{branch}"), true)?;
    }
    Ok(())
}
