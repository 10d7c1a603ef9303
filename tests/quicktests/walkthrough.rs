use rebuild_bst::{Balance, Order, Tree, TreeError};

#[test]
fn build_skew_rebalance() {
    let mut tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into();
    assert_eq!(tree.inorder(), [&1, &3, &4, &5, &7, &8, &9]);
    assert!(tree.is_balanced());

    tree.insert(100);
    assert!(tree.is_balanced());

    tree.insert(101);
    assert!(!tree.is_balanced());

    tree.rebalance();
    assert_eq!(tree.inorder(), [&1, &3, &4, &5, &7, &8, &9, &100, &101]);
    assert!(tree.is_balanced());
}

#[test]
fn random_style_tour() {
    // Fifteen values in 1..=100 with repeats, like a demo run would generate.
    let input = [42, 7, 93, 7, 15, 64, 88, 3, 42, 51, 29, 100, 1, 76, 15];
    let mut tree: Tree<_> = input.into_iter().collect();
    assert_eq!(tree.len(), 12);
    assert_eq!(tree.balance(), Balance::Balanced(4));

    for x in [101, 102, 103, 104] {
        assert!(tree.insert(x));
    }
    assert_eq!(tree.balance(), Balance::Unbalanced);
    assert_eq!(tree.max_value(), Ok(&104));

    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(tree.len(), 16);
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.min_value(), Ok(&1));

    let level = tree.values(Order::Level);
    assert_eq!(level.first(), tree.root().map(|n| n.data()).as_ref());
    assert_eq!(tree.values(Order::Pre).len(), 16);
    assert_eq!(tree.values(Order::Post).last(), level.first());
}

#[test]
fn depth_and_height_on_a_chain() {
    let mut tree = Tree::new();
    for x in 0..10 {
        tree.insert(x);
    }

    assert_eq!(tree.height(), 9);
    for x in 0..10 {
        let node = tree.find(&x).unwrap();
        assert_eq!(tree.depth(node), Ok(x as usize));
        assert_eq!(node.height(), 9 - x as usize);
    }
}

#[test]
fn depth_rejects_nodes_from_other_trees() {
    let tree: Tree<_> = (0..10).collect();
    let copy = tree.clone();

    let node = copy.find(&3).unwrap();
    assert_eq!(tree.depth(node), Err(TreeError::NodeNotInTree));
    assert_eq!(copy.depth(node), tree.depth_of(&3).ok_or(TreeError::NodeNotInTree));
}

#[test]
fn pretty_print_after_rebalance() {
    let mut tree = Tree::new();
    for x in 1..=4 {
        tree.insert(x);
    }
    tree.rebalance();

    let expected = "\
│   ┌── 4
└── 3
    └── 2
        └── 1
";
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn strings() {
    let mut tree: Tree<String> = ["delta", "alpha", "charlie", "bravo"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(tree.min_value().map(String::as_str), Ok("alpha"));
    assert_eq!(tree.delete(&"charlie".to_string()).as_deref(), Some("charlie"));
    assert!(tree.iter().map(String::as_str).eq(["alpha", "bravo", "delta"]));
}

#[test]
fn large_balanced_tree_from_sorted() {
    let tree: Tree<u32> = Tree::from_sorted((0..100_000).collect()).unwrap();
    assert_eq!(tree.height(), 16);
    assert!(tree.is_balanced());
}

#[test]
fn skewed_tree_drops() {
    let mut tree = Tree::new();
    for x in 0..2_000u32 {
        tree.insert(x);
    }
    drop(tree);
}
