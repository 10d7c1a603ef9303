use rebuild_bst::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

/// The sorted, duplicate-free contents a tree built from `xs` should hold.
fn expected(xs: &[i8]) -> Vec<i8> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Whether a sequence is strictly ascending.
fn strictly_ascending<T: Ord>(xs: &[T]) -> bool {
    xs.windows(2).all(|pair| pair[0] < pair[1])
}

quickcheck::quickcheck! {
    fn construction_sorts_and_dedups(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();

        inorder == expected(&xs) && tree.len() == inorder.len() && tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn built_height_is_floor_log2(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        match tree.len() {
            0 => tree.height() == -1,
            n => tree.height() == n.ilog2() as isize,
        }
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x).map(|n| n.data()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before: Vec<i8> = tree.iter().copied().collect();

        let none_inserted = xs.iter().all(|x| !tree.insert(*x));
        none_inserted && tree.iter().copied().eq(before)
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = expected(&xs);
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && tree.iter().copied().eq(still_present.iter().copied())
            && strictly_ascending(&tree.inorder())
    }
}

quickcheck::quickcheck! {
    fn every_order_visits_each_value_once(xs: Vec<i8>, extra: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.into_iter().collect();
        for x in extra {
            tree.insert(x);
        }
        let sorted: Vec<&i8> = tree.inorder();

        [Order::Level, Order::Pre, Order::Post].into_iter().all(|order| {
            let mut values = tree.values(order);
            values.sort();
            values == sorted
        }) && sorted.len() == tree.len()
    }
}

quickcheck::quickcheck! {
    fn skew_then_rebalance(xs: Vec<i8>) -> bool {
        let mut tree: Tree<i16> = xs.into_iter().map(i16::from).collect();
        let balanced_at_start = tree.is_balanced();

        // Values above every i8 always extend the rightmost chain.
        for x in 200..204 {
            tree.insert(x);
        }
        let skewed = !tree.is_balanced();
        let before: Vec<i16> = tree.iter().copied().collect();

        tree.rebalance();
        balanced_at_start && skewed && tree.is_balanced() && tree.iter().copied().eq(before)
    }
}
