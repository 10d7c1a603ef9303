//! Walks through the tree's API on random input: build, inspect, skew with large inserts,
//! rebalance, inspect again.
//!
//! ```text
//! cargo run --example tour -- --seed 7 -vv
//! ```

use std::fmt::Display;

use anyhow::{bail, ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rebuild_bst::{Order, Tree};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tour", about = "Build, skew and rebalance a binary search tree")]
struct Cli {
    /// How many random values to draw (duplicates are dropped).
    #[arg(long, default_value_t = 15)]
    count: usize,

    /// Values are drawn from 1..=max.
    #[arg(long, default_value_t = 100)]
    max: u32,

    /// How many values above `max` to insert to skew the tree.
    #[arg(long, default_value_t = 4)]
    skew: u32,

    /// Seed for reproducible runs. Drawn from the OS when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    ensure!(cli.max > 0, "--max must be at least 1");
    let skew = skew_values(cli.max, cli.skew)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let input: Vec<u32> = (0..cli.count).map(|_| rng.gen_range(1..=cli.max)).collect();
    info!(?input, "drew input");

    println!("\n1: Create a binary search tree from {} random numbers", cli.count);
    let mut tree: Tree<_> = input.into_iter().collect();

    println!("\n2: Balanced? {}", tree.is_balanced());

    println!("\n3: Print out all elements in level, pre, post, and in order");
    print_orders(&tree);

    println!("\n4: Unbalance the tree by adding {} numbers > {}", cli.skew, cli.max);
    for x in skew {
        tree.insert(x);
    }

    println!("\n5: Balanced? {}", tree.is_balanced());

    println!("\n6: Balance the tree by calling rebalance");
    tree.rebalance();

    println!("\n7: Balanced? {}", tree.is_balanced());
    println!("\nBalanced tree:\n{tree}");

    println!("8: Print out all elements in level, pre, post, and in order");
    print_orders(&tree);

    Ok(())
}

/// The `skew` values just above `max`, which all land on the rightmost branch.
fn skew_values(max: u32, skew: u32) -> Result<impl Iterator<Item = u32>> {
    let Some(last) = max.checked_add(skew) else {
        bail!("--max plus --skew must fit in a u32");
    };
    Ok((max..last).map(|x| x + 1))
}

fn print_orders<T: Display>(tree: &Tree<T>) {
    for (name, order) in [
        ("Level order", Order::Level),
        ("Preorder", Order::Pre),
        ("Postorder", Order::Post),
        ("Inorder", Order::In),
    ] {
        println!("\n{name} traversal:");
        tree.visit(order, |node| print!("{} ", node.data()));
        println!();
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
