//! Basic example: build an overlap index over a small schedule and probe it.
//!
//! Run with: cargo run --example overlap_scan
//! Set RUST_LOG=debug to watch the construction pipeline.

use stabix::{Interval, IntervalTree, Span};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Booking windows on a shared resource, in hours.
    let bookings = [
        ("standup", 9.0, 9.5),
        ("design review", 9.0, 11.0),
        ("focus block", 10.0, 13.0),
        ("lunch", 12.0, 13.0),
        ("1:1", 15.0, 15.5),
    ];

    let tree = IntervalTree::new(
        bookings
            .iter()
            .map(|&(name, start, end)| Interval::new(start, end, name))
            .collect::<Result<Vec<_>, _>>()?,
    );

    if let Some(root) = tree.root() {
        println!(
            "indexed {} bookings: {} endpoint leaves, depth {}",
            tree.len(),
            root.leaf_count(),
            root.depth()
        );
    }

    for query in [Span::point(9.25), Span::new(10.5, 12.5), Span::point(14.0)] {
        let hits = tree.find_intersecting(query);
        let names: Vec<&str> = hits.iter().map(|hit| *hit.payload()).collect();
        println!("{query}: {names:?}");
    }

    Ok(())
}
