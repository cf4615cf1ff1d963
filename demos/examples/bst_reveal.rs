// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Steps through a BST reveal the way a frame loop would.
//!
//! Run:
//! - `cargo run -p grove_demos --example bst_reveal`

use grove_tree::BinarySearchTree;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bst = BinarySearchTree::new();
    let added = bst.insert_all([8, 4, 12, 2, 6, 10, 14]);
    tracing::info!(added, total = bst.reveal_total(), "tree built");

    bst.start_reveal();
    loop {
        let layout = bst.layout();
        println!(
            "step {:>2}: {} nodes, {} edges visible",
            bst.reveal_step(),
            layout.nodes.len(),
            layout.edges.len()
        );
        if !bst.tick() {
            break;
        }
    }

    // Scrubbing back shows a partial tree again without touching its shape.
    bst.scrub_reveal(3);
    let layout = bst.layout();
    for node in &layout.nodes {
        println!("  {} at {:?}", node.label, node.center());
    }
}
