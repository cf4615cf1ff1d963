// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives every Grove engine through a short session and prints its layout.
//!
//! Capacity and depth rejections are logged through `tracing`; set
//! `RUST_LOG=debug` to also see search misses.
//!
//! Run:
//! - `RUST_LOG=warn cargo run -p grove_demos --example walkthrough`

use grove_graph::Graph;
use grove_layout::Layout;
use grove_linear::{BoundedQueue, BoundedStack};
use grove_tree::{AvlTree, BinarySearchTree};
use grove_trie::Trie;
use tracing_subscriber::EnvFilter;

fn print_layout<L: std::fmt::Debug>(name: &str, layout: &Layout<L>) {
    println!("{name}: {} nodes, {} edges", layout.nodes.len(), layout.edges.len());
    for node in &layout.nodes {
        let c = node.center();
        let flag = if node.marks.is_found() { " (found)" } else { "" };
        println!("  {:?} at ({:.1}, {:.1}){flag}", node.label, c.x, c.y);
    }
    if let Some(bounds) = layout.bounding_box() {
        println!("  bounds {bounds:?}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut stack = BoundedStack::new();
    let pushed = stack.push_all(1..=10);
    println!("stack: pushed {pushed} of 10, popped {:?}", stack.pop());
    stack.search(4);
    for plate in stack.layout() {
        println!("  plate {} at {:?} marks {:?}", plate.value, plate.rect, plate.marks);
    }

    let mut queue = BoundedQueue::new();
    queue.enqueue_all([3, 1, 4, 1, 5, 9, 2, 6]);
    println!("queue: dequeued {:?}", queue.dequeue());
    queue.search(5);
    for cell in queue.layout() {
        let link = cell.link.map_or(String::from("none"), |r| format!("{r:?}"));
        println!("  cell {} at {:?} link {link}", cell.value, cell.circle.center);
    }

    let mut bst = BinarySearchTree::new();
    bst.insert_all([50, 30, 70, 20, 40, 60, 80, 10, 5]);
    bst.search(40);
    bst.reveal_all();
    print_layout("bst", &bst.layout());

    let mut avl = AvlTree::new();
    for value in [10, 20, 30, 40, 50, 25] {
        match avl.insert(value) {
            Ok(done) => println!("avl: {value} -> {} rotations", done.rotations.len()),
            Err(err) => println!("avl: {err}"),
        }
    }
    print_layout("avl", &avl.layout());

    let mut trie = Trie::new();
    trie.insert_all(["cat", "car", "cart", "dog", "dot"]);
    println!("trie: search(\"tac\") = {}", trie.search("tac"));
    println!("trie: prefix \"do\" = {:?}", trie.search_prefix("do"));
    trie.scroll_lines(2);
    println!("trie: handle {:?}", trie.scrollbar_handle());
    print_layout("trie", &trie.layout());

    let mut graph = Graph::new();
    graph.add_nodes([1, 2, 3, 4, 5]);
    for (start, end) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (1, 9)] {
        if let Err(err) = graph.add_edge(start, end) {
            println!("graph: {err}");
        }
    }
    graph.search(3);
    print_layout("graph", &graph.layout());
}
