// examples/computation_graph.rs
//!
//! Builds the expression `L = (a * b + c) * f`, runs the backward pass and
//! prints every node with its gradient.

use valuegrad_core::Graph;

fn main() {
    env_logger::init();

    let mut graph = Graph::<f64>::new();
    let a = graph.leaf_labeled(2.0, "a");
    let b = graph.leaf_labeled(-3.0, "b");
    let c = graph.leaf_labeled(10.0, "c");
    let e = graph.mul(a, b);
    graph.set_label(e, "e");
    let d = graph.add(e, c);
    graph.set_label(d, "d");
    let f = graph.leaf_labeled(-2.0, "f");
    let loss = graph.mul(d, f);
    graph.set_label(loss, "L");

    println!("Forward pass:");
    graph.print_computation_graph(loss);

    graph.backward(loss);
    println!("\nAfter backward:");
    graph.print_computation_graph(loss);

    println!("\nTopological order:");
    for id in graph.topological_order(loss) {
        println!("  {}", graph.node(id));
    }
}
