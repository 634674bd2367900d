use super::sub_op;
use crate::graph::Graph;

#[test]
fn test_sub_forward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(8.0);
    let out = sub_op(&mut graph, a, b);
    assert_eq!(graph.value(out), -3.0);
    assert_eq!(graph.op_tag(out), "-");
}

#[test]
fn test_sub_backward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(5.0);
    let b = graph.leaf(8.0);
    let out = sub_op(&mut graph, a, b);
    graph.backward(out);
    assert_eq!(graph.grad(a), 1.0);
    assert_eq!(graph.grad(b), -1.0);
}

#[test]
fn test_sub_self_cancels_gradient() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0);
    let out = sub_op(&mut graph, a, a);
    assert_eq!(graph.value(out), 0.0);
    graph.backward(out);
    assert_eq!(graph.grad(a), 0.0);
}
