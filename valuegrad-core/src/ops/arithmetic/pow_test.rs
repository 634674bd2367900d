use super::pow_op;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_and_backward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0);
    let out = pow_op(&mut graph, a, 3.0);
    assert_relative_eq!(graph.value(out), 8.0);
    assert_eq!(graph.op_tag(out), "^");
    assert_eq!(graph.operands(out), vec![a]);
    graph.backward(out);
    assert_relative_eq!(graph.grad(a), 12.0);
}

#[test]
fn test_pow_negative_exponent() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(4.0);
    let out = pow_op(&mut graph, a, -1.0);
    assert_relative_eq!(graph.value(out), 0.25);
    graph.backward(out);
    assert_relative_eq!(graph.grad(a), -1.0 / 16.0);
}

#[test]
fn test_pow_fractional_exponent_of_negative_base_is_nan() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(-4.0);
    let out = pow_op(&mut graph, a, 0.5);
    assert!(graph.value(out).is_nan());
}
