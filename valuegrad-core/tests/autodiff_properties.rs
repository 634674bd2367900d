use approx::assert_relative_eq;
use valuegrad_core::autograd::{check_grad, GradCheckError};
use valuegrad_core::utils::{from_slice, values_of};
use valuegrad_core::{get_values, Graph, NodeId, ValueContainer, ValueGradError};

#[test]
fn test_reference_scenario() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.0);
    let c = graph.leaf(10.0);
    let e = graph.mul(a, b);
    let d = graph.add(e, c);
    let f = graph.leaf(-2.0);
    let loss = graph.mul(d, f);
    graph.backward(loss);

    assert_eq!(graph.value(loss), -8.0);
    let nodes = [loss, f, d, c, e, a, b];
    let expected = [1.0, 4.0, -2.0, -2.0, -2.0, 6.0, -4.0];
    for (node, grad) in nodes.iter().zip(expected) {
        assert_eq!(graph.grad(*node), grad);
    }
}

#[test]
fn test_square_through_shared_operand() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(-1.5);
    let sq = graph.mul(a, a);
    assert_eq!(graph.operands(sq), vec![a]);
    graph.backward(sq);
    assert_eq!(graph.grad(a), 2.0 * -1.5);
}

#[test]
fn test_sum_and_mean_gradients() -> Result<(), ValueGradError> {
    let mut graph = Graph::<f64>::new();
    let xs = from_slice(&mut graph, &[1.0, 2.0, 3.0]);
    let total = graph.sum(&xs);
    graph.backward(total);
    assert!(xs.iter().all(|&x| graph.grad(x) == 1.0));

    graph.zero_grad_all();
    let ys = from_slice(&mut graph, &[4.0, 5.0, 6.0, 7.0]);
    let mean = graph.mean(&ys)?;
    assert_eq!(graph.value(mean), 5.5);
    assert_eq!(graph.op_tag(mean), "mean (4 values)");
    graph.backward(mean);
    assert!(ys.iter().all(|&y| graph.grad(y) == 0.25));
    assert!(xs.iter().all(|&x| graph.grad(x) == 0.0));
    Ok(())
}

#[test]
fn test_gradients_match_finite_differences() -> Result<(), GradCheckError> {
    // Every operator at once: mean(sigmoid(a*b), tanh(a/c), exp(-b)^2, relu(c - a)) + sum(a, b, seed = c)
    check_grad(
        |g: &mut Graph<f64>, x: &[NodeId]| {
            let (a, b, c) = (x[0], x[1], x[2]);
            let ab = g.mul(a, b);
            let s = g.sigmoid(ab);
            let ratio = g.div(a, c);
            let t = g.tanh(ratio);
            let nb = g.neg(b);
            let e = g.exp(nb);
            let e2 = g.pow(e, 2.0);
            let diff = g.sub(c, a);
            let r = g.relu(diff);
            let m = g.mean(&[s, t, e2, r])?;
            let seeded = g.sum_with_init(&[a, b], c);
            let id = g.identity(seeded);
            Ok(g.add(m, id))
        },
        &[0.3, -0.8, 1.7],
        1e-6,
        1e-6,
    )
}

#[test]
fn test_division_by_zero_is_ieee() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(1.0);
    let zero = graph.leaf(0.0);
    let q = graph.div(a, zero);
    assert!(graph.value(q).is_infinite());
    graph.backward(q);
    assert!(graph.grad(a).is_infinite());
    assert!(!graph.grad(zero).is_finite());
}

#[test]
fn test_flattening_nested_parameter_containers() {
    let mut graph = Graph::<f64>::new();
    let xs = from_slice(&mut graph, &[1.0, 2.0, 3.0]);
    let container = ValueContainer::record([
        ("weights", ValueContainer::from(xs.clone())),
        ("bias", ValueContainer::from(xs[0])),
        ("extra", ValueContainer::from(vec![vec![xs[2]], vec![xs[1]]])),
    ]);
    let flat = get_values(&container);
    assert_eq!(flat, xs);
    assert_eq!(values_of(&graph, &flat), vec![1.0, 2.0, 3.0]);
    // Restartable: a second pass yields the same sequence.
    assert_eq!(container.iter().collect::<Vec<_>>(), flat);
}

#[test]
fn test_print_duplicates_shared_subgraphs() {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf_labeled(0.0, "x");
    let y = graph.exp(x);
    let s = graph.add(x, y);
    let rendered = graph.render_computation_graph(s);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Value(1.0 +)",
            "  Value(0.0 (x))",
            "  Value(1.0 e^x)",
            "    Value(0.0 (x))",
        ]
    );
    assert_relative_eq!(graph.value(s), 1.0);
}
