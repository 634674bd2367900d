use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Checks that the gradients of `nodes` are within `tolerance` of `expected`.
///
/// Panics with the offending index if a gradient differs too much or if the
/// lengths differ.
pub fn check_grads_near<T: Scalar>(graph: &Graph<T>, nodes: &[NodeId], expected: &[T], tolerance: T) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");
    for (i, (node, e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph.grad(*node);
        let diff = (actual - *e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}

/// Checks that the values of `nodes` are within `tolerance` of `expected`.
pub fn check_values_near<T: Scalar>(graph: &Graph<T>, nodes: &[NodeId], expected: &[T], tolerance: T) {
    assert_eq!(nodes.len(), expected.len(), "Value count mismatch");
    for (i, (node, e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = graph.value(*node);
        let diff = (actual - *e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}
