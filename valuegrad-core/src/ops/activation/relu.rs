use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

// --- Forward Operation ---

/// Rectified Linear Unit: `out = max(0, a)`.
pub fn relu_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = graph.value(a).max(T::zero());
    graph.push_op(value, BackwardOp::Relu(a))
}

// --- Backward Operation ---

/// Gradient passes through only where the output is strictly positive.
/// At `a == 0` the output is 0, so the subgradient used is 0.
pub(crate) fn relu_backward<T: Scalar>(out_value: T, out_grad: T) -> T {
    if out_value > T::zero() {
        out_grad
    } else {
        T::zero()
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
