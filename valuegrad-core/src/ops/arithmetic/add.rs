// valuegrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

// --- Forward Operation ---

/// Adds two nodes: `out = a + b`.
///
/// Returns the handle of a new node recording both operands.
pub fn add_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let value = graph.value(a) + graph.value(b);
    graph.push_op(value, BackwardOp::Add(a, b))
}

// --- Backward Operation ---

/// Local gradients of `a + b`: the upstream gradient flows unchanged into both operands.
pub(crate) fn add_backward<T: Scalar>(out_grad: T) -> (T, T) {
    (out_grad, out_grad)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
