// valuegrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Subtracts two nodes: `out = a - b`.
pub fn sub_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let value = graph.value(a) - graph.value(b);
    graph.push_op(value, BackwardOp::Sub(a, b))
}

/// Local gradients of `a - b`: `(g, -g)`.
pub(crate) fn sub_backward<T: Scalar>(out_grad: T) -> (T, T) {
    (out_grad, -out_grad)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
