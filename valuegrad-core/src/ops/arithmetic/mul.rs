// valuegrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Multiplies two nodes: `out = a * b`.
pub fn mul_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let value = graph.value(a) * graph.value(b);
    graph.push_op(value, BackwardOp::Mul(a, b))
}

/// Local gradients of `a * b`: each operand receives `g` times the other operand's value.
pub(crate) fn mul_backward<T: Scalar>(a_value: T, b_value: T, out_grad: T) -> (T, T) {
    (out_grad * b_value, out_grad * a_value)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
