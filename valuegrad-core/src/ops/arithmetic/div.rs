// valuegrad-core/src/ops/arithmetic/div.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Divides two nodes: `out = a / b`.
///
/// Division by a zero-valued node is not trapped: the result is `±inf` or
/// `NaN` following IEEE-754, and so are the gradients.
pub fn div_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> NodeId {
    let value = graph.value(a) / graph.value(b);
    graph.push_op(value, BackwardOp::Div(a, b))
}

/// Local gradients of `a / b`: `(g / b, g * (-a / b²))`.
pub(crate) fn div_backward<T: Scalar>(a_value: T, b_value: T, out_grad: T) -> (T, T) {
    (
        out_grad / b_value,
        out_grad * (-a_value / (b_value * b_value)),
    )
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
