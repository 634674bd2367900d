use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Logistic sigmoid: `out = 1 / (1 + e^-a)`.
pub fn sigmoid_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = T::one() / (T::one() + (-graph.value(a)).exp());
    graph.push_op(value, BackwardOp::Sigmoid(a))
}

/// Local gradient expressed through the output: `g * out * (1 - out)`.
pub(crate) fn sigmoid_backward<T: Scalar>(out_value: T, out_grad: T) -> T {
    out_grad * out_value * (T::one() - out_value)
}
