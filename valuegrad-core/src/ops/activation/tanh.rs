use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Hyperbolic tangent: `out = tanh(a)`.
pub fn tanh_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = graph.value(a).tanh();
    graph.push_op(value, BackwardOp::Tanh(a))
}

/// Local gradient expressed through the output: `g * (1 - out²)`.
pub(crate) fn tanh_backward<T: Scalar>(out_value: T, out_grad: T) -> T {
    out_grad * (T::one() - out_value * out_value)
}
