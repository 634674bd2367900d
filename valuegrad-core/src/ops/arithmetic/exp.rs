// valuegrad-core/src/ops/arithmetic/exp.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Exponential of a node: `out = e^a`.
pub fn exp_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = graph.value(a).exp();
    graph.push_op(value, BackwardOp::Exp(a))
}

/// Local gradient of `e^a` reuses the forward output: `g * out`.
pub(crate) fn exp_backward<T: Scalar>(out_value: T, out_grad: T) -> T {
    out_grad * out_value
}
