// valuegrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Negates a node: `out = -a`.
pub fn neg_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = -graph.value(a);
    graph.push_op(value, BackwardOp::Neg(a))
}

pub(crate) fn neg_backward<T: Scalar>(out_grad: T) -> T {
    -out_grad
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
