use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Identity activation: a new node with the same value as `a`.
///
/// Unlike returning `a` itself, this records a node in the graph, so the
/// output carries its own gradient and tag.
pub fn identity_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> NodeId {
    let value = graph.value(a);
    graph.push_op(value, BackwardOp::Identity(a))
}

pub(crate) fn identity_backward<T: Scalar>(out_grad: T) -> T {
    out_grad
}
