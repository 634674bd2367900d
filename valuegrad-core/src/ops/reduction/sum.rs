use crate::autograd::BackwardOp;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Sums a list of nodes, plus an optional additive seed node.
///
/// Built as a single node whose operand set is every input (and the seed),
/// rather than a chain of binary additions. During backward the upstream
/// gradient is fanned out unchanged to every summand.
///
/// An empty list with no seed produces a node of value 0.
///
/// # Arguments
/// * `graph`: The graph to record into.
/// * `values`: Summands. A node may appear several times; it then receives one
///   contribution per occurrence.
/// * `init`: Optional seed added to the sum (e.g. a neuron bias).
pub fn sum_op<T: Scalar>(graph: &mut Graph<T>, values: &[NodeId], init: Option<NodeId>) -> NodeId {
    let mut total = init.map_or_else(T::zero, |seed| graph.value(seed));
    for value in values {
        total += graph.value(*value);
    }
    graph.push_op(
        total,
        BackwardOp::Sum {
            inputs: values.to_vec(),
            init,
        },
    )
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
