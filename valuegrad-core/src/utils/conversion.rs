use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Creates one leaf per number, in order.
pub fn from_slice<T: Scalar>(graph: &mut Graph<T>, values: &[T]) -> Vec<NodeId> {
    values.iter().map(|&value| graph.leaf(value)).collect()
}

/// Creates one leaf per number of each row, keeping the row structure.
pub fn from_matrix<T: Scalar>(graph: &mut Graph<T>, rows: &[Vec<T>]) -> Vec<Vec<NodeId>> {
    rows.iter().map(|row| from_slice(graph, row)).collect()
}

/// Reads back the values of a list of nodes.
pub fn values_of<T: Scalar>(graph: &Graph<T>, nodes: &[NodeId]) -> Vec<T> {
    nodes.iter().map(|&node| graph.value(node)).collect()
}
