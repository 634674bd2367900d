//! Turns batches of plain numbers into graph leaves.

use valuegrad_core::utils::from_slice;
use valuegrad_core::{Graph, NodeId, Scalar};

/// Input and target leaves for every item of a batch, in batch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBatch {
    pub inputs: Vec<Vec<NodeId>>,
    pub targets: Vec<Vec<NodeId>>,
}

impl NodeBatch {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Records each `(features, targets)` pair of `batch` as fresh leaves.
///
/// Leaves are created after the caller's parameters, so they are discarded
/// by the next `rewind` to a checkpoint taken before the batch.
pub fn batch_to_nodes<T: Scalar>(graph: &mut Graph<T>, batch: &[(Vec<T>, Vec<T>)]) -> NodeBatch {
    let mut inputs = Vec::with_capacity(batch.len());
    let mut targets = Vec::with_capacity(batch.len());
    for (features, target) in batch {
        inputs.push(from_slice(graph, features));
        targets.push(from_slice(graph, target));
    }
    NodeBatch { inputs, targets }
}
