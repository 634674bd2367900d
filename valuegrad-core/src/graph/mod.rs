//! # Computation Graph (`graph`)
//!
//! The arena every scalar node lives in. A [`Graph`] owns the values, gradients,
//! backward rules and labels of all nodes created in it; client code only ever
//! holds [`NodeId`] handles.
//!
//! ## Structure:
//!
//! - `mod.rs`: the arena itself, node construction and field accessors.
//! - `autograd_methods.rs`: `backward`, `zero_grad` and traversal helpers.
//! - `op_methods.rs`: convenience methods (`graph.add(a, b)`, `graph.tanh(x)`, ...)
//!   delegating to the `ops` module.
//! - `display.rs`: node rendering and computation-graph printing.
//!
//! Nodes are never removed individually. A training loop takes a [`Checkpoint`]
//! after creating its parameters and [`Graph::rewind`]s to it once a forward /
//! backward / step cycle is over, so each example builds its graph from scratch
//! while parameters keep their values.

use crate::autograd::BackwardOp;
use crate::error::ValueGradError;
use crate::types::Scalar;

pub mod autograd_methods;
pub mod display;
pub mod op_methods;

pub use display::NodeView;

/// Opaque handle to a node of a [`Graph`].
///
/// Handles are plain indices: they are `Copy`, hashable and ordered by creation.
/// A handle is only meaningful for the graph that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Marks the arena length at some point in time. See [`Graph::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(pub(crate) usize);

/// Arena-backed scalar computation graph.
///
/// Storage is one vector per node field, all indexed by `NodeId`. Keeping the
/// backward rules apart from the gradients lets the backward driver read a rule
/// while accumulating into other nodes' gradients.
#[derive(Debug, Clone, Default)]
pub struct Graph<T: Scalar> {
    pub(crate) values: Vec<T>,
    pub(crate) grads: Vec<T>,
    pub(crate) ops: Vec<BackwardOp<T>>,
    pub(crate) labels: Vec<Option<String>>,
}

impl<T: Scalar> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            values: Vec::new(),
            grads: Vec::new(),
            ops: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            values: Vec::with_capacity(capacity),
            grads: Vec::with_capacity(capacity),
            ops: Vec::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if `id` refers to a live node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.values.len()
    }

    /// Creates a leaf node (input, constant or parameter) holding `value`.
    ///
    /// Leaves have no operands, an empty operator tag and a zero gradient.
    pub fn leaf(&mut self, value: T) -> NodeId {
        self.push_node(value, BackwardOp::Leaf, None)
    }

    /// Creates a leaf node carrying a debug label.
    pub fn leaf_labeled(&mut self, value: T, label: impl Into<String>) -> NodeId {
        self.push_node(value, BackwardOp::Leaf, Some(label.into()))
    }

    /// Records the output of an operation. Used by every function of the `ops` module.
    ///
    /// Operand handles captured in `op` must already exist, which keeps the
    /// operand relation acyclic.
    pub(crate) fn push_op(&mut self, value: T, op: BackwardOp<T>) -> NodeId {
        debug_assert!(
            op.inputs().iter().all(|input| self.contains(*input)),
            "operation {} references a node outside of the graph",
            op.tag()
        );
        self.push_node(value, op, None)
    }

    fn push_node(&mut self, value: T, op: BackwardOp<T>, label: Option<String>) -> NodeId {
        let id = NodeId(self.values.len());
        self.values.push(value);
        self.grads.push(T::zero());
        self.ops.push(op);
        self.labels.push(label);
        id
    }

    // --- Accessors ---

    /// Forward value of a node.
    pub fn value(&self, id: NodeId) -> T {
        self.values[id.0]
    }

    /// Overwrites the value of a node (parameter updates).
    ///
    /// Nodes already derived from `id` keep the value they were computed with;
    /// the change is only seen by graphs built afterwards.
    pub fn set_value(&mut self, id: NodeId, value: T) {
        self.values[id.0] = value;
    }

    /// Accumulated gradient of a node.
    pub fn grad(&self, id: NodeId) -> T {
        self.grads[id.0]
    }

    pub fn set_grad(&mut self, id: NodeId, grad: T) {
        self.grads[id.0] = grad;
    }

    /// Backward rule (operator kind and captured operands) of a node.
    pub fn op(&self, id: NodeId) -> &BackwardOp<T> {
        &self.ops[id.0]
    }

    /// Human-readable tag of the operation that produced the node, empty for leaves.
    pub fn op_tag(&self, id: NodeId) -> String {
        self.ops[id.0].tag()
    }

    /// Direct operands of a node as a set: each distinct operand once, in operand order.
    pub fn operands(&self, id: NodeId) -> Vec<NodeId> {
        self.ops[id.0].operands()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels[id.0].as_deref()
    }

    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) {
        self.labels[id.0] = Some(label.into());
    }

    /// Returns a view of the node implementing `Display`.
    pub fn node(&self, id: NodeId) -> NodeView<'_, T> {
        NodeView::new(self, id)
    }

    // --- Arena lifecycle ---

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.values.len())
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Nodes created before the checkpoint (typically parameters) keep their
    /// values and gradients. Handles to discarded nodes become invalid.
    ///
    /// # Errors
    /// Returns `ValueGradError::InvalidCheckpoint` if the checkpoint lies beyond
    /// the current end of the arena (e.g. it was taken before an earlier, deeper rewind).
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), ValueGradError> {
        let len = self.values.len();
        if checkpoint.0 > len {
            return Err(ValueGradError::InvalidCheckpoint {
                checkpoint: checkpoint.0,
                len,
            });
        }
        log::trace!("Rewinding graph from {} to {} nodes", len, checkpoint.0);
        self.values.truncate(checkpoint.0);
        self.grads.truncate(checkpoint.0);
        self.ops.truncate(checkpoint.0);
        self.labels.truncate(checkpoint.0);
        Ok(())
    }

    /// Iterates over the handles of every node, in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.values.len()).map(NodeId)
    }
}
