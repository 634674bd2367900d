use crate::autograd::topological_sort;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

impl<T: Scalar> Graph<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// Seeds `grad(root) = 1` (d root / d root), orders every ancestor of `root`
    /// topologically, then invokes each node's backward rule from `root` back to
    /// the leaves. Every node's gradient is complete before its own rule runs.
    ///
    /// Gradients accumulate: calling `backward` twice without zeroing doubles the
    /// gradients of the ancestors. The root's own gradient is overwritten by the seed.
    ///
    /// `root` does not have to be a final loss: calling this on an intermediate
    /// node seeds the pass from that node and only reaches its ancestors.
    pub fn backward(&mut self, root: NodeId) {
        let order = topological_sort(self, root);
        log::debug!(
            "Backward from node {} over {} of {} nodes",
            root.0,
            order.len(),
            self.len()
        );

        self.grads[root.0] = T::one();

        for node in order.iter().rev() {
            // Disjoint field borrows: rules are read while gradients are written.
            self.ops[node.0].propagate(*node, &self.values, &mut self.grads);
        }
    }

    /// Returns every ancestor of `root` (including `root`) in topological order.
    pub fn topological_order(&self, root: NodeId) -> Vec<NodeId> {
        topological_sort(self, root)
    }

    /// Resets the gradient of each given node to zero.
    pub fn zero_grad<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for node in nodes {
            self.grads[node.0] = T::zero();
        }
    }

    /// Resets the gradient of every node of the graph to zero.
    pub fn zero_grad_all(&mut self) {
        for grad in self.grads.iter_mut() {
            *grad = T::zero();
        }
    }
}
