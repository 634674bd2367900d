use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;
use crate::utils::{get_values, ValueContainer};

/// The base trait for all neural network modules (neurons, layers, containers).
///
/// A module owns handles to its parameter nodes; the nodes themselves live in
/// the [`Graph`] passed to every call. Parameters must be created in the graph
/// before the training loop's checkpoint so that rewinding keeps them.
pub trait Module<T: Scalar>: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph the module's parameters live in. New nodes are recorded there.
    /// * `input`: Input nodes, one per input feature.
    ///
    /// # Returns
    /// One output node per output feature, or a `ValueGradError` if the input
    /// does not have the expected width.
    fn forward(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<Vec<NodeId>, ValueGradError>;

    /// Parameters held directly by this module, excluding children.
    fn own_parameters(&self) -> ValueContainer {
        ValueContainer::empty()
    }

    /// Returns a vector of direct child `Module`s.
    /// For modules that do not contain other modules, this should return an empty vector.
    fn children(&self) -> Vec<&dyn Module<T>> {
        Vec::new()
    }

    /// All learnable parameters: own parameters first, then those of each child
    /// in order. Each node appears once even if it is shared.
    fn parameters(&self) -> Vec<NodeId> {
        let mut containers = vec![self.own_parameters()];
        for child in self.children() {
            containers.push(ValueContainer::from(child.parameters()));
        }
        get_values(&ValueContainer::Sequence(containers))
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self, graph: &mut Graph<T>) {
        graph.zero_grad(self.parameters());
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Runs `module.forward` on every item of `batch`, in order.
///
/// Stops at the first item that fails.
pub fn run_batch<T, M>(
    module: &M,
    graph: &mut Graph<T>,
    batch: &[Vec<NodeId>],
) -> Result<Vec<Vec<NodeId>>, ValueGradError>
where
    T: Scalar,
    M: Module<T> + ?Sized,
{
    batch.iter().map(|item| module.forward(graph, item)).collect()
}
