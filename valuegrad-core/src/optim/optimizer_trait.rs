use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::types::Scalar;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer<T: Scalar> {
    /// Performs a single optimization step.
    ///
    /// Applies the update rule to the value of every managed parameter, using
    /// the gradients accumulated in `graph` by the last `backward()` calls.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ValueGradError` otherwise.
    fn step(&mut self, graph: &mut Graph<T>) -> Result<(), ValueGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// This is typically called before the backward pass in a new training iteration
    /// to prevent gradients from accumulating across iterations.
    fn zero_grad(&self, graph: &mut Graph<T>) {
        graph.zero_grad(self.parameters().iter().copied());
    }

    /// Parameters updated by `step`, in the order they were given.
    fn parameters(&self) -> &[NodeId];

    fn learning_rate(&self) -> f64;

    /// Changes the learning rate used by subsequent steps.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if `lr` is negative or not finite.
    fn set_learning_rate(&mut self, lr: f64) -> Result<(), ValueGradError>;
}
