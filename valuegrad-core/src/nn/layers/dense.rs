use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::types::Scalar;
use rand::Rng;

/// A fully connected layer: `n_output` neurons reading the same `n_input` inputs.
///
/// Produces one output node per neuron, in neuron order.
#[derive(Debug, Clone)]
pub struct Dense<T: Scalar> {
    neurons: Vec<Neuron<T>>,
    n_input: usize,
}

impl<T: Scalar> Dense<T> {
    /// Creates a new dense layer.
    ///
    /// # Arguments
    ///
    /// * `graph` - Graph the parameters are created in.
    /// * `n_input` - Size of each input sample.
    /// * `n_output` - Number of neurons, i.e. size of each output sample.
    /// * `activation` - Activation shared by every neuron.
    /// * `rng` - Source for the default uniform `[-1, 1)` initialization.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        n_input: usize,
        n_output: usize,
        activation: Activation<T>,
        rng: &mut R,
    ) -> Result<Self, ValueGradError> {
        Self::with_init(graph, n_input, n_output, activation, Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        n_input: usize,
        n_output: usize,
        activation: Activation<T>,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ValueGradError> {
        let neurons = (0..n_output)
            .map(|_| Neuron::with_init(graph, n_input, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dense { neurons, n_input })
    }

    /// Builds a layer from existing neurons, which must all read `n_input` inputs.
    pub fn from_neurons(n_input: usize, neurons: Vec<Neuron<T>>) -> Result<Self, ValueGradError> {
        if let Some(bad) = neurons.iter().find(|n| n.n_input() != n_input) {
            return Err(ValueGradError::InputSizeMismatch {
                expected: n_input,
                actual: bad.n_input(),
                operation: "Dense::from_neurons".to_string(),
            });
        }
        Ok(Dense { neurons, n_input })
    }

    pub fn n_input(&self) -> usize {
        self.n_input
    }

    pub fn n_output(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }
}

impl<T: Scalar> Module<T> for Dense<T> {
    fn forward(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<Vec<NodeId>, ValueGradError> {
        if input.len() != self.n_input {
            return Err(ValueGradError::InputSizeMismatch {
                expected: self.n_input,
                actual: input.len(),
                operation: "Dense::forward".to_string(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, input))
            .collect()
    }

    fn children(&self) -> Vec<&dyn Module<T>> {
        self.neurons.iter().map(|n| n as &dyn Module<T>).collect()
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
