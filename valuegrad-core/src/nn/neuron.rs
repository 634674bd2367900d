use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::types::Scalar;
use crate::utils::ValueContainer;
use rand::Rng;

/// A single artificial neuron: `activation(sum_i(w_i * x_i) + bias)`.
#[derive(Debug, Clone)]
pub struct Neuron<T: Scalar> {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation<T>,
}

impl<T: Scalar> Neuron<T> {
    /// Creates a neuron with `n_input` weights, all parameters drawn from
    /// the default uniform `[-1, 1)` initializer.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        n_input: usize,
        activation: Activation<T>,
        rng: &mut R,
    ) -> Result<Self, ValueGradError> {
        Self::with_init(graph, n_input, activation, Init::default(), rng)
    }

    /// Creates a neuron whose weights and bias are drawn from `init`.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        n_input: usize,
        activation: Activation<T>,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ValueGradError> {
        let weights = init.create_parameters(graph, n_input, rng)?;
        let bias = init.create_parameters(graph, 1, rng)?;
        Ok(Neuron {
            weights,
            bias: bias[0],
            activation,
        })
    }

    /// Wraps existing parameter nodes.
    pub fn from_parameters(weights: Vec<NodeId>, bias: NodeId, activation: Activation<T>) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn n_input(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation<T> {
        self.activation
    }

    /// Computes the neuron's single output node.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `input` does not hold exactly `n_input` nodes.
    pub fn activate(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<NodeId, ValueGradError> {
        if input.len() != self.weights.len() {
            return Err(ValueGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: input.len(),
                operation: "Neuron::activate".to_string(),
            });
        }
        let products: Vec<NodeId> = self
            .weights
            .iter()
            .zip(input)
            .map(|(&w, &x)| graph.mul(w, x))
            .collect();
        let pre_activation = graph.sum_with_init(&products, self.bias);
        Ok(self.activation.apply(graph, pre_activation))
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    fn forward(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<Vec<NodeId>, ValueGradError> {
        Ok(vec![self.activate(graph, input)?])
    }

    fn own_parameters(&self) -> ValueContainer {
        ValueContainer::record([
            ("weights", ValueContainer::from(self.weights.clone())),
            ("bias", ValueContainer::from(self.bias)),
        ])
    }
}
