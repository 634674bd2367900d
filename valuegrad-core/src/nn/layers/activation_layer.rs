use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::activation::Activation;
use crate::nn::module::Module;
use crate::types::Scalar;

/// Layer that applies an activation function to each of its inputs.
///
/// This layer does not have any learnable parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivationLayer<T: Scalar> {
    activation: Activation<T>,
}

impl<T: Scalar> ActivationLayer<T> {
    pub fn new(activation: Activation<T>) -> Self {
        ActivationLayer { activation }
    }

    pub fn activation(&self) -> Activation<T> {
        self.activation
    }
}

impl<T: Scalar> Module<T> for ActivationLayer<T> {
    fn forward(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<Vec<NodeId>, ValueGradError> {
        Ok(input
            .iter()
            .map(|&node| self.activation.apply(graph, node))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_elementwise_without_parameters() {
        let mut graph = Graph::<f64>::new();
        let layer = ActivationLayer::new(Activation::Relu);
        let a = graph.leaf(-1.0);
        let b = graph.leaf(2.0);
        let out = layer.forward(&mut graph, &[a, b]).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(graph.value(out[0]), 0.0);
        assert_eq!(graph.value(out[1]), 2.0);
        assert_eq!(layer.num_parameters(), 0);
    }
}
