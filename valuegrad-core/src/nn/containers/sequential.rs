use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::module::Module;
use crate::types::Scalar;

/// Container applying its layers in order, each one's output feeding the next.
#[derive(Debug)]
pub struct Sequential<T: Scalar> {
    layers: Vec<Box<dyn Module<T>>>,
}

impl<T: Scalar> Sequential<T> {
    /// # Errors
    /// `EmptySequential` if `layers` is empty.
    pub fn new(layers: Vec<Box<dyn Module<T>>>) -> Result<Self, ValueGradError> {
        if layers.is_empty() {
            return Err(ValueGradError::EmptySequential);
        }
        Ok(Sequential { layers })
    }

    /// Appends a layer after the existing ones.
    pub fn push(&mut self, layer: Box<dyn Module<T>>) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Box<dyn Module<T>>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<T: Scalar> Module<T> for Sequential<T> {
    fn forward(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<Vec<NodeId>, ValueGradError> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn children(&self) -> Vec<&dyn Module<T>> {
        self.layers.iter().map(|m| &**m).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::activation::Activation;
    use crate::nn::init::Init;
    use crate::nn::layers::{ActivationLayer, Dense};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_sequential_rejected() {
        assert_eq!(
            Sequential::<f64>::new(Vec::new()).err(),
            Some(ValueGradError::EmptySequential)
        );
    }

    #[test]
    fn test_layers_applied_in_order() {
        let mut graph = Graph::<f64>::new();
        let mut rng = StdRng::seed_from_u64(0);
        let dense = Dense::with_init(
            &mut graph,
            2,
            1,
            Activation::Identity,
            Init::Constant(-1.0),
            &mut rng,
        )
        .unwrap();
        let model = Sequential::new(vec![
            Box::new(dense) as Box<dyn Module<f64>>,
            Box::new(ActivationLayer::new(Activation::Relu)),
        ])
        .unwrap();
        assert_eq!(model.len(), 2);
        assert_eq!(model.num_parameters(), 3);

        let x1 = graph.leaf(1.0);
        let x2 = graph.leaf(2.0);
        // -1 - 2 - 1 = -4, clipped by relu
        let out = model.forward(&mut graph, &[x1, x2]).unwrap();
        assert_eq!(out.len(), 1);
        assert_relative_eq!(graph.value(out[0]), 0.0);
        assert_eq!(graph.op_tag(out[0]), "relu");
    }

    #[test]
    fn test_push_and_width_errors_propagate() {
        let mut graph = Graph::<f64>::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mut model = Sequential::new(vec![Box::new(ActivationLayer::new(Activation::Tanh))
            as Box<dyn Module<f64>>])
        .unwrap();
        model.push(Box::new(
            Dense::new(&mut graph, 3, 1, Activation::Identity, &mut rng).unwrap(),
        ));
        let x = graph.leaf(0.5);
        assert!(matches!(
            model.forward(&mut graph, &[x]),
            Err(ValueGradError::InputSizeMismatch { expected: 3, actual: 1, .. })
        ));
    }
}
