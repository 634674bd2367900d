use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::ops::activation::{identity_op, relu_op, sigmoid_op, tanh_op};
use crate::types::Scalar;
use std::fmt;
use std::str::FromStr;

/// Activation applied to the output of a neuron.
///
/// `Custom` accepts any function building its result from a single node, e.g.
/// a composition of existing operators.
#[derive(Clone, Copy)]
pub enum Activation<T: Scalar> {
    Identity,
    Sigmoid,
    Relu,
    Tanh,
    Custom(fn(&mut Graph<T>, NodeId) -> NodeId),
}

impl<T: Scalar> Activation<T> {
    /// Applies the activation to `node`, recording the result in `graph`.
    pub fn apply(&self, graph: &mut Graph<T>, node: NodeId) -> NodeId {
        match self {
            Activation::Identity => identity_op(graph, node),
            Activation::Sigmoid => sigmoid_op(graph, node),
            Activation::Relu => relu_op(graph, node),
            Activation::Tanh => tanh_op(graph, node),
            Activation::Custom(f) => f(graph, node),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Identity => "identity",
            Activation::Sigmoid => "sigmoid",
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Custom(_) => "custom",
        }
    }
}

impl<T: Scalar> Default for Activation<T> {
    fn default() -> Self {
        Activation::Tanh
    }
}

impl<T: Scalar> fmt::Debug for Activation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Activation::{}", self.name())
    }
}

impl<T: Scalar> FromStr for Activation<T> {
    type Err = ValueGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity" => Ok(Activation::Identity),
            "sigmoid" => Ok(Activation::Sigmoid),
            "relu" => Ok(Activation::Relu),
            "tanh" => Ok(Activation::Tanh),
            _ => Err(ValueGradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn leaky(graph: &mut Graph<f64>, node: NodeId) -> NodeId {
        let slope = graph.leaf(0.1);
        let scaled = graph.mul(node, slope);
        graph.relu(scaled)
    }

    #[test]
    fn test_builtin_activations() {
        let mut graph = Graph::<f64>::new();
        let x = graph.leaf(-0.5);
        let identity = Activation::Identity.apply(&mut graph, x);
        let sigmoid = Activation::Sigmoid.apply(&mut graph, x);
        let relu = Activation::Relu.apply(&mut graph, x);
        let tanh = Activation::Tanh.apply(&mut graph, x);
        assert_eq!(graph.value(identity), -0.5);
        assert_relative_eq!(graph.value(sigmoid), 1.0 / (1.0 + 0.5f64.exp()));
        assert_eq!(graph.value(relu), 0.0);
        assert_relative_eq!(graph.value(tanh), (-0.5f64).tanh());
        assert_eq!(graph.op_tag(tanh), "tanh");
    }

    #[test]
    fn test_default_is_tanh() {
        assert_eq!(Activation::<f64>::default().name(), "tanh");
    }

    #[test]
    fn test_custom_activation() {
        let mut graph = Graph::<f64>::new();
        let x = graph.leaf(2.0);
        let out = Activation::Custom(leaky).apply(&mut graph, x);
        assert_relative_eq!(graph.value(out), 0.2);
        graph.backward(out);
        assert_relative_eq!(graph.grad(x), 0.1);
        assert_eq!(format!("{:?}", Activation::Custom(leaky)), "Activation::custom");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("ReLU".parse::<Activation<f64>>().unwrap().name(), "relu");
        assert_eq!("sigmoid".parse::<Activation<f64>>().unwrap().name(), "sigmoid");
        assert!(matches!(
            "softmax".parse::<Activation<f64>>(),
            Err(ValueGradError::UnsupportedOperation(_))
        ));
    }
}
