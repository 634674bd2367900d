use crate::error::ValueGradError;
use crate::graph::{Graph, NodeId};
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::layers::Dense;
use crate::nn::module::Module;
use crate::types::Scalar;
use rand::Rng;

/// Width and activation of one layer of a [`MultiLayerPerceptron`].
///
/// Converts from a bare size (default activation, `tanh`) or from a
/// `(size, activation)` pair.
#[derive(Debug, Clone, Copy)]
pub struct LayerSpec<T: Scalar> {
    pub size: usize,
    pub activation: Option<Activation<T>>,
}

impl<T: Scalar> LayerSpec<T> {
    pub fn new(size: usize, activation: Activation<T>) -> Self {
        LayerSpec {
            size,
            activation: Some(activation),
        }
    }
}

impl<T: Scalar> From<usize> for LayerSpec<T> {
    fn from(size: usize) -> Self {
        LayerSpec {
            size,
            activation: None,
        }
    }
}

impl<T: Scalar> From<(usize, Activation<T>)> for LayerSpec<T> {
    fn from((size, activation): (usize, Activation<T>)) -> Self {
        LayerSpec::new(size, activation)
    }
}

/// A fully connected feed-forward network: a chain of [`Dense`] layers.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use valuegrad_core::nn::{Activation, LayerSpec, Module, MultiLayerPerceptron};
/// use valuegrad_core::Graph;
///
/// let mut graph = Graph::<f64>::new();
/// let mut rng = StdRng::seed_from_u64(0);
/// let specs = [
///     LayerSpec::from(3),
///     LayerSpec::from((3, Activation::Sigmoid)),
///     LayerSpec::from(1),
/// ];
/// let model = MultiLayerPerceptron::new(&mut graph, 2, specs, &mut rng).unwrap();
/// assert_eq!(model.num_parameters(), 3 * 3 + 3 * 4 + 4);
/// ```
#[derive(Debug, Clone)]
pub struct MultiLayerPerceptron<T: Scalar> {
    layers: Vec<Dense<T>>,
}

impl<T: Scalar> MultiLayerPerceptron<T> {
    /// Builds the network. The last spec is the output layer.
    ///
    /// Each layer reads as many inputs as the previous layer produces; the
    /// first one reads `n_input`.
    ///
    /// # Errors
    /// `EmptySequential` if `specs` is empty.
    pub fn new<S, R>(graph: &mut Graph<T>, n_input: usize, specs: S, rng: &mut R) -> Result<Self, ValueGradError>
    where
        S: IntoIterator,
        S::Item: Into<LayerSpec<T>>,
        R: Rng + ?Sized,
    {
        Self::with_init(graph, n_input, specs, Init::default(), rng)
    }

    pub fn with_init<S, R>(
        graph: &mut Graph<T>,
        n_input: usize,
        specs: S,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, ValueGradError>
    where
        S: IntoIterator,
        S::Item: Into<LayerSpec<T>>,
        R: Rng + ?Sized,
    {
        let mut layers = Vec::new();
        let mut previous = n_input;
        for spec in specs {
            let spec: LayerSpec<T> = spec.into();
            let activation = spec.activation.unwrap_or_default();
            layers.push(Dense::with_init(graph, previous, spec.size, activation, init, &mut *rng)?);
            previous = spec.size;
        }
        if layers.is_empty() {
            return Err(ValueGradError::EmptySequential);
        }
        log::debug!(
            "Built MLP {} -> {:?}",
            n_input,
            layers.iter().map(|l| l.n_output()).collect::<Vec<_>>()
        );
        Ok(MultiLayerPerceptron { layers })
    }

    pub fn layers(&self) -> &[Dense<T>] {
        &self.layers
    }

    pub fn n_input(&self) -> usize {
        self.layers.first().map_or(0, |l| l.n_input())
    }

    pub fn n_output(&self) -> usize {
        self.layers.last().map_or(0, |l| l.n_output())
    }
}

impl<T: Scalar> Module<T> for MultiLayerPerceptron<T> {
    fn forward(&self, graph: &mut Graph<T>, input: &[NodeId]) -> Result<Vec<NodeId>, ValueGradError> {
        self.layers
            .iter()
            .try_fold(input.to_vec(), |current, layer| layer.forward(graph, &current))
    }

    fn children(&self) -> Vec<&dyn Module<T>> {
        self.layers.iter().map(|l| l as &dyn Module<T>).collect()
    }
}
