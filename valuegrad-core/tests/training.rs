use rand::rngs::StdRng;
use rand::SeedableRng;
use valuegrad_core::nn::{Activation, LayerSpec, Module, MultiLayerPerceptron, Neuron};
use valuegrad_core::optim::{Optimizer, Sgd, SgdConfig};
use valuegrad_core::{Graph, ValueGradError};

mod common;
use common::{batch_loss, tiny_dataset};

#[test]
fn test_mlp_training_reduces_loss() -> Result<(), ValueGradError> {
    let (xs, ys) = tiny_dataset();
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let model = MultiLayerPerceptron::new(&mut graph, 3, [4usize, 4, 1], &mut rng)?;
    let mut optimizer = Sgd::for_module(&model, SgdConfig::new(0.05))?;
    let checkpoint = graph.checkpoint();

    let mut losses = Vec::new();
    for _ in 0..60 {
        let loss = batch_loss(&model, &mut graph, &xs, &ys)?;
        optimizer.zero_grad(&mut graph);
        graph.backward(loss);
        optimizer.step(&mut graph)?;
        losses.push(graph.value(loss));
        graph.rewind(checkpoint)?;
    }

    let first = losses[0];
    let last = losses[losses.len() - 1];
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    Ok(())
}

#[test]
fn test_rewind_keeps_arena_size_constant() -> Result<(), ValueGradError> {
    let (xs, ys) = tiny_dataset();
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(7);
    let model = MultiLayerPerceptron::new(&mut graph, 3, [2usize, 1], &mut rng)?;
    let mut optimizer = Sgd::for_module(&model, SgdConfig::new(0.1))?;
    let checkpoint = graph.checkpoint();
    assert_eq!(graph.len(), model.num_parameters());

    for _ in 0..3 {
        let loss = batch_loss(&model, &mut graph, &xs, &ys)?;
        assert!(graph.len() > model.num_parameters());
        optimizer.zero_grad(&mut graph);
        graph.backward(loss);
        optimizer.step(&mut graph)?;
        graph.rewind(checkpoint)?;
        assert_eq!(graph.len(), model.num_parameters());
    }
    Ok(())
}

#[test]
fn test_gradients_accumulate_without_zero_grad() -> Result<(), ValueGradError> {
    let (xs, ys) = tiny_dataset();
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(3);
    let model = MultiLayerPerceptron::new(&mut graph, 3, [LayerSpec::new(1, Activation::Tanh)], &mut rng)?;
    let checkpoint = graph.checkpoint();

    let loss = batch_loss(&model, &mut graph, &xs, &ys)?;
    graph.backward(loss);
    let once: Vec<f64> = model.parameters().iter().map(|&p| graph.grad(p)).collect();
    graph.rewind(checkpoint)?;

    let loss = batch_loss(&model, &mut graph, &xs, &ys)?;
    graph.backward(loss);
    for (p, g) in model.parameters().iter().zip(&once) {
        approx::assert_relative_eq!(graph.grad(*p), 2.0 * g, epsilon = 1e-12);
    }

    model.zero_grad(&mut graph);
    assert!(model.parameters().iter().all(|&p| graph.grad(p) == 0.0));
    Ok(())
}

#[test]
fn test_single_neuron_learns_linear_target() -> Result<(), ValueGradError> {
    // y = 2x - 1 with an identity neuron.
    let mut graph = Graph::<f64>::new();
    let w = graph.leaf(0.0);
    let b = graph.leaf(0.0);
    let neuron = Neuron::from_parameters(vec![w], b, Activation::Identity);
    let mut optimizer = Sgd::for_module(&neuron, SgdConfig::new(0.1).with_momentum(0.5))?;
    let checkpoint = graph.checkpoint();

    let xs: Vec<Vec<f64>> = vec![vec![-1.0], vec![0.0], vec![1.0], vec![2.0]];
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x[0] - 1.0).collect();
    for _ in 0..300 {
        let loss = batch_loss(&neuron, &mut graph, &xs, &ys)?;
        optimizer.zero_grad(&mut graph);
        graph.backward(loss);
        optimizer.step(&mut graph)?;
        graph.rewind(checkpoint)?;
    }
    approx::assert_abs_diff_eq!(graph.value(w), 2.0, epsilon = 1e-3);
    approx::assert_abs_diff_eq!(graph.value(b), -1.0, epsilon = 1e-3);
    Ok(())
}
