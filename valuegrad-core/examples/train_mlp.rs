// examples/train_mlp.rs
//!
//! Trains a small Multi-Layer Perceptron on four hand-written samples with
//! plain SGD. Each epoch builds a fresh graph on top of the parameters and
//! rewinds it afterwards, so memory stays constant across epochs.
//!
//! Run with `RUST_LOG=debug` to see the backward and optimizer logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use valuegrad_core::{
    nn::{mean_squared_error, run_batch, Module, MultiLayerPerceptron},
    optim::{Optimizer, Sgd, SgdConfig},
    utils::{from_matrix, from_slice, values_of},
    Graph, NodeId,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("Starting MLP training example...");

    // Hyperparameters
    let epochs = 100;
    let lr = 0.05;

    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];

    // Create model
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(1337);
    let model = MultiLayerPerceptron::new(&mut graph, 3, [4usize, 4, 1], &mut rng)?;
    println!("MLP created with {} parameters.", model.num_parameters());

    let mut optimizer = Sgd::for_module(&model, SgdConfig::new(lr))?;
    // Everything created after this point is rebuilt every epoch.
    let checkpoint = graph.checkpoint();

    // --- Training Loop ---
    println!("\nStarting training loop...");
    for epoch in 0..epochs {
        let inputs = from_matrix(&mut graph, &xs);
        let targets = from_slice(&mut graph, &ys);
        let predictions: Vec<NodeId> = run_batch(&model, &mut graph, &inputs)?
            .into_iter()
            .flatten()
            .collect();
        let loss = mean_squared_error(&mut graph, &targets, &predictions)?;

        optimizer.zero_grad(&mut graph);
        graph.backward(loss);
        optimizer.step(&mut graph)?;

        if epoch % 10 == 0 || epoch + 1 == epochs {
            println!("Epoch [{}/{}], Loss: {:.4}", epoch + 1, epochs, graph.value(loss));
        }
        if epoch + 1 == epochs {
            println!("Predictions: {:?}", values_of(&graph, &predictions));
        }
        graph.rewind(checkpoint)?;
    }
    println!("Training finished.");
    Ok(())
}
