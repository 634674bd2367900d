// examples/data_loading_example.rs
//!
//! Standardizes a small regression dataset, then trains an MLP on shuffled
//! mini-batches drawn by a `DataLoader`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use valuegrad_core::{
    nn::{mean_squared_error, run_batch, Activation, LayerSpec, Module, MultiLayerPerceptron},
    optim::{Optimizer, Sgd, SgdConfig},
    Graph, NodeId,
};
use valuegrad_data::{
    batch_to_nodes, normalize_min_max, standardize, DataLoader, RandomSampler, SequentialSampler, VecDataset,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // y = 0.5 * x0 - 0.02 * x1, with features on very different scales.
    let features: Vec<Vec<f64>> = (0..16)
        .map(|i| vec![i as f64 * 0.25, (i * i) as f64])
        .collect();
    let targets: Vec<Vec<f64>> = features
        .iter()
        .map(|f| vec![0.5 * f[0] - 0.02 * f[1]])
        .collect();

    let ranges = normalize_min_max(&features)?;
    println!("Feature ranges: min {:?}, max {:?}", ranges.mins, ranges.maxs);
    let scaled = standardize(&features)?;
    println!("Feature means {:?}, stds {:?}", scaled.means, scaled.stds);

    let dataset = VecDataset::from_features_targets(scaled.rows.clone(), targets)?;
    let loader = DataLoader::new(dataset, 4, RandomSampler::new(false, None).with_seed(7), false)?;

    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(42);
    let specs = [LayerSpec::from(8), LayerSpec::new(1, Activation::Identity)];
    let model = MultiLayerPerceptron::new(&mut graph, 2, specs, &mut rng)?;
    let mut optimizer = Sgd::for_module(&model, SgdConfig::new(0.05).with_momentum(0.9))?;
    let checkpoint = graph.checkpoint();

    let epochs = 50;
    for epoch in 0..epochs {
        let mut epoch_loss = 0.0;
        for batch in &loader {
            let nodes = batch_to_nodes(&mut graph, &batch?);
            let predictions: Vec<NodeId> = run_batch(&model, &mut graph, &nodes.inputs)?
                .into_iter()
                .flatten()
                .collect();
            let truth: Vec<NodeId> = nodes.targets.into_iter().flatten().collect();
            let loss = mean_squared_error(&mut graph, &truth, &predictions)?;

            optimizer.zero_grad(&mut graph);
            graph.backward(loss);
            optimizer.step(&mut graph)?;
            epoch_loss += graph.value(loss);
            graph.rewind(checkpoint)?;
        }
        if epoch % 10 == 0 || epoch + 1 == epochs {
            println!(
                "Epoch [{}/{}], mean batch loss: {:.5}",
                epoch + 1,
                epochs,
                epoch_loss / loader.num_batches() as f64
            );
        }
    }

    // Evaluate in dataset order.
    let eval = DataLoader::new(loader.dataset().clone(), 16, SequentialSampler::new(), false)?;
    for batch in &eval {
        let batch = batch?;
        let nodes = batch_to_nodes(&mut graph, &batch);
        let outputs = run_batch(&model, &mut graph, &nodes.inputs)?;
        for ((_, target), output) in batch.iter().zip(&outputs).take(4) {
            println!("target {:+.3}  prediction {:+.3}", target[0], graph.value(output[0]));
        }
        graph.rewind(checkpoint)?;
    }
    Ok(())
}
